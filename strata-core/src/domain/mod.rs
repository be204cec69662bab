pub mod assets;
pub mod error;
pub mod redact;

// Convenience re-exports to simplify imports elsewhere
pub use error::DomainError;
