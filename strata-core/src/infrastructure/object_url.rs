// strata-core/src/infrastructure/object_url.rs

use url::Url;

/// Parse an `s3://bucket/prefix` URL into `(bucket, prefix)`.
///
/// A URL qualifies iff the scheme is `s3`, a non-empty bucket (host) is
/// present, and a path component exists: `s3://b/` parses to an empty
/// prefix, while `s3://b` does not parse at all.
pub fn parse_object_url(raw: &str) -> Option<(String, String)> {
    let url = Url::parse(raw).ok()?;
    if url.scheme() != "s3" {
        return None;
    }
    let bucket = url.host_str().filter(|h| !h.is_empty())?;
    let prefix = url.path().strip_prefix('/')?;
    Some((bucket.to_string(), prefix.to_string()))
}

pub fn is_valid_object_url(raw: &str) -> bool {
    parse_object_url(raw).is_some()
}
