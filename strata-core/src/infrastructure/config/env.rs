// strata-core/src/infrastructure/config/env.rs

use regex::Regex;
use serde_yaml::{Mapping, Value};
use std::sync::LazyLock;

/// Full-string `{{IDENTIFIER}}` placeholder. Embedded placeholders are not
/// substituted: the whole value must match.
#[allow(clippy::expect_used)]
static ENV_VAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\{\{([A-Za-z_][A-Za-z0-9_]*)\}\}$").expect("hardcoded pattern compiles")
});

/// The reserved discriminator key, never resolved or coerced.
pub const ASSET_TYPE_KEY: &str = "asset_type";

const PORT_KEY: &str = "port";

/// Resolve an entry's attribute mapping. The variable lookup is injected so
/// the resolution rules stay testable without mutating the process
/// environment; the loading pipeline passes `std::env::var`.
///
/// Every string value that fully matches `{{NAME}}` becomes the variable's
/// value, or the empty string when unset. Sequences and nested mappings are
/// resolved recursively (a bucket's inline datasets go through the same
/// rules). The entry's own `port` attribute additionally gets best-effort
/// integer coercion with a silent fallback to 0; nested keys named `port`
/// (a dataset schema column, say) are left as written.
pub fn resolve_entry(
    attributes: &Mapping,
    lookup: &dyn Fn(&str) -> Option<String>,
) -> Mapping {
    let mut resolved = Mapping::new();
    for (key, value) in attributes {
        if key.as_str() == Some(ASSET_TYPE_KEY) {
            resolved.insert(key.clone(), value.clone());
            continue;
        }
        let mut new_value = resolve_value(value, lookup);
        if key.as_str() == Some(PORT_KEY) {
            new_value = coerce_port(new_value);
        }
        resolved.insert(key.clone(), new_value);
    }
    resolved
}

fn resolve_value(value: &Value, lookup: &dyn Fn(&str) -> Option<String>) -> Value {
    match value {
        Value::String(s) => match ENV_VAR_PATTERN.captures(s) {
            Some(caps) => Value::String(lookup(&caps[1]).unwrap_or_default()),
            None => value.clone(),
        },
        Value::Sequence(items) => {
            Value::Sequence(items.iter().map(|v| resolve_value(v, lookup)).collect())
        }
        Value::Mapping(nested) => Value::Mapping(resolve_mapping(nested, lookup)),
        _ => value.clone(),
    }
}

/// Placeholder resolution only. Nested mappings never carry the
/// discriminator or a connection port, so neither special case applies
/// below the entry's own attributes.
fn resolve_mapping(nested: &Mapping, lookup: &dyn Fn(&str) -> Option<String>) -> Mapping {
    nested
        .iter()
        .map(|(key, value)| (key.clone(), resolve_value(value, lookup)))
        .collect()
}

/// Best-effort coercion with an explicit default rather than failure: a
/// resolved port that is not purely decimal digits becomes 0.
fn coerce_port(value: Value) -> Value {
    match value {
        Value::Number(_) => value,
        Value::String(s) if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) => {
            s.parse::<u64>().map(Value::from).unwrap_or(Value::from(0))
        }
        _ => Value::from(0),
    }
}
