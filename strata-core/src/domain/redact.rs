// strata-core/src/domain/redact.rs

use rand::Rng;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Six two-hex-digit octets joined uniformly by ':' or by '-'. Mixed
/// delimiters, wrong octet counts and undelimited runs do not match.
#[allow(clippy::expect_used)]
pub static MAC_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:[0-9A-Fa-f]{2}:){5}[0-9A-Fa-f]{2}\b|\b(?:[0-9A-Fa-f]{2}-){5}[0-9A-Fa-f]{2}\b",
    )
    .expect("hardcoded MAC pattern compiles")
});

/// Whole-string MAC address check.
pub fn is_mac(candidate: &str) -> bool {
    MAC_REGEX
        .find(candidate)
        .is_some_and(|m| m.start() == 0 && m.end() == candidate.len())
}

/// Unique MAC addresses in first-appearance order. Two spellings of the
/// same address (case, delimiter) count as one.
pub fn find_macs(text: &str) -> Vec<String> {
    let mut seen = HashMap::new();
    let mut found = Vec::new();
    for m in MAC_REGEX.find_iter(text) {
        let key = normalize(m.as_str());
        if seen.insert(key, ()).is_none() {
            found.push(m.as_str().to_string());
        }
    }
    found
}

/// A random address of valid MAC shape, uppercase and colon-delimited.
pub fn random_mac<R: Rng>(rng: &mut R) -> String {
    (0..6)
        .map(|_| format!("{:02X}", rng.gen_range(0..=255u8)))
        .collect::<Vec<_>>()
        .join(":")
}

/// Result of one redaction pass: the rewritten text and the mapping from
/// each distinct original address (normalized) to its replacement.
#[derive(Debug)]
pub struct Redaction {
    pub text: String,
    pub replacements: HashMap<String, String>,
}

/// Replace every MAC address in `text` with a random one, reusing a single
/// replacement per distinct original within this call.
pub fn redact_macs(text: &str) -> Redaction {
    redact_macs_with(text, &mut rand::thread_rng())
}

pub fn redact_macs_with<R: Rng>(text: &str, rng: &mut R) -> Redaction {
    let mut replacements: HashMap<String, String> = HashMap::new();
    let redacted = MAC_REGEX.replace_all(text, |caps: &regex::Captures<'_>| {
        let key = normalize(&caps[0]);
        replacements
            .entry(key)
            .or_insert_with(|| random_mac(rng))
            .clone()
    });
    Redaction {
        text: redacted.into_owned(),
        replacements,
    }
}

fn normalize(mac: &str) -> String {
    mac.to_ascii_lowercase().replace('-', ":")
}
