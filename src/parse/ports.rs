//! Port-label helpers: range expansion and vendor-aware ordering.

use once_cell::sync::Lazy;
use regex::Regex;

static RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z]?)(\d+)-([A-Za-z]?)(\d+)$").unwrap());
static LETTER_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([A-Za-z])(\d+)$").unwrap());
static TRIPLET: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)/(\d+)/(\d+)$").unwrap());

/// Expand one port-list token into individual port labels.
///
/// `A1-A3` becomes `A1 A2 A3`; plain tokens pass through; a malformed
/// range is dropped without raising.
pub fn expand_ports(token: &str) -> Vec<String> {
    let token = token.trim();
    if token.is_empty() {
        return vec![];
    }

    if !token.contains('-') {
        return vec![token.to_string()];
    }

    let Some(caps) = RANGE.captures(token) else {
        return vec![];
    };

    let prefix = &caps[1];
    let end_prefix = &caps[3];
    if !end_prefix.is_empty() && !end_prefix.eq_ignore_ascii_case(prefix) {
        return vec![];
    }

    let (Ok(start), Ok(end)) = (caps[2].parse::<u32>(), caps[4].parse::<u32>()) else {
        return vec![];
    };
    if end < start {
        return vec![];
    }

    (start..=end).map(|n| format!("{prefix}{n}")).collect()
}

/// Sort key for port labels.
///
/// Devices name ports `2`, `A10`, or `1/1/3` depending on vendor; a
/// naive string sort scatters `A10` before `A2` and `10` before `2`.
/// The derived `Ord` gives the group order (numeric, then
/// letter+number, then slash triplet, then everything else) with
/// numeric comparison inside each group.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum PortKey {
    Numeric(u64),
    LetterNumber(char, u64),
    Triplet(u64, u64, u64),
    Other(String),
}

/// Compute the sort key for one port label.
pub fn port_key(port: &str) -> PortKey {
    if let Ok(n) = port.parse::<u64>() {
        return PortKey::Numeric(n);
    }

    if let Some(caps) = LETTER_NUMBER.captures(port) {
        let letter = caps[1].chars().next().unwrap_or('?').to_ascii_uppercase();
        if let Ok(n) = caps[2].parse::<u64>() {
            return PortKey::LetterNumber(letter, n);
        }
    }

    if let Some(caps) = TRIPLET.captures(port) {
        if let (Ok(a), Ok(b), Ok(c)) = (
            caps[1].parse::<u64>(),
            caps[2].parse::<u64>(),
            caps[3].parse::<u64>(),
        ) {
            return PortKey::Triplet(a, b, c);
        }
    }

    PortKey::Other(port.to_string())
}
