//! Best-effort byte-count formatting.

/// Convert a raw byte count (possibly with thousands separators) into
/// a human-readable string when large enough to warrant it.
///
/// Values that fail to parse, and values of 1,000,000 or below, come
/// back unchanged. Never fails.
pub fn human_bytes(value: &str) -> String {
    let Ok(n) = value.replace(',', "").parse::<i64>() else {
        return value.to_string();
    };

    if n > 1_000_000_000 {
        format!("{:.2} GB", n as f64 / 1_000_000_000.0)
    } else if n > 1_000_000 {
        format!("{:.1} MB", n as f64 / 1_000_000.0)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_megabytes_one_decimal() {
        assert_eq!(human_bytes("1,500,000"), "1.5 MB");
        assert_eq!(human_bytes("999999999"), "1000.0 MB");
    }

    #[test]
    fn test_gigabytes_two_decimals() {
        assert_eq!(human_bytes("2,500,000,000"), "2.50 GB");
    }

    #[test]
    fn test_small_values_unchanged() {
        assert_eq!(human_bytes("1234"), "1234");
        assert_eq!(human_bytes("1,000,000"), "1,000,000");
        assert_eq!(human_bytes("0"), "0");
    }

    #[test]
    fn test_non_numeric_unchanged() {
        assert_eq!(human_bytes("n/a"), "n/a");
        assert_eq!(human_bytes(""), "");
    }
}
