//! Extractors for `show interfaces brief` and per-port detail.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::InterfaceInfo;

static BRIEF_ROW: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^\s*(\d+)\s+\S+\s*\|\s*\S+\s+\S+\s+(Up|Down)\s+(\S+)").unwrap()
});
static PORT_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"Name\s*:\s*(.+)").unwrap());

/// Extract `(port, status/speed)` rows from `show interfaces brief`.
///
/// Only numeric port ids are taken; trunk and stack pseudo-ports are
/// left out.
pub fn parse_brief(text: &str) -> Vec<(String, InterfaceInfo)> {
    BRIEF_ROW
        .captures_iter(text)
        .map(|caps| {
            (
                caps[1].to_string(),
                InterfaceInfo {
                    status: caps[2].to_string(),
                    speed: caps[3].to_string(),
                    description: None,
                },
            )
        })
        .collect()
}

/// Pull the configured name out of `show interfaces <port>` output.
pub fn parse_port_name(text: &str) -> Option<String> {
    let caps = PORT_NAME.captures(text)?;
    let name = caps[1].trim();
    (!name.is_empty()).then(|| name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHOW_BRIEF: &str = "\
 Status and Counters - Port Status

                          | Intrusion                           MDI   Flow  Bcast
  Port         Type       | Alert     Enabled Status Mode       Mode  Ctrl  Limit
  ------------ ---------- + --------- ------- ------ ---------- ----- ----- ------
  1            100/1000T  | No        Yes     Up     1000FDx    MDIX  off   0
  2            100/1000T  | No        Yes     Down   10HDx      Auto  off   0
  Trk1                    | No        Yes     Up     2000FDx          off   0
";

    #[test]
    fn test_parse_brief_rows() {
        let rows = parse_brief(SHOW_BRIEF);
        assert_eq!(rows.len(), 2);

        assert_eq!(rows[0].0, "1");
        assert_eq!(rows[0].1.status, "Up");
        assert_eq!(rows[0].1.speed, "1000FDx");

        assert_eq!(rows[1].0, "2");
        assert_eq!(rows[1].1.status, "Down");
        assert_eq!(rows[1].1.speed, "10HDx");
    }

    #[test]
    fn test_parse_brief_skips_trunk_pseudo_ports() {
        let rows = parse_brief(SHOW_BRIEF);
        assert!(rows.iter().all(|(port, _)| port != "Trk1"));
    }

    #[test]
    fn test_parse_port_name() {
        let out = " Status and Counters - Port Counters for port 1\n\n  Name  : uplink-to-core  \n  MAC Address : 943fc2-112233\n";
        assert_eq!(parse_port_name(out).as_deref(), Some("uplink-to-core"));
    }

    #[test]
    fn test_parse_port_name_absent() {
        assert_eq!(parse_port_name("  Name  :   \n"), None);
        assert_eq!(parse_port_name("no name field"), None);
    }
}
