//! Extractors for `show trunks` and `show lacp`.

use crate::model::{InventoryRecord, LacpEntry, TrunkPort};

/// Extract trunk membership rows from `show trunks` output.
///
/// Rows are pipe-delimited: `port | name type | group ...`. The group
/// token keeps only its first whitespace component; trailing
/// annotations such as the protocol name are discarded.
pub fn parse_trunks(text: &str, inv: &mut InventoryRecord) {
    for line in text.lines() {
        let parts: Vec<&str> = line.split('|').collect();
        if parts.len() != 3 {
            continue;
        }

        let port = parts[0].trim();
        if port.is_empty() || port == "Port" || port.starts_with('-') {
            continue;
        }

        let Some(group) = parts[2].split_whitespace().next() else {
            continue;
        };
        if group == "Group" || group.starts_with('-') {
            continue;
        }

        // The middle cell is "<name> <type>" with the name optional.
        let middle = parts[1].trim();
        let (name, port_type) = match middle.rsplit_once(char::is_whitespace) {
            Some((name, ty)) => {
                let name = name.trim();
                (
                    (!name.is_empty()).then(|| name.to_string()),
                    Some(ty.to_string()),
                )
            }
            None => (None, (!middle.is_empty()).then(|| middle.to_string())),
        };

        inv.trunks.push(TrunkPort {
            port: port.to_string(),
            name,
            port_type,
            group: group.to_string(),
        });
    }
}

/// Extract the eight-column LACP table from `show lacp` output.
///
/// An entry is exactly eight whitespace-separated tokens; header and
/// separator lines are skipped.
pub fn parse_lacp(text: &str, inv: &mut InventoryRecord) {
    for line in text.lines() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != 8 {
            continue;
        }
        if tokens[0].eq_ignore_ascii_case("port") || tokens[0].starts_with('-') {
            continue;
        }

        inv.lacp.push(LacpEntry {
            port: tokens[0].to_string(),
            lacp_enabled: tokens[1].to_string(),
            trunk_group: tokens[2].to_string(),
            status: tokens[3].to_string(),
            partner: tokens[4].to_string(),
            partner_status: tokens[5].to_string(),
            admin_key: tokens[6].to_string(),
            oper_key: tokens[7].to_string(),
        });
    }
}
