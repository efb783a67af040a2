//! LLDP neighbor-detail parser.
//!
//! `show lldp info remote-device detail` emits one block per
//! adjacency. The literal marker "Local Port" at the start of a
//! trimmed line is the segmentation boundary: every occurrence opens a
//! new record, flushing the previous one if it carries any fields.

use once_cell::sync::Lazy;
use regex::Regex;

use super::ports::port_key;
use crate::model::NeighborRecord;

static LOCAL_PORT: Lazy<Regex> = Lazy::new(|| Regex::new(r"Local Port\s*:\s*(\S+)").unwrap());
static CHASSIS_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"ChassisId\s*:\s*(\S+)").unwrap());
static SYS_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"SysName\s*:\s*(.+)$").unwrap());
static PORT_DESCR: Lazy<Regex> = Lazy::new(|| Regex::new(r"PortDescr\s*:\s*(.+)$").unwrap());
static MGMT_ADDRESS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Address\s*:\s*(\d{1,3}(?:\.\d{1,3}){3})").unwrap());

/// Parse a multi-record neighbor blob into discrete, ordered records.
pub fn parse_neighbors(raw: &str) -> Vec<NeighborRecord> {
    let mut neighbors = Vec::new();
    let mut current = NeighborRecord::default();

    // Set by a "Type ... ipv4" line; the next address line consumes
    // it. The flag deliberately survives unrelated intervening lines.
    let mut ipv4_address_pending = false;

    for raw_line in raw.lines() {
        let line = raw_line.trim();

        if line.starts_with("Local Port") {
            if !current.is_empty() {
                neighbors.push(std::mem::take(&mut current));
            }
            ipv4_address_pending = false;
        }

        // Field patterns are independent; a line may set one field
        // without consuming the line for the others.
        if let Some(caps) = LOCAL_PORT.captures(line) {
            current.local_port = Some(caps[1].to_string());
        }

        if let Some(caps) = CHASSIS_ID.captures(line) {
            current.chassis_id = Some(caps[1].to_string());
        }

        if let Some(caps) = SYS_NAME.captures(line) {
            current.system_name = Some(caps[1].trim().to_string());
        }

        if let Some(caps) = PORT_DESCR.captures(line) {
            current.port_descr = Some(caps[1].trim().to_string());
        }

        if line.starts_with("Type") && line.to_lowercase().contains("ipv4") {
            ipv4_address_pending = true;
        } else if ipv4_address_pending {
            if let Some(caps) = MGMT_ADDRESS.captures(line) {
                current.mgmt_ip = Some(caps[1].to_string());
                ipv4_address_pending = false;
            }
        }
    }

    if !current.is_empty() {
        neighbors.push(current);
    }

    neighbors.sort_by_key(|n| port_key(n.local_port.as_deref().unwrap_or("")));
    neighbors
}
