//! Running-config VLAN scanner.
//!
//! One forward pass over the configuration text. A `vlan <id>` line
//! opens a VLAN context; name, IP address, and untagged/tagged
//! port-list lines inside it fill both the per-VLAN detail and the
//! inverted per-port map in the same pass, which keeps the two views
//! consistent by construction.

use std::net::Ipv4Addr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{InventoryRecord, VlanDetail};

use super::expand_ports;

static VLAN_CTX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^vlan\s+(\d+)\s*$").unwrap());
static VLAN_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r#"^name\s+"?([^"]*)"?\s*$"#).unwrap());
static VLAN_IP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^ip address\s+(\d+\.\d+\.\d+\.\d+)\s+(\d+\.\d+\.\d+\.\d+)\s*$").unwrap()
});

/// Convert a dotted subnet mask to its CIDR prefix length.
fn mask_to_prefix(mask: &str) -> Option<u32> {
    let addr: Ipv4Addr = mask.parse().ok()?;
    Some(u32::from(addr).count_ones())
}

/// Scan running-config text for VLAN definitions and port membership.
pub fn parse_running_config(text: &str, inv: &mut InventoryRecord) {
    let mut current: Option<u32> = None;

    for raw_line in text.lines() {
        let line = raw_line.trim();

        if let Some(caps) = VLAN_CTX.captures(line) {
            match caps[1].parse::<u32>() {
                Ok(id) => {
                    inv.vlans_detail.entry(id).or_insert_with(|| VlanDetail {
                        is_l2_only: true,
                        ..VlanDetail::default()
                    });
                    current = Some(id);
                }
                Err(_) => current = None,
            }
            continue;
        }

        let Some(vlan_id) = current else {
            continue;
        };

        if let Some(caps) = VLAN_NAME.captures(line) {
            if let Some(vlan) = inv.vlans_detail.get_mut(&vlan_id) {
                vlan.name = Some(caps[1].to_string());
            }
            continue;
        }

        if let Some(caps) = VLAN_IP.captures(line) {
            if let Some(prefix) = mask_to_prefix(&caps[2]) {
                if let Some(vlan) = inv.vlans_detail.get_mut(&vlan_id) {
                    vlan.ip_cidr = Some(format!("{}/{}", &caps[1], prefix));
                    vlan.is_l3 = true;
                    vlan.is_l2_only = false;
                }
            }
            continue;
        }

        if let Some(list) = line.strip_prefix("untagged ") {
            add_ports(inv, vlan_id, list, false);
        } else if let Some(list) = line.strip_prefix("tagged ") {
            add_ports(inv, vlan_id, list, true);
        }
    }
}

/// Record a port list for one VLAN, updating both views.
fn add_ports(inv: &mut InventoryRecord, vlan_id: u32, list: &str, tagged: bool) {
    for token in list.split(',') {
        for port in expand_ports(token) {
            let membership = inv.port_vlans.entry(port.clone()).or_default();
            if tagged {
                membership.tagged.push(vlan_id);
            } else {
                membership.untagged = Some(vlan_id);
            }

            if let Some(vlan) = inv.vlans_detail.get_mut(&vlan_id) {
                if tagged {
                    vlan.tagged.push(port);
                } else {
                    vlan.untagged.push(port);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RUNNING_CONFIG: &str = "\
hostname \"access-sw01\"
snmp-server community \"public\" operator

vlan 1
   name \"DEFAULT_VLAN\"
   untagged 9-12
   no ip address
   exit
vlan 10
   name \"MGMT\"
   untagged A1-A3,A5
   tagged B1,B2
   ip address 10.0.10.1 255.255.255.0
   exit
vlan 20
   name \"VOICE\"
   tagged A1-A2
   exit
spanning-tree
";

    #[test]
    fn test_vlan_contexts_and_names() {
        let mut inv = InventoryRecord::default();
        parse_running_config(RUNNING_CONFIG, &mut inv);

        assert_eq!(inv.vlans_detail.len(), 3);
        assert_eq!(inv.vlans_detail[&1].name.as_deref(), Some("DEFAULT_VLAN"));
        assert_eq!(inv.vlans_detail[&10].name.as_deref(), Some("MGMT"));
        assert_eq!(inv.vlans_detail[&20].name.as_deref(), Some("VOICE"));
    }

    #[test]
    fn test_ip_and_l3_flags() {
        let mut inv = InventoryRecord::default();
        parse_running_config(RUNNING_CONFIG, &mut inv);

        let mgmt = &inv.vlans_detail[&10];
        assert_eq!(mgmt.ip_cidr.as_deref(), Some("10.0.10.1/24"));
        assert!(mgmt.is_l3);
        assert!(!mgmt.is_l2_only);

        let voice = &inv.vlans_detail[&20];
        assert!(voice.ip_cidr.is_none());
        assert!(!voice.is_l3);
        assert!(voice.is_l2_only);
    }

    #[test]
    fn test_port_lists_with_ranges() {
        let mut inv = InventoryRecord::default();
        parse_running_config(RUNNING_CONFIG, &mut inv);

        let mgmt = &inv.vlans_detail[&10];
        assert_eq!(mgmt.untagged, vec!["A1", "A2", "A3", "A5"]);
        assert_eq!(mgmt.tagged, vec!["B1", "B2"]);

        assert_eq!(
            inv.vlans_detail[&1].untagged,
            vec!["9", "10", "11", "12"]
        );
    }

    #[test]
    fn test_port_vlans_inversion_is_consistent() {
        let mut inv = InventoryRecord::default();
        parse_running_config(RUNNING_CONFIG, &mut inv);

        // Every port listed under a VLAN appears in port_vlans with
        // that VLAN correctly attributed.
        for (id, vlan) in &inv.vlans_detail {
            for port in &vlan.untagged {
                assert_eq!(inv.port_vlans[port].untagged, Some(*id), "port {port}");
            }
            for port in &vlan.tagged {
                assert!(inv.port_vlans[port].tagged.contains(id), "port {port}");
            }
        }

        let a1 = &inv.port_vlans["A1"];
        assert_eq!(a1.untagged, Some(10));
        assert_eq!(a1.tagged, vec![20]);
    }

    #[test]
    fn test_mask_conversion() {
        assert_eq!(mask_to_prefix("255.255.255.0"), Some(24));
        assert_eq!(mask_to_prefix("255.255.252.0"), Some(22));
        assert_eq!(mask_to_prefix("255.255.255.255"), Some(32));
        assert_eq!(mask_to_prefix("not-a-mask"), None);
    }

    #[test]
    fn test_lines_outside_context_ignored() {
        let mut inv = InventoryRecord::default();
        parse_running_config("untagged A1-A4\nname \"orphan\"\n", &mut inv);
        assert!(inv.vlans_detail.is_empty());
        assert!(inv.port_vlans.is_empty());
    }
}
