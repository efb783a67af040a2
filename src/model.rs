//! Data model for collected inventory and neighbor records.
//!
//! Every field is absent-by-default: a missing field means "not found
//! in the device output", never an error. Per-section `*_error` fields
//! are set only when that section's command failed outright.

use indexmap::IndexMap;
use serde::Serialize;

use crate::platform::VendorKey;

/// One power supply row from `show power`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PowerSupply {
    pub psu_id: String,
    pub watts: String,
    pub status: String,
}

/// One power supply row from `show system power-supply` (richer,
/// vendor-specific form).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PsuDetail {
    pub psu_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial: Option<String>,
    pub state: String,
    pub power: u32,
    pub max: u32,
}

impl PsuDetail {
    /// Row for a bay with nothing installed: zero power/max, no
    /// model or serial.
    pub fn not_present(psu_id: impl Into<String>) -> Self {
        Self {
            psu_id: psu_id.into(),
            model: None,
            serial: None,
            state: "Not Present".to_string(),
            power: 0,
            max: 0,
        }
    }
}

/// One physical port participating in a trunk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrunkPort {
    pub port: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port_type: Option<String>,
    pub group: String,
}

/// One row of the eight-column LACP table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LacpEntry {
    pub port: String,
    pub lacp_enabled: String,
    pub trunk_group: String,
    pub status: String,
    pub partner: String,
    pub partner_status: String,
    pub admin_key: String,
    pub oper_key: String,
}

/// Per-VLAN detail from the running config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VlanDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_cidr: Option<String>,
    pub untagged: Vec<String>,
    pub tagged: Vec<String>,
    pub is_l3: bool,
    pub is_l2_only: bool,
}

/// Per-port VLAN membership, the inversion of [`VlanDetail`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PortVlanMembership {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub untagged: Option<u32>,
    pub tagged: Vec<u32>,
}

/// One row of `show interfaces brief`, plus the per-port name lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InterfaceInfo {
    pub status: String,
    pub speed: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Inventory assembled from one device, field by field. Constructed
/// fresh per collection run and discarded after rendering.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InventoryRecord {
    // -- show system --
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_mac: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub software: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uptime: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_total: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_total_hr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_free: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_free_hr: Option<String>,

    // -- show version --
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bootrom: Option<String>,

    // -- show modules --
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    // -- show power --
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poe_total: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poe_used: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poe_remaining: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub power_supplies: Vec<PowerSupply>,

    // -- show system power-supply --
    #[serde(skip_serializing_if = "Option::is_none")]
    pub psu_power_used: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub psu_power_capacity: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub psu_detail: Vec<PsuDetail>,

    // -- show system temperature --
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp_current: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp_max: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp_min: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp_threshold: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp_alarm: Option<String>,

    // -- show trunks / show lacp --
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub trunks: Vec<TrunkPort>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub lacp: Vec<LacpEntry>,

    // -- show running-config --
    #[serde(skip_serializing_if = "IndexMap::is_empty", default)]
    pub vlans_detail: IndexMap<u32, VlanDetail>,
    #[serde(skip_serializing_if = "IndexMap::is_empty", default)]
    pub port_vlans: IndexMap<String, PortVlanMembership>,

    // -- show interfaces brief --
    #[serde(skip_serializing_if = "IndexMap::is_empty", default)]
    pub interfaces: IndexMap<String, InterfaceInfo>,

    // -- per-section failures --
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modules_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_supply_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trunks_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lacp_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vlan_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interfaces_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lldp_error: Option<String>,
}

/// One discovered LLDP adjacency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NeighborRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_port: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chassis_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port_descr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mgmt_ip: Option<String>,
}

impl NeighborRecord {
    /// A record with no fields set is never emitted by the parser.
    pub fn is_empty(&self) -> bool {
        self.local_port.is_none()
            && self.chassis_id.is_none()
            && self.system_name.is_none()
            && self.port_descr.is_none()
            && self.mgmt_ip.is_none()
    }
}

/// Final result of one collection run.
#[derive(Debug, Clone, Serialize)]
pub struct CollectionReport {
    pub vendor: VendorKey,
    pub inventory: InventoryRecord,
    pub neighbors: Vec<NeighborRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inventory_default_is_all_absent() {
        let inv = InventoryRecord::default();
        let json = serde_json::to_value(&inv).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }

    #[test]
    fn test_not_present_psu_row() {
        let row = PsuDetail::not_present("2");
        assert_eq!(row.state, "Not Present");
        assert_eq!(row.power, 0);
        assert_eq!(row.max, 0);
        assert!(row.model.is_none());
        assert!(row.serial.is_none());
    }

    #[test]
    fn test_neighbor_is_empty() {
        let mut record = NeighborRecord::default();
        assert!(record.is_empty());
        record.local_port = Some("A3".to_string());
        assert!(!record.is_empty());
    }

    #[test]
    fn test_vendor_serializes_to_canonical_name() {
        let json = serde_json::to_string(&VendorKey::ArubaOsSwitch).unwrap();
        assert_eq!(json, "\"arubaos-switch\"");
    }
}
