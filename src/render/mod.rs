//! Console rendering of a collection report.
//!
//! Pure formatting onto an injected writer; the collection core never
//! prints. Layout follows the original operator-facing tool: labeled
//! key/value sections, small fixed-width tables, and one line per
//! neighbor.

use std::io::{self, Write};

use crate::model::{CollectionReport, InventoryRecord, NeighborRecord};

/// Write the full report: inventory sections, VLAN views, and the
/// neighbor table.
pub fn render_report<W: Write>(out: &mut W, report: &CollectionReport) -> io::Result<()> {
    writeln!(out, "\n========================")?;
    writeln!(out, "       INVENTORY        ")?;
    writeln!(out, "========================")?;
    writeln!(out, "{:<15}: {}", "vendor", report.vendor)?;

    render_inventory(out, &report.inventory)?;
    render_errors(out, &report.inventory)?;
    render_neighbors(out, &report.neighbors)?;
    Ok(())
}

fn render_kv_section<W: Write>(
    out: &mut W,
    title: &str,
    rows: &[(&str, &Option<String>)],
) -> io::Result<()> {
    if rows.iter().all(|(_, value)| value.is_none()) {
        return Ok(());
    }
    writeln!(out, "\n--- {title} ---")?;
    for (label, value) in rows {
        if let Some(value) = value {
            writeln!(out, "{label:<15}: {value}")?;
        }
    }
    Ok(())
}

fn render_inventory<W: Write>(out: &mut W, inv: &InventoryRecord) -> io::Result<()> {
    render_kv_section(
        out,
        "SYSTEM",
        &[
            ("serial", &inv.serial),
            ("base_mac", &inv.base_mac),
            ("software", &inv.software),
            ("bootrom", &inv.bootrom),
            ("uptime", &inv.uptime),
            ("cpu", &inv.cpu),
        ],
    )?;

    render_kv_section(
        out,
        "MEMORY",
        &[("total", &inv.memory_total_hr), ("free", &inv.memory_free_hr)],
    )?;

    render_kv_section(out, "HARDWARE", &[("model", &inv.model), ("sku", &inv.sku)])?;

    render_kv_section(
        out,
        "POWER",
        &[
            ("poe_total", &inv.poe_total),
            ("poe_used", &inv.poe_used),
            ("poe_remaining", &inv.poe_remaining),
            ("psu_used", &inv.psu_power_used),
            ("psu_capacity", &inv.psu_power_capacity),
        ],
    )?;

    if !inv.power_supplies.is_empty() {
        writeln!(out, "\n--- POWER SUPPLIES ---")?;
        for ps in &inv.power_supplies {
            writeln!(out, "   PSU{}: {}W - {}", ps.psu_id, ps.watts, ps.status)?;
        }
    }

    if !inv.psu_detail.is_empty() {
        writeln!(out, "\n--- POWER SUPPLY DETAIL ---")?;
        for row in &inv.psu_detail {
            writeln!(
                out,
                "   PSU{}: {:<14} {:>4}W / {:>4}W max  model:{} serial:{}",
                row.psu_id,
                row.state,
                row.power,
                row.max,
                row.model.as_deref().unwrap_or("-"),
                row.serial.as_deref().unwrap_or("-"),
            )?;
        }
    }

    render_kv_section(
        out,
        "ENVIRONMENT",
        &[
            ("temp_current", &inv.temp_current),
            ("temp_max", &inv.temp_max),
            ("temp_min", &inv.temp_min),
            ("temp_threshold", &inv.temp_threshold),
            ("overtemp_alarm", &inv.temp_alarm),
        ],
    )?;

    if !inv.trunks.is_empty() {
        writeln!(out, "\n--- TRUNKS ---")?;
        for trunk in &inv.trunks {
            writeln!(
                out,
                "   {:<6} {:<6} {:<10} {}",
                trunk.port,
                trunk.group,
                trunk.port_type.as_deref().unwrap_or("-"),
                trunk.name.as_deref().unwrap_or(""),
            )?;
        }
    }

    if !inv.lacp.is_empty() {
        writeln!(out, "\n--- LACP ---")?;
        writeln!(
            out,
            "   {:<6} {:<8} {:<6} {:<6} {:<8} {:<8} {:<6} {:<6}",
            "Port", "Enabled", "Group", "Status", "Partner", "PtnrSt", "AdmKey", "OperKey"
        )?;
        for entry in &inv.lacp {
            writeln!(
                out,
                "   {:<6} {:<8} {:<6} {:<6} {:<8} {:<8} {:<6} {:<6}",
                entry.port,
                entry.lacp_enabled,
                entry.trunk_group,
                entry.status,
                entry.partner,
                entry.partner_status,
                entry.admin_key,
                entry.oper_key,
            )?;
        }
    }

    if !inv.vlans_detail.is_empty() {
        writeln!(out, "\n--- VLANS ---")?;
        for (id, vlan) in &inv.vlans_detail {
            let kind = if vlan.is_l3 { "L3" } else { "L2" };
            writeln!(
                out,
                "   vlan {:<5} {:<20} {:<4} {:<18} untagged:{} tagged:{}",
                id,
                vlan.name.as_deref().unwrap_or(""),
                kind,
                vlan.ip_cidr.as_deref().unwrap_or("-"),
                vlan.untagged.len(),
                vlan.tagged.len(),
            )?;
        }
    }

    if !inv.port_vlans.is_empty() {
        writeln!(out, "\n--- PORT / VLAN ---")?;
        for (port, membership) in &inv.port_vlans {
            let untagged = membership
                .untagged
                .map(|v| v.to_string())
                .unwrap_or_else(|| "-".to_string());
            let tagged: Vec<String> =
                membership.tagged.iter().map(|v| v.to_string()).collect();
            writeln!(
                out,
                "   {:<8} untagged:{:<6} tagged:{}",
                port,
                untagged,
                tagged.join(","),
            )?;
        }
    }

    if !inv.interfaces.is_empty() {
        writeln!(out, "\n--- INTERFACES ---")?;
        for (port, info) in &inv.interfaces {
            writeln!(
                out,
                "   {:<8} {:<6} {:<10} {}",
                port,
                info.status,
                info.speed,
                info.description.as_deref().unwrap_or(""),
            )?;
        }
    }

    Ok(())
}

fn render_errors<W: Write>(out: &mut W, inv: &InventoryRecord) -> io::Result<()> {
    let errors = [
        ("system", &inv.system_error),
        ("version", &inv.version_error),
        ("modules", &inv.modules_error),
        ("power", &inv.power_error),
        ("power_supply", &inv.power_supply_error),
        ("temperature", &inv.temperature_error),
        ("trunks", &inv.trunks_error),
        ("lacp", &inv.lacp_error),
        ("vlan", &inv.vlan_error),
        ("interfaces", &inv.interfaces_error),
        ("lldp", &inv.lldp_error),
    ];

    if errors.iter().all(|(_, e)| e.is_none()) {
        return Ok(());
    }

    writeln!(out, "\n--- SECTION ERRORS ---")?;
    for (section, error) in errors {
        if let Some(error) = error {
            writeln!(out, "   {section}: {error}")?;
        }
    }
    Ok(())
}

fn render_neighbors<W: Write>(out: &mut W, neighbors: &[NeighborRecord]) -> io::Result<()> {
    writeln!(out, "\n=== LLDP Neighbors ===")?;
    for record in neighbors {
        let local = record.local_port.as_deref().unwrap_or("?");
        let sysname = record.system_name.as_deref().unwrap_or("?");
        let chassis = record.chassis_id.as_deref().unwrap_or("?");

        match record.mgmt_ip.as_deref() {
            Some(mgmt) => writeln!(out, "{local} -> {sysname} ({chassis})  mgmt:{mgmt}")?,
            None => writeln!(out, "{local} -> {sysname} ({chassis})")?,
        }
    }
    Ok(())
}
