//! Collection driver: the inventory assembler and the run
//! orchestrator.
//!
//! Sections run in a fixed order and each one is fenced: a command
//! that fails records a `<section>_error` field and the run moves on.
//! One bad command must never sink the collection; switches without
//! PoE or without a given table are normal.

use log::{debug, info, warn};

use crate::error::Result;
use crate::model::{CollectionReport, InventoryRecord};
use crate::parse;
use crate::platform::{Dialect, VendorKey, detect_vendor};
use crate::session::{CommandSession, SshSession};
use crate::transport::SshConfig;

/// The neighbor table command. Sent as-is regardless of vendor, as
/// the dialects this tool targets accept the ArubaOS form.
const LLDP_COMMAND: &str = "show lldp info remote-device detail";

/// Run every section extractor against the session in fixed order,
/// merging partial results into one record.
///
/// Order matters: the version section's software string supersedes the
/// system section's. Sections conditional on the ArubaOS-Switch
/// dialect are skipped elsewhere rather than attempted and failed.
pub async fn collect_inventory(
    session: &mut dyn CommandSession,
    vendor: VendorKey,
) -> InventoryRecord {
    let mut inv = InventoryRecord::default();

    match session.send("show system").await {
        Ok(out) => parse::system::parse_system(&out, &mut inv),
        Err(e) => inv.system_error = Some(e.to_string()),
    }

    match session.send("show version").await {
        Ok(out) => parse::system::parse_version(&out, &mut inv),
        Err(e) => inv.version_error = Some(e.to_string()),
    }

    match session.send("show modules").await {
        Ok(out) => parse::system::parse_modules(&out, &mut inv),
        Err(e) => inv.modules_error = Some(e.to_string()),
    }

    match session.send("show power").await {
        Ok(out) => parse::power::parse_power(&out, &mut inv),
        Err(e) => inv.power_error = Some(e.to_string()),
    }

    if vendor == VendorKey::ArubaOsSwitch {
        match session.send("show system power-supply").await {
            Ok(out) => parse::power::parse_power_supply(&out, &mut inv),
            Err(e) => inv.power_supply_error = Some(e.to_string()),
        }

        match session.send("show system temperature").await {
            Ok(out) => parse::power::parse_temperature(&out, &mut inv),
            Err(e) => inv.temperature_error = Some(e.to_string()),
        }

        match session.send("show trunks").await {
            Ok(out) => parse::link::parse_trunks(&out, &mut inv),
            Err(e) => inv.trunks_error = Some(e.to_string()),
        }

        match session.send("show lacp").await {
            Ok(out) => parse::link::parse_lacp(&out, &mut inv),
            Err(e) => inv.lacp_error = Some(e.to_string()),
        }
    }

    match session.send("show running-config").await {
        Ok(out) => parse::vlan::parse_running_config(&out, &mut inv),
        Err(e) => inv.vlan_error = Some(e.to_string()),
    }

    if vendor == VendorKey::ArubaOsSwitch {
        collect_interfaces(session, &mut inv).await;
    }

    inv
}

/// Interface brief plus the per-port name lookup.
///
/// This is an N+1 command pattern (one `show interfaces <port>` per
/// discovered port) and an accepted cost: port counts are small and
/// the session is already open.
async fn collect_interfaces(session: &mut dyn CommandSession, inv: &mut InventoryRecord) {
    let rows = match session.send("show interfaces brief").await {
        Ok(out) => parse::interfaces::parse_brief(&out),
        Err(e) => {
            inv.interfaces_error = Some(e.to_string());
            return;
        }
    };

    for (port, mut info) in rows {
        match session.send(&format!("show interfaces {port}")).await {
            Ok(out) => info.description = parse::interfaces::parse_port_name(&out),
            Err(e) => debug!("name lookup for port {port} failed: {e}"),
        }
        inv.interfaces.insert(port, info);
    }
}

/// Collect inventory and LLDP neighbors from one device.
///
/// Opens a generic session first to fingerprint the vendor from the
/// banner, then reconnects with the vendor dialect for the real work.
/// Only these connection attempts can fail the run; everything past
/// them degrades to partial data with inline `*_error` annotations.
pub async fn collect(host: &str, username: &str, password: &str) -> Result<CollectionReport> {
    let config = SshConfig::with_password(host, username, password);

    // Minimal banner read over a dialect-agnostic session.
    let mut probe = SshSession::open(Dialect::generic(), config.clone()).await?;
    let mut banner = probe.banner().to_string();
    match probe.send("show version").await {
        Ok(out) => banner.push_str(&out),
        Err(e) => debug!("[{host}] banner version probe failed: {e}"),
    }
    if let Err(e) = probe.close().await {
        debug!("[{host}] probe session close: {e}");
    }

    let vendor = detect_vendor(&banner);
    let dialect = vendor.dialect();
    info!("[{host}] Vendor detected: {vendor} -> {}", dialect.name);

    // Reconnect with the right conventions.
    let mut session = SshSession::open(dialect.clone(), config).await?;

    for command in &dialect.paging_off {
        if let Err(e) = session.send(command).await {
            debug!("[{host}] paging command '{command}' rejected: {e}");
        }
    }

    let mut inventory = collect_inventory(&mut session, vendor).await;

    let neighbors = match session.send(LLDP_COMMAND).await {
        Ok(raw) => parse::parse_neighbors(&raw),
        Err(e) => {
            warn!("[{host}] neighbor table fetch failed: {e}");
            inventory.lldp_error = Some(e.to_string());
            Vec::new()
        }
    };

    if let Err(e) = session.close().await {
        warn!("[{host}] session close: {e}");
    }

    Ok(CollectionReport {
        vendor,
        inventory,
        neighbors,
    })
}
