//! Extractors for `show system`, `show version`, and `show modules`.

use once_cell::sync::Lazy;
use regex::Regex;

use super::human_bytes;
use crate::model::InventoryRecord;

static SERIAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"Serial Number\s+:\s*(\S+)").unwrap());
static BASE_MAC: Lazy<Regex> = Lazy::new(|| Regex::new(r"Base MAC Addr\s+:\s*(\S+)").unwrap());
static SOFTWARE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Software revision\s+:\s*([\w.]+)").unwrap());
static UPTIME: Lazy<Regex> = Lazy::new(|| Regex::new(r"Up Time\s*:\s*([0-9]+\s+days?)").unwrap());
static CPU: Lazy<Regex> = Lazy::new(|| Regex::new(r"CPU Util\s*\(%\)\s*:\s*(\d+)").unwrap());
static MEM_TOTAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Memory\s*-\s*Total\s*:\s*([\d,]+)").unwrap());
static MEM_FREE: Lazy<Regex> = Lazy::new(|| Regex::new(r"Free\s*:\s*([\d,]+)").unwrap());

static VERSION_STRING: Lazy<Regex> = Lazy::new(|| Regex::new(r"WC\.\d+\.\d+\.\d+").unwrap());
static BOOTROM: Lazy<Regex> = Lazy::new(|| Regex::new(r"Boot ROM Version:\s*(\S+)").unwrap());

static CHASSIS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Chassis:\s*([A-Za-z0-9+\-]+)\s+(\S+)").unwrap());

/// Extract fields from `show system` output.
pub fn parse_system(text: &str, inv: &mut InventoryRecord) {
    if let Some(caps) = SERIAL.captures(text) {
        inv.serial = Some(caps[1].to_string());
    }

    if let Some(caps) = BASE_MAC.captures(text) {
        inv.base_mac = Some(caps[1].to_string());
    }

    if let Some(caps) = SOFTWARE.captures(text) {
        inv.software = Some(caps[1].to_string());
    }

    // Only the "N days" token of the uptime.
    if let Some(caps) = UPTIME.captures(text) {
        inv.uptime = Some(caps[1].trim().to_string());
    }

    if let Some(caps) = CPU.captures(text) {
        inv.cpu = Some(format!("{}%", &caps[1]));
    }

    if let Some(caps) = MEM_TOTAL.captures(text) {
        let raw = caps[1].to_string();
        inv.memory_total_hr = Some(human_bytes(&raw));
        inv.memory_total = Some(raw);
    }

    if let Some(caps) = MEM_FREE.captures(text) {
        let raw = caps[1].to_string();
        inv.memory_free_hr = Some(human_bytes(&raw));
        inv.memory_free = Some(raw);
    }
}

/// Extract fields from `show version` output.
///
/// A version string found here supersedes the software revision the
/// system section already set; the later, more specific extraction
/// wins.
pub fn parse_version(text: &str, inv: &mut InventoryRecord) {
    if let Some(m) = VERSION_STRING.find(text) {
        inv.software = Some(m.as_str().to_string());
    }

    if let Some(caps) = BOOTROM.captures(text) {
        inv.bootrom = Some(caps[1].to_string());
    }
}

/// Extract the chassis model and SKU from `show modules` output.
pub fn parse_modules(text: &str, inv: &mut InventoryRecord) {
    if let Some(caps) = CHASSIS.captures(text) {
        inv.model = Some(caps[1].to_string());
        inv.sku = Some(caps[2].to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHOW_SYSTEM: &str = "\
 Status and Counters - General System Information

  System Name        : access-sw01
  System Contact     :
  System Location    : wiring closet 2

  MAC Age Time (sec) : 300

  Time Zone          : 0
  Daylight Time Rule : None

  Software revision  : WC.16.02.0003    Base MAC Addr      : 94:3f:c2:11:22:33
  ROM Version        : WC.16.01.0004    Serial Number      : CN71ABC123

  Up Time            : 42 days          Memory   - Total   : 153,092,096
  CPU Util (%)       : 7                           Free    : 83,424,256

  IP Mgmt  - Pkts Rx : 1925349          Packet   - Total   : 6750
             Pkts Tx : 846240           Buffers    Free    : 5086
";

    #[test]
    fn test_parse_system_fields() {
        let mut inv = InventoryRecord::default();
        parse_system(SHOW_SYSTEM, &mut inv);

        assert_eq!(inv.serial.as_deref(), Some("CN71ABC123"));
        assert_eq!(inv.base_mac.as_deref(), Some("94:3f:c2:11:22:33"));
        assert_eq!(inv.software.as_deref(), Some("WC.16.02.0003"));
        assert_eq!(inv.uptime.as_deref(), Some("42 days"));
        assert_eq!(inv.cpu.as_deref(), Some("7%"));
        assert_eq!(inv.memory_total.as_deref(), Some("153,092,096"));
        assert_eq!(inv.memory_total_hr.as_deref(), Some("153.1 MB"));
        assert_eq!(inv.memory_free.as_deref(), Some("83,424,256"));
        assert_eq!(inv.memory_free_hr.as_deref(), Some("83.4 MB"));
    }

    #[test]
    fn test_parse_system_partial_output() {
        let mut inv = InventoryRecord::default();
        parse_system("Serial Number : ABC\n", &mut inv);
        assert_eq!(inv.serial.as_deref(), Some("ABC"));
        assert!(inv.base_mac.is_none());
        assert!(inv.memory_total.is_none());
    }

    #[test]
    fn test_parse_version_overwrites_software() {
        let mut inv = InventoryRecord::default();
        inv.software = Some("16.02".to_string());

        let out = "Image stamp: /ws/swbuild\n          WC.16.02.0020\nBoot ROM Version: WC.16.01.0004\n";
        parse_version(out, &mut inv);

        assert_eq!(inv.software.as_deref(), Some("WC.16.02.0020"));
        assert_eq!(inv.bootrom.as_deref(), Some("WC.16.01.0004"));
    }

    #[test]
    fn test_parse_version_no_match_keeps_software() {
        let mut inv = InventoryRecord::default();
        inv.software = Some("16.02".to_string());
        parse_version("nothing useful here", &mut inv);
        assert_eq!(inv.software.as_deref(), Some("16.02"));
        assert!(inv.bootrom.is_none());
    }

    #[test]
    fn test_parse_modules_chassis_line() {
        let mut inv = InventoryRecord::default();
        let out = "\
 Status and Counters - Module Information

  Chassis: 2530-24G-PoEP J9773A         Serial Number:   CN71ABC123
";
        parse_modules(out, &mut inv);
        assert_eq!(inv.model.as_deref(), Some("2530-24G-PoEP"));
        assert_eq!(inv.sku.as_deref(), Some("J9773A"));
    }
}
