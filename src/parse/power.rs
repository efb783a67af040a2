//! Extractors for `show power`, `show system power-supply`, and
//! `show system temperature`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{InventoryRecord, PowerSupply, PsuDetail};

static POE_TOTAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Total Available Power\s*:\s*([\d.]+)\s*W").unwrap());
static POE_DRAWN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Total Power Drawn\s*:\s*([\d.]+)\s*W").unwrap());
static POE_REMAINING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Total Remaining Power\s*:\s*([\d.]+)\s*W").unwrap());
static PSU_ROW: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\s*(\d+)\s+(\d+)\s+([A-Za-z+][A-Za-z+ ]*?)\s*$").unwrap());

static PSU_USED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Total Used Power\s*:\s*(\d+)\s*W").unwrap());
static PSU_CAPACITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Total Power Capacity\s*:\s*(\d+)\s*W").unwrap());

static TEMP_ROW: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^\s*\S+\s+(\d+)C\s+(\d+)C\s+(\d+)C\s+(\d+)C\s+(\S+)\s*$").unwrap()
});

/// Extract PoE aggregates and PSU rows from `show power` output.
pub fn parse_power(text: &str, inv: &mut InventoryRecord) {
    if let Some(caps) = POE_TOTAL.captures(text) {
        inv.poe_total = Some(format!("{} W", &caps[1]));
    }

    if let Some(caps) = POE_DRAWN.captures(text) {
        inv.poe_used = Some(format!("{} W", &caps[1]));
    }

    if let Some(caps) = POE_REMAINING.captures(text) {
        inv.poe_remaining = Some(format!("{} W", &caps[1]));
    }

    for caps in PSU_ROW.captures_iter(text) {
        inv.power_supplies.push(PowerSupply {
            psu_id: caps[1].to_string(),
            watts: caps[2].to_string(),
            status: caps[3].trim().to_string(),
        });
    }
}

/// Extract the per-bay detail table from `show system power-supply`.
///
/// Rows are tokenized rather than pattern-matched because the state
/// column spans a variable number of words. A bay marked "Not Present"
/// is a distinct state carrying zero power and no model or serial.
pub fn parse_power_supply(text: &str, inv: &mut InventoryRecord) {
    if let Some(caps) = PSU_USED.captures(text) {
        inv.psu_power_used = Some(format!("{} W", &caps[1]));
    }

    if let Some(caps) = PSU_CAPACITY.captures(text) {
        inv.psu_power_capacity = Some(format!("{} W", &caps[1]));
    }

    for line in text.lines() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some(first) = tokens.first() else {
            continue;
        };
        if first.parse::<u32>().is_err() {
            continue;
        }

        if line.contains("Not Present") {
            inv.psu_detail.push(PsuDetail::not_present(*first));
            continue;
        }

        // id, model, serial, state..., wattage, max
        if tokens.len() < 6 {
            continue;
        }
        let (Ok(power), Ok(max)) = (
            tokens[tokens.len() - 2].parse::<u32>(),
            tokens[tokens.len() - 1].parse::<u32>(),
        ) else {
            continue;
        };

        inv.psu_detail.push(PsuDetail {
            psu_id: first.to_string(),
            model: Some(tokens[1].to_string()),
            serial: Some(tokens[2].to_string()),
            state: tokens[3].to_string(),
            power,
            max,
        });
    }
}

/// Extract the sensor row from `show system temperature`.
///
/// The alarm flag is normalized: anything that is not literally "NO"
/// reads as "YES".
pub fn parse_temperature(text: &str, inv: &mut InventoryRecord) {
    if let Some(caps) = TEMP_ROW.captures(text) {
        inv.temp_current = Some(format!("{}C", &caps[1]));
        inv.temp_max = Some(format!("{}C", &caps[2]));
        inv.temp_min = Some(format!("{}C", &caps[3]));
        inv.temp_threshold = Some(format!("{}C", &caps[4]));

        let alarm = if caps[5].eq_ignore_ascii_case("NO") {
            "NO"
        } else {
            "YES"
        };
        inv.temp_alarm = Some(alarm.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHOW_POWER: &str = "\
 Status and Counters - System Power Status

  Total Available Power   : 370 W
  Total Power Drawn       : 84 W
  Total Remaining Power   : 286 W

  PS    Wattage    Status
  ----  ---------  -----------
  1     370        Powered
  2     0          Not Plugged
";

    #[test]
    fn test_parse_power_aggregates() {
        let mut inv = InventoryRecord::default();
        parse_power(SHOW_POWER, &mut inv);

        assert_eq!(inv.poe_total.as_deref(), Some("370 W"));
        assert_eq!(inv.poe_used.as_deref(), Some("84 W"));
        assert_eq!(inv.poe_remaining.as_deref(), Some("286 W"));
    }

    #[test]
    fn test_parse_power_psu_rows() {
        let mut inv = InventoryRecord::default();
        parse_power(SHOW_POWER, &mut inv);

        assert_eq!(inv.power_supplies.len(), 2);
        assert_eq!(inv.power_supplies[0].psu_id, "1");
        assert_eq!(inv.power_supplies[0].watts, "370");
        assert_eq!(inv.power_supplies[0].status, "Powered");
        assert_eq!(inv.power_supplies[1].status, "Not Plugged");
    }

    #[test]
    fn test_parse_power_no_poe_hardware() {
        let mut inv = InventoryRecord::default();
        parse_power("Invalid input: power\n", &mut inv);
        assert!(inv.poe_total.is_none());
        assert!(inv.power_supplies.is_empty());
    }

    const SHOW_PSU: &str = "\
 Power Supply Status:

  PS#   Model     Serial      State           AC/DC + V      Wattage   Max
  ----- --------- ----------- --------------- -------------- --------- ------
  1     J9738A    SG123456    Powered         AC 120V/240V   43        575
  2                           Not Present     --             0         0

  Total Used Power     : 43 W
  Total Power Capacity : 1150 W
";

    #[test]
    fn test_parse_power_supply_rows() {
        let mut inv = InventoryRecord::default();
        parse_power_supply(SHOW_PSU, &mut inv);

        assert_eq!(inv.psu_power_used.as_deref(), Some("43 W"));
        assert_eq!(inv.psu_power_capacity.as_deref(), Some("1150 W"));

        assert_eq!(inv.psu_detail.len(), 2);
        let installed = &inv.psu_detail[0];
        assert_eq!(installed.psu_id, "1");
        assert_eq!(installed.model.as_deref(), Some("J9738A"));
        assert_eq!(installed.serial.as_deref(), Some("SG123456"));
        assert_eq!(installed.state, "Powered");
        assert_eq!(installed.power, 43);
        assert_eq!(installed.max, 575);

        let empty_bay = &inv.psu_detail[1];
        assert_eq!(empty_bay.state, "Not Present");
        assert_eq!(empty_bay.power, 0);
        assert_eq!(empty_bay.max, 0);
        assert!(empty_bay.model.is_none());
        assert!(empty_bay.serial.is_none());
    }

    const SHOW_TEMP: &str = "\
 System Air Temperatures

  Temp     Current   Max     Min     Threshold  OverTemp
  Sensor   Temp      Temp    Temp    Temp       Alarm
  -------- --------- ------- ------- ---------- --------
  Sys-1    45C       52C     21C     57C        NO
";

    #[test]
    fn test_parse_temperature() {
        let mut inv = InventoryRecord::default();
        parse_temperature(SHOW_TEMP, &mut inv);

        assert_eq!(inv.temp_current.as_deref(), Some("45C"));
        assert_eq!(inv.temp_max.as_deref(), Some("52C"));
        assert_eq!(inv.temp_min.as_deref(), Some("21C"));
        assert_eq!(inv.temp_threshold.as_deref(), Some("57C"));
        assert_eq!(inv.temp_alarm.as_deref(), Some("NO"));
    }

    #[test]
    fn test_temperature_alarm_normalized_to_yes() {
        let mut inv = InventoryRecord::default();
        parse_temperature("  Sys-1    61C  52C  21C  57C  Alert\n", &mut inv);
        assert_eq!(inv.temp_alarm.as_deref(), Some("YES"));
    }
}
