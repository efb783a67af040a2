//! Vendor detection and per-vendor session dialects.
//!
//! The vendor is inferred from banner text with a small substring
//! heuristic; the resulting [`VendorKey`] selects a [`Dialect`] that
//! describes the session conventions to expect (prompt shape, paging
//! commands, failure strings).

mod dialect;

pub use dialect::Dialect;

use std::fmt;

use serde::Serialize;

/// Supported switch platforms.
///
/// `ArubaOsSwitch` doubles as the universal fallback when no signature
/// matches the banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum VendorKey {
    /// ArubaOS-Switch / HP ProCurve.
    #[serde(rename = "arubaos-switch")]
    ArubaOsSwitch,

    /// AOS-CX.
    #[serde(rename = "arubaos-cx")]
    ArubaOsCx,

    /// Cisco IOS / IOS-XE.
    #[serde(rename = "cisco-ios")]
    CiscoIos,

    /// FortiGate / FortiOS.
    #[serde(rename = "fortinet")]
    Fortinet,
}

impl VendorKey {
    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            VendorKey::ArubaOsSwitch => "arubaos-switch",
            VendorKey::ArubaOsCx => "arubaos-cx",
            VendorKey::CiscoIos => "cisco-ios",
            VendorKey::Fortinet => "fortinet",
        }
    }

    /// The session dialect for this platform.
    pub fn dialect(&self) -> Dialect {
        match self {
            VendorKey::ArubaOsSwitch => Dialect::arubaos_switch(),
            VendorKey::ArubaOsCx => Dialect::arubaos_cx(),
            VendorKey::CiscoIos => Dialect::cisco_ios(),
            VendorKey::Fortinet => Dialect::fortinet(),
        }
    }
}

impl fmt::Display for VendorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Infer the vendor from a device banner or version output.
///
/// First match wins; an unrecognized banner falls back to
/// `ArubaOsSwitch` rather than failing. This is a heuristic: a SysName
/// containing "cisco" on a non-Cisco box will misclassify, and that is
/// an accepted risk.
pub fn detect_vendor(output: &str) -> VendorKey {
    let text = output.to_lowercase();
    if text.contains("arubaos") || text.contains("procurve") {
        return VendorKey::ArubaOsSwitch;
    }
    if text.contains("aruba") && text.contains("cx") {
        return VendorKey::ArubaOsCx;
    }
    if text.contains("cisco") {
        return VendorKey::CiscoIos;
    }
    if text.contains("fortigate") || text.contains("fortinet") {
        return VendorKey::Fortinet;
    }
    VendorKey::ArubaOsSwitch
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_known_vendors() {
        assert_eq!(detect_vendor("ArubaOS Switch"), VendorKey::ArubaOsSwitch);
        assert_eq!(detect_vendor("HP ProCurve 2530"), VendorKey::ArubaOsSwitch);
        assert_eq!(detect_vendor("Aruba 6300 CX"), VendorKey::ArubaOsCx);
        assert_eq!(detect_vendor("Cisco IOS XE"), VendorKey::CiscoIos);
        assert_eq!(detect_vendor("Fortinet"), VendorKey::Fortinet);
        assert_eq!(detect_vendor("FortiGate-60F"), VendorKey::Fortinet);
    }

    #[test]
    fn test_detect_is_case_insensitive() {
        assert_eq!(detect_vendor("CISCO ios"), VendorKey::CiscoIos);
        assert_eq!(detect_vendor("pRoCuRvE"), VendorKey::ArubaOsSwitch);
    }

    #[test]
    fn test_detect_precedence() {
        // "arubaos" wins over the aruba+cx rule.
        assert_eq!(
            detect_vendor("ArubaOS-CX something"),
            VendorKey::ArubaOsSwitch
        );
    }

    #[test]
    fn test_detect_fallback() {
        assert_eq!(detect_vendor(""), VendorKey::ArubaOsSwitch);
        assert_eq!(detect_vendor("some unknown banner"), VendorKey::ArubaOsSwitch);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(VendorKey::ArubaOsSwitch.to_string(), "arubaos-switch");
        assert_eq!(VendorKey::ArubaOsCx.to_string(), "arubaos-cx");
        assert_eq!(VendorKey::CiscoIos.to_string(), "cisco-ios");
        assert_eq!(VendorKey::Fortinet.to_string(), "fortinet");
    }
}
