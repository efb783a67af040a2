//! Session dialect definitions.
//!
//! A dialect describes the interactive conventions of a platform:
//! what the prompt looks like, how to disable output paging, and which
//! substrings in output mean the device rejected a command.
//!
//! Prompt patterns are adapted from [scrapli](https://github.com/carlmontanari/scrapli).

use regex::bytes::Regex;

/// Session conventions for one platform (or the generic pre-detection
/// terminal). Static configuration, not derived data.
#[derive(Debug, Clone)]
pub struct Dialect {
    /// Dialect name (e.g. "arubaos-switch", "terminal").
    pub name: &'static str,

    /// Pattern matching the device prompt at the end of output.
    pub prompt_pattern: Regex,

    /// Commands sent after open to disable output paging. Failures are
    /// ignored; a dialect mismatch must not sink the session.
    pub paging_off: Vec<&'static str>,

    /// Substrings in command output that indicate the device rejected
    /// the command.
    pub failed_when_contains: Vec<&'static str>,

    /// Terminal width for the PTY.
    pub terminal_width: u32,

    /// Terminal height for the PTY.
    pub terminal_height: u32,
}

impl Dialect {
    fn new(name: &'static str, prompt: &str) -> Self {
        Self {
            name,
            // The fallback can only trigger on a malformed built-in
            // pattern, which the dialect tests pin down.
            prompt_pattern: Regex::new(prompt)
                .unwrap_or_else(|_| Regex::new(r"[$#>]\s*$").expect("fallback prompt")),
            paging_off: vec![],
            failed_when_contains: vec![],
            terminal_width: 511,
            terminal_height: 24,
        }
    }

    fn with_paging_command(mut self, command: &'static str) -> Self {
        self.paging_off.push(command);
        self
    }

    fn with_failure_pattern(mut self, pattern: &'static str) -> Self {
        self.failed_when_contains.push(pattern);
        self
    }

    /// Generic terminal dialect used for the vendor-detection
    /// pre-connection: the loosest prompt match, no paging control,
    /// no failure detection.
    pub fn generic() -> Self {
        Self::new("terminal", r"(?m)[$#>]\s*$")
    }

    /// ArubaOS-Switch / ProCurve dialect.
    pub fn arubaos_switch() -> Self {
        Self::new("arubaos-switch", r"(?m)^[\w.\-]{1,63}[#>]\s?$")
            .with_paging_command("no page")
            .with_failure_pattern("Invalid input:")
            .with_failure_pattern("Ambiguous input:")
            .with_failure_pattern("Incomplete input:")
    }

    /// AOS-CX dialect.
    pub fn arubaos_cx() -> Self {
        Self::new("arubaos-cx", r"(?m)^[\w.\-]{1,63}[#>]\s?$")
            .with_paging_command("no page")
            .with_failure_pattern("% Unknown command")
            .with_failure_pattern("% Ambiguous command")
    }

    /// Cisco IOS / IOS-XE dialect.
    pub fn cisco_ios() -> Self {
        Self::new("cisco-ios", r"(?m)^[\w.\-@()/:]{1,63}[#>]\s?$")
            .with_paging_command("terminal length 0")
            .with_paging_command("terminal width 511")
            .with_failure_pattern("% Invalid input")
            .with_failure_pattern("% Ambiguous command")
            .with_failure_pattern("% Incomplete command")
    }

    /// FortiGate dialect. Paging control lives in a config subtree on
    /// FortiOS, so none is attempted here.
    pub fn fortinet() -> Self {
        Self::new("fortinet", r"(?m)^[\w.\-]{1,63}\s?[#$]\s?$")
            .with_failure_pattern("Unknown action")
            .with_failure_pattern("command parse error")
    }
}
