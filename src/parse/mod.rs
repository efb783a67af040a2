//! Screen-scraping extractors for show-command output.
//!
//! Every extractor is pure: text in, fields out. Extraction is a set
//! of independent regex searches; a pattern that does not match leaves
//! its field absent, which is the normal signal for "output shape
//! differed" (optional hardware, missing feature). Nothing in this
//! module does I/O or fails outward.

pub mod humanize;
pub mod interfaces;
pub mod link;
pub mod neighbors;
pub mod ports;
pub mod power;
pub mod system;
pub mod vlan;

pub use humanize::human_bytes;
pub use neighbors::parse_neighbors;
pub use ports::{expand_ports, port_key, PortKey};
