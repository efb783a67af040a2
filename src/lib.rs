//! # lldpscout
//!
//! Inventory and LLDP neighbor collector for managed switches.
//!
//! lldpscout opens an interactive SSH session to a switch, fingerprints
//! the vendor from the login banner, runs a fixed sequence of `show`
//! commands in the vendor's dialect, and scrapes the free-form output
//! into structured inventory and neighbor records.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! #[tokio::main]
//! async fn main() -> Result<(), lldpscout::Error> {
//!     let report = lldpscout::collect("192.168.1.1", "admin", "secret").await?;
//!
//!     for neighbor in &report.neighbors {
//!         println!("{:?}", neighbor);
//!     }
//!     Ok(())
//! }
//! ```

pub mod channel;
pub mod collect;
pub mod error;
pub mod model;
pub mod parse;
pub mod platform;
pub mod render;
pub mod session;
pub mod transport;

// Re-export main types for convenience
pub use collect::{collect, collect_inventory};
pub use error::Error;
pub use model::{CollectionReport, InventoryRecord, NeighborRecord};
pub use parse::parse_neighbors;
pub use platform::{Dialect, VendorKey, detect_vendor};
pub use render::render_report;
pub use session::{CommandSession, SshSession};
pub use transport::{AuthMethod, SshConfig};
