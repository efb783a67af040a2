//! SSH transport layer wrapping russh.
//!
//! Low-level connection management: connect with timeout, authenticate,
//! open the PTY channel the command session runs on.

pub mod config;
mod ssh;

pub use config::{AuthMethod, SshConfig};
pub use ssh::SshTransport;
