//! Channel layer for prompt detection on an interactive session.
//!
//! Accumulates raw PTY output with ANSI stripping and searches the
//! buffer tail for prompt patterns.

mod buffer;

pub use buffer::PatternBuffer;
