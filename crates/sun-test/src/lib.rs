//! Sun Test Harness - shared tooling for lookup table tests
//!
//! This crate provides:
//! - Capture of tracing events emitted by a closure
//! - A barrier-released race harness for once-only initialization

pub mod capture;
pub mod race;

pub use capture::*;
pub use race::*;
