//! Sun Core - dual-mode associative lookup tables
//!
//! One declared association list answers lookups in two tiers:
//! - Compile time: `ct_get!` resolves during constant evaluation, and a
//!   missing key fails the build
//! - Run time: optional forward and inverse tables, materialized once per
//!   process, where a missing key logs a warning and yields a fallback
//!
//! The crate also carries `ct_max!`, a compile-time maximum over constants.

#[macro_use]
pub mod macros;

pub mod association;
pub mod compare;
pub mod config;
pub mod error;
pub mod list;
pub mod max;
pub mod runtime;

pub use association::*;
pub use compare::*;
pub use config::*;
pub use error::*;
pub use list::*;
pub use runtime::*;
