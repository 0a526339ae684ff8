//! Deterministic, pure logic of the record browser.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! record sets and return deterministic outputs suitable for tests. Side
//! effects leave the core only as [`types::Command`] values.

pub mod deletion;
pub mod filter;
pub mod invariants;
pub mod paginate;
pub mod stats;
pub mod transition;
pub mod types;
