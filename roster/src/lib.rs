//! In-memory user record browser.
//!
//! Derives aggregate statistics over a user record set, applies compound
//! filters, paginates the result, and gates status changes and deletions behind
//! explicit confirmation. The architecture enforces a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (stats, filtering, pagination,
//!   transitions). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting collaborators (record file, configuration).
//!
//! Session state lives in [`browse`]; orchestration modules ([`list`],
//! [`status`], [`delete`]) coordinate core logic with I/O to implement CLI
//! commands.

pub mod browse;
pub mod core;
pub mod delete;
pub mod exit_codes;
pub mod io;
pub mod list;
pub mod logging;
pub mod status;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
