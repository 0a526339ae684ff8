//! I/O helpers and collaborators around the pure core.

pub mod collaborator;
pub mod config;
pub mod record_store;
