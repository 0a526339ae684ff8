//! Stable exit codes for roster CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Invalid input, unreadable config/records, or a collaborator failure.
pub const INVALID: i32 = 1;
/// Confirmation was not given; nothing was dispatched.
pub const DECLINED: i32 = 2;
/// Status change refused: the user is Terminated or already has that status.
pub const TERMINAL: i32 = 3;
