//! Process exit codes.

pub const SUCCESS: i32 = 0;

/// Bad arguments, bad configuration, or a failed command.
pub const ERROR: i32 = 2;

/// The player left mid-match.
pub const INTERRUPTED: i32 = 130;
