//! Stable exit codes for the demo CLI.

/// Target was built and printed.
pub const OK: i32 = 0;
/// Invalid config or any other error.
pub const INVALID: i32 = 1;
/// The builder could not instantiate its target.
pub const NO_VALUE: i32 = 2;
