//! Stable exit codes for the quiz CLI.

/// Quiz ran to the end, whether completed or timed out.
pub const OK: i32 = 0;
/// The problems file could not be opened or read.
pub const LOAD_FAILED: i32 = 1;
/// The problems file is not valid CSV or has a row with fewer than two fields.
pub const PARSE_FAILED: i32 = 2;
/// Configuration file or flags hold unusable values.
pub const INVALID_CONFIG: i32 = 3;
