//! Error code constants.
//!
//! Each code is the process exit status reported by the binary. `0` is
//! success, `1` is left to unexpected failures and `2` is shared with clap's
//! usage errors, which are also input problems.

/// Process exit status for one kind of failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorCode(u8);

impl ErrorCode {
    /// Empty or unparseable name.
    pub const INVALID_INPUT: Self = Self(2);

    /// Malformed, inverted or oversized numeric range.
    pub const INVALID_RANGE: Self = Self(3);

    /// Invalid configuration value.
    pub const INVALID_CONFIG: Self = Self(4);

    /// Email mode without domains.
    pub const MISSING_DOMAIN: Self = Self(5);

    /// Unreadable input or unwritable output.
    pub const IO_ERROR: Self = Self(6);

    /// Exit status for this code.
    #[must_use]
    pub const fn exit_status(self) -> u8 {
        self.0
    }
}
