//! Numeric suffix range.

use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Largest number of values a suffix range may hold.
///
/// Every value multiplies the output of every template, so `0-9999` is the
/// widest range accepted.
pub const MAX_RANGE_SIZE: u64 = 10_000;

/// An inclusive range of numeric suffixes, written `start-end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberRange {
    /// First value in the range (inclusive).
    start: u32,
    /// Last value in the range (inclusive).
    end: u32,
}

impl NumberRange {
    /// Create a new range.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRange` if `start` is greater than `end` or the range
    /// holds more than [`MAX_RANGE_SIZE`] values.
    pub fn new(start: u32, end: u32) -> Result<Self, AppError> {
        if start > end {
            return Err(AppError::InvalidRange(format!(
                "start must not exceed end, got {start}-{end}"
            )));
        }
        let range = Self { start, end };
        if range.count() > MAX_RANGE_SIZE {
            return Err(AppError::InvalidRange(format!(
                "{start}-{end} holds {} values, at most {MAX_RANGE_SIZE} allowed",
                range.count()
            )));
        }
        Ok(range)
    }

    /// Number of values in this range.
    #[must_use]
    pub fn count(&self) -> u64 {
        u64::from(self.end - self.start) + 1
    }

    /// Iterate over values in the range.
    pub fn iter(&self) -> std::ops::RangeInclusive<u32> {
        self.start..=self.end
    }
}

impl IntoIterator for NumberRange {
    type Item = u32;
    type IntoIter = std::ops::RangeInclusive<u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromStr for NumberRange {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s.trim().split_once('-').ok_or_else(|| {
            AppError::InvalidRange(format!("expected <start>-<end>, got '{s}'"))
        })?;

        // Digits only: `u32::from_str` would also take a leading `+`.
        let parse = |part: &str| {
            let invalid = || AppError::InvalidRange(format!("invalid range bound '{part}' in '{s}'"));
            if !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            part.parse::<u32>().map_err(|_| invalid())
        };

        Self::new(parse(start)?, parse(end)?)
    }
}

impl fmt::Display for NumberRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
