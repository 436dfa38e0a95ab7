// crates/domain/src/timestamp.rs
use std::fmt;

use chrono::{Months, NaiveDate, NaiveDateTime, TimeDelta};
use latest_migration_shared_kernel::{DomainError, DomainResult};

/// Width of the `YYYYMMDDHHMMSS` prefix on a migration folder name.
pub const TIMESTAMP_WIDTH: usize = 14;

/// Wall-clock instant encoded in a migration folder name.
///
/// Out-of-range components roll over into the next unit, so `20251301000000`
/// is 2026-01-01 and `20250230000000` is 2025-03-02. Years `0000`-`0099`
/// count from 1900.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MigrationTimestamp(NaiveDateTime);

impl MigrationTimestamp {
    /// Parse exactly 14 ASCII digits as `YYYYMMDDHHMMSS`.
    ///
    /// # Errors
    /// Returns `DomainError::InvalidTimestamp` when the width is wrong or a
    /// character is not a digit.
    pub fn parse(value: &str) -> DomainResult<Self> {
        let invalid = |reason: &str| DomainError::InvalidTimestamp {
            value: value.to_string(),
            reason: reason.to_string(),
        };

        if value.len() != TIMESTAMP_WIDTH {
            return Err(invalid("expected exactly 14 digits"));
        }
        if !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("expected only ASCII digits"));
        }

        // All ASCII digits, so every slice boundary is a char boundary.
        let field = |range: std::ops::Range<usize>| -> i64 {
            value[range]
                .bytes()
                .fold(0, |acc, b| acc * 10 + i64::from(b - b'0'))
        };
        let year = match field(0..4) {
            short @ 0..=99 => short + 1900,
            year => year,
        };
        let offset = TimeDelta::days(field(6..8) - 1)
            + TimeDelta::hours(field(8..10))
            + TimeDelta::minutes(field(10..12))
            + TimeDelta::seconds(field(12..14));

        i32::try_from(year)
            .ok()
            .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1))
            .and_then(|jan1| shift_months(jan1, field(4..6) - 1))
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .and_then(|start| start.checked_add_signed(offset))
            .map(Self)
            .ok_or_else(|| invalid("date-time out of range"))
    }

    /// Milliseconds since the Unix epoch, reading the wall clock as UTC.
    pub fn timestamp_millis(&self) -> i64 {
        self.0.and_utc().timestamp_millis()
    }
}

fn shift_months(date: NaiveDate, months: i64) -> Option<NaiveDate> {
    let delta = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months < 0 {
        date.checked_sub_months(delta)
    } else {
        date.checked_add_months(delta)
    }
}

impl fmt::Display for MigrationTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y%m%d%H%M%S"))
    }
}

/// Split a folder name on its first underscore.
///
/// Returns `None` when the name has no underscore at all.
pub fn split_prefix(name: &str) -> Option<(&str, &str)> {
    name.split_once('_')
}
