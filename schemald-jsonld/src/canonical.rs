//! Canonicalization strategies for scalar alternatives.
//!
//! A strategy converts one scalar type to and from its wire text. Each
//! property carries a [`Canonicalization`] bundle; most use
//! [`Canonicalization::ISO8601`], and entity tables may override it per
//! property.

use crate::duration;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, SecondsFormat, TimeDelta, Utc};
use std::fmt;

/// Rule converting a scalar to and from its wire string form.
pub trait Canonicalize<T>: Send + Sync {
    /// Format name reported in `MalformedScalarFormat` errors.
    fn format(&self) -> &'static str;

    /// Writes the canonical text for `value`.
    fn to_text(&self, value: &T) -> String;

    /// Parses wire text, returning `None` if it is not in this format.
    fn from_text(&self, text: &str) -> Option<T>;
}

/// RFC 3339 timestamps. Offset-less timestamps and bare dates are also
/// read, as UTC. The offset is kept as written; a zero offset is
/// written as `Z`, and fractional seconds only appear when present.
#[derive(Debug, Clone, Copy, Default)]
pub struct Iso8601DateTime;

impl Canonicalize<DateTime<FixedOffset>> for Iso8601DateTime {
    fn format(&self) -> &'static str {
        "ISO 8601 date-time"
    }

    fn to_text(&self, value: &DateTime<FixedOffset>) -> String {
        value.to_rfc3339_opts(SecondsFormat::AutoSi, true)
    }

    fn from_text(&self, text: &str) -> Option<DateTime<FixedOffset>> {
        parse_date_time(text)
    }
}

/// Local timestamp forms accepted after RFC 3339, most precise first.
const LOCAL_DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Reads RFC 3339 first, then offset-less timestamps and bare dates
/// (midnight). A missing offset is read as UTC.
fn parse_date_time(text: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(value) = DateTime::parse_from_rfc3339(text) {
        return Some(value);
    }
    let local = LOCAL_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })?;
    let utc = FixedOffset::east_opt(0)?;
    Some(local.and_utc().with_timezone(&utc))
}

/// RFC 3339 timestamps normalized to UTC when written.
#[derive(Debug, Clone, Copy, Default)]
pub struct UtcDateTime;

impl Canonicalize<DateTime<FixedOffset>> for UtcDateTime {
    fn format(&self) -> &'static str {
        "ISO 8601 date-time"
    }

    fn to_text(&self, value: &DateTime<FixedOffset>) -> String {
        value
            .with_timezone(&Utc)
            .to_rfc3339_opts(SecondsFormat::AutoSi, true)
    }

    fn from_text(&self, text: &str) -> Option<DateTime<FixedOffset>> {
        parse_date_time(text)
    }
}

/// Calendar dates as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Iso8601Date;

impl Canonicalize<NaiveDate> for Iso8601Date {
    fn format(&self) -> &'static str {
        "ISO 8601 date"
    }

    fn to_text(&self, value: &NaiveDate) -> String {
        value.format("%Y-%m-%d").to_string()
    }

    fn from_text(&self, text: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
    }
}

/// ISO 8601 durations with whole days folded into `D` (`P1DT2H`).
#[derive(Debug, Clone, Copy, Default)]
pub struct Iso8601Duration;

impl Canonicalize<TimeDelta> for Iso8601Duration {
    fn format(&self) -> &'static str {
        "ISO 8601 duration"
    }

    fn to_text(&self, value: &TimeDelta) -> String {
        duration::format(value, true)
    }

    fn from_text(&self, text: &str) -> Option<TimeDelta> {
        duration::parse(text)
    }
}

/// ISO 8601 durations written on a clock: hours are never folded into
/// days (`PT26H`). Reads the same inputs as [`Iso8601Duration`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ClockDuration;

impl Canonicalize<TimeDelta> for ClockDuration {
    fn format(&self) -> &'static str {
        "ISO 8601 duration"
    }

    fn to_text(&self, value: &TimeDelta) -> String {
        duration::format(value, false)
    }

    fn from_text(&self, text: &str) -> Option<TimeDelta> {
        duration::parse(text)
    }
}

/// One strategy per canonicalized scalar kind, selected per property.
#[derive(Clone, Copy)]
pub struct Canonicalization {
    pub date_time: &'static dyn Canonicalize<DateTime<FixedOffset>>,
    pub date: &'static dyn Canonicalize<NaiveDate>,
    pub duration: &'static dyn Canonicalize<TimeDelta>,
}

impl Canonicalization {
    /// Default ISO 8601 forms for every scalar kind.
    pub const ISO8601: Self = Self {
        date_time: &Iso8601DateTime,
        date: &Iso8601Date,
        duration: &Iso8601Duration,
    };

    /// Like [`Canonicalization::ISO8601`], with timestamps written in UTC.
    pub const UTC: Self = Self {
        date_time: &UtcDateTime,
        ..Self::ISO8601
    };

    /// Like [`Canonicalization::ISO8601`], with durations never folded into days.
    pub const CLOCK: Self = Self {
        duration: &ClockDuration,
        ..Self::ISO8601
    };
}

impl Default for Canonicalization {
    fn default() -> Self {
        Self::ISO8601
    }
}

impl fmt::Debug for Canonicalization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Canonicalization")
            .field("date_time", &self.date_time.format())
            .field("date", &self.date.format())
            .field("duration", &self.duration.format())
            .finish()
    }
}
