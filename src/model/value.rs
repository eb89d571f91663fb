//! Core value types for temporal predicates

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A raw temporal value in one of the shapes the backend parser accepts.
///
/// Field values arrive from record sources in whatever shape the source
/// produces: a formatted string, a unix timestamp in milliseconds, or an
/// already-constructed instant. Classification into these shapes happens at
/// the boundary; operators never inspect the raw payload themselves and
/// hand it to a [`TemporalBackend`](crate::parser::TemporalBackend).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum RawTemporal {
    /// A textual date or datetime representation
    Text(String),
    /// Unix epoch milliseconds
    Millis(i64),
    /// A native instant with explicit offset
    Instant(DateTime<FixedOffset>),
}

/// An operator input: either an absent field value or a raw temporal value.
///
/// `Absent` covers both "explicitly no value" and "never provided" — the
/// two are indistinguishable for comparison purposes. Everything else is a
/// [`RawTemporal`] whose interpretation is delegated to the parsing
/// backend; an unparseable payload is still a valid `DateInput`, it just
/// never compares equal to (or after) anything.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DateInput {
    /// No value present for the field
    Absent,
    /// A raw value to be interpreted by the parsing backend
    Value(RawTemporal),
}

impl DateInput {
    /// Check whether this input carries no value
    pub fn is_absent(&self) -> bool {
        matches!(self, DateInput::Absent)
    }

    /// Get the raw value, if present
    pub fn as_raw(&self) -> Option<&RawTemporal> {
        match self {
            DateInput::Absent => None,
            DateInput::Value(raw) => Some(raw),
        }
    }
}

impl From<RawTemporal> for DateInput {
    fn from(raw: RawTemporal) -> Self {
        DateInput::Value(raw)
    }
}

impl From<&str> for DateInput {
    fn from(s: &str) -> Self {
        DateInput::Value(RawTemporal::Text(s.to_string()))
    }
}

impl From<String> for DateInput {
    fn from(s: String) -> Self {
        DateInput::Value(RawTemporal::Text(s))
    }
}

impl From<i64> for DateInput {
    fn from(millis: i64) -> Self {
        DateInput::Value(RawTemporal::Millis(millis))
    }
}

impl From<DateTime<FixedOffset>> for DateInput {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        DateInput::Value(RawTemporal::Instant(dt))
    }
}

impl From<DateTime<Utc>> for DateInput {
    fn from(dt: DateTime<Utc>) -> Self {
        DateInput::Value(RawTemporal::Instant(dt.fixed_offset()))
    }
}

impl From<NaiveDate> for DateInput {
    fn from(date: NaiveDate) -> Self {
        DateInput::Value(RawTemporal::Text(date.format("%Y-%m-%d").to_string()))
    }
}

impl<T> From<Option<T>> for DateInput
where
    T: Into<DateInput>,
{
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => DateInput::Absent,
        }
    }
}

impl fmt::Display for RawTemporal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s}"),
            Self::Millis(ms) => write!(f, "{ms}"),
            Self::Instant(dt) => write!(f, "{}", dt.to_rfc3339()),
        }
    }
}

impl fmt::Display for DateInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => write!(f, "<absent>"),
            Self::Value(raw) => write!(f, "{raw}"),
        }
    }
}
