//! Default chrono-based parsing backend

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc};
use log::debug;

use super::TemporalBackend;
use crate::model::RawTemporal;

/// Textual datetime formats without an explicit offset
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%m/%d/%Y, %I:%M:%S %p",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %H:%M:%S",
];

/// Textual date-only formats
const NAIVE_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// JavaScript `Date#toString` shape, after the trailing zone name is
/// stripped: `Mon Jun 24 2019 00:24:09 GMT-0700`
const JS_DATE_STRING_FORMAT: &str = "%a %b %d %Y %H:%M:%S GMT%z";

/// Chrono-based implementation of [`TemporalBackend`].
///
/// Accepts RFC 3339 and RFC 2822 strings, ISO and US-style dates and
/// datetimes, JavaScript `Date#toString` output, epoch milliseconds, and
/// native instants. Strings that carry no offset are interpreted in the
/// backend's assumed offset (UTC unless configured otherwise), which also
/// defines where calendar-day boundaries fall.
#[derive(Debug, Clone)]
pub struct ChronoBackend {
    assumed_offset: FixedOffset,
}

impl ChronoBackend {
    /// Backend that interprets offset-less strings as UTC
    pub fn new() -> Self {
        Self {
            assumed_offset: Utc.fix(),
        }
    }

    /// Backend that interprets offset-less strings in the given offset
    pub fn with_assumed_offset(offset: FixedOffset) -> Self {
        Self {
            assumed_offset: offset,
        }
    }

    fn parse_text(&self, text: &str) -> Option<DateTime<Utc>> {
        let text = text.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
            return Some(dt.with_timezone(&Utc));
        }
        if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
            return Some(dt.with_timezone(&Utc));
        }

        // `Mon Jun 24 2019 00:24:09 GMT-0700 (Pacific Daylight Time)` —
        // the parenthesized zone name is decorative, the offset is not.
        let stripped = match text.find(" (") {
            Some(idx) => &text[..idx],
            None => text,
        };
        if let Ok(dt) = DateTime::parse_from_str(stripped, JS_DATE_STRING_FORMAT) {
            return Some(dt.with_timezone(&Utc));
        }

        for format in NAIVE_DATETIME_FORMATS {
            if let Ok(ndt) = NaiveDateTime::parse_from_str(text, format) {
                return self.localize(ndt);
            }
        }
        for format in NAIVE_DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(text, format) {
                return self.localize(date.and_hms_opt(0, 0, 0)?);
            }
        }

        debug!("unparseable temporal value: {text:?}");
        None
    }

    fn localize(&self, ndt: NaiveDateTime) -> Option<DateTime<Utc>> {
        self.assumed_offset
            .from_local_datetime(&ndt)
            .single()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

impl Default for ChronoBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl TemporalBackend for ChronoBackend {
    fn resolve(&self, raw: &RawTemporal) -> Option<DateTime<Utc>> {
        match raw {
            RawTemporal::Text(s) => self.parse_text(s),
            RawTemporal::Millis(ms) => Utc.timestamp_millis_opt(*ms).single(),
            RawTemporal::Instant(dt) => Some(dt.with_timezone(&Utc)),
        }
    }

    fn comparison_offset(&self) -> FixedOffset {
        self.assumed_offset
    }
}
