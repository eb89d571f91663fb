//! Temporal parsing backend
//!
//! Operators never interpret raw values themselves: parsing and calendar
//! arithmetic are delegated to a [`TemporalBackend`], injected so the
//! operator core stays a pure function of already-classified inputs. The
//! default backend is chrono-based; tests can substitute a stub.

#![warn(missing_docs)]

pub mod chrono_backend;

pub use chrono_backend::ChronoBackend;

use chrono::{DateTime, FixedOffset, Offset, Utc};

use crate::model::RawTemporal;

/// Parsing and calendar-comparison capability required by the operators.
///
/// `resolve` is the only required method. A value the backend cannot
/// interpret resolves to `None`; every provided comparison treats `None`
/// as "not same, not after" so an unparseable value never compares equal
/// to (or after) anything and never causes a panic.
pub trait TemporalBackend {
    /// Interpret a raw value as an instant, or `None` if unparseable
    fn resolve(&self, raw: &RawTemporal) -> Option<DateTime<Utc>>;

    /// The offset in which calendar-day boundaries are drawn
    fn comparison_offset(&self) -> FixedOffset {
        Utc.fix()
    }

    /// Whether two values fall on the same calendar day
    fn same_day(&self, a: &RawTemporal, b: &RawTemporal) -> bool {
        match (self.resolve(a), self.resolve(b)) {
            (Some(a), Some(b)) => {
                let offset = self.comparison_offset();
                a.with_timezone(&offset).date_naive() == b.with_timezone(&offset).date_naive()
            }
            _ => false,
        }
    }

    /// Whether two values fall within the same calendar minute
    fn same_minute(&self, a: &RawTemporal, b: &RawTemporal) -> bool {
        match (self.resolve(a), self.resolve(b)) {
            // Offsets are whole minutes, so minute buckets line up across
            // zones and epoch-minute equality is exact.
            (Some(a), Some(b)) => a.timestamp().div_euclid(60) == b.timestamp().div_euclid(60),
            _ => false,
        }
    }

    /// Whether `a` is strictly chronologically after `b`
    fn is_after(&self, a: &RawTemporal, b: &RawTemporal) -> bool {
        match (self.resolve(a), self.resolve(b)) {
            (Some(a), Some(b)) => a > b,
            _ => false,
        }
    }

    /// Whole calendar days from `b` to `a` (`a - b`), or `None` if either
    /// side is unparseable
    fn days_between(&self, a: &RawTemporal, b: &RawTemporal) -> Option<i64> {
        let offset = self.comparison_offset();
        let a = self.resolve(a)?.with_timezone(&offset).date_naive();
        let b = self.resolve(b)?.with_timezone(&offset).date_naive();
        Some((a - b).num_days())
    }
}
