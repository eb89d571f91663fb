//! The two operator namespaces
//!
//! [`DateOperators`] and [`DateTimeOperators`] are the surface a rule
//! engine binds field comparisons to: six named predicates each, every
//! one total over [`DateInput`]. Both delegate to the registered operator
//! implementations and differ only in granularity and in the spelling of
//! the not-equal predicate (`ne` for dates, `nq` for datetimes).

use crate::model::DateInput;
use crate::parser::{ChronoBackend, TemporalBackend};
use crate::registry::operator::TemporalOperator;
use crate::registry::operators::{
    DateEqual, DateGreaterOrEqual, DateGreaterThan, DateLessOrEqual, DateLessThan, DateNotEqual,
    DateTimeEqual, DateTimeGreaterOrEqual, DateTimeGreaterThan, DateTimeLessOrEqual,
    DateTimeLessThan, DateTimeNotEqual,
};

/// Day-granularity comparison namespace
#[derive(Debug, Clone, Default)]
pub struct DateOperators<B = ChronoBackend> {
    backend: B,
}

impl DateOperators<ChronoBackend> {
    /// Operators over the default chrono backend
    pub fn new() -> Self {
        Self::default()
    }
}

impl<B: TemporalBackend> DateOperators<B> {
    /// Operators over a caller-supplied backend
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    /// True if both values fall on the same calendar day
    pub fn eq(&self, d1: &DateInput, d2: &DateInput) -> bool {
        DateEqual.evaluate(&self.backend, d1, d2)
    }

    /// True if the values fall on different calendar days
    pub fn ne(&self, d1: &DateInput, d2: &DateInput) -> bool {
        DateNotEqual.evaluate(&self.backend, d1, d2)
    }

    /// True if `d1` is at least one whole day after `d2`
    pub fn gt(&self, d1: &DateInput, d2: &DateInput) -> bool {
        DateGreaterThan.evaluate(&self.backend, d1, d2)
    }

    /// True if `d1` is at least one whole day before `d2`
    pub fn lt(&self, d1: &DateInput, d2: &DateInput) -> bool {
        DateLessThan.evaluate(&self.backend, d1, d2)
    }

    /// True if `d1` is the same day as, or after, `d2`
    pub fn gte(&self, d1: &DateInput, d2: &DateInput) -> bool {
        DateGreaterOrEqual.evaluate(&self.backend, d1, d2)
    }

    /// True if `d1` is the same day as, or before, `d2`
    pub fn lte(&self, d1: &DateInput, d2: &DateInput) -> bool {
        DateLessOrEqual.evaluate(&self.backend, d1, d2)
    }
}

/// Minute-granularity comparison namespace
#[derive(Debug, Clone, Default)]
pub struct DateTimeOperators<B = ChronoBackend> {
    backend: B,
}

impl DateTimeOperators<ChronoBackend> {
    /// Operators over the default chrono backend
    pub fn new() -> Self {
        Self::default()
    }
}

impl<B: TemporalBackend> DateTimeOperators<B> {
    /// Operators over a caller-supplied backend
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    /// True if both values fall within the same calendar minute
    pub fn eq(&self, d1: &DateInput, d2: &DateInput) -> bool {
        DateTimeEqual.evaluate(&self.backend, d1, d2)
    }

    /// True if the values fall in different calendar minutes
    pub fn nq(&self, d1: &DateInput, d2: &DateInput) -> bool {
        DateTimeNotEqual.evaluate(&self.backend, d1, d2)
    }

    /// True if `d1` is strictly chronologically after `d2`
    pub fn gt(&self, d1: &DateInput, d2: &DateInput) -> bool {
        DateTimeGreaterThan.evaluate(&self.backend, d1, d2)
    }

    /// True if `d1` is strictly chronologically before `d2`
    pub fn lt(&self, d1: &DateInput, d2: &DateInput) -> bool {
        DateTimeLessThan.evaluate(&self.backend, d1, d2)
    }

    /// True if `d1` is in the same minute as, or after, `d2`
    pub fn gte(&self, d1: &DateInput, d2: &DateInput) -> bool {
        DateTimeGreaterOrEqual.evaluate(&self.backend, d1, d2)
    }

    /// True if `d1` is in the same minute as, or before, `d2`
    pub fn lte(&self, d1: &DateInput, d2: &DateInput) -> bool {
        DateTimeLessOrEqual.evaluate(&self.backend, d1, d2)
    }
}
