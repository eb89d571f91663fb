//! Minute-granularity comparison operators
//!
//! Same shape and null-handling policy as the day-granularity set, with
//! two deliberate differences: equality buckets values by calendar minute
//! instead of calendar day, and greater-than is strict chronological order
//! (any sub-minute difference counts, not a whole-unit difference).

use std::sync::LazyLock;

use super::{NULL_EQUALS_NULL, both_absent, exactly_one_absent};
use crate::model::{DateInput, ValueType};
use crate::parser::TemporalBackend;
use crate::registry::operator::{Granularity, OperatorRegistry, TemporalOperator};
use crate::registry::signature::OperatorSignature;

fn datetime_signature(symbol: &str) -> Vec<OperatorSignature> {
    vec![OperatorSignature::binary(
        symbol,
        ValueType::DateTime,
        ValueType::DateTime,
        ValueType::Boolean,
    )]
}

/// Equality operator (eq): within the same calendar minute
pub struct DateTimeEqual;

impl TemporalOperator for DateTimeEqual {
    fn symbol(&self) -> &str {
        "eq"
    }
    fn human_friendly_name(&self) -> &str {
        "Equal"
    }
    fn granularity(&self) -> Granularity {
        Granularity::Minute
    }
    fn signatures(&self) -> &[OperatorSignature] {
        static SIGS: LazyLock<Vec<OperatorSignature>> = LazyLock::new(|| datetime_signature("eq"));
        &SIGS
    }

    fn evaluate(
        &self,
        backend: &dyn TemporalBackend,
        left: &DateInput,
        right: &DateInput,
    ) -> bool {
        if both_absent(left, right) {
            return NULL_EQUALS_NULL;
        }
        if exactly_one_absent(left, right) {
            return false;
        }
        let (Some(l), Some(r)) = (left.as_raw(), right.as_raw()) else {
            return false;
        };
        backend.same_minute(l, r)
    }
}

/// Inequality operator (nq): not within the same calendar minute
///
/// The datetime set spells its not-equal `nq`; rule definitions that
/// target datetime fields use that symbol.
pub struct DateTimeNotEqual;

impl TemporalOperator for DateTimeNotEqual {
    fn symbol(&self) -> &str {
        "nq"
    }
    fn human_friendly_name(&self) -> &str {
        "Not Equal"
    }
    fn granularity(&self) -> Granularity {
        Granularity::Minute
    }
    fn signatures(&self) -> &[OperatorSignature] {
        static SIGS: LazyLock<Vec<OperatorSignature>> = LazyLock::new(|| datetime_signature("nq"));
        &SIGS
    }

    fn evaluate(
        &self,
        backend: &dyn TemporalBackend,
        left: &DateInput,
        right: &DateInput,
    ) -> bool {
        if both_absent(left, right) {
            return !NULL_EQUALS_NULL;
        }
        if exactly_one_absent(left, right) {
            return true;
        }
        let (Some(l), Some(r)) = (left.as_raw(), right.as_raw()) else {
            return true;
        };
        !backend.same_minute(l, r)
    }
}

/// Greater-than operator (gt): strictly chronologically after
pub struct DateTimeGreaterThan;

impl TemporalOperator for DateTimeGreaterThan {
    fn symbol(&self) -> &str {
        "gt"
    }
    fn human_friendly_name(&self) -> &str {
        "Greater Than"
    }
    fn granularity(&self) -> Granularity {
        Granularity::Minute
    }
    fn signatures(&self) -> &[OperatorSignature] {
        static SIGS: LazyLock<Vec<OperatorSignature>> = LazyLock::new(|| datetime_signature("gt"));
        &SIGS
    }

    fn evaluate(
        &self,
        backend: &dyn TemporalBackend,
        left: &DateInput,
        right: &DateInput,
    ) -> bool {
        let Some(l) = left.as_raw() else {
            return false;
        };
        let Some(r) = right.as_raw() else {
            return true;
        };
        backend.is_after(l, r)
    }
}

/// Less-than operator (lt): greater-than with the operands swapped
pub struct DateTimeLessThan;

impl TemporalOperator for DateTimeLessThan {
    fn symbol(&self) -> &str {
        "lt"
    }
    fn human_friendly_name(&self) -> &str {
        "Less Than"
    }
    fn granularity(&self) -> Granularity {
        Granularity::Minute
    }
    fn signatures(&self) -> &[OperatorSignature] {
        static SIGS: LazyLock<Vec<OperatorSignature>> = LazyLock::new(|| datetime_signature("lt"));
        &SIGS
    }

    fn evaluate(
        &self,
        backend: &dyn TemporalBackend,
        left: &DateInput,
        right: &DateInput,
    ) -> bool {
        DateTimeGreaterThan.evaluate(backend, right, left)
    }
}

/// Greater-or-equal operator (gte): same minute, or strictly after
pub struct DateTimeGreaterOrEqual;

impl TemporalOperator for DateTimeGreaterOrEqual {
    fn symbol(&self) -> &str {
        "gte"
    }
    fn human_friendly_name(&self) -> &str {
        "Greater Or Equal"
    }
    fn granularity(&self) -> Granularity {
        Granularity::Minute
    }
    fn signatures(&self) -> &[OperatorSignature] {
        static SIGS: LazyLock<Vec<OperatorSignature>> = LazyLock::new(|| datetime_signature("gte"));
        &SIGS
    }

    fn evaluate(
        &self,
        backend: &dyn TemporalBackend,
        left: &DateInput,
        right: &DateInput,
    ) -> bool {
        DateTimeEqual.evaluate(backend, left, right)
            || DateTimeGreaterThan.evaluate(backend, left, right)
    }
}

/// Less-or-equal operator (lte): same minute, or strictly before
pub struct DateTimeLessOrEqual;

impl TemporalOperator for DateTimeLessOrEqual {
    fn symbol(&self) -> &str {
        "lte"
    }
    fn human_friendly_name(&self) -> &str {
        "Less Or Equal"
    }
    fn granularity(&self) -> Granularity {
        Granularity::Minute
    }
    fn signatures(&self) -> &[OperatorSignature] {
        static SIGS: LazyLock<Vec<OperatorSignature>> = LazyLock::new(|| datetime_signature("lte"));
        &SIGS
    }

    fn evaluate(
        &self,
        backend: &dyn TemporalBackend,
        left: &DateInput,
        right: &DateInput,
    ) -> bool {
        DateTimeEqual.evaluate(backend, left, right)
            || DateTimeLessThan.evaluate(backend, left, right)
    }
}

/// Register all minute-granularity operators
pub fn register_datetime_operators(registry: &mut OperatorRegistry) {
    registry.register(DateTimeEqual);
    registry.register(DateTimeNotEqual);
    registry.register(DateTimeGreaterThan);
    registry.register(DateTimeLessThan);
    registry.register(DateTimeGreaterOrEqual);
    registry.register(DateTimeLessOrEqual);
}
