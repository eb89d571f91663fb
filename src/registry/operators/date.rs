//! Day-granularity comparison operators

use std::sync::LazyLock;

use super::{NULL_EQUALS_NULL, both_absent, exactly_one_absent};
use crate::model::{DateInput, ValueType};
use crate::parser::TemporalBackend;
use crate::registry::operator::{Granularity, OperatorRegistry, TemporalOperator};
use crate::registry::signature::OperatorSignature;

fn date_signature(symbol: &str) -> Vec<OperatorSignature> {
    vec![OperatorSignature::binary(
        symbol,
        ValueType::Date,
        ValueType::Date,
        ValueType::Boolean,
    )]
}

/// Equality operator (eq): same calendar day
pub struct DateEqual;

impl TemporalOperator for DateEqual {
    fn symbol(&self) -> &str {
        "eq"
    }
    fn human_friendly_name(&self) -> &str {
        "Equal"
    }
    fn granularity(&self) -> Granularity {
        Granularity::Day
    }
    fn signatures(&self) -> &[OperatorSignature] {
        static SIGS: LazyLock<Vec<OperatorSignature>> = LazyLock::new(|| date_signature("eq"));
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
        backend.same_day(l, r)
    }
}

/// Inequality operator (ne): not the same calendar day
///
/// Independent of [`DateEqual`], but its observable complement for every
/// pair that is not both-absent; the both-absent case inverts the
/// [`NULL_EQUALS_NULL`] policy instead.
pub struct DateNotEqual;

impl TemporalOperator for DateNotEqual {
    fn symbol(&self) -> &str {
        "ne"
    }
    fn human_friendly_name(&self) -> &str {
        "Not Equal"
    }
    fn granularity(&self) -> Granularity {
        Granularity::Day
    }
    fn signatures(&self) -> &[OperatorSignature] {
        static SIGS: LazyLock<Vec<OperatorSignature>> = LazyLock::new(|| date_signature("ne"));
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
        !backend.same_day(l, r)
    }
}

/// Greater-than operator (gt): strictly after by at least one whole day
///
/// An absent left operand is never after anything. A present left operand
/// compared against an absent right one is after it: a value always
/// outranks no value.
pub struct DateGreaterThan;

impl TemporalOperator for DateGreaterThan {
    fn symbol(&self) -> &str {
        "gt"
    }
    fn human_friendly_name(&self) -> &str {
        "Greater Than"
    }
    fn granularity(&self) -> Granularity {
        Granularity::Day
    }
    fn signatures(&self) -> &[OperatorSignature] {
        static SIGS: LazyLock<Vec<OperatorSignature>> = LazyLock::new(|| date_signature("gt"));
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
        backend.days_between(l, r).is_some_and(|days| days > 0)
    }
}

/// Less-than operator (lt): greater-than with the operands swapped
pub struct DateLessThan;

impl TemporalOperator for DateLessThan {
    fn symbol(&self) -> &str {
        "lt"
    }
    fn human_friendly_name(&self) -> &str {
        "Less Than"
    }
    fn granularity(&self) -> Granularity {
        Granularity::Day
    }
    fn signatures(&self) -> &[OperatorSignature] {
        static SIGS: LazyLock<Vec<OperatorSignature>> = LazyLock::new(|| date_signature("lt"));
        &SIGS
    }

    fn evaluate(
        &self,
        backend: &dyn TemporalBackend,
        left: &DateInput,
        right: &DateInput,
    ) -> bool {
        DateGreaterThan.evaluate(backend, right, left)
    }
}

/// Greater-or-equal operator (gte): same day, or after by a whole day
pub struct DateGreaterOrEqual;

impl TemporalOperator for DateGreaterOrEqual {
    fn symbol(&self) -> &str {
        "gte"
    }
    fn human_friendly_name(&self) -> &str {
        "Greater Or Equal"
    }
    fn granularity(&self) -> Granularity {
        Granularity::Day
    }
    fn signatures(&self) -> &[OperatorSignature] {
        static SIGS: LazyLock<Vec<OperatorSignature>> = LazyLock::new(|| date_signature("gte"));
        &SIGS
    }

    fn evaluate(
        &self,
        backend: &dyn TemporalBackend,
        left: &DateInput,
        right: &DateInput,
    ) -> bool {
        DateEqual.evaluate(backend, left, right) || DateGreaterThan.evaluate(backend, left, right)
    }
}

/// Less-or-equal operator (lte): same day, or before by a whole day
pub struct DateLessOrEqual;

impl TemporalOperator for DateLessOrEqual {
    fn symbol(&self) -> &str {
        "lte"
    }
    fn human_friendly_name(&self) -> &str {
        "Less Or Equal"
    }
    fn granularity(&self) -> Granularity {
        Granularity::Day
    }
    fn signatures(&self) -> &[OperatorSignature] {
        static SIGS: LazyLock<Vec<OperatorSignature>> = LazyLock::new(|| date_signature("lte"));
        &SIGS
    }

    fn evaluate(
        &self,
        backend: &dyn TemporalBackend,
        left: &DateInput,
        right: &DateInput,
    ) -> bool {
        DateEqual.evaluate(backend, left, right) || DateLessThan.evaluate(backend, left, right)
    }
}

/// Register all day-granularity operators
pub fn register_date_operators(registry: &mut OperatorRegistry) {
    registry.register(DateEqual);
    registry.register(DateNotEqual);
    registry.register(DateGreaterThan);
    registry.register(DateLessThan);
    registry.register(DateGreaterOrEqual);
    registry.register(DateLessOrEqual);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ChronoBackend;

    fn input(s: &str) -> DateInput {
        DateInput::from(s)
    }

    #[test]
    fn eq_both_absent_follows_policy() {
        let backend = ChronoBackend::new();
        assert!(!DateEqual.evaluate(&backend, &DateInput::Absent, &DateInput::Absent));
    }

    #[test]
    fn eq_one_absent_is_false() {
        let backend = ChronoBackend::new();
        assert!(!DateEqual.evaluate(&backend, &input("2019-06-24"), &DateInput::Absent));
        assert!(!DateEqual.evaluate(&backend, &DateInput::Absent, &input("2019-06-24")));
    }

    #[test]
    fn eq_ignores_time_of_day() {
        let backend = ChronoBackend::new();
        assert!(DateEqual.evaluate(
            &backend,
            &input("2019-06-24T23:59:00Z"),
            &input("2019-06-24T00:00:01Z"),
        ));
        assert!(!DateEqual.evaluate(
            &backend,
            &input("2019-06-24T23:59:00Z"),
            &input("2019-06-25T00:00:01Z"),
        ));
    }

    #[test]
    fn ne_inverts_policy_when_both_absent() {
        let backend = ChronoBackend::new();
        assert!(DateNotEqual.evaluate(&backend, &DateInput::Absent, &DateInput::Absent));
        assert!(DateNotEqual.evaluate(&backend, &input("2019-06-24"), &DateInput::Absent));
        assert!(!DateNotEqual.evaluate(&backend, &input("2019-06-24"), &input("2019-06-24")));
    }

    #[test]
    fn gt_requires_full_day_difference() {
        let backend = ChronoBackend::new();
        assert!(DateGreaterThan.evaluate(&backend, &input("2019-06-25"), &input("2019-06-24")));
        assert!(!DateGreaterThan.evaluate(&backend, &input("2019-06-24"), &input("2019-06-25")));
        assert!(!DateGreaterThan.evaluate(&backend, &input("2019-06-24"), &input("2019-06-24")));
        // later in the same day is not a whole day after
        assert!(!DateGreaterThan.evaluate(
            &backend,
            &input("2019-06-24T23:59:00Z"),
            &input("2019-06-24T00:00:01Z"),
        ));
    }

    #[test]
    fn gt_absent_left_is_false() {
        let backend = ChronoBackend::new();
        assert!(!DateGreaterThan.evaluate(&backend, &DateInput::Absent, &input("2019-06-24")));
        assert!(!DateGreaterThan.evaluate(&backend, &DateInput::Absent, &DateInput::Absent));
    }

    #[test]
    fn gt_present_left_outranks_absent_right() {
        let backend = ChronoBackend::new();
        assert!(DateGreaterThan.evaluate(&backend, &input("2019-06-24"), &DateInput::Absent));
    }

    #[test]
    fn lt_is_gt_with_operands_swapped() {
        let backend = ChronoBackend::new();
        assert!(DateLessThan.evaluate(&backend, &input("2019-06-24"), &input("2019-06-25")));
        assert!(!DateLessThan.evaluate(&backend, &input("2019-06-25"), &input("2019-06-24")));
        // absent left of the flipped gt
        assert!(!DateLessThan.evaluate(&backend, &input("2019-06-24"), &DateInput::Absent));
        assert!(DateLessThan.evaluate(&backend, &DateInput::Absent, &input("2019-06-24")));
    }

    #[test]
    fn gte_and_lte_compose_eq_with_ordering() {
        let backend = ChronoBackend::new();
        assert!(DateGreaterOrEqual.evaluate(&backend, &input("2019-06-24"), &input("2019-06-24")));
        assert!(DateGreaterOrEqual.evaluate(&backend, &input("2019-06-25"), &input("2019-06-24")));
        assert!(!DateGreaterOrEqual.evaluate(&backend, &input("2019-06-24"), &input("2019-06-25")));
        assert!(DateLessOrEqual.evaluate(&backend, &input("2019-06-24"), &input("2019-06-24")));
        assert!(DateLessOrEqual.evaluate(&backend, &input("2019-06-24"), &input("2019-06-25")));
        assert!(!DateLessOrEqual.evaluate(&backend, &input("2019-06-25"), &input("2019-06-24")));
    }

    #[test]
    fn unparseable_value_never_compares_equal_or_after() {
        let backend = ChronoBackend::new();
        assert!(!DateEqual.evaluate(&backend, &input("garbage"), &input("2019-06-24")));
        assert!(!DateGreaterThan.evaluate(&backend, &input("garbage"), &input("2019-06-24")));
        assert!(!DateGreaterThan.evaluate(&backend, &input("2019-06-24"), &input("garbage")));
        assert!(DateNotEqual.evaluate(&backend, &input("garbage"), &input("2019-06-24")));
    }
}
