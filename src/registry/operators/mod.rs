//! Built-in temporal comparison operators
//!
//! Two sibling operator sets of identical shape: day-granularity operators
//! in [`date`] and minute-granularity operators in [`datetime`]. Both
//! share one null-handling policy, applied before any value is handed to
//! the parsing backend.

pub mod date;
pub mod datetime;

pub use date::*;
pub use datetime::*;

use crate::model::DateInput;
use crate::registry::operator::OperatorRegistry;

/// Whether two absent values compare equal.
///
/// Fixed to `false`: an equality filter configured against a field must
/// not be satisfied by records that simply lack the field.
pub const NULL_EQUALS_NULL: bool = false;

/// Both inputs carry no value
pub(crate) fn both_absent(left: &DateInput, right: &DateInput) -> bool {
    left.is_absent() && right.is_absent()
}

/// Exactly one input carries no value
pub(crate) fn exactly_one_absent(left: &DateInput, right: &DateInput) -> bool {
    left.is_absent() != right.is_absent()
}

/// Register all built-in operators
pub fn register_builtin_operators(registry: &mut OperatorRegistry) {
    date::register_date_operators(registry);
    datetime::register_datetime_operators(registry);
}
