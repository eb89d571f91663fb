//! Null-aware temporal comparison operators
//!
//! A building block for rule and filter engines that dispatch relational
//! predicates by field type: two sibling operator sets over date-like
//! field values that may be absent. [`DateOperators`] compares at calendar
//! day granularity, [`DateTimeOperators`] at calendar minute granularity;
//! both resolve every input pair to a boolean, never panic, and share one
//! null-handling policy (two absent values are never equal).
//!
//! Parsing is delegated to an injected [`TemporalBackend`]; the default
//! [`ChronoBackend`] accepts the usual textual shapes, epoch milliseconds,
//! and native chrono instants.
//!
//! ```
//! use temporal_operators::{DateInput, DateOperators};
//!
//! let ops = DateOperators::new();
//! let d1 = DateInput::from("2019-06-24T23:59:00Z");
//! let d2 = DateInput::from("2019-06-24T00:00:01Z");
//!
//! assert!(ops.eq(&d1, &d2)); // same calendar day
//! assert!(!ops.eq(&d1, &DateInput::Absent));
//! assert!(!ops.eq(&DateInput::Absent, &DateInput::Absent));
//! ```

#![warn(missing_docs)]

pub mod model;
pub mod operators;
pub mod parser;
pub mod registry;

pub use model::{DateInput, RawTemporal, ValueType};
pub use operators::{DateOperators, DateTimeOperators};
pub use parser::{ChronoBackend, TemporalBackend};
pub use registry::{
    Granularity, OperatorError, OperatorRegistry, OperatorResult, OperatorSignature,
    TemporalOperator, create_standard_registry,
};
pub use registry::operators::NULL_EQUALS_NULL;
