//! Data model and value types for temporal predicates
//!
//! Provides the operator input model: raw temporal values in the shapes
//! the parsing backend accepts, and the absent/present classification that
//! drives the null-handling policy.

#![warn(missing_docs)]

pub mod types;
pub mod value;

pub use types::ValueType;
pub use value::{DateInput, RawTemporal};
