//! Operator registry for temporal predicates
//!
//! A trait-based registry in the same shape a rule engine dispatches
//! comparisons: by field granularity first, operator symbol second.

#![warn(missing_docs)]

pub mod operator;
pub mod operators;
pub mod signature;

pub use operator::{
    Granularity, OperatorError, OperatorRegistry, OperatorResult, TemporalOperator,
};
pub use signature::OperatorSignature;

/// Create a registry with all built-in operators registered
pub fn create_standard_registry() -> OperatorRegistry {
    let mut registry = OperatorRegistry::new();
    operator::register_builtin_operators(&mut registry);
    registry
}
