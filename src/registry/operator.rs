//! Operator trait and registry

use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

use crate::model::DateInput;
use crate::parser::TemporalBackend;
use crate::registry::operators;
use crate::registry::signature::OperatorSignature;

/// Result type for registry-level operator dispatch
pub type OperatorResult<T> = Result<T, OperatorError>;

/// Operator dispatch errors
///
/// Operator evaluation itself is total: every operator resolves every
/// `DateInput` pair to a boolean. Errors arise only at the registry level
/// when a caller asks for a symbol that was never registered.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OperatorError {
    /// No operator registered under the requested symbol
    #[error("no {granularity} operator registered for symbol '{symbol}'")]
    UnknownOperator {
        /// The symbol that failed to resolve
        symbol: String,
        /// The granularity table that was searched
        granularity: Granularity,
    },
}

/// The unit of time at which two values are indistinguishable for equality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Granularity {
    /// Calendar-day comparisons, time-of-day ignored
    Day,
    /// Calendar-minute comparisons
    Minute,
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Day => write!(f, "day"),
            Self::Minute => write!(f, "minute"),
        }
    }
}

/// Trait for implementing temporal comparison operators
pub trait TemporalOperator: Send + Sync {
    /// Get the operator symbol (e.g. "eq", "gt")
    fn symbol(&self) -> &str;

    /// Get a human-friendly name for the operator
    fn human_friendly_name(&self) -> &str;

    /// Get the granularity this operator compares at
    fn granularity(&self) -> Granularity;

    /// Get the type signatures supported by this operator
    fn signatures(&self) -> &[OperatorSignature];

    /// Evaluate the operator against two field values
    fn evaluate(
        &self,
        backend: &dyn TemporalBackend,
        left: &DateInput,
        right: &DateInput,
    ) -> bool;
}

/// Registry for temporal comparison operators
///
/// Holds one symbol table per granularity so a rule engine can dispatch a
/// predicate by field type first and operator symbol second.
#[derive(Clone, Default)]
pub struct OperatorRegistry {
    day_operators: FxHashMap<String, Arc<dyn TemporalOperator>>,
    minute_operators: FxHashMap<String, Arc<dyn TemporalOperator>>,
}

impl OperatorRegistry {
    /// Create a new, empty operator registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an operator under its own symbol and granularity
    pub fn register<O: TemporalOperator + 'static>(&mut self, operator: O) {
        let arc_op = Arc::new(operator);
        let symbol = arc_op.symbol().to_string();
        match arc_op.granularity() {
            Granularity::Day => self.day_operators.insert(symbol, arc_op),
            Granularity::Minute => self.minute_operators.insert(symbol, arc_op),
        };
    }

    /// Get an operator by granularity and symbol
    pub fn get(&self, granularity: Granularity, symbol: &str) -> Option<Arc<dyn TemporalOperator>> {
        self.table(granularity).get(symbol).cloned()
    }

    /// Check whether an operator exists for a granularity and symbol
    pub fn contains(&self, granularity: Granularity, symbol: &str) -> bool {
        self.table(granularity).contains_key(symbol)
    }

    /// Get all operator symbols registered for a granularity
    pub fn symbols(&self, granularity: Granularity) -> Vec<&str> {
        self.table(granularity).keys().map(|s| s.as_str()).collect()
    }

    /// Dispatch an operator by granularity and symbol
    pub fn evaluate(
        &self,
        granularity: Granularity,
        symbol: &str,
        backend: &dyn TemporalBackend,
        left: &DateInput,
        right: &DateInput,
    ) -> OperatorResult<bool> {
        let operator = self.get(granularity, symbol).ok_or_else(|| {
            OperatorError::UnknownOperator {
                symbol: symbol.to_string(),
                granularity,
            }
        })?;
        Ok(operator.evaluate(backend, left, right))
    }

    fn table(&self, granularity: Granularity) -> &FxHashMap<String, Arc<dyn TemporalOperator>> {
        match granularity {
            Granularity::Day => &self.day_operators,
            Granularity::Minute => &self.minute_operators,
        }
    }
}

/// Register all built-in temporal operators
pub fn register_builtin_operators(registry: &mut OperatorRegistry) {
    operators::register_builtin_operators(registry);
}
