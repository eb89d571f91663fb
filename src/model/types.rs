//! Type system definitions for operator signatures

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type information for operator operands and results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueType {
    /// Boolean value (true/false)
    Boolean,
    /// Date value compared at day granularity
    Date,
    /// DateTime value compared at minute granularity
    DateTime,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean => write!(f, "Boolean"),
            Self::Date => write!(f, "Date"),
            Self::DateTime => write!(f, "DateTime"),
        }
    }
}
