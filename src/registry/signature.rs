//! Operator signatures for type checking

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::ValueType;

/// Binary operator signature for type checking
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OperatorSignature {
    /// Operator symbol
    pub symbol: String,
    /// Left operand type
    pub left_type: ValueType,
    /// Right operand type
    pub right_type: ValueType,
    /// Result type
    pub result_type: ValueType,
}

impl OperatorSignature {
    /// Create a binary operator signature
    pub fn binary(
        symbol: impl Into<String>,
        left_type: ValueType,
        right_type: ValueType,
        result_type: ValueType,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            left_type,
            right_type,
            result_type,
        }
    }

    /// Check if this signature matches the given operand types
    pub fn matches(&self, left_type: ValueType, right_type: ValueType) -> bool {
        self.left_type == left_type && self.right_type == right_type
    }
}

impl fmt::Display for OperatorSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} -> {}",
            self.left_type, self.symbol, self.right_type, self.result_type
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_signature_matches_operand_types() {
        let sig = OperatorSignature::binary("eq", ValueType::Date, ValueType::Date, ValueType::Boolean);
        assert!(sig.matches(ValueType::Date, ValueType::Date));
        assert!(!sig.matches(ValueType::DateTime, ValueType::Date));
    }

    #[test]
    fn signature_display() {
        let sig = OperatorSignature::binary("gt", ValueType::DateTime, ValueType::DateTime, ValueType::Boolean);
        assert_eq!(sig.to_string(), "DateTime gt DateTime -> Boolean");
    }
}
