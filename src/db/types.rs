// src/db/types.rs
// Data structures returned by database operations

use crate::calc::format_number;
use std::fmt;

/// One completed calculation as stored in the `Calculadora` table
#[derive(Debug, Clone, PartialEq)]
pub struct OperationRecord {
    /// `yyyyMMddHHmmss` timestamp, also the recency ordering key
    pub id: String,
    pub operand1: f64,
    /// Canonical display symbol of the operator
    pub operator_symbol: String,
    pub operand2: f64,
    /// Result as formatted text (the column is textual)
    pub result: String,
}

impl fmt::Display for OperationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Id = {} - Number1 = {} - Operator = {} - Number2 = {} - Result = {}",
            self.id,
            format_number(self.operand1),
            self.operator_symbol,
            format_number(self.operand2),
            self.result
        )
    }
}
