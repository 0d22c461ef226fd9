// src/db/test_support.rs
// Shared test helpers for database tests

use super::{Database, OperationRecord};

/// Create a test database (in-memory, empty log)
pub fn setup_test_db() -> Database {
    Database::open_in_memory().expect("Failed to open in-memory database")
}

/// Build a record with the given fields
pub fn sample_record(id: &str, operand1: f64, symbol: char, operand2: f64, result: &str) -> OperationRecord {
    OperationRecord {
        id: id.to_string(),
        operand1,
        operator_symbol: symbol.to_string(),
        operand2,
        result: result.to_string(),
    }
}
