// src/error.rs
// Error taxonomy for the calculator

use thiserror::Error;

/// Main error type for the calculator library
#[derive(Error, Debug)]
pub enum CalcError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("unrecognized operator: {0:?}")]
    UnrecognizedOperator(String),

    #[error("invalid operand: {0:?}")]
    InvalidOperand(String),

    #[error("invalid arguments: operation not valid")]
    InvalidDirectArguments,

    #[error("invalid filter operator: {0:?}")]
    InvalidFilterOperator(String),

    #[error("invalid operation record: {0}")]
    InvalidOperationRecord(String),

    #[error("invalid number of arguments: {0} (expected 0, 1 or 4)")]
    InvalidArgumentCount(usize),

    #[error("storage failure: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for Result using CalcError
pub type Result<T> = std::result::Result<T, CalcError>;

impl CalcError {
    /// Whether the session can report this error and keep going.
    ///
    /// Startup, storage, console and configuration failures are not
    /// recoverable at the point where they are raised; input validation and
    /// arithmetic failures are.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            CalcError::DivisionByZero
                | CalcError::UnrecognizedOperator(_)
                | CalcError::InvalidOperand(_)
                | CalcError::InvalidDirectArguments
                | CalcError::InvalidFilterOperator(_)
                | CalcError::InvalidOperationRecord(_)
        )
    }
}
