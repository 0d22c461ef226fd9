// src/calc/engine.rs
// Single binary operation evaluation

use super::Operator;
use crate::error::{CalcError, Result};
use std::fmt;
use tracing::debug;

/// Result of evaluating one binary operation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calculation {
    pub operand1: f64,
    pub operand2: f64,
    pub operator: Operator,
    pub result: f64,
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2} {} {:.2} = {:.2}",
            self.operand1, self.operator, self.operand2, self.result
        )
    }
}

/// Evaluate `operand1 <operator> operand2`.
///
/// Division by zero is rejected; NaN and infinities are not special-cased and
/// propagate through IEEE-754 arithmetic.
pub fn evaluate(operand1: f64, operator: Operator, operand2: f64) -> Result<Calculation> {
    let result = match operator {
        Operator::Add => operand1 + operand2,
        Operator::Subtract => operand1 - operand2,
        Operator::Multiply => operand1 * operand2,
        Operator::Divide => {
            if operand2 == 0.0 {
                return Err(CalcError::DivisionByZero);
            }
            operand1 / operand2
        }
    };
    debug!(operand1, operand2, %operator, result, "evaluated");
    Ok(Calculation {
        operand1,
        operand2,
        operator,
        result,
    })
}

/// Parse a user-entered operand, accepting `,` as decimal separator.
pub fn parse_operand(token: &str) -> Option<f64> {
    token.trim().replace(',', ".").parse().ok()
}

/// Magnitudes printed in plain decimal form; anything outside uses `E` notation
const PLAIN_RANGE: std::ops::Range<f64> = 1e-3..1e7;

/// Textual form of a number as stored and listed in the log.
///
/// Integral values keep one decimal (`11.0`), other values in `[1e-3, 1e7)` use
/// the shortest round-trip form (`0.1`), and larger or smaller magnitudes use
/// scientific notation with a one-digit-minimum mantissa (`1.0E7`, `2.5E-4`).
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value != 0.0 && !PLAIN_RANGE.contains(&value.abs()) {
        return scientific(value);
    }
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

fn scientific(value: f64) -> String {
    let formatted = format!("{value:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => format!("{mantissa}E{exponent}"),
        Some((mantissa, exponent)) => format!("{mantissa}.0E{exponent}"),
        None => formatted,
    }
}
