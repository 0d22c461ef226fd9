// src/app/args.rs
// Startup argument shapes: [], [log_dir] or [log_dir, operand1, operator, operand2]

use crate::calc::{Operator, parse_operand};
use crate::config::DEFAULT_LOG_DIR;
use crate::error::{CalcError, Result};
use std::path::PathBuf;

/// Validated startup arguments
#[derive(Debug, Clone, PartialEq)]
pub struct StartupArgs {
    /// Directory holding the operation log database
    pub log_dir: PathBuf,
    /// Operation to run before the menu, when four arguments were given
    pub direct: Option<DirectArgs>,
}

/// Raw tokens of a direct execution, parsed only when it runs
#[derive(Debug, Clone, PartialEq)]
pub struct DirectArgs {
    pub operand1: String,
    pub operator: String,
    pub operand2: String,
}

impl StartupArgs {
    /// Accept exactly 0, 1 or 4 arguments
    pub fn parse(args: &[String]) -> Result<Self> {
        match args {
            [] => Ok(Self {
                log_dir: PathBuf::from(DEFAULT_LOG_DIR),
                direct: None,
            }),
            [log_dir] => Ok(Self {
                log_dir: PathBuf::from(log_dir),
                direct: None,
            }),
            [log_dir, operand1, operator, operand2] => Ok(Self {
                log_dir: PathBuf::from(log_dir),
                direct: Some(DirectArgs {
                    operand1: operand1.clone(),
                    operator: operator.clone(),
                    operand2: operand2.clone(),
                }),
            }),
            _ => Err(CalcError::InvalidArgumentCount(args.len())),
        }
    }
}

impl DirectArgs {
    /// Parse operands (`,` or `.` decimals) and the operator symbol.
    ///
    /// Any failure collapses into `InvalidDirectArguments`.
    pub fn parse(&self) -> Result<(f64, Operator, f64)> {
        let operand1 = parse_operand(&self.operand1);
        let operator = Operator::parse_token(&self.operator).ok();
        let operand2 = parse_operand(&self.operand2);

        match (operand1, operator, operand2) {
            (Some(a), Some(op), Some(b)) => Ok((a, op, b)),
            _ => Err(CalcError::InvalidDirectArguments),
        }
    }
}
