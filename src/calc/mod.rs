// src/calc/mod.rs
// Arithmetic engine and operator symbols

mod engine;
mod operator;

pub use engine::{evaluate, format_number, parse_operand, Calculation};
pub use operator::Operator;
