// src/lib.rs
// Calculadora - four-operation calculator with a persistent operation log

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod app;
pub mod calc;
pub mod config;
pub mod db;
pub mod error;
pub mod history;
pub mod log_id;
pub mod ui;

pub use error::{CalcError, Result};
