//! Calculator core: parses whitespace-delimited arithmetic and evaluates it
//! strictly left to right.

pub mod calculator;
pub mod config;

pub use calculator::{CalcResult, OperatorPolicy, evaluate_expression};
