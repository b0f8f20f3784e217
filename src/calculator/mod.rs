//! Calculator module for evaluating arithmetic expressions.
//!
//! This module provides functionality to:
//! - Split an expression into operand and operator queues
//! - Fold those queues left to right into a single value
//! - Evaluate and format an expression in one call

mod evaluation;
mod formula;
mod operator;
mod parser;
mod queue;

pub use evaluation::{CalcResult, evaluate_expression};
pub use formula::{EvaluationError, Formula, OperatorPolicy};
pub use operator::{CalculatorError, MINUS_SIGN, Operator, UnknownOperator};
pub use parser::{ExpressionParser, Token};
pub use queue::{CalculatorItemQueue, QueueError};
