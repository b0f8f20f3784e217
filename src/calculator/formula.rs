//! Left-to-right evaluation of parsed operands and operators.
//!
//! Operators are applied strictly in the order they were entered, the way a
//! pocket calculator shows an intermediate result after each operator press.
//! There is no precedence: `1 + 2 * 3` is `9`, not `7`.

use super::operator::{CalculatorError, Operator};
use super::queue::{CalculatorItemQueue, QueueError};
use thiserror::Error;
use tracing::debug;

/// Any failure produced by [`Formula::result`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationError {
    #[error(transparent)]
    Queue(#[from] QueueError),

    #[error(transparent)]
    Calculator(#[from] CalculatorError),
}

/// How to treat a formula that has operands but no operator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OperatorPolicy {
    /// Fail with [`QueueError::NotFoundElement`].
    #[default]
    RequireOperator,
    /// Return the first operand unchanged.
    Lenient,
}

/// A parsed expression ready to be folded into a single value.
#[derive(Clone, Debug, PartialEq)]
pub struct Formula {
    operands: CalculatorItemQueue<f64>,
    operators: CalculatorItemQueue<Operator>,
    policy: OperatorPolicy,
}

impl Formula {
    pub fn new(
        operands: CalculatorItemQueue<f64>,
        operators: CalculatorItemQueue<Operator>,
    ) -> Self {
        Self {
            operands,
            operators,
            policy: OperatorPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: OperatorPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn operands_count(&self) -> usize {
        self.operands.len()
    }

    pub fn operators_count(&self) -> usize {
        self.operators.len()
    }

    /// Drain both queues and fold them left to right.
    ///
    /// Operands left over once the operators run out are ignored. The queues
    /// are consumed, so a second call fails with `NotFoundElement`.
    pub fn result(&mut self) -> Result<f64, EvaluationError> {
        let mut accumulator = self.operands.dequeue()?;

        if self.policy == OperatorPolicy::RequireOperator && self.operators.is_empty() {
            return Err(QueueError::NotFoundElement.into());
        }

        while !self.operators.is_empty() {
            let operator = self.operators.dequeue()?;
            let rhs = self.operands.dequeue()?;
            let value = operator.calculate(accumulator, rhs)?;
            debug!("{} {} {} = {}", accumulator, operator, rhs, value);
            accumulator = value;
        }

        if !self.operands.is_empty() {
            debug!(
                "Ignoring {} trailing operand(s) without an operator",
                self.operands.len()
            );
        }

        Ok(accumulator)
    }
}
