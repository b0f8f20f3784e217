//! The four arithmetic operators and their evaluation rules.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Arithmetic failure raised while applying an operator.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculatorError {
    #[error("Cannot divide by zero.")]
    DividedByZero,
}

/// Canonical subtraction glyph (U+2212 MINUS SIGN).
pub const MINUS_SIGN: char = '−';

/// Dash glyphs accepted as subtraction in addition to the canonical one.
const ALTERNATE_MINUS: &[char] = &['-', '‐', '‑', '‒', '–', '—', '﹣', '－'];

/// A binary arithmetic operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Divide,
    Multiply,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Divide,
        Operator::Multiply,
    ];

    /// Look up an operator by its symbol.
    ///
    /// Any dash-like glyph is treated as subtraction.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            MINUS_SIGN => Some(Self::Subtract),
            '/' => Some(Self::Divide),
            '*' => Some(Self::Multiply),
            c if ALTERNATE_MINUS.contains(&c) => Some(Self::Subtract),
            _ => None,
        }
    }

    /// The canonical symbol for this operator.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => MINUS_SIGN,
            Self::Divide => '/',
            Self::Multiply => '*',
        }
    }

    /// Apply the operator to two operands.
    pub fn calculate(self, lhs: f64, rhs: f64) -> Result<f64, CalculatorError> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Subtract => Ok(lhs - rhs),
            Self::Divide => {
                if rhs == 0.0 {
                    return Err(CalculatorError::DividedByZero);
                }
                Ok(lhs / rhs)
            }
            Self::Multiply => Ok(lhs * rhs),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Error returned when a string is not a single operator symbol.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown operator: {0:?}")]
pub struct UnknownOperator(pub String);

impl FromStr for Operator {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_symbol(c).ok_or_else(|| UnknownOperator(s.to_string())),
            _ => Err(UnknownOperator(s.to_string())),
        }
    }
}
