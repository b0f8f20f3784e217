//! Tokenizes whitespace-delimited calculator input.
//!
//! Input is a sequence of tokens separated by whitespace, e.g.
//! `1 + 2 − -3 / 4 * -5`. A sign glued to a number is part of the operand;
//! subtraction must stand alone as its own token. Tokens that are neither a
//! number nor an operator are dropped.

use super::formula::{Formula, OperatorPolicy};
use super::operator::Operator;
use super::queue::CalculatorItemQueue;
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

lazy_static! {
    /// A decimal literal with an optional sign and optional fraction. Commas
    /// are only allowed as thousands separators.
    static ref OPERAND: Regex =
        Regex::new(r"^[+-]?(([0-9]{1,3}(,[0-9]{3})+|[0-9]+)(\.[0-9]*)?|\.[0-9]+)$").unwrap();
}

/// A classified lexical unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Token {
    Operand(f64),
    Operator(Operator),
}

impl Token {
    /// Classify a single whitespace-free token: number first, then operator.
    pub fn classify(raw: &str) -> Option<Self> {
        parse_operand(raw)
            .map(Self::Operand)
            .or_else(|| raw.parse::<Operator>().ok().map(Self::Operator))
    }
}

/// Parse a signed decimal literal, accepting `,` thousands separators.
fn parse_operand(raw: &str) -> Option<f64> {
    let mut literal = raw.to_string();

    // The display may render a negative sign with a dash glyph
    if let Some(first) = literal.chars().next()
        && first != '-'
        && Operator::from_symbol(first) == Some(Operator::Subtract)
    {
        literal.replace_range(..first.len_utf8(), "-");
    }

    if !OPERAND.is_match(&literal) {
        return None;
    }
    literal.retain(|c| c != ',');
    literal.parse().ok()
}

/// Builds [`Formula`]s from expression strings.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExpressionParser {
    policy: OperatorPolicy,
}

impl ExpressionParser {
    pub fn with_policy(policy: OperatorPolicy) -> Self {
        Self { policy }
    }

    /// Parse with the default policy.
    pub fn parse(expression: &str) -> Formula {
        Self::default().parse_formula(expression)
    }

    /// Split and classify every token, dropping the unrecognized ones.
    pub fn tokenize(expression: &str) -> Vec<Token> {
        expression
            .split_whitespace()
            .filter_map(|raw| {
                let token = Token::classify(raw);
                if token.is_none() {
                    debug!("Dropping unrecognized token {:?}", raw);
                }
                token
            })
            .collect()
    }

    /// Route operands and operators into their queues, keeping input order.
    pub fn parse_formula(&self, expression: &str) -> Formula {
        let mut operands = CalculatorItemQueue::new();
        let mut operators = CalculatorItemQueue::new();

        for token in Self::tokenize(expression) {
            trace!("{:?}", token);
            match token {
                Token::Operand(value) => operands.enqueue(value),
                Token::Operator(operator) => operators.enqueue(operator),
            }
        }

        Formula::new(operands, operators).with_policy(self.policy)
    }
}
