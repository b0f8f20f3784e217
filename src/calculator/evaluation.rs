//! One-shot evaluation of a calculator expression.
//!
//! Wraps parse and fold into a single call and formats the outcome for
//! display.

use super::formula::OperatorPolicy;
use super::parser::ExpressionParser;
use serde::Serialize;

/// Result of evaluating a calculator expression.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CalcResult {
    /// Successful calculation.
    Success {
        /// The original expression.
        expression: String,
        /// The numeric value.
        value: f64,
        /// Formatted for display.
        display_result: String,
    },
    /// Evaluation failed.
    Error {
        /// The original expression.
        expression: String,
        /// Error message to display.
        message: String,
    },
}

impl CalcResult {
    /// Get the expression that was evaluated.
    pub fn expression(&self) -> &str {
        match self {
            Self::Success { expression, .. } => expression,
            Self::Error { expression, .. } => expression,
        }
    }

    /// Check if this is a successful result.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Get the display string (result or error message).
    pub fn display(&self) -> &str {
        match self {
            Self::Success { display_result, .. } => display_result,
            Self::Error { message, .. } => message,
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Success { value, .. } => Some(*value),
            Self::Error { .. } => None,
        }
    }
}

/// Evaluate an expression strictly left to right.
pub fn evaluate_expression(input: &str, policy: OperatorPolicy) -> CalcResult {
    let expression = input.trim().to_string();
    let mut formula = ExpressionParser::with_policy(policy).parse_formula(&expression);

    match formula.result() {
        Ok(value) => CalcResult::Success {
            display_result: format_display(value),
            value,
            expression,
        },
        Err(err) => CalcResult::Error {
            expression,
            message: err.to_string(),
        },
    }
}

/// Format a number for display.
fn format_display(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        let formatted = format!("{:.10}", value);
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_evaluation() {
        let result = evaluate_expression("2 + 2", OperatorPolicy::default());
        assert!(result.is_success());
        assert_eq!(result.display(), "4");
        assert_eq!(result.value(), Some(4.0));
    }

    #[test]
    fn test_no_precedence() {
        let result = evaluate_expression("2 + 3 * 4", OperatorPolicy::default());
        assert_eq!(result.display(), "20");
    }

    #[test]
    fn test_decimal_result() {
        let result = evaluate_expression("1 / 3", OperatorPolicy::default());
        assert!(result.is_success());
        assert_eq!(result.display(), "0.3333333333");

        let result = evaluate_expression("-11.4 + 1", OperatorPolicy::default());
        assert_eq!(result.display(), "-10.4");
    }

    #[test]
    fn test_division_by_zero() {
        let result = evaluate_expression("1 / 0", OperatorPolicy::default());
        assert!(!result.is_success());
        assert_eq!(result.display(), "Cannot divide by zero.");
        assert_eq!(result.value(), None);
    }

    #[test]
    fn test_malformed_expression() {
        let result = evaluate_expression("5 +", OperatorPolicy::default());
        assert_eq!(result.display(), "No element found in the queue.");
        assert_eq!(result.expression(), "5 +");
    }

    #[test]
    fn test_single_operand_policies() {
        assert!(!evaluate_expression("7", OperatorPolicy::RequireOperator).is_success());
        assert_eq!(
            evaluate_expression(" 7 ", OperatorPolicy::Lenient),
            CalcResult::Success {
                expression: "7".to_string(),
                value: 7.0,
                display_result: "7".to_string(),
            }
        );
    }

    #[test]
    fn test_large_whole_numbers() {
        assert_eq!(format_display(1e15), "1000000000000000");
        assert_eq!(format_display(123456789.0), "123456789");
        assert_eq!(format_display(-0.5), "-0.5");
    }

    #[test]
    fn test_serialize_tagged() {
        let result = evaluate_expression("6 / 4", OperatorPolicy::default());
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["value"], 1.5);
        assert_eq!(json["display_result"], "1.5");

        let result = evaluate_expression("6 / 0", OperatorPolicy::default());
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["message"], "Cannot divide by zero.");
    }
}
