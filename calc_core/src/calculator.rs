//! # Calculator State
//!
//! The calculator keeps three pieces of transient state: the expression text
//! built from button presses, the last successful result, and the last error.
//! A result and an error are never present at the same time.
//!
//! The arithmetic itself lives in stateless functions ([`evaluate_expression`],
//! [`square`], [`square_root`]); [`Calculator`] applies their outcome to the
//! state.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculator::Calculator;
//!
//! let mut calc = Calculator::new();
//! calc.append_token("2");
//! calc.append_token("+");
//! calc.append_token("2");
//! calc.evaluate();
//! assert_eq!(calc.last_result(), Some(4.0));
//! assert!(calc.last_error().is_none());
//!
//! calc.clear();
//! calc.evaluate();
//! assert_eq!(calc.error_message().as_deref(), Some("Please enter an expression."));
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::errors::{CalcError, CalcResult, UnaryOperation};
use crate::evaluator::{Evaluator, FastevalEvaluator};
use crate::keypad::KeyAction;
use crate::number::{format_number, parse_leading_float};

/// Token refused when the expression already holds one
pub const DECIMAL_POINT: &str = ".";

// ============================================================================
// Stateless operations
// ============================================================================

/// Evaluate `expression` with `evaluator`.
///
/// Blank input is rejected before the evaluator runs.
pub fn evaluate_expression<E: Evaluator + ?Sized>(evaluator: &E, expression: &str) -> CalcResult<f64> {
    if expression.trim().is_empty() {
        return Err(CalcError::EmptyExpression);
    }
    evaluator.evaluate(expression).map_err(CalcError::from)
}

/// Square the leading number of `input`.
pub fn square(input: &str) -> CalcResult<f64> {
    let value = parse_leading_float(input).ok_or(CalcError::invalid_input(UnaryOperation::Square))?;
    Ok(value.powi(2))
}

/// Square root of the leading number of `input`.
pub fn square_root(input: &str) -> CalcResult<f64> {
    let value =
        parse_leading_float(input).ok_or(CalcError::invalid_input(UnaryOperation::SquareRoot))?;
    if value < 0.0 {
        return Err(CalcError::domain_error(UnaryOperation::SquareRoot));
    }
    Ok(value.sqrt())
}

// ============================================================================
// State
// ============================================================================

/// Transient UI state of one calculator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Text built from button presses
    pub expression: String,

    /// Most recent successful output
    pub last_result: Option<f64>,

    /// Most recent failure; its `Display` is the message shown to the user
    pub last_error: Option<CalcError>,
}

impl CalculatorState {
    /// Store an outcome, clearing whichever of result/error it does not set.
    fn record(&mut self, outcome: &CalcResult<f64>) {
        match outcome {
            Ok(value) => {
                self.last_result = Some(*value);
                self.last_error = None;
            }
            Err(error) => {
                self.last_result = None;
                self.last_error = Some(error.clone());
            }
        }
    }
}

/// Calculator driven by button presses.
///
/// Generic over the [`Evaluator`] so the classification logic can be exercised
/// without a real expression library.
#[derive(Debug, Clone, Default)]
pub struct Calculator<E = FastevalEvaluator> {
    state: CalculatorState,
    evaluator: E,
}

impl Calculator<FastevalEvaluator> {
    /// Create an empty calculator backed by fasteval
    pub fn new() -> Self {
        Self::with_evaluator(FastevalEvaluator::new())
    }
}

impl<E: Evaluator> Calculator<E> {
    /// Create an empty calculator backed by `evaluator`
    pub fn with_evaluator(evaluator: E) -> Self {
        Calculator {
            state: CalculatorState::default(),
            evaluator,
        }
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn expression(&self) -> &str {
        &self.state.expression
    }

    pub fn last_result(&self) -> Option<f64> {
        self.state.last_result
    }

    pub fn last_error(&self) -> Option<&CalcError> {
        self.state.last_error.as_ref()
    }

    /// Display form of the last result, if any
    pub fn result_text(&self) -> Option<String> {
        self.state.last_result.map(format_number)
    }

    /// Presented message for the last error, if any
    pub fn error_message(&self) -> Option<String> {
        self.state.last_error.as_ref().map(ToString::to_string)
    }

    /// Apply a keypad button.
    pub fn press(&mut self, action: KeyAction) {
        match action {
            KeyAction::Append(token) => self.append_token(token),
            KeyAction::Square => self.square_current_input(),
            KeyAction::SquareRoot => self.sqrt_current_input(),
            KeyAction::Clear => self.clear(),
            KeyAction::Calculate => self.evaluate(),
        }
    }

    /// Append `token` to the expression.
    ///
    /// A decimal point is ignored when the expression already contains one
    /// anywhere, not just in the current operand. A successful append clears
    /// the last error and keeps the last result.
    pub fn append_token(&mut self, token: &str) {
        if token == DECIMAL_POINT && self.state.expression.contains(DECIMAL_POINT) {
            trace!(expression = %self.state.expression, "decimal point already present");
            return;
        }
        self.state.expression.push_str(token);
        self.state.last_error = None;
    }

    /// Evaluate the expression and store the result or the classified error.
    ///
    /// The expression text itself is left as is.
    pub fn evaluate(&mut self) {
        let outcome = evaluate_expression(&self.evaluator, &self.state.expression);
        match &outcome {
            Ok(value) => debug!(expression = %self.state.expression, result = value, "evaluated"),
            Err(error) => debug!(
                expression = %self.state.expression,
                code = error.error_code(),
                ?error,
                "evaluation failed"
            ),
        }
        self.state.record(&outcome);
    }

    /// Square the current input; on success the squared value becomes the new
    /// expression.
    pub fn square_current_input(&mut self) {
        let outcome = square(&self.state.expression);
        self.apply_unary(UnaryOperation::Square, outcome);
    }

    /// Take the square root of the current input; on success the root becomes
    /// the new expression.
    pub fn sqrt_current_input(&mut self) {
        let outcome = square_root(&self.state.expression);
        self.apply_unary(UnaryOperation::SquareRoot, outcome);
    }

    /// Reset expression, result and error.
    pub fn clear(&mut self) {
        self.state = CalculatorState::default();
    }

    fn apply_unary(&mut self, operation: UnaryOperation, outcome: CalcResult<f64>) {
        self.state.record(&outcome);
        match outcome {
            Ok(value) => {
                debug!(%operation, input = %self.state.expression, result = value, "applied");
                self.state.expression = format_number(value);
            }
            Err(error) => {
                debug!(%operation, input = %self.state.expression, code = error.error_code(), "rejected");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::EvaluationFailure;

    /// Evaluator that returns a canned outcome and ignores its input
    struct FixedEvaluator(Result<f64, EvaluationFailure>);

    impl Evaluator for FixedEvaluator {
        fn evaluate(&self, _expression: &str) -> Result<f64, EvaluationFailure> {
            self.0.clone()
        }
    }

    fn calc_with(expression: &str) -> Calculator {
        let mut calc = Calculator::new();
        calc.append_token(expression);
        calc
    }

    fn assert_error(calc: &Calculator<impl Evaluator>, message: &str) {
        assert_eq!(calc.error_message().as_deref(), Some(message));
        assert_eq!(calc.last_result(), None);
    }

    #[test]
    fn test_evaluate_simple_sum() {
        let mut calc = calc_with("2+2");
        calc.evaluate();
        assert_eq!(calc.last_result(), Some(4.0));
        assert_eq!(calc.result_text().as_deref(), Some("4"));
        assert!(calc.last_error().is_none());
        assert_eq!(calc.expression(), "2+2");
    }

    #[test]
    fn test_evaluate_empty_expression() {
        let mut calc = Calculator::new();
        calc.evaluate();
        assert_error(&calc, "Please enter an expression.");

        let mut calc = calc_with("   ");
        calc.evaluate();
        assert_error(&calc, "Please enter an expression.");
    }

    #[test]
    fn test_evaluate_incomplete_expression() {
        let mut calc = calc_with("2+");
        calc.evaluate();
        assert_error(&calc, "Incomplete expression.");
    }

    #[test]
    fn test_evaluate_undefined_symbol() {
        let mut calc = calc_with("2+foo");
        calc.evaluate();
        assert_error(&calc, "Invalid character or undefined symbol.");
        assert_eq!(calc.last_error(), Some(&CalcError::undefined_symbol("foo")));
    }

    #[test]
    fn test_evaluate_other_failure() {
        let mut calc = Calculator::with_evaluator(FixedEvaluator(Err(EvaluationFailure::Other(
            "Unexpected operator *".to_string(),
        ))));
        calc.append_token("2**");
        calc.evaluate();
        assert_error(&calc, "Invalid expression.");
    }

    #[test]
    fn test_empty_check_precedes_evaluator() {
        let mut calc = Calculator::with_evaluator(FixedEvaluator(Ok(7.0)));
        calc.evaluate();
        assert_error(&calc, "Please enter an expression.");
    }

    #[test]
    fn test_evaluate_uses_evaluator_value() {
        let mut calc = Calculator::with_evaluator(FixedEvaluator(Ok(0.5)));
        calc.append_token("1/2");
        calc.evaluate();
        assert_eq!(calc.last_result(), Some(0.5));
        assert!(calc.last_error().is_none());
    }

    #[test]
    fn test_evaluate_success_replaces_error() {
        let mut calc = calc_with("2+");
        calc.evaluate();
        calc.append_token("3");
        calc.evaluate();
        assert_eq!(calc.last_result(), Some(5.0));
        assert!(calc.last_error().is_none());
    }

    #[test]
    fn test_decimal_point_guard() {
        let mut calc = calc_with("1.5+2");
        calc.append_token(".");
        assert_eq!(calc.expression(), "1.5+2");

        let mut calc = calc_with("3");
        calc.append_token(".");
        calc.append_token(".");
        assert_eq!(calc.expression(), "3.");
    }

    #[test]
    fn test_refused_decimal_keeps_error() {
        let mut calc = calc_with("1.");
        calc.evaluate();
        let before = calc.state().clone();
        calc.append_token(".");
        assert_eq!(calc.state(), &before);
    }

    #[test]
    fn test_append_clears_error_but_keeps_result() {
        let mut calc = calc_with("6*7");
        calc.evaluate();
        calc.append_token("+");
        assert_eq!(calc.last_result(), Some(42.0));
        assert_eq!(calc.expression(), "6*7+");

        calc.evaluate();
        assert!(calc.last_error().is_some());
        calc.append_token("1");
        assert!(calc.last_error().is_none());
    }

    #[test]
    fn test_square() {
        let mut calc = calc_with("9");
        calc.square_current_input();
        assert_eq!(calc.last_result(), Some(81.0));
        assert_eq!(calc.expression(), "81");
        assert!(calc.last_error().is_none());
    }

    #[test]
    fn test_square_uses_leading_number() {
        let mut calc = calc_with("3+4");
        calc.square_current_input();
        assert_eq!(calc.last_result(), Some(9.0));
        assert_eq!(calc.expression(), "9");
    }

    #[test]
    fn test_square_invalid_input() {
        let mut calc = calc_with("(2)");
        calc.square_current_input();
        assert_error(&calc, "Invalid input for power of 2.");
        assert_eq!(calc.expression(), "(2)");
    }

    #[test]
    fn test_square_root() {
        let mut calc = calc_with("2.25");
        calc.sqrt_current_input();
        assert_eq!(calc.last_result(), Some(1.5));
        assert_eq!(calc.expression(), "1.5");
    }

    #[test]
    fn test_square_root_of_negative() {
        let mut calc = calc_with("-1");
        calc.sqrt_current_input();
        assert_error(&calc, "Cannot calculate square root of a negative number.");
        assert_eq!(calc.expression(), "-1");
    }

    #[test]
    fn test_square_root_invalid_input() {
        let mut calc = Calculator::new();
        calc.sqrt_current_input();
        assert_error(&calc, "Invalid input for square root.");
    }

    #[test]
    fn test_unary_result_is_editable() {
        let mut calc = calc_with("16");
        calc.sqrt_current_input();
        calc.append_token("+");
        calc.append_token("1");
        calc.evaluate();
        assert_eq!(calc.last_result(), Some(5.0));
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut calc = calc_with("2+foo");
        calc.evaluate();
        calc.clear();
        assert_eq!(calc.state(), &CalculatorState::default());

        let mut calc = calc_with("5");
        calc.square_current_input();
        calc.clear();
        assert_eq!(calc.expression(), "");
        assert_eq!(calc.last_result(), None);
        assert!(calc.last_error().is_none());
    }

    #[test]
    fn test_press_dispatch() {
        let mut calc = Calculator::new();
        for action in [
            KeyAction::Append("4"),
            KeyAction::Square,
            KeyAction::SquareRoot,
            KeyAction::Append("*"),
            KeyAction::Append("3"),
            KeyAction::Calculate,
        ] {
            calc.press(action);
        }
        assert_eq!(calc.expression(), "4*3");
        assert_eq!(calc.last_result(), Some(12.0));

        calc.press(KeyAction::Clear);
        assert_eq!(calc.expression(), "");
    }

    #[test]
    fn test_state_serialization() {
        let mut calc = calc_with("-4");
        calc.sqrt_current_input();

        let json = serde_json::to_string(calc.state()).unwrap();
        let roundtrip: CalculatorState = serde_json::from_str(&json).unwrap();
        assert_eq!(&roundtrip, calc.state());
        assert!(json.contains("DomainError"));
    }
}
