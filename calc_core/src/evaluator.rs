//! # Expression Evaluator
//!
//! The calculator never parses arithmetic itself. It hands the expression text
//! to an [`Evaluator`] and only needs to tell three kinds of failure apart:
//! an undefined symbol, a premature end of input, and everything else.
//!
//! [`FastevalEvaluator`] is the production implementation, backed by the
//! `fasteval` crate with an empty variable namespace.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::evaluator::{EvaluationFailure, Evaluator, FastevalEvaluator};
//!
//! let evaluator = FastevalEvaluator::new();
//! assert_eq!(evaluator.evaluate("(1+2)*3"), Ok(9.0));
//! assert_eq!(
//!     evaluator.evaluate("2+foo"),
//!     Err(EvaluationFailure::UndefinedSymbol("foo".to_string()))
//! );
//! ```

use std::collections::BTreeMap;

use thiserror::Error;

use crate::errors::CalcError;

/// Failure reported by an evaluator, reduced to the shapes the calculator
/// distinguishes.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvaluationFailure {
    /// A name that is neither a number nor a known function or constant
    #[error("Undefined symbol {0}")]
    UndefinedSymbol(String),

    /// Input ended while an operand or closing token was still expected
    #[error("Unexpected end of expression")]
    UnexpectedEnd,

    /// Any other parse or evaluation failure, with the evaluator's own message
    #[error("{0}")]
    Other(String),
}

impl From<EvaluationFailure> for CalcError {
    fn from(failure: EvaluationFailure) -> Self {
        match failure {
            EvaluationFailure::UndefinedSymbol(symbol) => CalcError::undefined_symbol(symbol),
            EvaluationFailure::UnexpectedEnd => CalcError::IncompleteExpression,
            EvaluationFailure::Other(reason) => CalcError::invalid_expression(reason),
        }
    }
}

/// Turns expression text into a number.
///
/// Implementations must not panic on malformed input; every failure is
/// reported through [`EvaluationFailure`].
pub trait Evaluator {
    fn evaluate(&self, expression: &str) -> Result<f64, EvaluationFailure>;
}

/// [`Evaluator`] backed by `fasteval`.
///
/// No variables are defined, so any bare identifier that is not one of
/// fasteval's builtins evaluates to [`EvaluationFailure::UndefinedSymbol`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FastevalEvaluator;

impl FastevalEvaluator {
    pub fn new() -> Self {
        Self
    }
}

impl Evaluator for FastevalEvaluator {
    fn evaluate(&self, expression: &str) -> Result<f64, EvaluationFailure> {
        let mut namespace = BTreeMap::<String, f64>::new();
        fasteval::ez_eval(expression, &mut namespace).map_err(classify_fasteval_error)
    }
}

/// Map a fasteval error onto the three failure shapes.
fn classify_fasteval_error(error: fasteval::Error) -> EvaluationFailure {
    match error {
        fasteval::Error::Undefined(symbol) => EvaluationFailure::UndefinedSymbol(symbol),
        fasteval::Error::EOF | fasteval::Error::EofWhileParsing(_) => {
            EvaluationFailure::UnexpectedEnd
        }
        other => EvaluationFailure::Other(format!("{:?}", other)),
    }
}
