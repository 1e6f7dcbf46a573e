//! # Error Types
//!
//! Structured error types for calc_core. The `Display` text of each variant is
//! exactly the message the calculator shows to the user, so the GUI never
//! re-words an error.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult, UnaryOperation};
//!
//! fn require_non_negative(value: f64) -> CalcResult<f64> {
//!     if value < 0.0 {
//!         return Err(CalcError::domain_error(UnaryOperation::SquareRoot));
//!     }
//!     Ok(value)
//! }
//!
//! let err = require_non_negative(-1.0).unwrap_err();
//! assert_eq!(err.to_string(), "Cannot calculate square root of a negative number.");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Single-operand operations applied to the current input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOperation {
    /// x²
    Square,
    /// √x
    SquareRoot,
}

impl UnaryOperation {
    /// Human-readable name used in error messages
    pub fn display_name(&self) -> &'static str {
        match self {
            UnaryOperation::Square => "power of 2",
            UnaryOperation::SquareRoot => "square root",
        }
    }
}

impl fmt::Display for UnaryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Structured error type for calculator operations.
///
/// The first four variants come from the evaluate path, the last two from the
/// power/root path. Variants keep their context (the offending symbol, the
/// evaluator's own message) for logging, but it never leaks into the
/// presented message.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Nothing (or only whitespace) was entered before Calculate
    #[error("Please enter an expression.")]
    EmptyExpression,

    /// The evaluator met a name it does not know
    #[error("Invalid character or undefined symbol.")]
    UndefinedSymbol { symbol: String },

    /// The expression ended where an operand was still expected
    #[error("Incomplete expression.")]
    IncompleteExpression,

    /// Any other evaluator failure
    #[error("Invalid expression.")]
    InvalidExpression { reason: String },

    /// The current input has no leading number to operate on
    #[error("Invalid input for {operation}.")]
    InvalidInput { operation: UnaryOperation },

    /// The current input is outside the operation's domain
    #[error("Cannot calculate {operation} of a negative number.")]
    DomainError { operation: UnaryOperation },
}

impl CalcError {
    /// Create an UndefinedSymbol error
    pub fn undefined_symbol(symbol: impl Into<String>) -> Self {
        CalcError::UndefinedSymbol {
            symbol: symbol.into(),
        }
    }

    /// Create an InvalidExpression error
    pub fn invalid_expression(reason: impl Into<String>) -> Self {
        CalcError::InvalidExpression {
            reason: reason.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(operation: UnaryOperation) -> Self {
        CalcError::InvalidInput { operation }
    }

    /// Create a DomainError
    pub fn domain_error(operation: UnaryOperation) -> Self {
        CalcError::DomainError { operation }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::EmptyExpression => "EMPTY_EXPRESSION",
            CalcError::UndefinedSymbol { .. } => "UNDEFINED_SYMBOL",
            CalcError::IncompleteExpression => "INCOMPLETE_EXPRESSION",
            CalcError::InvalidExpression { .. } => "INVALID_EXPRESSION",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::DomainError { .. } => "DOMAIN_ERROR",
        }
    }
}
