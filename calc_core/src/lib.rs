//! # calc_core - Calculator Engine
//!
//! `calc_core` holds everything the calculator does apart from drawing it:
//! the expression being typed, dispatch to an external expression evaluator,
//! classification of failures into user-facing messages, and the fixed keypad
//! layout. It has no GUI dependency, so the GUI stays a thin view over it.
//!
//! ## Design Philosophy
//!
//! - **No custom parser**: arithmetic is delegated to an [`evaluator::Evaluator`]
//! - **Synchronous**: every operation is a bounded in-memory update
//! - **Rich Errors**: structured error types whose `Display` is the presented message
//! - **JSON-friendly**: state and errors implement Serialize/Deserialize for logging and tests
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::Calculator;
//!
//! let mut calc = Calculator::new();
//! calc.append_token("9");
//! calc.square_current_input();
//! assert_eq!(calc.expression(), "81");
//!
//! calc.clear();
//! calc.append_token("-1");
//! calc.sqrt_current_input();
//! assert_eq!(
//!     calc.error_message().as_deref(),
//!     Some("Cannot calculate square root of a negative number.")
//! );
//! ```
//!
//! ## Modules
//!
//! - [`calculator`] - Calculator state and operations
//! - [`evaluator`] - Evaluator seam and the fasteval-backed implementation
//! - [`keypad`] - Buttons, their actions, and grid placement
//! - [`number`] - Leading-numeric-prefix parse and number formatting
//! - [`errors`] - Structured error types

pub mod calculator;
pub mod errors;
pub mod evaluator;
pub mod keypad;
pub mod number;

// Re-export commonly used types at crate root for convenience
pub use calculator::{Calculator, CalculatorState};
pub use errors::{CalcError, CalcResult, UnaryOperation};
pub use evaluator::{EvaluationFailure, Evaluator, FastevalEvaluator};
pub use keypad::{KeyAction, KeyStyle};
