//! UI module for the calculator GUI
//!
//! Every view function is a pure function of calculator state.
//!
//! # Panel Structure
//! - `display` - Heading, read-only expression field, error line
//! - `keypad` - 4-column button grid
//! - `result_panel` - Result box, shown only when a result exists

pub mod display;
pub mod keypad;
pub mod result_panel;
