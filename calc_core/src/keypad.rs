//! # Keypad Layout
//!
//! The fixed set of calculator buttons, what each one does, and how they are
//! placed on a grid. The GUI only draws what [`keypad_rows`] returns and sends
//! back the pressed button's [`KeyAction`].
//!
//! ## Layout
//!
//! With four columns the keypad reads:
//!
//! ```text
//! 1     2     3     4
//! 5     6     7     8
//! 9     0     +     -
//! *     /     (     )
//! .     x²    √     ·
//! Clear       Calculate
//! ```
//!
//! `Clear` and `Calculate` span two columns each. A button that does not fit
//! in what remains of a row starts the next row, leaving a gap (`·`) behind.

/// Number of columns in the calculator grid
pub const DEFAULT_COLUMNS: usize = 4;

/// What pressing a button does to the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Append a token to the expression
    Append(&'static str),
    /// Square the current input (x²)
    Square,
    /// Take the square root of the current input (√)
    SquareRoot,
    /// Reset expression, result and error
    Clear,
    /// Evaluate the expression
    Calculate,
}

/// Visual category of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyStyle {
    Digit,
    Operator,
    Power,
    Root,
    Clear,
    Calculate,
}

/// One button on the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Key {
    /// Text shown on the button
    pub label: &'static str,
    pub action: KeyAction,
    pub style: KeyStyle,
    /// Number of grid columns the button occupies
    pub span: usize,
}

impl Key {
    const fn digit(label: &'static str) -> Self {
        Key {
            label,
            action: KeyAction::Append(label),
            style: KeyStyle::Digit,
            span: 1,
        }
    }

    const fn operator(label: &'static str) -> Self {
        Key {
            label,
            action: KeyAction::Append(label),
            style: KeyStyle::Operator,
            span: 1,
        }
    }

    const fn command(label: &'static str, action: KeyAction, style: KeyStyle, span: usize) -> Self {
        Key {
            label,
            action,
            style,
            span,
        }
    }
}

/// All buttons, in placement order
pub static KEYPAD: [Key; 21] = [
    Key::digit("1"),
    Key::digit("2"),
    Key::digit("3"),
    Key::digit("4"),
    Key::digit("5"),
    Key::digit("6"),
    Key::digit("7"),
    Key::digit("8"),
    Key::digit("9"),
    Key::digit("0"),
    Key::operator("+"),
    Key::operator("-"),
    Key::operator("*"),
    Key::operator("/"),
    Key::operator("("),
    Key::operator(")"),
    Key::operator("."),
    Key::command("x²", KeyAction::Square, KeyStyle::Power, 1),
    Key::command("√", KeyAction::SquareRoot, KeyStyle::Root, 1),
    Key::command("Clear", KeyAction::Clear, KeyStyle::Clear, 2),
    Key::command("Calculate", KeyAction::Calculate, KeyStyle::Calculate, 2),
];

/// A positioned slot in a keypad row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeypadCell {
    Key(&'static Key),
    /// Unused columns left at the end of a row
    Gap(usize),
}

impl KeypadCell {
    /// Number of columns this cell occupies
    pub fn span(&self) -> usize {
        match self {
            KeypadCell::Key(key) => key.span,
            KeypadCell::Gap(columns) => *columns,
        }
    }
}

/// Place [`KEYPAD`] on a grid with `columns` columns.
///
/// Every returned row spans exactly `columns` columns; a row that could not be
/// filled ends in a [`KeypadCell::Gap`]. Buttons wider than the grid get a row
/// to themselves.
///
/// ```rust
/// use calc_core::keypad::{keypad_rows, KeypadCell, DEFAULT_COLUMNS};
///
/// let rows = keypad_rows(DEFAULT_COLUMNS);
/// assert_eq!(rows.len(), 6);
/// assert!(matches!(rows[4].last(), Some(KeypadCell::Gap(1))));
/// ```
pub fn keypad_rows(columns: usize) -> Vec<Vec<KeypadCell>> {
    let columns = columns.max(1);
    let mut rows = Vec::new();
    let mut current: Vec<KeypadCell> = Vec::new();
    let mut used = 0;

    for key in KEYPAD.iter() {
        let span = key.span.min(columns);
        if used + span > columns {
            current.push(KeypadCell::Gap(columns - used));
            rows.push(std::mem::take(&mut current));
            used = 0;
        }
        current.push(KeypadCell::Key(key));
        used += span;
        if used == columns {
            rows.push(std::mem::take(&mut current));
            used = 0;
        }
    }

    if !current.is_empty() {
        current.push(KeypadCell::Gap(columns - used));
        rows.push(current);
    }

    rows
}
