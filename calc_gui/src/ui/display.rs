//! Display (Top)
//!
//! Displays:
//! - Heading
//! - Read-only expression field
//! - Error line (only when the last action failed)

use iced::widget::{column, text, text_input, Column};
use iced::{Element, Length};

use crate::config::WINDOW_TITLE;
use crate::Message;

/// Color of the error line
const ERROR_COLOR: [f32; 3] = [0.94, 0.27, 0.27];

/// Render the heading, expression field and optional error line
pub fn view_display(expression: &str, error: Option<String>) -> Element<'_, Message> {
    // No on_input: the field only reflects what the keypad built
    let expression_field = text_input("Enter expression", expression)
        .size(18)
        .padding(8);

    let mut display: Column<'_, Message> = column![
        text(WINDOW_TITLE).size(24).width(Length::Fill).center(),
        expression_field,
    ]
    .spacing(8);

    if let Some(message) = error {
        display = display.push(text(message).size(13).color(ERROR_COLOR));
    }

    display.into()
}
