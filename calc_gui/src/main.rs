//! # Calculator GUI Application
//!
//! Single-screen arithmetic calculator built with the Iced framework.
//! All calculator behavior lives in `calc_core`; this crate only forwards
//! button presses to it and renders its state.

mod config;
mod ui;

use iced::widget::{container, Column};
use iced::{Element, Length};
use tracing::{info, trace};

use calc_core::{Calculator, KeyAction};

/// Application state
#[derive(Debug, Default)]
pub struct App {
    calculator: Calculator,
}

/// Events produced by the view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// A keypad button was pressed
    KeyPressed(KeyAction),
}

impl App {
    fn update(&mut self, message: Message) {
        match message {
            Message::KeyPressed(action) => {
                self.calculator.press(action);
                if let Ok(state) = serde_json::to_string(self.calculator.state()) {
                    trace!(?action, %state, "state updated");
                }
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let mut card: Column<'_, Message> = Column::new()
            .spacing(12)
            .padding(16)
            .max_width(config::CONTENT_MAX_WIDTH)
            .push(ui::display::view_display(
                self.calculator.expression(),
                self.calculator.error_message(),
            ))
            .push(ui::keypad::view_keypad(config::GRID_COLUMNS));

        if let Some(result_panel) = ui::result_panel::view_result_panel(self.calculator.result_text()) {
            card = card.push(result_panel);
        }

        container(card)
            .center_x(Length::Fill)
            .padding(16)
            .into()
    }
}

fn main() -> iced::Result {
    config::init_logging();
    info!(
        title = config::WINDOW_TITLE,
        width = config::WINDOW_SIZE.0,
        height = config::WINDOW_SIZE.1,
        "starting calculator"
    );

    iced::application(App::default, App::update, App::view)
        .title(config::WINDOW_TITLE)
        .window(config::window_settings())
        .run()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press_all(app: &mut App, actions: &[KeyAction]) {
        for action in actions {
            app.update(Message::KeyPressed(*action));
        }
    }

    #[test]
    fn test_calculate_from_buttons() {
        let mut app = App::default();
        press_all(
            &mut app,
            &[
                KeyAction::Append("2"),
                KeyAction::Append("+"),
                KeyAction::Append("2"),
                KeyAction::Calculate,
            ],
        );
        assert_eq!(app.calculator.result_text().as_deref(), Some("4"));
        assert_eq!(app.calculator.error_message(), None);
    }

    #[test]
    fn test_error_shown_then_cleared() {
        let mut app = App::default();
        press_all(&mut app, &[KeyAction::Append("2"), KeyAction::Append("+"), KeyAction::Calculate]);
        assert_eq!(app.calculator.error_message().as_deref(), Some("Incomplete expression."));

        app.update(Message::KeyPressed(KeyAction::Clear));
        assert_eq!(app.calculator.expression(), "");
        assert_eq!(app.calculator.error_message(), None);
        assert_eq!(app.calculator.result_text(), None);
    }

    #[test]
    fn test_square_rewrites_display() {
        let mut app = App::default();
        press_all(&mut app, &[KeyAction::Append("9"), KeyAction::Square]);
        assert_eq!(app.calculator.expression(), "81");
        assert_eq!(app.calculator.result_text().as_deref(), Some("81"));
    }

    #[test]
    fn test_square_root_of_negative() {
        let mut app = App::default();
        press_all(
            &mut app,
            &[KeyAction::Append("-"), KeyAction::Append("1"), KeyAction::SquareRoot],
        );
        assert_eq!(
            app.calculator.error_message().as_deref(),
            Some("Cannot calculate square root of a negative number.")
        );
        assert_eq!(app.calculator.result_text(), None);
    }

    #[test]
    fn test_duplicate_decimal_ignored() {
        let mut app = App::default();
        press_all(
            &mut app,
            &[
                KeyAction::Append("1"),
                KeyAction::Append("."),
                KeyAction::Append("5"),
                KeyAction::Append("+"),
                KeyAction::Append("2"),
                KeyAction::Append("."),
            ],
        );
        assert_eq!(app.calculator.expression(), "1.5+2");
    }
}
