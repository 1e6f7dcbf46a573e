//! Keypad (Center)
//!
//! Button grid laid out by `calc_core::keypad::keypad_rows`. Each button sends
//! `Message::KeyPressed` with its action; colors follow the key's `KeyStyle`.

use iced::widget::{button, text, Column, Row, Space};
use iced::{Border, Color, Element, Length, Padding, Theme};

use calc_core::keypad::{keypad_rows, KeyStyle, KeypadCell};

use crate::Message;

/// Background of the x² button
const POWER_COLOR: Color = Color::from_rgb(0.66, 0.33, 0.97);

/// Background of the √ button
const ROOT_COLOR: Color = Color::from_rgb(0.98, 0.45, 0.09);

/// Space between buttons, both directions
const GRID_SPACING: f32 = 8.0;

/// Render the keypad with `columns` columns
pub fn view_keypad(columns: usize) -> Element<'static, Message> {
    keypad_rows(columns)
        .into_iter()
        .fold(Column::new().spacing(GRID_SPACING), |grid, cells| {
            let row = cells
                .into_iter()
                .fold(Row::new().spacing(GRID_SPACING), |row, cell| row.push(view_cell(cell)));
            grid.push(row)
        })
        .into()
}

/// Render one grid cell, sized by how many columns it spans
fn view_cell(cell: KeypadCell) -> Element<'static, Message> {
    let width = Length::FillPortion(cell.span() as u16);

    match cell {
        KeypadCell::Key(key) => {
            let style = key.style;
            button(text(key.label).size(16).width(Length::Fill).center())
                .on_press(Message::KeyPressed(key.action))
                .padding(Padding::from([10, 0]))
                .width(width)
                .style(move |theme: &Theme, status| key_style(style, theme, status))
                .into()
        }
        KeypadCell::Gap(_) => Space::new().width(width).into(),
    }
}

/// Map a key category to its button style
fn key_style(style: KeyStyle, theme: &Theme, status: button::Status) -> button::Style {
    match style {
        KeyStyle::Digit => button::secondary(theme, status),
        KeyStyle::Operator => button::primary(theme, status),
        KeyStyle::Clear => button::danger(theme, status),
        KeyStyle::Calculate => button::success(theme, status),
        KeyStyle::Power => filled(POWER_COLOR, status),
        KeyStyle::Root => filled(ROOT_COLOR, status),
    }
}

/// Solid button with white text that darkens on hover
fn filled(base: Color, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => darken(base, 0.12),
        button::Status::Disabled => base.scale_alpha(0.5),
        _ => base,
    };

    button::Style {
        text_color: Color::WHITE,
        border: Border {
            radius: 2.0.into(),
            ..Border::default()
        },
        ..button::Style::default().with_background(background)
    }
}

fn darken(color: Color, amount: f32) -> Color {
    Color {
        r: (color.r - amount).max(0.0),
        g: (color.g - amount).max(0.0),
        b: (color.b - amount).max(0.0),
        a: color.a,
    }
}
