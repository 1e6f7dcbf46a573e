//! Result Panel (Bottom)
//!
//! Shown only while the calculator holds a result.

use iced::font::Weight;
use iced::widget::{container, row, text};
use iced::{Element, Font, Length};

use crate::Message;

const BOLD: Font = Font {
    weight: Weight::Bold,
    ..Font::DEFAULT
};

/// Render the result panel, or nothing when there is no result
pub fn view_result_panel(result: Option<String>) -> Option<Element<'static, Message>> {
    let value = result?;

    let panel = container(
        row![
            text("Result:").size(15).font(BOLD),
            text(value).size(15),
        ]
        .spacing(6),
    )
    .padding(16)
    .width(Length::Fill)
    .style(container::bordered_box);

    Some(panel.into())
}
