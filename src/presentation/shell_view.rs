use iced::widget::{column, container, row, text, Space};
use iced::{Alignment, Element, Length};

use crate::global_constants;
use crate::presentation::app_theme;

/// Static page frame: a title header and the body below it.
pub fn render_shell<'a, Message: 'a>(
    header_accessory: Element<'a, Message>,
    body: Element<'a, Message>,
) -> Element<'a, Message> {
    let header = container(
        row![
            text(global_constants::APPLICATION_TITLE).size(22),
            Space::new().width(Length::Fill),
            header_accessory,
        ]
        .spacing(12)
        .align_y(Alignment::Center),
    )
    .padding(16)
    .width(Length::Fill)
    .style(app_theme::header_style);

    let main = container(body)
        .padding(16)
        .width(Length::Fill)
        .height(Length::Fill);

    container(column![header, main])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(app_theme::page_style)
        .into()
}
