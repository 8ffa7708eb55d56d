/// Header bar: title or selection count on the left, delete action on the right
use iced::widget::{button, checkbox, container, horizontal_space, row, text, Row};
use iced::{Alignment, Element, Length};

use crate::layout::HEADER_HEIGHT;
use crate::state::gallery::Gallery;
use crate::Message;

pub fn view(gallery: &Gallery) -> Element<'_, Message> {
    let title: Element<Message> = if gallery.selection().is_empty() {
        text(gallery.selection_title()).size(20).into()
    } else {
        // Unticking the header checkbox deselects everything
        row![
            checkbox("", true)
                .size(15)
                .on_toggle(|_| Message::DeselectAll),
            text(gallery.selection_title()).size(20),
        ]
        .spacing(8)
        .align_y(Alignment::Center)
        .into()
    };

    let mut bar = Row::new()
        .push(title)
        .push(horizontal_space())
        .align_y(Alignment::Center);

    if !gallery.selection().is_empty() {
        bar = bar.push(
            button(text(gallery.delete_label()).size(18).color(super::DANGER))
                .style(button::text)
                .on_press(Message::DeleteSelected),
        );
    }

    container(bar)
        .width(Length::Fill)
        .height(Length::Fixed(HEADER_HEIGHT))
        .padding([0, 16])
        .center_y(Length::Fixed(HEADER_HEIGHT))
        .into()
}
