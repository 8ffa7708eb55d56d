/// Tile grid, laid out from a [`GridPlan`]
use iced::widget::{button, column, container, row, text, Column, Row};
use iced::{Alignment, Element, Length};
use std::collections::HashMap;
use std::ops::Range;

use super::tile::{self, TileView};
use crate::layout::{GridPlan, GRID_GAP};
use crate::state::data::PhotoId;
use crate::state::gallery::Gallery;
use crate::thumbnail::Thumbnail;
use crate::Message;

pub fn view<'a>(
    gallery: &'a Gallery,
    plan: &GridPlan,
    thumbnails: &'a HashMap<PhotoId, Thumbnail>,
) -> Element<'a, Message> {
    if gallery.is_empty() {
        return empty_state();
    }

    let tile_at = |index: usize| -> Element<'a, Message> {
        // Every index handed out by the plan is inside the list
        let Some(id) = gallery.items().get(index) else {
            return column![].into();
        };

        tile::view(TileView {
            index,
            id,
            size: plan.tile_size(index),
            thumbnail: thumbnails.get(id),
            checked: gallery.is_checked(index),
            hovered: gallery.hover() == Some(index),
            checkbox_visible: gallery.checkbox_visible(index),
            faded: gallery.drag().active() == Some(id),
        })
    };

    let tile_row = |range: &Range<usize>| -> Element<'a, Message> {
        Row::with_children(range.clone().map(&tile_at))
            .spacing(GRID_GAP)
            .into()
    };

    let mut grid = Column::new().spacing(GRID_GAP);

    if let Some(hero) = &plan.hero {
        let beside = column![tile_row(&hero.beside[0]), tile_row(&hero.beside[1])].spacing(GRID_GAP);
        grid = grid.push(
            row![tile_at(0), beside]
                .spacing(GRID_GAP)
                .height(Length::Fixed(hero.height)),
        );
    }

    for range in &plan.rows {
        grid = grid.push(tile_row(range));
    }

    grid.into()
}

/// Shown once every photo has been deleted
fn empty_state<'a>() -> Element<'a, Message> {
    let restore = row![
        text("Wanna Restore?").size(16),
        button(text("Click me").size(16))
            .style(button::text)
            .padding(0)
            .on_press(Message::Restore),
    ]
    .spacing(6)
    .align_y(Alignment::Center);

    container(
        column![
            row![
                text("Oops!").size(28).color(super::DANGER),
                text("All photos have been deleted.").size(28),
            ]
            .spacing(8),
            restore,
        ]
        .spacing(16)
        .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .padding([48, 0])
    .center_x(Length::Fill)
    .into()
}
