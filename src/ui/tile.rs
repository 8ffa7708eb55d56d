/// One gallery tile: picture, hover/checked tint and checkbox
use iced::widget::{checkbox, column, container, image, mouse_area, stack, text, Space};
use iced::{mouse, Alignment, Background, Border, Color, ContentFit, Element, Length, Padding, Point, Shadow, Size, Vector};

use crate::state::data::PhotoId;
use crate::thumbnail::Thumbnail;
use crate::Message;

const CORNER_RADIUS: f32 = 10.0;

/// Everything a tile needs to draw itself; tiles own no state
#[derive(Debug, Clone, Copy)]
pub struct TileView<'a> {
    pub index: usize,
    pub id: &'a PhotoId,
    pub size: Size,
    pub thumbnail: Option<&'a Thumbnail>,
    pub checked: bool,
    pub hovered: bool,
    pub checkbox_visible: bool,
    /// The tile is the one being dragged; its slot stays but fades out
    pub faded: bool,
}

pub fn view(tile: TileView<'_>) -> Element<'_, Message> {
    let index = tile.index;

    let mut layers = stack![picture(tile.id, tile.thumbnail)]
        .width(Length::Fill)
        .height(Length::Fill);

    if let Some(tint) = tint(&tile) {
        layers = layers.push(
            container(Space::new(Length::Fill, Length::Fill))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(move |_| container::Style {
                    background: Some(Background::Color(tint)),
                    border: Border {
                        radius: CORNER_RADIUS.into(),
                        ..Border::default()
                    },
                    ..container::Style::default()
                }),
        );
    }

    if tile.checkbox_visible {
        layers = layers.push(
            container(
                checkbox("", tile.checked)
                    .size(20)
                    .on_toggle(move |_| Message::ToggleSelected(index)),
            )
            .padding(10),
        );
    }

    let framed = frame(layers.into(), tile.size, Shadow::default());

    mouse_area(framed)
        .on_press(Message::TilePressed(index))
        .on_enter(Message::TileEntered(index))
        .on_exit(Message::TileExited(index))
        .interaction(mouse::Interaction::Grab)
        .into()
}

/// Floating copy of the dragged tile, positioned at `origin` in the window
pub fn overlay<'a>(
    id: &'a PhotoId,
    thumbnail: Option<&'a Thumbnail>,
    size: Size,
    origin: Point,
) -> Element<'a, Message> {
    let shadow = Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.35),
        offset: Vector::new(0.0, 6.0),
        blur_radius: 18.0,
    };

    container(frame(picture(id, thumbnail), size, shadow))
        .padding(Padding {
            top: origin.y.max(0.0),
            right: 0.0,
            bottom: 0.0,
            left: origin.x.max(0.0),
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Black shade on hover, white wash when checked or while dragged away
fn tint(tile: &TileView<'_>) -> Option<Color> {
    if tile.faded {
        Some(Color::from_rgba(1.0, 1.0, 1.0, 0.8))
    } else if tile.checked {
        Some(Color::from_rgba(1.0, 1.0, 1.0, 0.6))
    } else if tile.hovered {
        Some(Color::from_rgba(0.0, 0.0, 0.0, 0.3))
    } else {
        None
    }
}

fn picture<'a>(id: &'a PhotoId, thumbnail: Option<&'a Thumbnail>) -> Element<'a, Message> {
    match thumbnail {
        Some(Thumbnail::Ready(handle)) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover)
            .into(),
        Some(Thumbnail::Failed(reason)) => placeholder(
            column![
                text(id.file_name()).size(12),
                text(reason.to_string()).size(10).color(super::DANGER),
            ]
            .spacing(4)
            .align_x(Alignment::Center)
            .into(),
        ),
        Some(Thumbnail::Loading) | None => placeholder(text("Loading…").size(12).into()),
    }
}

fn placeholder(content: Element<'_, Message>) -> Element<'_, Message> {
    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(8)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

/// White rounded card with a light border, fixed to the tile size
fn frame<'a>(content: Element<'a, Message>, size: Size, shadow: Shadow) -> Element<'a, Message> {
    container(content)
        .width(Length::Fixed(size.width))
        .height(Length::Fixed(size.height))
        .clip(true)
        .style(move |_| container::Style {
            background: Some(Background::Color(Color::WHITE)),
            border: Border {
                color: Color::from_rgb(0.83, 0.83, 0.83),
                width: 1.0,
                radius: CORNER_RADIUS.into(),
            },
            shadow,
            ..container::Style::default()
        })
        .into()
}
