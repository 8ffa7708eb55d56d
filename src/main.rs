use iced::widget::image::Handle;
use iced::widget::{column, container, scrollable, stack};
use iced::{event, keyboard, mouse, touch, window};
use iced::{Element, Event, Length, Point, Size, Subscription, Task, Theme};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::{error, info, warn};

mod catalog;
mod config;
mod error;
mod layout;
mod logging;
mod state;
mod thumbnail;
mod ui;

use catalog::Catalog;
use config::GalleryConfig;
use error::ThumbnailError;
use layout::GridPlan;
use state::data::PhotoId;
use state::gallery::Gallery;
use thumbnail::Thumbnail;

/// Main application state
struct PhotoGallery {
    /// Items, selection, drag gesture and hover
    gallery: Gallery,
    config: GalleryConfig,
    /// Decoded tile images, kept across delete/restore
    thumbnails: HashMap<PhotoId, Thumbnail>,
    /// Last known pointer position in window coordinates
    cursor: Point,
    viewport: Size,
    /// Vertical scroll offset of the grid body
    scroll_offset: f32,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// Checkbox on a tile was clicked
    ToggleSelected(usize),
    /// Header checkbox was unticked
    DeselectAll,
    DeleteSelected,
    Restore,
    TileEntered(usize),
    TileExited(usize),
    /// Pointer went down on a tile (possible start of a drag)
    TilePressed(usize),
    /// A finger went down; arrives after the tile's own press report
    TouchPressed(Point),
    PointerMoved(Point),
    PointerReleased,
    /// Escape, lost touch or lost window focus
    DragCancelled,
    GridScrolled(scrollable::Viewport),
    ViewportResized(Size),
    ThumbnailLoaded(PhotoId, Result<Handle, ThumbnailError>),
}

impl PhotoGallery {
    /// Create a new instance of the application
    fn new(config: GalleryConfig, cli_dir: Option<PathBuf>) -> (Self, Task<Message>) {
        let catalog = Catalog::select(cli_dir, config.photos_dir.as_deref()).unwrap_or_else(|e| {
            error!("❌ {}, using the bundled photos", e);
            Catalog::bundled().unwrap_or_default()
        });

        let gallery = Gallery::new(catalog.photos.iter().cloned(), config.drag_threshold);
        info!("🎨 Photo Gallery initialized with {} photos", gallery.items().len());

        // Kick off thumbnail decoding for every photo in the original list
        let mut thumbnails = HashMap::new();
        let mut loads = Vec::new();
        for id in gallery.items().original() {
            thumbnails.insert(id.clone(), Thumbnail::Loading);

            let id = id.clone();
            let path = catalog.resolve(&id);
            loads.push(Task::perform(
                thumbnail::load_thumbnail(path, config.thumbnail_size),
                move |result| Message::ThumbnailLoaded(id.clone(), result),
            ));
        }

        let viewport = Size::new(config.window_width, config.window_height);

        (
            PhotoGallery {
                gallery,
                config,
                thumbnails,
                cursor: Point::ORIGIN,
                viewport,
                scroll_offset: 0.0,
            },
            Task::batch(loads),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ToggleSelected(index) => {
                self.gallery.toggle(index);
            }
            Message::DeselectAll => {
                self.gallery.deselect_all();
            }
            Message::DeleteSelected => {
                self.gallery.delete_selected();
            }
            Message::Restore => {
                self.gallery.restore();
            }
            Message::TileEntered(index) => {
                self.gallery.set_hover(Some(index));
            }
            Message::TileExited(index) => {
                // The next tile's enter can arrive before this exit
                if self.gallery.hover() == Some(index) {
                    self.gallery.set_hover(None);
                }
            }
            Message::TilePressed(index) => {
                let origin = self.tile_origin(index);
                self.gallery.press(index, self.cursor, origin);
            }
            Message::TouchPressed(position) => {
                self.cursor = position;
                self.gallery.touch_down(position);
            }
            Message::PointerMoved(position) => {
                self.cursor = position;
                self.gallery.pointer_moved(position);
            }
            Message::PointerReleased => {
                let plan = self.plan();
                let (viewport, scroll) = (self.viewport, self.scroll_offset);

                if let Some(reorder) = self
                    .gallery
                    .release(plan.rects(), |point| layout::window_to_grid(point, viewport, scroll))
                {
                    info!("🔀 Moved photo from {} to {}", reorder.from, reorder.to);
                }
            }
            Message::DragCancelled => {
                self.gallery.cancel_drag();
            }
            Message::GridScrolled(viewport) => {
                self.scroll_offset = viewport.absolute_offset().y;
            }
            Message::ViewportResized(size) => {
                self.viewport = size;
            }
            Message::ThumbnailLoaded(id, result) => {
                let thumbnail = match result {
                    Ok(handle) => Thumbnail::Ready(handle),
                    Err(e) => {
                        warn!("⚠️  Thumbnail failed for {}: {}", id, e);
                        Thumbnail::Failed(e)
                    }
                };
                self.thumbnails.insert(id, thumbnail);
            }
        }

        Task::none()
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let plan = self.plan();

        let body = scrollable(
            container(ui::grid::view(&self.gallery, &plan, &self.thumbnails))
                .width(Length::Fill)
                .padding(layout::BODY_PADDING),
        )
        .on_scroll(Message::GridScrolled)
        .height(Length::Fill);

        let card = column![ui::header::view(&self.gallery), body]
            .spacing(layout::SECTION_SPACING)
            .width(Length::Fixed(layout::content_width(self.viewport.width)));

        let page = container(card)
            .padding(layout::OUTER_PADDING)
            .center_x(Length::Fill)
            .height(Length::Fill);

        // The page always sits in a stack so its widget state (scroll offset)
        // survives the overlay appearing and disappearing
        let mut layers = stack![page].width(Length::Fill).height(Length::Fill);

        let drag = self.gallery.drag();
        if let Some((id, origin)) = drag.active().zip(drag.overlay_origin()) {
            let size = self
                .gallery
                .items()
                .position(id)
                .map(|index| plan.tile_size(index))
                .unwrap_or(Size::new(plan.tile_width, plan.tier.tile_height));

            layers = layers.push(ui::tile::overlay(id, self.thumbnails.get(id), size, origin));
        }

        layers.into()
    }

    /// Global pointer, touch, keyboard and window events
    fn subscription(&self) -> Subscription<Message> {
        event::listen_with(|event, _status, _window| match event {
            Event::Mouse(mouse::Event::CursorMoved { position }) => Some(Message::PointerMoved(position)),
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                Some(Message::PointerReleased)
            }
            Event::Touch(touch::Event::FingerPressed { position, .. }) => {
                Some(Message::TouchPressed(position))
            }
            Event::Touch(touch::Event::FingerMoved { position, .. }) => {
                Some(Message::PointerMoved(position))
            }
            Event::Touch(touch::Event::FingerLifted { .. }) => Some(Message::PointerReleased),
            Event::Touch(touch::Event::FingerLost { .. }) => Some(Message::DragCancelled),
            Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(named),
                ..
            }) => match named {
                keyboard::key::Named::Escape => Some(Message::DragCancelled),
                keyboard::key::Named::Delete => Some(Message::DeleteSelected),
                _ => None,
            },
            Event::Window(window::Event::Resized(size)) => Some(Message::ViewportResized(size)),
            Event::Window(window::Event::Unfocused) => Some(Message::DragCancelled),
            _ => None,
        })
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        if self.config.dark_theme {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Grid geometry for the current items and window size
    fn plan(&self) -> GridPlan {
        GridPlan::new(
            self.gallery.items().len(),
            self.viewport.width,
            self.config.hero_tile,
        )
    }

    /// Window position of the tile at `index`, taking scroll into account
    fn tile_origin(&self, index: usize) -> Point {
        let plan = self.plan();
        let origin = layout::grid_origin(self.viewport);
        plan.rects()
            .get(index)
            .map(|rect| Point::new(rect.x + origin.x, rect.y + origin.y - self.scroll_offset))
            .unwrap_or(self.cursor)
    }
}

fn main() -> iced::Result {
    if let Err(e) = logging::init() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let config = GalleryConfig::load().unwrap_or_else(|e| {
        warn!("⚠️  {}, using default settings", e);
        GalleryConfig::default()
    });

    // An optional folder of photos can be passed as the first argument
    let cli_dir = std::env::args_os().nth(1).map(PathBuf::from);
    let window_size = Size::new(config.window_width, config.window_height);

    iced::application("Photo Gallery", PhotoGallery::update, PhotoGallery::view)
        .subscription(PhotoGallery::subscription)
        .theme(PhotoGallery::theme)
        .window_size(window_size)
        .centered()
        .run_with(move || PhotoGallery::new(config, cli_dir))
}
