/// View helpers
///
/// - Header bar with the selection count and delete action (header.rs)
/// - Tile grid and empty state (grid.rs)
/// - Single tile and the drag overlay copy (tile.rs)
use iced::Color;

pub mod grid;
pub mod header;
pub mod tile;

/// Text color for destructive actions
pub const DANGER: Color = Color::from_rgb(0.86, 0.21, 0.27);
