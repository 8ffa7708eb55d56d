/// Grid geometry for the gallery
///
/// Everything here is a pure function of the viewport size and the number of
/// items. The same plan drives the rendered rows and the tile rectangles used
/// for drop detection, so what the user sees and what the pointer hits agree.
use iced::{Point, Rectangle, Size};
use std::ops::Range;

/// Gap between tiles, both directions
pub const GRID_GAP: f32 = 10.0;
/// Padding around the whole gallery card
pub const OUTER_PADDING: f32 = 20.0;
/// Padding inside the scrollable grid body
pub const BODY_PADDING: f32 = 16.0;
/// Fixed height of the header bar
pub const HEADER_HEIGHT: f32 = 56.0;
/// Space between header and grid body
pub const SECTION_SPACING: f32 = 8.0;
/// The card never grows wider than this
pub const MAX_CONTENT_WIDTH: f32 = 1000.0;

/// Breakpoints and tile sizes for one viewport width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridTier {
    pub columns: usize,
    pub tile_height: f32,
    pub hero_height: f32,
}

impl GridTier {
    pub fn for_width(width: f32) -> Self {
        Self {
            columns: if width < 500.0 { 3 } else { 5 },
            tile_height: if width < 400.0 { 95.0 } else { 150.0 },
            hero_height: if width < 500.0 { 200.0 } else { 310.0 },
        }
    }
}

/// Width of the gallery card for a given window width
pub fn content_width(viewport_width: f32) -> f32 {
    (viewport_width - 2.0 * OUTER_PADDING).clamp(0.0, MAX_CONTENT_WIDTH)
}

/// Width available to the tile grid
pub fn grid_width(viewport_width: f32) -> f32 {
    (content_width(viewport_width) - 2.0 * BODY_PADDING).max(0.0)
}

/// Window position of the grid's top-left corner when not scrolled
pub fn grid_origin(viewport: Size) -> Point {
    let left = (viewport.width - content_width(viewport.width)) / 2.0;
    Point::new(
        left + BODY_PADDING,
        OUTER_PADDING + HEADER_HEIGHT + SECTION_SPACING + BODY_PADDING,
    )
}

/// Convert a window position into grid coordinates
pub fn window_to_grid(position: Point, viewport: Size, scroll_offset: f32) -> Point {
    let origin = grid_origin(viewport);
    Point::new(position.x - origin.x, position.y - origin.y + scroll_offset)
}

/// The 2×2 hero tile at position 0 and the two short rows beside it
#[derive(Debug, Clone, PartialEq)]
pub struct HeroBlock {
    pub beside: [Range<usize>; 2],
    /// Height of the whole block (hero or the two rows, whichever is taller)
    pub height: f32,
}

/// Render plan for the current item count and viewport
#[derive(Debug, Clone, PartialEq)]
pub struct GridPlan {
    pub tier: GridTier,
    pub tile_width: f32,
    pub hero: Option<HeroBlock>,
    /// Full-width rows after the hero block, as index ranges
    pub rows: Vec<Range<usize>>,
    rects: Vec<Rectangle>,
}

impl GridPlan {
    pub fn new(len: usize, viewport_width: f32, hero_tile: bool) -> Self {
        let tier = GridTier::for_width(viewport_width);
        let columns = tier.columns;
        let width = grid_width(viewport_width);
        let tile_width =
            ((width - GRID_GAP * (columns as f32 - 1.0)) / columns as f32).max(0.0);
        let hero_width = 2.0 * tile_width + GRID_GAP;

        let mut rects = Vec::with_capacity(len);
        let mut hero = None;
        let mut next = 0;
        let mut top = 0.0;

        if hero_tile && len > 0 && columns > 2 {
            rects.push(Rectangle::new(
                Point::ORIGIN,
                Size::new(hero_width, tier.hero_height),
            ));

            let per_row = columns - 2;
            let first = 1..(1 + per_row).min(len);
            let second = first.end..(first.end + per_row).min(len);

            for (row, range) in [&first, &second].into_iter().enumerate() {
                let y = row as f32 * (tier.tile_height + GRID_GAP);
                for (col, _) in range.clone().enumerate() {
                    let x = hero_width + GRID_GAP + col as f32 * (tile_width + GRID_GAP);
                    rects.push(Rectangle::new(
                        Point::new(x, y),
                        Size::new(tile_width, tier.tile_height),
                    ));
                }
            }

            let height = tier.hero_height.max(2.0 * tier.tile_height + GRID_GAP);
            next = second.end;
            top = height + GRID_GAP;
            hero = Some(HeroBlock {
                beside: [first, second],
                height,
            });
        }

        let mut rows = Vec::new();
        while next < len {
            let range = next..(next + columns).min(len);
            for (col, _) in range.clone().enumerate() {
                let x = col as f32 * (tile_width + GRID_GAP);
                rects.push(Rectangle::new(
                    Point::new(x, top),
                    Size::new(tile_width, tier.tile_height),
                ));
            }
            next = range.end;
            top += tier.tile_height + GRID_GAP;
            rows.push(range);
        }

        Self {
            tier,
            tile_width,
            hero,
            rows,
            rects,
        }
    }

    /// One rectangle per item, in item order, in grid coordinates
    pub fn rects(&self) -> &[Rectangle] {
        &self.rects
    }

    /// Size of the tile at `index`
    pub fn tile_size(&self, index: usize) -> Size {
        self.rects
            .get(index)
            .map(|rect| rect.size())
            .unwrap_or(Size::new(self.tile_width, self.tier.tile_height))
    }
}
