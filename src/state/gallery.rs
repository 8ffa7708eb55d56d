use iced::{Point, Rectangle};
use tracing::{debug, info};

use super::data::PhotoId;
use super::drag::{closest_center, DragController};
use super::items::ItemList;
use super::selection::Selection;

/// A committed drag-and-drop move, by position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reorder {
    pub from: usize,
    pub to: usize,
}

/// Gallery root state
///
/// Owns the item list, the selection, the drag gesture and the hovered tile.
/// Tiles only ever see values derived from here, so checked state, highlight
/// and order can never disagree with each other.
#[derive(Debug, Clone)]
pub struct Gallery {
    items: ItemList,
    selection: Selection,
    drag: DragController,
    hover: Option<usize>,
}

impl Gallery {
    pub fn new(initial: impl IntoIterator<Item = PhotoId>, drag_threshold: f32) -> Self {
        Self {
            items: ItemList::new(initial),
            selection: Selection::new(),
            drag: DragController::new(drag_threshold),
            hover: None,
        }
    }

    pub fn items(&self) -> &ItemList {
        &self.items
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    pub fn hover(&self) -> Option<usize> {
        self.hover
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_checked(&self, index: usize) -> bool {
        self.selection.contains(index)
    }

    /// Checkboxes show on the hovered tile and on every checked tile
    pub fn checkbox_visible(&self, index: usize) -> bool {
        self.hover == Some(index) || self.is_checked(index)
    }

    /// Header title: plain name, or how many files are selected
    pub fn selection_title(&self) -> String {
        match self.selection.len() {
            0 => "Gallery".to_string(),
            1 => "1 File Selected".to_string(),
            count => format!("{count} Files Selected"),
        }
    }

    pub fn delete_label(&self) -> &'static str {
        if self.selection.len() > 1 {
            "Delete Files"
        } else {
            "Delete File"
        }
    }

    /// Checkbox clicked on the tile at `index`
    pub fn toggle(&mut self, index: usize) {
        if index < self.items.len() {
            self.selection.toggle(index);
        }
    }

    pub fn deselect_all(&mut self) {
        self.selection.clear();
    }

    /// Remove every selected item and clear the selection
    ///
    /// Returns the number of items removed.
    pub fn delete_selected(&mut self) -> usize {
        if self.selection.is_empty() {
            return 0;
        }

        let before = self.items.len();
        let selection = &self.selection;
        self.items = self.items.remove(|index| selection.contains(index));
        self.selection.clear();
        self.forget_stale_hover();

        let removed = before - self.items.len();
        info!("🗑️  Deleted {} photos, {} left", removed, self.items.len());
        removed
    }

    /// Bring back the original list
    ///
    /// The selection is cleared as well: its indices described the old order.
    pub fn restore(&mut self) {
        self.items = self.items.restore();
        self.selection.clear();
        self.drag.cancel();
        self.forget_stale_hover();
        info!("♻️  Restored {} photos", self.items.len());
    }

    pub fn set_hover(&mut self, hover: Option<usize>) {
        self.hover = hover.filter(|&index| index < self.items.len());
    }

    /// Pointer went down on the tile at `index`
    ///
    /// `tile_origin` is the tile's top-left corner in the same coordinates as
    /// `pointer`.
    pub fn press(&mut self, index: usize, pointer: Point, tile_origin: Point) {
        if let Some(id) = self.items.get(index) {
            self.drag.press(id.clone(), pointer, pointer - tile_origin);
        }
    }

    /// Touch went down at `pointer`; re-anchors a press recorded before it
    pub fn touch_down(&mut self, pointer: Point) {
        self.drag.anchor(pointer);
    }

    /// Pointer moved anywhere in the window
    pub fn pointer_moved(&mut self, pointer: Point) {
        if let Some(id) = self.drag.motion(pointer) {
            debug!("Drag started: {}", id);
        }
    }

    /// Pointer released
    ///
    /// `rects` are the tile rectangles in render order and `to_grid` maps a
    /// window position into their coordinate space. The drop target is the
    /// tile whose center is nearest to the pointer.
    pub fn release(
        &mut self,
        rects: &[Rectangle],
        to_grid: impl FnOnce(Point) -> Point,
    ) -> Option<Reorder> {
        let (active, pointer) = self.drag.release()?;
        let target = closest_center(rects, to_grid(pointer))?;
        self.drop_on(&active, target)
    }

    /// Drag aborted (Escape, lost touch, window focus lost)
    pub fn cancel_drag(&mut self) {
        if self.drag.cancel() {
            debug!("Drag cancelled");
        }
    }

    /// Move `active` into the slot at `target` and keep the selection attached
    pub fn drop_on(&mut self, active: &PhotoId, target: usize) -> Option<Reorder> {
        self.drag.cancel();

        let from = self.items.position(active)?;
        let over = self.items.get(target)?.clone();
        if &over == active {
            return None;
        }

        self.items = self.items.reorder(active, &over);
        self.selection.remap_after_reorder(from, target);
        debug!("Moved {} from {} to {}", active, from, target);

        Some(Reorder { from, to: target })
    }

    fn forget_stale_hover(&mut self) {
        if self.hover.is_some_and(|index| index >= self.items.len()) {
            self.hover = None;
        }
    }
}
