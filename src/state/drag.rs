/// Drag-to-reorder gesture tracking
///
/// The controller only tracks the gesture. It never touches the item list or
/// the selection; on release it hands back the dragged id and the gallery
/// root decides what to commit.
use iced::{Point, Rectangle, Vector};

use super::data::PhotoId;

/// Default distance the pointer must travel before a press becomes a drag
pub const DEFAULT_DRAG_THRESHOLD: f32 = 5.0;

/// Where the gesture currently is
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    /// Pointer is down on a tile but has not moved far enough yet
    Pressed {
        id: PhotoId,
        origin: Point,
        grab_offset: Vector,
    },
    /// A tile is being dragged; `pointer` is in window coordinates
    Dragging {
        id: PhotoId,
        pointer: Point,
        grab_offset: Vector,
    },
}

/// State machine for one drag gesture at a time
#[derive(Debug, Clone)]
pub struct DragController {
    phase: DragPhase,
    threshold: f32,
}

impl Default for DragController {
    fn default() -> Self {
        Self::new(DEFAULT_DRAG_THRESHOLD)
    }
}

impl DragController {
    pub fn new(threshold: f32) -> Self {
        Self {
            phase: DragPhase::Idle,
            threshold: threshold.max(0.0),
        }
    }

    #[cfg(test)]
    pub fn phase(&self) -> &DragPhase {
        &self.phase
    }

    /// The item being dragged, only once the threshold has been passed
    pub fn active(&self) -> Option<&PhotoId> {
        match &self.phase {
            DragPhase::Dragging { id, .. } => Some(id),
            _ => None,
        }
    }

    /// Top-left corner of the floating overlay copy, in window coordinates
    pub fn overlay_origin(&self) -> Option<Point> {
        match &self.phase {
            DragPhase::Dragging {
                pointer,
                grab_offset,
                ..
            } => Some(*pointer - *grab_offset),
            _ => None,
        }
    }

    /// Pointer went down on a tile
    ///
    /// `grab_offset` is the pointer position relative to the tile's top-left
    /// corner, so the overlay keeps the same grip while it follows the pointer.
    pub fn press(&mut self, id: PhotoId, at: Point, grab_offset: Vector) {
        if matches!(self.phase, DragPhase::Dragging { .. }) {
            return;
        }

        self.phase = DragPhase::Pressed {
            id,
            origin: at,
            grab_offset,
        };
    }

    /// Move a pending press to where the pointer actually went down
    ///
    /// Touch input reports the finger position after the tile has already
    /// reported the press, so the press is recorded at a stale position first.
    /// The grab offset follows so the overlay still sits under the finger.
    pub fn anchor(&mut self, at: Point) {
        if let DragPhase::Pressed {
            origin,
            grab_offset,
            ..
        } = &mut self.phase
        {
            *grab_offset = *grab_offset + (at - *origin);
            *origin = at;
        }
    }

    /// Pointer moved; returns the grabbed id when this motion starts the drag
    pub fn motion(&mut self, at: Point) -> Option<PhotoId> {
        match &mut self.phase {
            DragPhase::Idle => None,
            DragPhase::Pressed {
                id,
                origin,
                grab_offset,
            } => {
                if origin.distance(at) <= self.threshold {
                    return None;
                }

                let (id, grab_offset) = (id.clone(), *grab_offset);
                self.phase = DragPhase::Dragging {
                    id: id.clone(),
                    pointer: at,
                    grab_offset,
                };
                Some(id)
            }
            DragPhase::Dragging { pointer, .. } => {
                *pointer = at;
                None
            }
        }
    }

    /// Pointer released; returns the dropped id if a drag was in progress
    ///
    /// Always returns the controller to idle.
    pub fn release(&mut self) -> Option<(PhotoId, Point)> {
        match std::mem::take(&mut self.phase) {
            DragPhase::Dragging { id, pointer, .. } => Some((id, pointer)),
            _ => None,
        }
    }

    /// Abort the gesture without committing anything
    ///
    /// Returns true if a drag (or pending press) was discarded.
    pub fn cancel(&mut self) -> bool {
        !matches!(std::mem::take(&mut self.phase), DragPhase::Idle)
    }
}

/// Index of the rectangle whose center is nearest to `point`
///
/// Ties go to the first rectangle in iteration order.
pub fn closest_center(rects: &[Rectangle], point: Point) -> Option<usize> {
    rects
        .iter()
        .enumerate()
        .map(|(index, rect)| (index, rect.center().distance(point)))
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Size;

    fn id(name: &str) -> PhotoId {
        PhotoId::from(name)
    }

    #[test]
    fn test_small_motion_does_not_start_drag() {
        let mut drag = DragController::new(5.0);
        drag.press(id("a"), Point::new(10.0, 10.0), Vector::ZERO);

        assert_eq!(drag.motion(Point::new(12.0, 13.0)), None);
        assert!(drag.active().is_none());

        // Released as a plain click: nothing to commit
        assert_eq!(drag.release(), None);
        assert_eq!(drag.phase(), &DragPhase::Idle);
    }

    #[test]
    fn test_drag_lifecycle() {
        let mut drag = DragController::new(5.0);
        drag.press(id("a"), Point::new(10.0, 10.0), Vector::new(4.0, 6.0));

        assert_eq!(drag.motion(Point::new(30.0, 10.0)), Some(id("a")));
        assert_eq!(drag.active(), Some(&id("a")));

        // Further motion only moves the overlay
        assert_eq!(drag.motion(Point::new(50.0, 40.0)), None);
        assert_eq!(drag.overlay_origin(), Some(Point::new(46.0, 34.0)));

        assert_eq!(drag.release(), Some((id("a"), Point::new(50.0, 40.0))));
        assert!(drag.active().is_none());
    }

    #[test]
    fn test_anchor_moves_pending_press() {
        let mut drag = DragController::new(5.0);
        drag.press(id("a"), Point::new(900.0, 900.0), Vector::new(880.0, 890.0));
        drag.anchor(Point::new(20.0, 10.0));

        assert_eq!(
            drag.phase(),
            &DragPhase::Pressed {
                id: id("a"),
                origin: Point::new(20.0, 10.0),
                grab_offset: Vector::new(0.0, 0.0),
            }
        );

        // The finger has not moved from where it went down
        assert_eq!(drag.motion(Point::new(20.0, 10.0)), None);
        assert!(drag.active().is_none());
    }

    #[test]
    fn test_anchor_ignored_when_not_pressed() {
        let mut drag = DragController::new(0.0);
        drag.anchor(Point::new(5.0, 5.0));
        assert_eq!(drag.phase(), &DragPhase::Idle);

        drag.press(id("a"), Point::ORIGIN, Vector::ZERO);
        drag.motion(Point::new(10.0, 0.0));
        drag.anchor(Point::new(50.0, 50.0));
        assert_eq!(drag.overlay_origin(), Some(Point::new(10.0, 0.0)));
    }

    #[test]
    fn test_cancel_discards_gesture() {
        let mut drag = DragController::default();
        assert!(!drag.cancel());

        drag.press(id("a"), Point::ORIGIN, Vector::ZERO);
        drag.motion(Point::new(100.0, 0.0));
        assert!(drag.cancel());
        assert_eq!(drag.release(), None);
        assert!(drag.overlay_origin().is_none());
    }

    #[test]
    fn test_press_while_dragging_is_ignored() {
        let mut drag = DragController::new(0.0);
        drag.press(id("a"), Point::ORIGIN, Vector::ZERO);
        drag.motion(Point::new(1.0, 0.0));
        drag.press(id("b"), Point::ORIGIN, Vector::ZERO);
        assert_eq!(drag.active(), Some(&id("a")));
    }

    #[test]
    fn test_closest_center() {
        let rects = [
            Rectangle::new(Point::new(0.0, 0.0), Size::new(100.0, 100.0)),
            Rectangle::new(Point::new(110.0, 0.0), Size::new(100.0, 100.0)),
            Rectangle::new(Point::new(0.0, 110.0), Size::new(100.0, 100.0)),
        ];

        assert_eq!(closest_center(&rects, Point::new(20.0, 20.0)), Some(0));
        assert_eq!(closest_center(&rects, Point::new(500.0, 10.0)), Some(1));
        assert_eq!(closest_center(&rects, Point::new(40.0, 190.0)), Some(2));
        // Equidistant from the first two centers
        assert_eq!(closest_center(&rects, Point::new(105.0, 50.0)), Some(0));
        assert_eq!(closest_center(&[], Point::ORIGIN), None);
    }
}
