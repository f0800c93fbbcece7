//! Divider drag gesture tracking.
//!
//! Converts a pointer-drag gesture into requested divider positions. The
//! controller only tracks deltas; clamping is left to
//! [`crate::geometry::SplitSpec::compute`], so a mid-drag position may be
//! negative or past the right edge.

/// Gesture state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum DragState {
    #[default]
    Idle,
    Dragging { start_x: u16, start_pos: u16 },
}

/// Tracks an active divider drag.
///
/// `begin` records where the pointer and the divider were when the button
/// went down; every `update` answers `start_pos + (pointer_x - start_x)`.
/// Basing each update on the gesture start rather than the previous move
/// keeps the divider glued to the pointer even after the position was
/// clamped along the way.
#[derive(Debug, Default)]
pub struct DividerDrag {
    state: DragState,
}

impl DividerDrag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a drag: the pointer went down at `pointer_x` while the divider
    /// sat at `divider_pos`.
    pub fn begin(&mut self, pointer_x: u16, divider_pos: u16) {
        self.state = DragState::Dragging {
            start_x: pointer_x,
            start_pos: divider_pos,
        };
    }

    /// The pointer moved to `pointer_x`. Returns the requested divider
    /// position, or `None` when no drag is active.
    #[must_use]
    pub fn update(&self, pointer_x: u16) -> Option<i32> {
        match self.state {
            DragState::Idle => None,
            DragState::Dragging { start_x, start_pos } => {
                Some(i32::from(start_pos) + (i32::from(pointer_x) - i32::from(start_x)))
            }
        }
    }

    /// The pointer was released. Returns whether a drag was active.
    pub fn end(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.state = DragState::Idle;
        was_dragging
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::SplitSpec;

    #[test]
    fn test_idle_ignores_moves() {
        let drag = DividerDrag::new();
        assert!(!drag.is_dragging());
        assert_eq!(drag.update(500), None);
    }

    #[test]
    fn test_drag_lifecycle() {
        let mut drag = DividerDrag::new();
        drag.begin(500, 300);
        assert!(drag.is_dragging());
        assert_eq!(drag.update(520), Some(320));
        assert!(drag.end());
        assert!(!drag.is_dragging());
        assert_eq!(drag.update(520), None);
        assert!(!drag.end());
    }

    #[test]
    fn test_drag_sequence_follows_pointer() {
        // Deltas +50, -20, +5 from a start position of 300 on an 800-wide
        // container land on 350, 330, 335, each within the clamp bounds.
        let spec = SplitSpec::default();
        let mut drag = DividerDrag::new();
        drag.begin(400, 300);

        let mut positions = Vec::new();
        let mut x = 400i32;
        for delta in [50, -20, 5] {
            x += delta;
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let requested = drag.update(x as u16).unwrap();
            positions.push(spec.compute(800, Some(requested)).divider_pos);
        }
        assert_eq!(positions, vec![350, 330, 335]);
    }

    #[test]
    fn test_drag_past_left_edge_requests_negative() {
        let mut drag = DividerDrag::new();
        drag.begin(400, 300);
        assert_eq!(drag.update(0), Some(-100));
        // Geometry clamps it back to the minimum.
        let layout = SplitSpec::default().compute(800, drag.update(0));
        assert_eq!(layout.divider_pos, 100);
    }

    #[test]
    fn test_update_is_anchored_to_gesture_start() {
        // Dragging far past the edge and back should not accumulate error.
        let mut drag = DividerDrag::new();
        drag.begin(400, 300);
        assert_eq!(drag.update(0), Some(-100));
        assert_eq!(drag.update(410), Some(310));
    }
}
