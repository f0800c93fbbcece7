//! Split-pane layout: owns the divider state and maps the computed
//! geometry onto terminal rectangles.
//!
//! The three regions (left pane, divider column, right pane) are recomputed
//! from the container width on every resize and on every drag move; the
//! stored divider position is always the clamped result of the last
//! computation.

use hbplay_engine::{DividerDrag, PaneLayout, SplitSpec};
use ratatui::layout::Rect;

/// Minimum pane width in terminal cells.
pub const MIN_PANE_CELLS: u16 = 20;

/// Divider gutter width in terminal cells.
pub const GUTTER_CELLS: u16 = 1;

/// Owns the divider position and drag state for the two-pane shell.
#[derive(Debug)]
pub struct SplitPane {
    spec: SplitSpec,
    divider_pos: Option<u16>,
    drag: DividerDrag,
}

impl SplitPane {
    #[must_use]
    pub fn new(spec: SplitSpec) -> Self {
        Self {
            spec,
            divider_pos: None,
            drag: DividerDrag::new(),
        }
    }

    /// Compute the layout for the given container width without mutating
    /// the stored position.
    #[must_use]
    pub fn layout(&self, width: u16) -> PaneLayout {
        self.spec.compute(width, self.divider_pos.map(i32::from))
    }

    /// Recompute for a new container width, persisting the clamped divider
    /// position. The split is preserved in absolute cells, not
    /// proportionally.
    pub fn resize(&mut self, width: u16) -> PaneLayout {
        let layout = self.layout(width);
        self.divider_pos = Some(layout.divider_pos);
        layout
    }

    /// Map the computed regions onto `area`.
    #[must_use]
    pub fn regions(&self, area: Rect) -> (Rect, Rect, Rect) {
        let layout = self.layout(area.width);
        let slice = |region: hbplay_engine::Region| Rect {
            x: area.x + region.left,
            y: area.y,
            width: region.width,
            height: area.height,
        };
        (slice(layout.left), slice(layout.divider), slice(layout.right))
    }

    /// Pointer went down at container-relative column `x`. Starts a drag if
    /// it landed on the divider column; returns whether it did.
    pub fn on_mouse_down(&mut self, x: u16, width: u16) -> bool {
        let divider = self.layout(width).divider;
        if x >= divider.left && x < divider.left + divider.width.max(1) {
            self.drag.begin(x, divider.left);
            return true;
        }
        false
    }

    /// Pointer moved to container-relative column `x` with a button held.
    /// Moves are captured globally, so `x` may be anywhere in the terminal;
    /// the computed position is clamped. Returns whether the layout changed.
    pub fn on_mouse_drag(&mut self, x: u16, width: u16) -> bool {
        let Some(requested) = self.drag.update(x) else {
            return false;
        };
        let layout = self.spec.compute(width, Some(requested));
        let moved = self.divider_pos != Some(layout.divider_pos);
        self.divider_pos = Some(layout.divider_pos);
        moved
    }

    /// Pointer released: the only way a drag ends.
    pub fn on_mouse_up(&mut self) -> bool {
        self.drag.end()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    #[must_use]
    pub fn divider_pos(&self) -> Option<u16> {
        self.divider_pos
    }
}

impl Default for SplitPane {
    fn default() -> Self {
        Self::new(SplitSpec::new(MIN_PANE_CELLS, GUTTER_CELLS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout_centers_divider() {
        let split = SplitPane::default();
        let layout = split.layout(80);
        assert_eq!(layout.divider_pos, 40);
        assert_eq!(layout.left.width, 40);
        assert_eq!(layout.divider.width, 1);
        assert_eq!(layout.right.width, 39);
    }

    #[test]
    fn test_regions_are_offset_into_area() {
        let mut split = SplitPane::default();
        split.resize(80);
        let area = Rect::new(0, 1, 80, 20);
        let (left, divider, right) = split.regions(area);

        assert_eq!(left, Rect::new(0, 1, 40, 20));
        assert_eq!(divider, Rect::new(40, 1, 1, 20));
        assert_eq!(right, Rect::new(41, 1, 39, 20));
    }

    #[test]
    fn test_mouse_down_on_divider_starts_drag() {
        let mut split = SplitPane::default();
        split.resize(80);

        assert!(!split.on_mouse_down(10, 80));
        assert!(!split.is_dragging());

        assert!(split.on_mouse_down(40, 80));
        assert!(split.is_dragging());
    }

    #[test]
    fn test_drag_moves_divider() {
        let mut split = SplitPane::default();
        split.resize(80);
        split.on_mouse_down(40, 80);

        assert!(split.on_mouse_drag(50, 80));
        assert_eq!(split.divider_pos(), Some(50));

        // Dragging past the right minimum clamps
        split.on_mouse_drag(79, 80);
        assert_eq!(split.divider_pos(), Some(60));

        assert!(split.on_mouse_up());
        assert!(!split.is_dragging());
    }

    #[test]
    fn test_drag_without_down_is_ignored() {
        let mut split = SplitPane::default();
        split.resize(80);
        assert!(!split.on_mouse_drag(50, 80));
        assert_eq!(split.divider_pos(), Some(40));
    }

    #[test]
    fn test_resize_preserves_absolute_split() {
        let mut split = SplitPane::default();
        split.resize(80);
        split.on_mouse_down(40, 80);
        split.on_mouse_drag(55, 80);
        split.on_mouse_up();

        // Growing the terminal keeps the 55-cell left pane
        let layout = split.resize(120);
        assert_eq!(layout.divider_pos, 55);

        // Shrinking re-clamps it
        let layout = split.resize(60);
        assert_eq!(layout.divider_pos, 40);
    }

    #[test]
    fn test_narrow_terminal_bisects() {
        let mut split = SplitPane::default();
        let layout = split.resize(30);
        assert_eq!(layout.divider_pos, 15);
        assert_eq!(
            layout.left.width + layout.divider.width + layout.right.width,
            30
        );
    }
}
