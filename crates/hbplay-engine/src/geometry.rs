//! Split-pane geometry.
//!
//! Pure functions that compute the left pane, divider column and right pane
//! from a container width and a requested divider position. The caller owns
//! the divider position; this module only clamps and measures.

/// Minimum pane width in the canonical (pixel-scale) spec.
pub const MIN_PANE_WIDTH: u16 = 100;

/// Width of the divider gutter in the canonical (pixel-scale) spec.
pub const GUTTER_WIDTH: u16 = 10;

/// Parameters of a vertical split: the minimum width either pane may be
/// dragged down to, and the width of the divider gutter between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitSpec {
    pub min_pane: u16,
    pub gutter: u16,
}

impl Default for SplitSpec {
    fn default() -> Self {
        Self {
            min_pane: MIN_PANE_WIDTH,
            gutter: GUTTER_WIDTH,
        }
    }
}

/// A horizontal slice of the container: offset from its left edge and width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Region {
    pub left: u16,
    pub width: u16,
}

/// Computed geometry for the three split regions.
///
/// Invariant: `left.width + divider.width + right.width` equals the
/// container width passed to [`SplitSpec::compute`], for every input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneLayout {
    /// The clamped divider position (start of the gutter column).
    pub divider_pos: u16,
    pub left: Region,
    pub divider: Region,
    pub right: Region,
}

impl SplitSpec {
    /// Create a split spec with custom dimensions (e.g. terminal cells).
    #[must_use]
    pub fn new(min_pane: u16, gutter: u16) -> Self {
        Self { min_pane, gutter }
    }

    /// Narrowest container that can satisfy both pane minimums.
    #[must_use]
    pub fn min_container(&self) -> u16 {
        self.min_pane.saturating_mul(2)
    }

    /// Compute the layout for a container of the given width.
    ///
    /// `requested` is the divider position the caller wants (typically the
    /// previous position, or a mid-drag position which may be negative or
    /// past the right edge); `None` defaults to the container center. The
    /// result is clamped to `[min_pane, container - min_pane]`.
    ///
    /// When the container is too narrow for two minimum panes the clamp
    /// interval is empty; the requested position is ignored and the divider
    /// bisects the container instead. Pane widths then fall below
    /// `min_pane`, saturating at zero, and the gutter itself is truncated at
    /// the container edge if even it does not fit.
    #[must_use]
    pub fn compute(&self, container: u16, requested: Option<i32>) -> PaneLayout {
        let center = container.div_ceil(2);

        let lo = self.min_pane;
        let hi = container.saturating_sub(self.min_pane);

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let divider_pos = if lo <= hi {
            requested
                .unwrap_or(i32::from(center))
                .clamp(i32::from(lo), i32::from(hi)) as u16
        } else {
            tracing::debug!(container, min_pane = self.min_pane, "degenerate split, bisecting");
            center
        };

        let gutter = self.gutter.min(container - divider_pos);

        PaneLayout {
            divider_pos,
            left: Region {
                left: 0,
                width: divider_pos,
            },
            divider: Region {
                left: divider_pos,
                width: gutter,
            },
            right: Region {
                left: divider_pos + gutter,
                width: container - divider_pos - gutter,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> SplitSpec {
        SplitSpec::default()
    }

    #[test]
    fn test_default_centers_divider() {
        // computeLayout(800, null)
        let layout = spec().compute(800, None);
        assert_eq!(layout.divider_pos, 400);
        assert_eq!(layout.left, Region { left: 0, width: 400 });
        assert_eq!(layout.divider, Region { left: 400, width: 10 });
        assert_eq!(layout.right, Region { left: 410, width: 390 });
    }

    #[test]
    fn test_clamps_to_left_minimum() {
        // computeLayout(800, 50) clamps to 100
        let layout = spec().compute(800, Some(50));
        assert_eq!(layout.divider_pos, 100);
        assert_eq!(layout.left, Region { left: 0, width: 100 });
        assert_eq!(layout.divider, Region { left: 100, width: 10 });
        assert_eq!(layout.right, Region { left: 110, width: 690 });
    }

    #[test]
    fn test_clamps_to_right_minimum() {
        // computeLayout(800, 750) clamps to 700
        let layout = spec().compute(800, Some(750));
        assert_eq!(layout.divider_pos, 700);
        assert_eq!(layout.right.width, 90);
    }

    #[test]
    fn test_negative_request_clamps_to_minimum() {
        let layout = spec().compute(800, Some(-300));
        assert_eq!(layout.divider_pos, 100);
    }

    #[test]
    fn test_widths_sum_to_container() {
        for container in [200, 201, 350, 799, 800, 1000] {
            for requested in [None, Some(-50), Some(0), Some(100), Some(399), Some(5000)] {
                let layout = spec().compute(container, requested);
                assert_eq!(
                    layout.left.width + layout.divider.width + layout.right.width,
                    container,
                    "container={container} requested={requested:?}"
                );
                assert_eq!(layout.divider.width, 10);
            }
        }
    }

    #[test]
    fn test_divider_stays_within_bounds() {
        for container in [200, 250, 800, 2000] {
            for requested in [Some(i32::MIN), Some(-1), Some(0), Some(500), Some(i32::MAX)] {
                let layout = spec().compute(container, requested);
                assert!(layout.divider_pos >= 100);
                assert!(layout.divider_pos <= container - 100);
            }
        }
    }

    #[test]
    fn test_compute_is_pure() {
        let a = spec().compute(800, Some(321));
        let b = spec().compute(800, Some(321));
        assert_eq!(a, b);
    }

    #[test]
    fn test_resize_preserves_absolute_position() {
        // A 400-cell split on an 800-wide container survives growth to 900
        // unchanged; the position is absolute, not proportional.
        let before = spec().compute(800, None);
        assert_eq!(before.divider_pos, 400);
        let after = spec().compute(900, Some(i32::from(before.divider_pos)));
        assert_eq!(after.divider_pos, 400);
    }

    #[test]
    fn test_resize_reclamps_out_of_range_position() {
        let wide = spec().compute(1000, Some(850));
        assert_eq!(wide.divider_pos, 850);
        let narrow = spec().compute(600, Some(i32::from(wide.divider_pos)));
        assert_eq!(narrow.divider_pos, 500);
    }

    #[test]
    fn test_degenerate_container_bisects() {
        // computeLayout(150, null): both 100-wide floors cannot hold, so the
        // divider bisects and the panes shrink below the minimum.
        let layout = spec().compute(150, None);
        assert_eq!(layout.divider_pos, 75);
        assert_eq!(layout.left, Region { left: 0, width: 75 });
        assert_eq!(layout.divider, Region { left: 75, width: 10 });
        assert_eq!(layout.right, Region { left: 85, width: 65 });
    }

    #[test]
    fn test_degenerate_ignores_requested_position() {
        let layout = spec().compute(150, Some(140));
        assert_eq!(layout.divider_pos, 75);
    }

    #[test]
    fn test_degenerate_sum_holds_down_to_zero() {
        for container in 0..200 {
            let layout = spec().compute(container, None);
            assert_eq!(
                layout.left.width + layout.divider.width + layout.right.width,
                container
            );
        }
    }

    #[test]
    fn test_tiny_container_truncates_gutter() {
        // Not even the gutter fits; it is cut at the container edge and the
        // right pane collapses to nothing.
        let layout = spec().compute(5, None);
        assert_eq!(layout.divider_pos, 3);
        assert_eq!(layout.divider, Region { left: 3, width: 2 });
        assert_eq!(layout.right, Region { left: 5, width: 0 });
    }

    #[test]
    fn test_terminal_scale_spec() {
        let spec = SplitSpec::new(20, 1);
        let layout = spec.compute(80, None);
        assert_eq!(layout.divider_pos, 40);
        assert_eq!(layout.divider.width, 1);
        assert_eq!(layout.right, Region { left: 41, width: 39 });

        let clamped = spec.compute(80, Some(75));
        assert_eq!(clamped.divider_pos, 60);
    }
}
