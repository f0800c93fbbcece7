//! The draggable divider column between the panes.

use crate::theme::Styles;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

const GLYPH: &str = "│";

/// Vertical divider bar; highlighted while a drag is active.
#[derive(Debug, Clone, Copy)]
pub struct Divider {
    dragging: bool,
}

impl Divider {
    #[must_use]
    pub fn new(dragging: bool) -> Self {
        Self { dragging }
    }
}

impl Widget for Divider {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = if self.dragging {
            Styles::highlight()
        } else {
            Styles::dim()
        };
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                buf[(x, y)].set_symbol(GLYPH).set_style(style);
            }
        }
    }
}
