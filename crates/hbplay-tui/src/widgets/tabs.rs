//! Editor tab bar: Context | Template.

use crate::theme::Styles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

/// A horizontal tab bar for the editor pane.
#[derive(Debug, Clone)]
pub struct TabBar<'a> {
    titles: Vec<&'a str>,
    selected: usize,
}

impl<'a> TabBar<'a> {
    pub fn new(titles: Vec<&'a str>) -> Self {
        Self {
            titles,
            selected: 0,
        }
    }

    /// Set the selected tab index.
    #[must_use]
    pub fn select(mut self, index: usize) -> Self {
        self.selected = index;
        self
    }
}

impl Widget for TabBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }

        let mut spans = vec![Span::raw(" ")];
        for (i, title) in self.titles.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", Styles::dim()));
            }
            if i == self.selected {
                spans.push(Span::styled(format!("[{title}]"), Styles::highlight()));
            } else {
                spans.push(Span::styled(format!(" {title} "), Styles::dim()));
            }
        }
        spans.push(Span::styled("  (Tab switches)", Styles::dim()));

        let line = Line::from(spans);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
