//! Bottom status bar: key hints on the left, compile status on the right.

use crate::theme::Styles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

const HINTS: &str = " Tab switch editor  drag │ resize  Ctrl+R render  Ctrl+C quit";

/// One-line status bar.
#[derive(Debug, Clone)]
pub struct StatusBar<'a> {
    error: Option<&'a str>,
}

impl<'a> StatusBar<'a> {
    #[must_use]
    pub fn new(error: Option<&'a str>) -> Self {
        Self { error }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }

        buf.set_line(area.x, area.y, &Line::styled(HINTS, Styles::dim()), area.width);

        // Right-aligned status: the first line of the error, or "ok".
        let status = match self.error {
            Some(message) => {
                let first = message.split('\n').next().unwrap_or(message);
                Span::styled(first.to_string(), Styles::error())
            }
            None => Span::styled("ok".to_string(), Styles::success()),
        };

        let width = u16::try_from(status.content.width()).unwrap_or(u16::MAX);
        if width + 1 < area.width {
            buf.set_span(area.x + area.width - width - 1, area.y, &status, width);
        }
    }
}
