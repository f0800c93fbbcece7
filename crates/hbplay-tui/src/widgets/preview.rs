//! Preview pane: the rendered output, or the current compile error.
//!
//! The output replaces the pane wholesale on every successful compile;
//! while an error is present its message is shown instead, one display
//! line per newline in the compiler's message.

use crate::theme::Styles;
use hbplay_engine::error_lines;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Block, Paragraph, Widget},
};

pub struct PreviewView<'a> {
    output: Option<&'a str>,
    error: Option<&'a str>,
    scroll: u16,
    block: Option<Block<'a>>,
}

impl<'a> PreviewView<'a> {
    #[must_use]
    pub fn new(output: Option<&'a str>, error: Option<&'a str>) -> Self {
        Self {
            output,
            error,
            scroll: 0,
            block: None,
        }
    }

    /// Set the vertical scroll offset.
    #[must_use]
    pub fn scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }

    /// Set the block for the preview.
    #[must_use]
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

impl Widget for PreviewView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = if let Some(block) = &self.block {
            let inner = block.inner(area);
            block.clone().render(area, buf);
            inner
        } else {
            area
        };

        if inner.height < 1 || inner.width < 1 {
            return;
        }

        let lines: Vec<Line<'_>> = if let Some(message) = self.error {
            error_lines(message)
                .into_iter()
                .map(|l| Line::styled(l, Styles::error()))
                .collect()
        } else if let Some(output) = self.output {
            output
                .split('\n')
                .map(|l| Line::styled(l.to_string(), Styles::default()))
                .collect()
        } else {
            vec![Line::styled(
                "Type in the editor to render a preview".to_string(),
                Styles::dim(),
            )]
        };

        Paragraph::new(lines)
            .scroll((self.scroll, 0))
            .render(inner, buf);
    }
}
