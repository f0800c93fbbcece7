//! Multi-line editor state and widget.
//!
//! The state is the editing surface the rest of the app talks to: it holds
//! the document, exposes `value()` and reports whether a key changed the
//! content so the caller can schedule a recompile.

use crate::theme::Styles;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Line-oriented editor state with a character-indexed cursor.
#[derive(Debug, Clone)]
pub struct EditorState {
    lines: Vec<String>,
    cursor_line: usize,
    /// Cursor column as a character index into the current line.
    cursor_col: usize,
}

impl EditorState {
    #[must_use]
    pub fn new(content: &str) -> Self {
        let mut lines: Vec<String> = content.split('\n').map(str::to_string).collect();
        if lines.is_empty() {
            lines.push(String::new());
        }
        Self {
            lines,
            cursor_line: 0,
            cursor_col: 0,
        }
    }

    /// The full document (the `getValue()` surface).
    #[must_use]
    pub fn value(&self) -> String {
        self.lines.join("\n")
    }

    #[must_use]
    pub fn cursor(&self) -> (usize, usize) {
        (self.cursor_line, self.cursor_col)
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn current_line(&self) -> &str {
        &self.lines[self.cursor_line]
    }

    fn current_len(&self) -> usize {
        self.current_line().chars().count()
    }

    fn byte_index(line: &str, col: usize) -> usize {
        line.char_indices().nth(col).map_or(line.len(), |(i, _)| i)
    }

    pub fn insert(&mut self, c: char) {
        let at = Self::byte_index(self.current_line(), self.cursor_col);
        self.lines[self.cursor_line].insert(at, c);
        self.cursor_col += 1;
    }

    pub fn insert_newline(&mut self) {
        let at = Self::byte_index(self.current_line(), self.cursor_col);
        let rest = self.lines[self.cursor_line].split_off(at);
        self.lines.insert(self.cursor_line + 1, rest);
        self.cursor_line += 1;
        self.cursor_col = 0;
    }

    /// Delete the character before the cursor, joining lines at a line
    /// start. Returns whether anything changed.
    pub fn backspace(&mut self) -> bool {
        if self.cursor_col > 0 {
            let at = Self::byte_index(self.current_line(), self.cursor_col - 1);
            self.lines[self.cursor_line].remove(at);
            self.cursor_col -= 1;
            true
        } else if self.cursor_line > 0 {
            let removed = self.lines.remove(self.cursor_line);
            self.cursor_line -= 1;
            self.cursor_col = self.current_len();
            self.lines[self.cursor_line].push_str(&removed);
            true
        } else {
            false
        }
    }

    /// Delete the character under the cursor, joining lines at a line end.
    pub fn delete(&mut self) -> bool {
        if self.cursor_col < self.current_len() {
            let at = Self::byte_index(self.current_line(), self.cursor_col);
            self.lines[self.cursor_line].remove(at);
            true
        } else if self.cursor_line + 1 < self.lines.len() {
            let next = self.lines.remove(self.cursor_line + 1);
            self.lines[self.cursor_line].push_str(&next);
            true
        } else {
            false
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor_col > 0 {
            self.cursor_col -= 1;
        } else if self.cursor_line > 0 {
            self.cursor_line -= 1;
            self.cursor_col = self.current_len();
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor_col < self.current_len() {
            self.cursor_col += 1;
        } else if self.cursor_line + 1 < self.lines.len() {
            self.cursor_line += 1;
            self.cursor_col = 0;
        }
    }

    pub fn move_up(&mut self) {
        if self.cursor_line > 0 {
            self.cursor_line -= 1;
            self.cursor_col = self.cursor_col.min(self.current_len());
        }
    }

    pub fn move_down(&mut self) {
        if self.cursor_line + 1 < self.lines.len() {
            self.cursor_line += 1;
            self.cursor_col = self.cursor_col.min(self.current_len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor_col = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor_col = self.current_len();
    }

    /// Apply a key the event layer routed to the editor. Returns whether
    /// the content changed (movement keys are handled but return false).
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) => {
                self.insert(c);
                true
            }
            KeyCode::Enter => {
                self.insert_newline();
                true
            }
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => {
                self.move_left();
                false
            }
            KeyCode::Right => {
                self.move_right();
                false
            }
            KeyCode::Up => {
                self.move_up();
                false
            }
            KeyCode::Down => {
                self.move_down();
                false
            }
            KeyCode::Home => {
                self.move_home();
                false
            }
            KeyCode::End => {
                self.move_end();
                false
            }
            _ => false,
        }
    }

    /// Create a widget from this state.
    #[must_use]
    pub fn widget(&self) -> EditorView<'_> {
        EditorView {
            state: self,
            block: None,
            focused: true,
        }
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new("")
    }
}

/// Renders an [`EditorState`] with a visible cursor cell.
pub struct EditorView<'a> {
    state: &'a EditorState,
    block: Option<Block<'a>>,
    focused: bool,
}

impl<'a> EditorView<'a> {
    /// Set the block for the editor.
    #[must_use]
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    /// Set focus state; the cursor is only drawn when focused.
    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for EditorView<'_> {
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

        let height = usize::from(inner.height);
        let (cursor_line, cursor_col) = self.state.cursor();

        // Keep the cursor line in view; derived, not stored.
        let scroll = cursor_line.saturating_sub(height - 1);

        let mut lines = Vec::new();
        for (idx, text) in self
            .state
            .lines
            .iter()
            .enumerate()
            .skip(scroll)
            .take(height)
        {
            if self.focused && idx == cursor_line {
                lines.push(line_with_cursor(text, cursor_col));
            } else {
                lines.push(Line::styled(truncate(text, inner.width), Styles::default()));
            }
        }

        Paragraph::new(lines).render(inner, buf);
    }
}

/// Split a line into before/cursor/after spans, with a phantom cell at the
/// end of the line.
fn line_with_cursor(text: &str, col: usize) -> Line<'static> {
    let at = EditorState::byte_index(text, col);
    let before = &text[..at];
    let mut rest = text[at..].chars();
    let under = rest.next().map_or_else(|| " ".to_string(), String::from);
    let after: String = rest.collect();

    Line::from(vec![
        Span::styled(before.to_string(), Styles::default()),
        Span::styled(under, Styles::cursor()),
        Span::styled(after, Styles::default()),
    ])
}

/// Truncate a line to the pane width (no horizontal scrolling).
fn truncate(text: &str, width: u16) -> String {
    let width = usize::from(width);
    if text.width() <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0usize;
    for c in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(c);
    }
    out
}
