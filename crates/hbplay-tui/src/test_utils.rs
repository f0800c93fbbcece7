//! Test utilities for hbplay-tui rendering tests.

use crate::app::App;
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

/// Render the full app shell into a string, one row per line.
pub fn render_app_to_string(app: &App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("Failed to create test terminal");
    terminal
        .draw(|frame| crate::ui::render(app, frame))
        .expect("Failed to draw frame");
    buffer_to_string(terminal.backend().buffer())
}

/// Convert a buffer to a plain-text grid.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}
