//! Shell layout and frame rendering.
//!
//! Three rows: tab bar, split main area, status bar. The main area is the
//! split-pane container; its regions come from [`crate::split::SplitPane`].

use crate::app::{App, EditorTab};
use crate::theme::Styles;
use crate::widgets::{Divider, PreviewView, StatusBar, TabBar};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Minimum terminal width.
pub const MIN_WIDTH: u16 = 24;
/// Minimum terminal height.
pub const MIN_HEIGHT: u16 = 6;

/// The three shell regions.
pub struct ShellAreas {
    pub tabs: Rect,
    pub main: Rect,
    pub status: Rect,
}

/// Divide the terminal into tab bar, main area and status bar.
///
/// Also used for mouse hit-testing, so it must stay in sync with
/// [`render`].
#[must_use]
pub fn shell_areas(area: Rect) -> ShellAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tab bar
            Constraint::Min(0),    // Split panes
            Constraint::Length(1), // Status bar
        ])
        .split(area);
    ShellAreas {
        tabs: chunks[0],
        main: chunks[1],
        status: chunks[2],
    }
}

/// Render one frame.
pub fn render(app: &App, frame: &mut Frame<'_>) {
    let area = frame.area();

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        render_too_small(frame, area);
        return;
    }

    let areas = shell_areas(area);

    let tab_index = match app.tab {
        EditorTab::Context => 0,
        EditorTab::Template => 1,
    };
    frame.render_widget(
        TabBar::new(vec!["Context", "Template"]).select(tab_index),
        areas.tabs,
    );

    let (left, divider, right) = app.split.regions(areas.main);

    let editor_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border(true))
        .title(format!(" {} ", app.tab.title()))
        .title_style(Styles::highlight());
    frame.render_widget(app.active_editor().widget().block(editor_block), left);

    frame.render_widget(Divider::new(app.split.is_dragging()), divider);

    let preview_border = if app.preview.error.is_some() {
        Styles::error()
    } else {
        Styles::border(false)
    };
    let preview_block = Block::default()
        .borders(Borders::ALL)
        .border_style(preview_border)
        .title(" Preview ")
        .title_style(Styles::dim());
    frame.render_widget(
        PreviewView::new(app.preview.output.as_deref(), app.preview.error.as_deref())
            .scroll(app.preview.scroll)
            .block(preview_block),
        right,
    );

    frame.render_widget(StatusBar::new(app.preview.error.as_deref()), areas.status);
}

/// Render "terminal too small" warning.
fn render_too_small(frame: &mut Frame<'_>, area: Rect) {
    let warning = Paragraph::new(format!("Terminal too small (min {MIN_WIDTH}x{MIN_HEIGHT})"))
        .style(Styles::error())
        .alignment(Alignment::Center);
    frame.render_widget(warning, area);
}
