//! Application state and update logic for the hbplay TUI.

use crate::event::{editor_consumes, key_to_action, Action};
use crate::split::SplitPane;
use crate::ui;
use crate::widgets::EditorState;
use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use hbplay_engine::{render_preview, Debouncer};
use std::time::Instant;

/// Which document the editor pane is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorTab {
    /// The JSON context document (the "controller").
    #[default]
    Context,
    /// The template source.
    Template,
}

impl EditorTab {
    /// Switch to the other tab.
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::Context => Self::Template,
            Self::Template => Self::Context,
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Context => "Context",
            Self::Template => "Template",
        }
    }
}

/// The preview surface: last successful output plus the current error.
///
/// A failed compile keeps the previous output around; the error is shown
/// until the next successful compile clears it.
#[derive(Debug, Default)]
pub struct PreviewState {
    pub output: Option<String>,
    pub error: Option<String>,
    pub scroll: u16,
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Whether the app should quit.
    pub should_quit: bool,

    /// Which editor the left pane shows.
    pub tab: EditorTab,

    /// The JSON context editor.
    pub context: EditorState,

    /// The template source editor.
    pub template: EditorState,

    /// Divider state and split geometry.
    pub split: SplitPane,

    /// Rendered output / error state.
    pub preview: PreviewState,

    /// Coalesces keystrokes into one recompile.
    debounce: Debouncer,

    /// Last known terminal size.
    term_size: (u16, u16),
}

impl App {
    /// Create the app and render the initial preview.
    #[must_use]
    pub fn new(template: &str, context: &str) -> Self {
        let mut app = Self {
            should_quit: false,
            tab: EditorTab::default(),
            context: EditorState::new(context),
            template: EditorState::new(template),
            split: SplitPane::default(),
            preview: PreviewState::default(),
            debounce: Debouncer::default(),
            term_size: (80, 24),
        };
        // Divider position stays unset until a resize reports the real
        // container width; until then layouts center it.
        app.recompile();
        app
    }

    #[must_use]
    pub fn term_size(&self) -> (u16, u16) {
        self.term_size
    }

    /// The editor the current tab selects.
    pub fn active_editor_mut(&mut self) -> &mut EditorState {
        match self.tab {
            EditorTab::Context => &mut self.context,
            EditorTab::Template => &mut self.template,
        }
    }

    #[must_use]
    pub fn active_editor(&self) -> &EditorState {
        match self.tab {
            EditorTab::Context => &self.context,
            EditorTab::Template => &self.template,
        }
    }

    /// Route a key: the active editor first, then the action mapping.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if editor_consumes(key) {
            if self.active_editor_mut().handle_key(key) {
                self.debounce.schedule(now);
            }
            return;
        }
        self.handle_action(key_to_action(key));
    }

    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::SwitchTab => self.tab = self.tab.toggle(),
            Action::Recompile => {
                self.debounce.cancel();
                self.recompile();
            }
            Action::ScrollUp => {
                self.preview.scroll = self.preview.scroll.saturating_sub(1);
            }
            Action::ScrollDown => {
                let max = self.preview_line_count().saturating_sub(1);
                self.preview.scroll = self.preview.scroll.saturating_add(1).min(max);
            }
            Action::None => {}
        }
    }

    /// Route a mouse event. Drag capture is global: only the button-down
    /// has to land on the divider column, moves count wherever they happen.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let (width, height) = self.term_size;
        let main = ui::shell_areas(ratatui::layout::Rect::new(0, 0, width, height)).main;

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if mouse.row >= main.y && mouse.row < main.y + main.height {
                    self.split
                        .on_mouse_down(mouse.column.saturating_sub(main.x), main.width);
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.split
                    .on_mouse_drag(mouse.column.saturating_sub(main.x), main.width);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.split.on_mouse_up();
            }
            MouseEventKind::ScrollUp => self.handle_action(Action::ScrollUp),
            MouseEventKind::ScrollDown => self.handle_action(Action::ScrollDown),
            _ => {}
        }
    }

    /// Terminal resized: re-clamp the divider against the new width.
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        self.term_size = (width, height);
        let main = ui::shell_areas(ratatui::layout::Rect::new(0, 0, width, height)).main;
        self.split.resize(main.width);
    }

    /// Periodic tick: fire a due debounce.
    pub fn tick(&mut self, now: Instant) {
        if self.debounce.fire(now) {
            self.recompile();
        }
    }

    #[must_use]
    pub fn compile_pending(&self) -> bool {
        self.debounce.is_pending()
    }

    /// Compile and render both documents into the preview.
    ///
    /// On success the output replaces the surface wholesale and any prior
    /// error is cleared; on failure the error state is set and the previous
    /// output is kept.
    pub fn recompile(&mut self) {
        match render_preview(&self.template.value(), &self.context.value()) {
            Ok(output) => {
                self.preview.output = Some(output);
                self.preview.error = None;
                self.preview.scroll = 0;
            }
            Err(err) => {
                self.preview.error = Some(err.to_string());
            }
        }
    }

    fn preview_line_count(&self) -> u16 {
        let text = self
            .preview
            .error
            .as_deref()
            .or(self.preview.output.as_deref())
            .unwrap_or("");
        u16::try_from(text.split('\n').count()).unwrap_or(u16::MAX)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(hbplay_engine::SAMPLE_TEMPLATE, hbplay_engine::SAMPLE_CONTEXT)
    }
}
