//! hbplay-tui: Terminal UI for the hbplay template playground
//!
//! This crate provides the TUI layer for hbplay, including:
//! - The split-pane shell (tabbed editor | divider | live preview)
//! - Mouse-driven divider resizing
//! - Debounced recompilation on every edit

mod app;
mod event;
mod split;
#[cfg(test)]
mod test_utils;
mod theme;
mod ui;
mod widgets;

pub use app::{App, EditorTab, PreviewState};
pub use event::{Action, Event, EventHandler};
pub use hbplay_engine;
pub use split::SplitPane;
pub use widgets::EditorState;

use crossterm::{
    cursor::Show as ShowCursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use std::time::Instant;

/// RAII guard for terminal state restoration.
///
/// Also what guarantees mouse capture (and with it any in-flight divider
/// drag) is released on every exit path, including panics.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen, ShowCursor);
    }
}

/// Run the TUI application with the given starting documents.
///
/// This is the main entry point for the TUI. It sets up the terminal,
/// runs the event loop, and restores the terminal on exit.
pub async fn run_tui(template: String, context: String) -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal with RAII guard for cleanup
    enable_raw_mode()?;
    let _guard = TerminalGuard;

    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and seed the layout with the real terminal size
    let mut app = App::new(&template, &context);
    let size = terminal.size()?;
    app.handle_resize(size.width, size.height);

    // Create event handler (10 Hz tick rate keeps the debounce responsive)
    let mut events = EventHandler::new(100);

    // Main loop
    let result = run_loop(&mut terminal, &mut app, &mut events).await;

    // Restore cursor before guard drops
    terminal.show_cursor()?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        // Draw
        terminal.draw(|frame| ui::render(app, frame))?;

        // Handle events
        if let Some(event) = events.next().await {
            match event {
                Event::Key(key) => app.handle_key(key, Instant::now()),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                Event::Tick => app.tick(Instant::now()),
                Event::Resize(width, height) => app.handle_resize(width, height),
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Get the TUI version.
pub fn tui_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tui_version() {
        let version = tui_version();
        assert!(!version.is_empty());
        assert!(version.starts_with("0."));
    }
}
