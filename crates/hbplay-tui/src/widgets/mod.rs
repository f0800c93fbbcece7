//! Reusable widgets for the hbplay TUI.

mod divider;
mod editor;
mod preview;
mod status_bar;
mod tabs;

pub use divider::Divider;
pub use editor::{EditorState, EditorView};
pub use preview::PreviewView;
pub use status_bar::StatusBar;
pub use tabs::TabBar;
