//! hbplay-engine: Headless core for the hbplay template playground
//!
//! This crate provides the UI-independent logic for hbplay, including:
//! - Split-pane geometry (divider clamping, pane widths)
//! - Divider drag gesture tracking
//! - Debounced recompile scheduling
//! - Template compilation and preview rendering

pub mod debounce;
pub mod drag;
pub mod geometry;
pub mod preview;
pub mod samples;

// Re-export commonly used types
pub use debounce::{Debouncer, PREVIEW_DEBOUNCE};
pub use drag::DividerDrag;
pub use geometry::{PaneLayout, Region, SplitSpec, GUTTER_WIDTH, MIN_PANE_WIDTH};
pub use preview::{error_lines, render_preview, PreviewError};
pub use samples::{SAMPLE_CONTEXT, SAMPLE_TEMPLATE};

/// Returns the engine version.
pub fn engine_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_version() {
        let version = engine_version();
        assert!(!version.is_empty());
        assert!(version.starts_with("0."));
    }
}
