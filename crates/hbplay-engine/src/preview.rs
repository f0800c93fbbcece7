//! Preview compilation.
//!
//! Wraps the external template compiler: parse the context document as
//! JSON, compile the template source, render. Every failure is caught here
//! and surfaced as a [`PreviewError`]; nothing propagates past the call
//! site and a failed compile simply waits for the next input change.

use std::time::Instant;

use handlebars::Handlebars;
use serde_json::Value;

/// Registry name for the single playground template.
const TEMPLATE_NAME: &str = "playground";

/// Everything that can go wrong between the editors and the preview.
#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    /// The template source is not valid template syntax.
    #[error("template error: {0}")]
    Syntax(#[from] handlebars::TemplateError),

    /// The template compiled but failed while rendering.
    #[error("render error: {0}")]
    Render(#[from] handlebars::RenderError),

    /// The context document is not valid JSON.
    #[error("context error: {0}")]
    Context(#[from] serde_json::Error),
}

/// Parse the context editor's document. A blank document means an empty
/// context rather than a JSON error.
pub fn parse_context(source: &str) -> Result<Value, PreviewError> {
    if source.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(source)?)
}

/// Compile `template` and render it with the JSON `context`.
///
/// The returned string replaces the preview surface wholesale.
pub fn render_preview(template: &str, context: &str) -> Result<String, PreviewError> {
    let started = Instant::now();

    let data = parse_context(context)?;
    let mut registry = Handlebars::new();
    registry.register_template_string(TEMPLATE_NAME, template)?;
    let output = registry.render(TEMPLATE_NAME, &data)?;

    let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    tracing::trace!(elapsed_ms, bytes = output.len(), "template rendered");
    Ok(output)
}

/// Split an error message into display lines.
///
/// Compiler messages span multiple lines (source excerpt, caret); each
/// newline becomes its own line in the preview pane.
pub fn error_lines(message: &str) -> Vec<String> {
    message.split('\n').map(str::to_string).collect()
}
