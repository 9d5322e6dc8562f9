//! Message body formatting: Markdown rendering and diagnosis label styling.

pub mod markdown;
pub mod postprocess;

/// Render an AI reply from raw Markdown to styled HTML.
pub fn render_ai_html(raw: &str) -> String {
    postprocess::postprocess(&markdown::render_markdown_html(raw))
}
