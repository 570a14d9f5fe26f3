//! Markdown-to-HTML rendering for note bodies.
//!
//! Thin wrapper over pulldown-cmark. Output fidelity follows whatever the
//! parser produces; notes are stored as raw markdown and rendered on
//! demand.

use pulldown_cmark::{html, Options, Parser};

/// Renders markdown content to an HTML string.
///
/// Strikethrough and task-list extensions are enabled to cover the common
/// note-taking constructs.
pub fn render_markdown(content: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(content, options);
    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}
