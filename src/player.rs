//! Passage rendering for playable documents.
//!
//! [`render_passage`] turns one passage into the markup a reader sees:
//! links become clickable spans, blank lines split paragraphs, and single
//! newlines become line breaks. The script embedded by
//! [`crate::export::HtmlExporter`] does exactly the same in the browser; the
//! Rust version exists for previews and to keep both in step.
//!
//! Passage text is trusted markup and is inserted as-is. Only the title,
//! link targets, and missing passage names are escaped.

use std::collections::BTreeMap;

use crate::escape::escape_html;
use crate::model::{Link, Passage, Story, replace_links};

/// CSS class carried by link spans.
pub const LINK_CLASS: &str = "link";

/// Render the passage called `name` as it appears in a playable document.
///
/// # Example
///
/// ```
/// use storyweave::model::{Passage, Story};
/// use storyweave::player::render_passage;
///
/// let mut story = Story::new("Cave");
/// story.add_passage(Passage::new("Start", "Dark.\n\n[[Go North|north]]"));
///
/// let html = render_passage(&story.passages, &story.title, "Start");
/// assert_eq!(
///     html,
///     "<h1>Cave</h1><p>Dark.</p><p><span class=\"link\" data-target=\"north\">Go North</span></p>"
/// );
/// ```
pub fn render_passage(passages: &BTreeMap<String, Passage>, title: &str, name: &str) -> String {
    let Some(passage) = passages.get(name) else {
        return not_found(name);
    };

    let mut out = format!("<h1>{}</h1>", escape_html(title));
    out.push_str(&render_paragraphs(&render_links(&passage.content)));
    out
}

/// Message shown when navigation reaches a passage that does not exist.
pub fn not_found(name: &str) -> String {
    format!("<p>Passage not found: {}</p>", escape_html(name))
}

/// Replace link markup with clickable spans.
pub fn render_links(content: &str) -> String {
    replace_links(content, link_span)
}

fn link_span(link: &Link) -> String {
    format!(
        "<span class=\"{LINK_CLASS}\" data-target=\"{}\">{}</span>",
        escape_html(&link.target),
        link.display
    )
}

/// Split on blank lines into `<p>` blocks, turning single newlines into `<br>`.
pub fn render_paragraphs(content: &str) -> String {
    content
        .split("\n\n")
        .map(|para| format!("<p>{}</p>", para.replace('\n', "<br>")))
        .collect()
}

impl Story {
    /// Render a passage of this story as it appears in a playable document.
    pub fn render(&self, name: &str) -> String {
        render_passage(&self.passages, &self.title, name)
    }

    /// Render the start passage.
    pub fn render_start(&self) -> String {
        self.render(&self.start_passage)
    }
}
