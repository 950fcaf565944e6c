//! Playable HTML exporter.
//!
//! Writes a single self-contained page: the passages as a JSON data block,
//! a stylesheet, and a small script that renders passages and follows links
//! (see [`crate::player`] for the rendering rules). The page references no
//! external resources.
//!
//! Passage content is embedded with plain JSON serialization. Content that
//! contains `</script>` will end the data block early and break the page.

use std::io::{self, Write};

use crate::escape::escape_html;
use crate::format::Format;
use crate::model::{DEFAULT_START_PASSAGE, Story};

use super::Exporter;

const STYLESHEET: &str = include_str!("assets/playable.css");
const PLAYER_SCRIPT: &str = include_str!("assets/player.js");

/// Configuration for playable HTML export.
#[derive(Debug, Clone)]
pub struct HtmlConfig {
    /// Value of the document's `lang` attribute.
    pub lang: String,
    /// Embed the default stylesheet.
    pub include_style: bool,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            lang: "en".to_string(),
            include_style: true,
        }
    }
}

impl HtmlConfig {
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    pub fn with_style(mut self, include_style: bool) -> Self {
        self.include_style = include_style;
        self
    }
}

/// Exporter for standalone playable HTML.
#[derive(Debug, Clone, Default)]
pub struct HtmlExporter {
    config: HtmlConfig,
}

impl HtmlExporter {
    /// Create a new HtmlExporter with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an HtmlExporter with the specified configuration.
    pub fn with_config(config: HtmlConfig) -> Self {
        Self { config }
    }

    /// Render the complete document.
    pub fn render(&self, story: &Story) -> io::Result<String> {
        let passages_json = serde_json::to_string(&story.passages)?;
        let title = escape_html(&story.title);
        let heading = format!("<h1>{title}</h1>");

        let mut doc = String::with_capacity(
            STYLESHEET.len() + PLAYER_SCRIPT.len() + passages_json.len() + 512,
        );

        doc.push_str("<!DOCTYPE html>\n");
        doc.push_str(&format!(
            "<html lang=\"{}\">\n",
            escape_html(&self.config.lang)
        ));
        doc.push_str("<head>\n<meta charset=\"UTF-8\">\n");
        doc.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        doc.push_str(&format!("<title>{title}</title>\n"));

        if self.config.include_style {
            doc.push_str("<style>\n");
            doc.push_str(STYLESHEET);
            doc.push_str("</style>\n");
        }

        let start = match story.start_passage.as_str() {
            "" => DEFAULT_START_PASSAGE,
            name => name,
        };

        doc.push_str("</head>\n<body>\n<div id=\"story\"></div>\n<script>\n");
        doc.push_str(&format!("const passages = {passages_json};\n"));
        doc.push_str(&format!(
            "const startPassage = {};\n",
            js_string(start)?
        ));
        doc.push_str(&format!("const heading = {};\n", js_string(&heading)?));
        doc.push_str("</script>\n<script>\n");
        doc.push_str(PLAYER_SCRIPT);
        doc.push_str("</script>\n</body>\n</html>\n");

        Ok(doc)
    }
}

impl Exporter for HtmlExporter {
    fn format(&self) -> Format {
        Format::Html
    }

    fn export<W: Write>(&self, story: &Story, writer: &mut W) -> io::Result<()> {
        writer.write_all(self.render(story)?.as_bytes())
    }
}

/// Render a playable document with the default configuration.
pub fn render_playable_document(story: &Story) -> io::Result<String> {
    HtmlExporter::new().render(story)
}

/// Encode a string as a JavaScript string literal that is safe inside `<script>`.
fn js_string(s: &str) -> io::Result<String> {
    Ok(serde_json::to_string(s)?.replace('<', "\\u003c"))
}
