//! JSON backup exporter.
//!
//! A direct structural dump of the [`Story`]: no renaming, no omission. The
//! result reads back with [`crate::import::parse_json`].

use std::io::{self, Write};

use crate::format::Format;
use crate::model::Story;

use super::Exporter;

/// Configuration for JSON backup export.
#[derive(Debug, Clone)]
pub struct JsonConfig {
    /// Indent with two spaces instead of writing one line.
    pub pretty: bool,
}

impl Default for JsonConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

/// Exporter for JSON backups.
#[derive(Debug, Clone, Default)]
pub struct JsonExporter {
    config: JsonConfig,
}

impl JsonExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: JsonConfig) -> Self {
        Self { config }
    }

    /// Serialize the story to backup text.
    pub fn render(&self, story: &Story) -> io::Result<String> {
        let json = if self.config.pretty {
            serde_json::to_string_pretty(story)?
        } else {
            serde_json::to_string(story)?
        };
        Ok(json)
    }
}

impl Exporter for JsonExporter {
    fn format(&self) -> Format {
        Format::Json
    }

    fn export<W: Write>(&self, story: &Story, writer: &mut W) -> io::Result<()> {
        writer.write_all(self.render(story)?.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::parse_json;
    use crate::model::Passage;

    fn story() -> Story {
        let mut story = Story::new("Cave").with_start_passage("A");
        story.add_passage(Passage::new("A", "[[B]]").at(100.0, 100.0));
        story.add_passage(Passage::new("B", "End.").at(300.0, 100.0));
        story
    }

    #[test]
    fn test_pretty_output_indents_two_spaces() {
        let json = JsonExporter::new().render(&story()).unwrap();
        assert!(json.starts_with("{\n  \"title\": \"Cave\",\n  \"startPassage\": \"A\","));
        assert!(json.contains("\n    \"A\": {"));
    }

    #[test]
    fn test_compact_output() {
        let exporter = JsonExporter::with_config(JsonConfig { pretty: false });
        let json = exporter.render(&story()).unwrap();
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_reads_back() {
        let story = story();
        let json = JsonExporter::new().render(&story).unwrap();
        assert_eq!(parse_json(&json), Some(story));
    }
}
