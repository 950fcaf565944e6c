//! Story and passage types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::links::{Link, find_links};

/// Start passage name used when an import cannot determine one.
pub const DEFAULT_START_PASSAGE: &str = "Start";

/// A named unit of story content.
///
/// `x` and `y` are layout coordinates for a visual editor. They play no part
/// in reading the story.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Passage {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

impl Passage {
    /// Create a passage at the origin.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            x: 0.0,
            y: 0.0,
        }
    }

    /// Set the layout position.
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Links in this passage's content, in order of appearance.
    pub fn links(&self) -> Vec<Link> {
        find_links(&self.content)
            .into_iter()
            .map(|span| span.link)
            .collect()
    }
}

/// A story graph: passages keyed by name plus the passage to show first.
///
/// This is also the shape of the JSON backup format, so field names follow
/// the backup's camelCase keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    pub title: String,
    pub start_passage: String,
    pub passages: BTreeMap<String, Passage>,
}

impl Story {
    /// Create an empty story starting at [`DEFAULT_START_PASSAGE`].
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            start_passage: DEFAULT_START_PASSAGE.to_string(),
            passages: BTreeMap::new(),
        }
    }

    /// Set the start passage name.
    pub fn with_start_passage(mut self, name: impl Into<String>) -> Self {
        self.start_passage = name.into();
        self
    }

    /// Insert a passage keyed by its name, replacing any passage with the same name.
    pub fn add_passage(&mut self, passage: Passage) {
        self.passages.insert(passage.name.clone(), passage);
    }

    /// Look up a passage by name.
    pub fn passage(&self, name: &str) -> Option<&Passage> {
        self.passages.get(name)
    }

    /// The start passage, if it exists.
    pub fn start(&self) -> Option<&Passage> {
        self.passage(&self.start_passage)
    }

    pub fn passage_count(&self) -> usize {
        self.passages.len()
    }

    /// Links whose target names no passage, as `(source passage, link)` pairs.
    ///
    /// This is a report only. Dangling links are legal and show up as a
    /// "not found" message when followed in a playable document.
    pub fn dangling_links(&self) -> Vec<(&str, Link)> {
        let mut dangling = Vec::new();
        for (name, passage) in &self.passages {
            for link in passage.links() {
                if !self.passages.contains_key(&link.target) {
                    dangling.push((name.as_str(), link));
                }
            }
        }
        dangling
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Story {
        let mut story = Story::new("Cave").with_start_passage("Entrance");
        story.add_passage(Passage::new("Entrance", "Dark. [[Go in|Hall]] or [[Leave]]"));
        story.add_passage(Passage::new("Hall", "A hall.").at(300.0, 100.0));
        story
    }

    #[test]
    fn test_new_story_defaults() {
        let story = Story::new("T");
        assert_eq!(story.start_passage, "Start");
        assert_eq!(story.passage_count(), 0);
        assert!(story.start().is_none());
    }

    #[test]
    fn test_add_passage_keys_by_name() {
        let story = sample();
        assert_eq!(story.passage("Hall").map(|p| p.x), Some(300.0));
        assert_eq!(story.start().map(|p| p.name.as_str()), Some("Entrance"));
    }

    #[test]
    fn test_passage_links() {
        let story = sample();
        let links = story.passage("Entrance").unwrap().links();
        let targets: Vec<_> = links.iter().map(|l| l.target.as_str()).collect();
        assert_eq!(targets, ["Hall", "Leave"]);
    }

    #[test]
    fn test_dangling_links() {
        let story = sample();
        let dangling = story.dangling_links();
        assert_eq!(dangling.len(), 1);
        assert_eq!(dangling[0].0, "Entrance");
        assert_eq!(dangling[0].1.target, "Leave");
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["startPassage"], "Entrance");
        assert_eq!(json["passages"]["Hall"]["x"], 300.0);
        assert!(json.get("start_passage").is_none());
    }
}
