//! JSON backup importer.
//!
//! The backup is the [`Story`] serialized as JSON. Import is deliberately
//! loose: only `title` and `passages` are required, each passage field
//! falls back to its default when missing or of the wrong type, and
//! `startPassage` is optional.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::model::{DEFAULT_START_PASSAGE, Passage, Story};

/// Backup document with every field optional, so missing fields can be
/// reported as schema errors rather than parse errors.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBackup {
    title: Option<String>,
    passages: Option<BTreeMap<String, Value>>,
    start_passage: Option<String>,
}

/// Read a passage without validating its shape.
///
/// `null` (what the editor writes for a NaN coordinate) and wrongly typed
/// fields become the field default. A non-object passage is all defaults.
fn passage_from_value(key: &str, value: &Value) -> Passage {
    let string = |field: &str| {
        value
            .get(field)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };
    let number = |field: &str| value.get(field).and_then(Value::as_f64).unwrap_or(0.0);

    if !value.is_object() {
        debug!(key, "passage is not an object, using defaults");
    }

    Passage {
        name: string("name"),
        content: string("content"),
        x: number("x"),
        y: number("y"),
    }
}

/// Parse a JSON backup, returning `None` on any failure.
///
/// # Example
///
/// ```
/// use storyweave::import::parse_json;
///
/// let story = parse_json(r#"{"title":"T","passages":{}}"#).unwrap();
/// assert_eq!(story.start_passage, "Start");
///
/// assert!(parse_json("not json").is_none());
/// assert!(parse_json(r#"{"title":"T"}"#).is_none());
/// ```
pub fn parse_json(text: &str) -> Option<Story> {
    match try_parse_json(text) {
        Ok(story) => Some(story),
        Err(e) => {
            warn!("backup import rejected: {e}");
            None
        }
    }
}

/// Parse a JSON backup, reporting why it was rejected.
pub fn try_parse_json(text: &str) -> Result<Story> {
    let raw: RawBackup = serde_json::from_str(text)?;

    let title = raw
        .title
        .filter(|t| !t.is_empty())
        .ok_or_else(|| Error::SchemaInvalid("missing title".into()))?;
    let passages = raw
        .passages
        .ok_or_else(|| Error::SchemaInvalid("missing passages".into()))?
        .iter()
        .map(|(key, value)| (key.clone(), passage_from_value(key, value)))
        .collect();
    let start_passage = raw
        .start_passage
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_START_PASSAGE.to_string());

    Ok(Story {
        title,
        start_passage,
        passages,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_json() {
        assert!(parse_json("not json").is_none());
        assert!(matches!(
            try_parse_json("not json"),
            Err(Error::MalformedData(_))
        ));
    }

    #[test]
    fn test_missing_passages() {
        assert!(parse_json(r#"{"title":"T"}"#).is_none());
        assert!(matches!(
            try_parse_json(r#"{"title":"T"}"#),
            Err(Error::SchemaInvalid(_))
        ));
    }

    #[test]
    fn test_missing_or_empty_title() {
        assert!(parse_json(r#"{"passages":{}}"#).is_none());
        assert!(parse_json(r#"{"title":"","passages":{}}"#).is_none());
        assert!(parse_json(r#"{"title":null,"passages":{}}"#).is_none());
    }

    #[test]
    fn test_minimal_backup() {
        let story = parse_json(r#"{"title":"T","passages":{}}"#).unwrap();
        assert_eq!(story.title, "T");
        assert_eq!(story.start_passage, "Start");
        assert!(story.passages.is_empty());
    }

    #[test]
    fn test_empty_start_passage_defaults() {
        let story = parse_json(r#"{"title":"T","passages":{},"startPassage":""}"#).unwrap();
        assert_eq!(story.start_passage, "Start");
    }

    #[test]
    fn test_passages_taken_as_is() {
        let story = parse_json(
            r#"{"title":"T","startPassage":"A","passages":{
                "A":{"name":"A","content":"[[B]]","x":12.5,"y":7},
                "B":{"content":"no name or position"}
            }}"#,
        )
        .unwrap();

        assert_eq!(story.start_passage, "A");
        let a = story.passage("A").unwrap();
        assert_eq!((a.x, a.y), (12.5, 7.0));

        // Passage shape is not cross-checked against its key
        let b = story.passage("B").unwrap();
        assert_eq!(b.name, "");
        assert_eq!((b.x, b.y), (0.0, 0.0));
    }

    #[test]
    fn test_bad_passage_fields_default() {
        let story = parse_json(
            r#"{"title":"T","passages":{
                "A":{"name":"A","content":null,"x":1,"y":2},
                "B":{"name":"B","content":"b","x":"100","y":3},
                "C":{"name":"C","content":"c","x":null,"y":null},
                "D":7
            }}"#,
        )
        .unwrap();

        let a = story.passage("A").unwrap();
        assert_eq!(a.content, "");
        assert_eq!((a.x, a.y), (1.0, 2.0));

        let b = story.passage("B").unwrap();
        assert_eq!(b.content, "b");
        assert_eq!((b.x, b.y), (0.0, 3.0));

        let c = story.passage("C").unwrap();
        assert_eq!((c.x, c.y), (0.0, 0.0));

        assert_eq!(story.passage("D"), Some(&Passage::default()));
        assert_eq!(story.passage_count(), 4);
    }

    #[test]
    fn test_wrong_passages_type_is_malformed() {
        assert!(matches!(
            try_parse_json(r#"{"title":"T","passages":5}"#),
            Err(Error::MalformedData(_))
        ));
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let story = parse_json(r#"{"title":"T","passages":{},"version":3}"#).unwrap();
        assert_eq!(story.title, "T");
    }
}
