//! Passage link markup.
//!
//! Passages connect to each other through double-bracket markup:
//! - `[[display]]` links to the passage named `display`
//! - `[[display|target]]` shows `display` and links to `target`
//!
//! Links are kept as raw markup inside passage content and parsed on demand
//! with [`find_links`]. Nothing here checks that a target exists; unresolved
//! targets only surface when a reader follows them.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

/// Matches `[[...]]` with no `]` inside the brackets.
static LINK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[([^\]]+)\]\]").expect("link pattern is valid"));

/// A parsed passage link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Link {
    /// Visible label.
    pub display: String,
    /// Name of the passage the link navigates to.
    pub target: String,
}

impl Link {
    /// Parse the text between the double brackets.
    ///
    /// The text is split on `|`: the first part is the label, the second the
    /// target. A missing or empty target falls back to the label, and parts
    /// after the second are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use storyweave::model::Link;
    ///
    /// let link = Link::parse("Go North|north_room");
    /// assert_eq!(link.display, "Go North");
    /// assert_eq!(link.target, "north_room");
    ///
    /// assert_eq!(Link::parse("Go North").target, "Go North");
    /// ```
    pub fn parse(inner: &str) -> Self {
        let mut parts = inner.split('|');
        let display = parts.next().unwrap_or_default();
        let target = match parts.next() {
            Some(t) if !t.is_empty() => t,
            _ => display,
        };

        Self {
            display: display.to_string(),
            target: target.to_string(),
        }
    }
}

/// A link together with the byte range of its markup in the source text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkSpan {
    pub range: Range<usize>,
    pub link: Link,
}

/// Find every link in `content`, in order of appearance.
pub fn find_links(content: &str) -> Vec<LinkSpan> {
    LINK_PATTERN
        .captures_iter(content)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let inner = caps.get(1)?;
            Some(LinkSpan {
                range: whole.range(),
                link: Link::parse(inner.as_str()),
            })
        })
        .collect()
}

/// Replace every link in `content` with the output of `render`.
///
/// Text outside link markup is copied through unchanged.
pub fn replace_links<F>(content: &str, mut render: F) -> String
where
    F: FnMut(&Link) -> String,
{
    let mut out = String::with_capacity(content.len());
    let mut last = 0;

    for span in find_links(content) {
        out.push_str(&content[last..span.range.start]);
        out.push_str(&render(&span.link));
        last = span.range.end;
    }
    out.push_str(&content[last..]);

    out
}
