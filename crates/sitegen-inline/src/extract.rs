//! Bracket syntax extraction.
//!
//! Finds `![alt](src)` images and `[label](href)` links in raw text without
//! modifying it. Malformed syntax is simply not matched.

use std::fmt;
use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

static IMAGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").unwrap());

// No look-behind in `regex`; the `!` exclusion is checked by the iterator.
static LINK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]*)\]\(([^)]+)\)").unwrap());

/// Which bracket syntax to extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BracketKind {
    /// `![alt](src)`
    Image,
    /// `[label](href)` not preceded by `!`
    Link,
}

impl BracketKind {
    fn pattern(self) -> &'static Regex {
        match self {
            Self::Image => LazyLock::force(&IMAGE_PATTERN),
            Self::Link => LazyLock::force(&LINK_PATTERN),
        }
    }

    fn prefix(self) -> &'static str {
        match self {
            Self::Image => "!",
            Self::Link => "",
        }
    }
}

/// One bracket syntax occurrence, borrowed from the scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketRef<'t> {
    /// Syntax that matched.
    pub kind: BracketKind,
    /// Text between the brackets (may be empty).
    pub label: &'t str,
    /// Text between the parentheses (never empty).
    pub destination: &'t str,
    /// Byte range of the whole occurrence in the scanned text.
    pub span: Range<usize>,
}

impl BracketRef<'_> {
    /// The literal source fragment, e.g. `![alt](src)`.
    #[must_use]
    pub fn syntax(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for BracketRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}]({})",
            self.kind.prefix(),
            self.label,
            self.destination
        )
    }
}

/// Lazy iterator over non-overlapping bracket occurrences, left to right.
#[derive(Debug, Clone)]
pub struct BracketMatches<'t> {
    kind: BracketKind,
    text: &'t str,
    pos: usize,
}

impl<'t> BracketMatches<'t> {
    /// Scan `text` for occurrences of `kind`.
    #[must_use]
    pub fn new(kind: BracketKind, text: &'t str) -> Self {
        Self { kind, text, pos: 0 }
    }
}

impl<'t> Iterator for BracketMatches<'t> {
    type Item = BracketRef<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let pattern = self.kind.pattern();

        while self.pos < self.text.len() {
            let caps = pattern.captures_at(self.text, self.pos)?;
            let whole = caps.get(0)?;

            // `[` right after `!` opens an image, never a link. Retry one
            // byte further so a link nested in the image label is still found.
            if self.kind == BracketKind::Link && self.text[..whole.start()].ends_with('!') {
                self.pos = whole.start() + 1;
                continue;
            }

            self.pos = whole.end();
            return Some(BracketRef {
                kind: self.kind,
                label: caps.get(1)?.as_str(),
                destination: caps.get(2)?.as_str(),
                span: whole.range(),
            });
        }

        None
    }
}

/// Extract `![alt](src)` images from `text`.
///
/// # Example
///
/// ```
/// use sitegen_inline::extract_markdown_images;
///
/// let text = "This is text with a ![rick roll](https://i.imgur.com/aKaOqIh.gif)";
/// let images: Vec<_> = extract_markdown_images(text)
///     .map(|m| (m.label, m.destination))
///     .collect();
/// assert_eq!(images, vec![("rick roll", "https://i.imgur.com/aKaOqIh.gif")]);
/// ```
pub fn extract_markdown_images(text: &str) -> BracketMatches<'_> {
    BracketMatches::new(BracketKind::Image, text)
}

/// Extract `[label](href)` links from `text`, skipping images.
pub fn extract_markdown_links(text: &str) -> BracketMatches<'_> {
    BracketMatches::new(BracketKind::Link, text)
}
