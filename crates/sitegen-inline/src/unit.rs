//! Inline units: the flat intermediate representation of inline content.

use std::fmt;

/// Semantic kind of an inline span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InlineKind {
    /// Unformatted text; the only kind that later stages re-scan.
    Plain,
    Bold,
    Italic,
    Code,
    /// Link label with a destination URL.
    Link,
    /// Image alt text with a source URL.
    Image,
}

impl InlineKind {
    /// Lowercase name of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Code => "code",
            Self::Link => "link",
            Self::Image => "image",
        }
    }

    /// Whether units of this kind carry a destination.
    #[must_use]
    pub const fn has_destination(self) -> bool {
        matches!(self, Self::Link | Self::Image)
    }
}

impl fmt::Display for InlineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One contiguous span of inline content.
///
/// Two units are equal when text, kind and destination are all equal.
/// Units are never mutated; every splitting stage builds new ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InlineUnit {
    text: String,
    kind: InlineKind,
    destination: Option<String>,
}

impl InlineUnit {
    /// Create a unit without a destination.
    ///
    /// Use [`InlineUnit::link`] or [`InlineUnit::image`] for kinds that
    /// carry one.
    #[must_use]
    pub fn new(text: impl Into<String>, kind: InlineKind) -> Self {
        Self {
            text: text.into(),
            kind,
            destination: None,
        }
    }

    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, InlineKind::Plain)
    }

    #[must_use]
    pub fn link(label: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            text: label.into(),
            kind: InlineKind::Link,
            destination: Some(destination.into()),
        }
    }

    #[must_use]
    pub fn image(alt: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            text: alt.into(),
            kind: InlineKind::Image,
            destination: Some(destination.into()),
        }
    }

    /// The unit's text; for links and images this is the label or alt text.
    ///
    /// Plain units always carry text, but a link or image label may be empty,
    /// as in `[](href)` or `![](src)`.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn kind(&self) -> InlineKind {
        self.kind
    }

    /// Destination of a link or image; `None` for every other kind.
    #[must_use]
    pub fn destination(&self) -> Option<&str> {
        self.destination.as_deref()
    }

    #[must_use]
    pub fn is_plain(&self) -> bool {
        self.kind == InlineKind::Plain
    }

    /// Consume the unit, returning its text.
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }
}

impl fmt::Display for InlineUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.destination {
            Some(destination) => write!(f, "{}({:?} -> {destination})", self.kind, self.text),
            None => write!(f, "{}({:?})", self.kind, self.text),
        }
    }
}
