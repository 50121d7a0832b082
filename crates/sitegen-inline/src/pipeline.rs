//! Inline pipeline: raw text to a flat sequence of inline units.
//!
//! # Stage order
//!
//! 1. Whole input as one plain unit
//! 2. Bold delimiter
//! 3. Italic delimiter
//! 4. Code delimiter
//! 5. Images
//! 6. Links
//!
//! The order is fixed. Each stage only re-scans plain units, so bold must be
//! split before italic (its delimiter contains italic's) and images before
//! links (image syntax contains link syntax).
//!
//! Emphasis is flat: when a bold span encloses italic delimiters, the italic
//! stage never sees them and they stay literal inside the bold text.

use crate::bracket::{split_nodes_image, split_nodes_link};
use crate::delimiter::split_nodes_delimiter;
use crate::error::InlineError;
use crate::syntax::{InlineSyntax, SyntaxError};
use crate::unit::InlineUnit;

/// Converts inline markdown text into inline units.
///
/// # Example
///
/// ```
/// use sitegen_inline::{InlineKind, InlineParser, InlineSyntax, InlineUnit};
///
/// let syntax = InlineSyntax {
///     italic: "_".to_owned(),
///     ..Default::default()
/// };
/// let parser = InlineParser::new(syntax).unwrap();
/// let units = parser.parse("an _italic_ word").unwrap();
/// assert_eq!(units[1], InlineUnit::new("italic", InlineKind::Italic));
/// ```
#[derive(Debug, Clone, Default)]
pub struct InlineParser {
    syntax: InlineSyntax,
}

impl InlineParser {
    /// Create a parser, validating the delimiters.
    pub fn new(syntax: InlineSyntax) -> Result<Self, SyntaxError> {
        syntax.validate()?;
        Ok(Self { syntax })
    }

    #[must_use]
    pub fn syntax(&self) -> &InlineSyntax {
        &self.syntax
    }

    /// Parse one inline text span.
    ///
    /// Fails on the first unmatched delimiter; no partial output is returned.
    pub fn parse(&self, text: &str) -> Result<Vec<InlineUnit>, InlineError> {
        let mut units = vec![InlineUnit::plain(text)];

        for (kind, delimiter) in self.syntax.stages() {
            units = split_nodes_delimiter(units, delimiter, kind)?;
            tracing::trace!(stage = %kind, units = units.len(), "Inline stage completed");
        }

        units = split_nodes_image(units)?;
        tracing::trace!(stage = "image", units = units.len(), "Inline stage completed");

        units = split_nodes_link(units)?;
        tracing::trace!(stage = "link", units = units.len(), "Inline stage completed");

        tracing::debug!(
            input_len = text.len(),
            units = units.len(),
            "Parsed inline text"
        );
        Ok(units)
    }
}

/// Parse inline text with the default markdown delimiters.
///
/// # Example
///
/// ```
/// use sitegen_inline::{InlineKind, InlineUnit, text_to_inline_units};
///
/// let units = text_to_inline_units("This is **text** with a [link](https://boot.dev)").unwrap();
/// assert_eq!(
///     units,
///     vec![
///         InlineUnit::plain("This is "),
///         InlineUnit::new("text", InlineKind::Bold),
///         InlineUnit::plain(" with a "),
///         InlineUnit::link("link", "https://boot.dev"),
///     ]
/// );
/// ```
pub fn text_to_inline_units(text: &str) -> Result<Vec<InlineUnit>, InlineError> {
    InlineParser::default().parse(text)
}
