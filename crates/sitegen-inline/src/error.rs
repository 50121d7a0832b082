//! Inline parsing errors.

/// Error returned when inline text cannot be split into units.
///
/// Any error aborts the whole pipeline call; no partial output is produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InlineError {
    /// A delimiter was opened but never closed.
    #[error("Unmatched delimiter '{delimiter}' found in text: {text}")]
    UnmatchedDelimiter {
        /// The delimiter that occurred an odd number of times.
        delimiter: String,
        /// Text of the unit being split.
        text: String,
    },
    /// Extracted bracket syntax was not found in the text being split.
    ///
    /// Extraction and splitting disagree; this is an internal contract
    /// violation rather than a user error.
    #[error("Malformed inline syntax: '{fragment}' not found in remaining text")]
    MalformedInlineSyntax {
        /// The literal `[label](destination)` or `![label](destination)` fragment.
        fragment: String,
    },
    /// A splitter was called with an empty delimiter.
    #[error("Delimiter must not be empty")]
    EmptyDelimiter,
}
