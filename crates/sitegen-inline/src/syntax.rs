//! Inline delimiter configuration.
//!
//! Delimiters are read from an `[inline]`-style TOML table; missing keys fall
//! back to the markdown defaults:
//!
//! ```toml
//! bold = "**"
//! italic = "*"
//! code = "`"
//! ```
//!
//! Stages always run bold, then italic, then code. A delimiter may therefore
//! not contain one applied before it, or the earlier stage would consume its
//! characters.

use serde::Deserialize;

use crate::unit::InlineKind;

/// Error returned when an inline syntax configuration is unusable.
#[derive(Debug, thiserror::Error)]
pub enum SyntaxError {
    /// TOML parsing error.
    #[error("Invalid inline syntax config: {0}")]
    Parse(#[from] toml::de::Error),
    /// A delimiter is empty.
    #[error("Delimiter for {role} must not be empty")]
    EmptyDelimiter {
        /// Which delimiter (`bold`, `italic` or `code`).
        role: &'static str,
    },
    /// A delimiter contains one that is split before it.
    #[error("Delimiter '{later}' contains '{earlier}', which is split first")]
    ShadowedDelimiter {
        /// Delimiter applied later in the pipeline.
        later: String,
        /// Delimiter applied earlier that it contains.
        earlier: String,
    },
}

/// Delimiters used by the inline pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InlineSyntax {
    /// Bold delimiter (default `**`).
    pub bold: String,
    /// Italic delimiter (default `*`).
    pub italic: String,
    /// Code delimiter (default `` ` ``).
    pub code: String,
}

impl Default for InlineSyntax {
    fn default() -> Self {
        Self {
            bold: "**".to_owned(),
            italic: "*".to_owned(),
            code: "`".to_owned(),
        }
    }
}

impl InlineSyntax {
    /// Parse and validate a TOML table of delimiters.
    ///
    /// # Example
    ///
    /// ```
    /// use sitegen_inline::InlineSyntax;
    ///
    /// let syntax = InlineSyntax::from_toml_str(r#"italic = "_""#).unwrap();
    /// assert_eq!(syntax.bold, "**");
    /// assert_eq!(syntax.italic, "_");
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self, SyntaxError> {
        let syntax: Self = toml::from_str(content)?;
        syntax.validate()?;
        Ok(syntax)
    }

    /// Delimiters in stage order, paired with the kind each one produces.
    pub(crate) fn stages(&self) -> [(InlineKind, &str); 3] {
        [
            (InlineKind::Bold, self.bold.as_str()),
            (InlineKind::Italic, self.italic.as_str()),
            (InlineKind::Code, self.code.as_str()),
        ]
    }

    /// Check that every delimiter is non-empty and none is shadowed by an
    /// earlier stage.
    pub fn validate(&self) -> Result<(), SyntaxError> {
        let stages = self.stages();

        for (kind, delimiter) in stages {
            if delimiter.is_empty() {
                return Err(SyntaxError::EmptyDelimiter {
                    role: kind.as_str(),
                });
            }
        }

        for (i, (_, later)) in stages.iter().enumerate() {
            for (_, earlier) in &stages[..i] {
                if later.contains(earlier) {
                    return Err(SyntaxError::ShadowedDelimiter {
                        later: (*later).to_owned(),
                        earlier: (*earlier).to_owned(),
                    });
                }
            }
        }

        Ok(())
    }
}
