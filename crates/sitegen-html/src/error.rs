//! Render errors.

/// Error returned when a markup tree cannot be rendered.
///
/// Every variant points at a construction bug in the code that built the
/// tree, not at malformed source text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// Leaf node has no value to render.
    #[error("Value is required for leaf nodes")]
    MissingValue,
    /// Parent node has no tag.
    #[error("Tag is required for parent nodes")]
    MissingTag,
    /// Parent node has no children.
    #[error("Children are required for parent node <{tag}>")]
    MissingChildren {
        /// Tag of the childless parent.
        tag: String,
    },
}
