//! Markup node tree.
//!
//! Children are owned exclusively by their parent, so a node can never be its
//! own descendant and rendering always terminates.

use crate::attributes::Attributes;
use crate::error::RenderError;

/// A renderable markup node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupNode {
    /// Text with an optional wrapping tag.
    Leaf(LeafNode),
    /// Tag wrapping owned child nodes.
    Parent(ParentNode),
}

impl MarkupNode {
    /// Render the node and its descendants to HTML.
    ///
    /// Children are rendered depth-first, left to right. The first invalid
    /// node aborts rendering of the whole tree.
    pub fn render(&self) -> Result<String, RenderError> {
        let mut out = String::new();
        self.render_into(&mut out)?;
        Ok(out)
    }

    fn render_into(&self, out: &mut String) -> Result<(), RenderError> {
        match self {
            Self::Leaf(leaf) => leaf.render_into(out),
            Self::Parent(parent) => parent.render_into(out),
        }
    }

    /// Tag name, if set.
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Leaf(leaf) => leaf.tag(),
            Self::Parent(parent) => parent.tag(),
        }
    }

    /// Attributes of the node.
    #[must_use]
    pub fn attributes(&self) -> &Attributes {
        match self {
            Self::Leaf(leaf) => &leaf.attributes,
            Self::Parent(parent) => &parent.attributes,
        }
    }
}

impl From<LeafNode> for MarkupNode {
    fn from(leaf: LeafNode) -> Self {
        Self::Leaf(leaf)
    }
}

impl From<ParentNode> for MarkupNode {
    fn from(parent: ParentNode) -> Self {
        Self::Parent(parent)
    }
}

/// Leaf node: a text value, optionally wrapped in a tag.
///
/// Without a tag the value renders verbatim, which is how plain text runs are
/// emitted between tagged siblings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafNode {
    tag: Option<String>,
    value: String,
    attributes: Attributes,
}

impl LeafNode {
    /// Create a leaf with an optional tag.
    #[must_use]
    pub fn new(tag: Option<&str>, value: impl Into<String>) -> Self {
        Self {
            tag: tag.map(str::to_owned),
            value: value.into(),
            attributes: Attributes::new(),
        }
    }

    /// Create an untagged leaf that renders as raw text.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::new(None, value)
    }

    /// Set the attributes of this leaf.
    #[must_use]
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Tag name; an empty tag counts as no tag.
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        non_empty(self.tag.as_deref())
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Render the leaf to HTML.
    pub fn render(&self) -> Result<String, RenderError> {
        let mut out = String::new();
        self.render_into(&mut out)?;
        Ok(out)
    }

    fn render_into(&self, out: &mut String) -> Result<(), RenderError> {
        if self.value.is_empty() {
            return Err(RenderError::MissingValue);
        }

        match self.tag() {
            None => out.push_str(&self.value),
            Some(tag) => {
                open_tag(tag, &self.attributes, out);
                out.push_str(&self.value);
                close_tag(tag, out);
            }
        }
        Ok(())
    }
}

/// Parent node: a tag wrapping one or more owned children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentNode {
    tag: Option<String>,
    children: Vec<MarkupNode>,
    attributes: Attributes,
}

impl ParentNode {
    /// Create a parent node.
    ///
    /// Tag and children are validated at render time, not here.
    #[must_use]
    pub fn new(tag: impl Into<String>, children: Vec<MarkupNode>) -> Self {
        Self {
            tag: Some(tag.into()),
            children,
            attributes: Attributes::new(),
        }
    }

    /// Create a parent node without a tag.
    ///
    /// Such a node always fails to render with [`RenderError::MissingTag`];
    /// it exists so that callers assembling trees from optional parts can
    /// defer validation to [`MarkupNode::render`].
    #[must_use]
    pub fn untagged(children: Vec<MarkupNode>) -> Self {
        Self {
            tag: None,
            children,
            attributes: Attributes::new(),
        }
    }

    /// Set the attributes of this parent.
    #[must_use]
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Tag name; an empty tag counts as no tag.
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        non_empty(self.tag.as_deref())
    }

    #[must_use]
    pub fn children(&self) -> &[MarkupNode] {
        &self.children
    }

    #[must_use]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Render the parent and all of its descendants to HTML.
    pub fn render(&self) -> Result<String, RenderError> {
        let mut out = String::new();
        self.render_into(&mut out)?;
        Ok(out)
    }

    fn render_into(&self, out: &mut String) -> Result<(), RenderError> {
        let tag = self.tag().ok_or(RenderError::MissingTag)?;

        if self.children.is_empty() {
            return Err(RenderError::MissingChildren {
                tag: tag.to_owned(),
            });
        }

        open_tag(tag, &self.attributes, out);
        for child in &self.children {
            child.render_into(out)?;
        }
        close_tag(tag, out);
        Ok(())
    }
}

fn non_empty(tag: Option<&str>) -> Option<&str> {
    tag.filter(|t| !t.is_empty())
}

fn open_tag(tag: &str, attributes: &Attributes, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    if !attributes.is_empty() {
        out.push(' ');
        attributes.write_html(out);
    }
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
