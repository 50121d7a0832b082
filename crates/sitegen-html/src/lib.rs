//! Markup node tree with validated HTML rendering.
//!
//! This crate provides [`MarkupNode`], a closed two-variant tree used as the
//! nested representation of rendered pages:
//!
//! - [`LeafNode`]: an optional tag wrapping a required text value
//! - [`ParentNode`]: a required tag wrapping one or more owned children
//!
//! Rendering validates the tree as it goes. A leaf without a value, a parent
//! without a tag, or a parent without children fails with a [`RenderError`]
//! instead of producing empty markup.
//!
//! # Example
//!
//! ```
//! use sitegen_html::{Attributes, LeafNode, MarkupNode, ParentNode};
//!
//! let paragraph = ParentNode::new(
//!     "p",
//!     vec![
//!         LeafNode::new(Some("b"), "Bold").into(),
//!         LeafNode::text(" and plain, then a ").into(),
//!         LeafNode::new(Some("a"), "link")
//!             .with_attributes(Attributes::from([("href", "https://boot.dev")]))
//!             .into(),
//!     ],
//! );
//!
//! let html = MarkupNode::from(paragraph).render().unwrap();
//! assert_eq!(
//!     html,
//!     r#"<p><b>Bold</b> and plain, then a <a href="https://boot.dev">link</a></p>"#
//! );
//! ```

mod attributes;
mod error;
mod node;

pub use attributes::Attributes;
pub use error::RenderError;
pub use node::{LeafNode, MarkupNode, ParentNode};
