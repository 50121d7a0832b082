//! Inline markdown tokenizer.
//!
//! Turns one span of inline markdown (a paragraph, heading or list item that
//! block parsing has already isolated) into a flat sequence of
//! [`InlineUnit`]s: plain text, bold, italic, code, links and images.
//!
//! # Architecture
//!
//! Parsing is a fixed sequence of splitting stages over an owned
//! `Vec<InlineUnit>`. Each stage only re-scans [`InlineKind::Plain`] units and
//! produces a new vector:
//!
//! - [`split_nodes_delimiter`]: parity-based splitting on `**`, `*` and `` ` ``
//! - [`split_nodes_image`] / [`split_nodes_link`]: bracket syntax, found by
//!   [`extract_markdown_images`] / [`extract_markdown_links`]
//!
//! [`InlineParser`] runs the stages in order; [`text_to_inline_units`] is the
//! shortcut with default delimiters.
//!
//! Nested emphasis is not supported: delimiters inside a bold span stay
//! literal. Delimiters cannot be escaped.
//!
//! # Example
//!
//! ```
//! use sitegen_inline::{InlineKind, text_to_inline_units};
//!
//! let units = text_to_inline_units("Some `code` and ![a cat](cat.png)").unwrap();
//! let kinds: Vec<_> = units.iter().map(|u| u.kind()).collect();
//! assert_eq!(
//!     kinds,
//!     vec![
//!         InlineKind::Plain,
//!         InlineKind::Code,
//!         InlineKind::Plain,
//!         InlineKind::Image,
//!     ]
//! );
//! assert_eq!(units[3].destination(), Some("cat.png"));
//! ```

mod bracket;
mod delimiter;
mod error;
mod extract;
mod pipeline;
mod syntax;
mod unit;

pub use bracket::{split_nodes_image, split_nodes_link};
pub use delimiter::split_nodes_delimiter;
pub use error::InlineError;
pub use extract::{
    BracketKind, BracketMatches, BracketRef, extract_markdown_images, extract_markdown_links,
};
pub use pipeline::{InlineParser, text_to_inline_units};
pub use syntax::{InlineSyntax, SyntaxError};
pub use unit::{InlineKind, InlineUnit};
