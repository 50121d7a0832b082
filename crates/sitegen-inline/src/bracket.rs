//! Image and link splitting.
//!
//! Rewrites plain units into alternating plain runs and image/link units,
//! using the occurrences found by [`crate::extract`].

use crate::error::InlineError;
use crate::extract::{BracketKind, BracketMatches, BracketRef};
use crate::unit::InlineUnit;

/// Split `![alt](src)` images out of every plain unit.
///
/// Alt text may be empty (`![](src)`), so the resulting image unit can have
/// empty text. Only plain units are guaranteed non-empty.
///
/// # Example
///
/// ```
/// use sitegen_inline::{InlineUnit, split_nodes_image};
///
/// let units = vec![InlineUnit::plain("a ![cat](cat.png) b")];
/// assert_eq!(
///     split_nodes_image(units).unwrap(),
///     vec![
///         InlineUnit::plain("a "),
///         InlineUnit::image("cat", "cat.png"),
///         InlineUnit::plain(" b"),
///     ]
/// );
/// ```
pub fn split_nodes_image(units: Vec<InlineUnit>) -> Result<Vec<InlineUnit>, InlineError> {
    split_nodes_bracket(units, BracketKind::Image)
}

/// Split `[label](href)` links out of every plain unit.
///
/// Image syntax is left in place. Labels may be empty (`[](href)`), so the
/// resulting link unit can have empty text.
pub fn split_nodes_link(units: Vec<InlineUnit>) -> Result<Vec<InlineUnit>, InlineError> {
    split_nodes_bracket(units, BracketKind::Link)
}

fn split_nodes_bracket(
    units: Vec<InlineUnit>,
    kind: BracketKind,
) -> Result<Vec<InlineUnit>, InlineError> {
    let mut out = Vec::with_capacity(units.len());

    for unit in units {
        if !unit.is_plain() {
            out.push(unit);
            continue;
        }

        match split_text(unit.text(), kind)? {
            Some(pieces) => out.extend(pieces),
            None => out.push(unit),
        }
    }

    Ok(out)
}

/// Cut `text` at each occurrence of `kind`. Returns `None` if nothing matched.
fn split_text(text: &str, kind: BracketKind) -> Result<Option<Vec<InlineUnit>>, InlineError> {
    let mut matches = BracketMatches::new(kind, text).peekable();
    if matches.peek().is_none() {
        return Ok(None);
    }

    cut_at_matches(text, matches).map(Some)
}

/// Cut `text` at the span of each match, in order.
///
/// Each span must start at or after the end of the previous one and cover
/// the match's literal syntax exactly.
fn cut_at_matches<'t>(
    text: &'t str,
    matches: impl IntoIterator<Item = BracketRef<'t>>,
) -> Result<Vec<InlineUnit>, InlineError> {
    let mut pieces = Vec::new();
    let mut consumed = 0;

    for found in matches {
        let fragment = found.syntax();
        let start = found.span.start;

        let before = text.get(consumed..start);
        let at_fragment = text
            .get(start..)
            .is_some_and(|rest| rest.starts_with(&fragment));
        let (Some(before), true) = (before, at_fragment) else {
            tracing::error!(%fragment, start, "Extracted inline syntax not found at its span");
            return Err(InlineError::MalformedInlineSyntax { fragment });
        };

        if !before.is_empty() {
            pieces.push(InlineUnit::plain(before));
        }
        pieces.push(match found.kind {
            BracketKind::Image => InlineUnit::image(found.label, found.destination),
            BracketKind::Link => InlineUnit::link(found.label, found.destination),
        });
        consumed = start + fragment.len();
    }

    let rest = &text[consumed..];
    if !rest.is_empty() {
        pieces.push(InlineUnit::plain(rest));
    }

    Ok(pieces)
}
