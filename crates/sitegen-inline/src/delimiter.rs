//! Delimiter splitting for emphasis and code spans.
//!
//! Delimiters are matched by occurrence parity, not nesting: splitting a text
//! on `` ` `` yields segments that alternate outside/inside, starting outside.
//! An even number of segments means one delimiter is unclosed.

use crate::error::InlineError;
use crate::unit::{InlineKind, InlineUnit};

/// Split every plain unit on `delimiter`, tagging enclosed spans as `kind`.
///
/// Non-plain units pass through unchanged and keep their position. Empty
/// segments produce no unit but still count toward parity, so `a `` b`
/// yields `a ` and ` b` with no empty code span between them.
///
/// # Example
///
/// ```
/// use sitegen_inline::{InlineKind, InlineUnit, split_nodes_delimiter};
///
/// let units = vec![InlineUnit::plain("This is text with a `code block` word")];
/// let units = split_nodes_delimiter(units, "`", InlineKind::Code).unwrap();
/// assert_eq!(
///     units,
///     vec![
///         InlineUnit::plain("This is text with a "),
///         InlineUnit::new("code block", InlineKind::Code),
///         InlineUnit::plain(" word"),
///     ]
/// );
/// ```
pub fn split_nodes_delimiter(
    units: Vec<InlineUnit>,
    delimiter: &str,
    kind: InlineKind,
) -> Result<Vec<InlineUnit>, InlineError> {
    if delimiter.is_empty() {
        return Err(InlineError::EmptyDelimiter);
    }

    let mut out = Vec::with_capacity(units.len());

    for unit in units {
        if !unit.is_plain() {
            out.push(unit);
            continue;
        }

        let segments: Vec<&str> = unit.text().split(delimiter).collect();
        if segments.len() % 2 == 0 {
            return Err(InlineError::UnmatchedDelimiter {
                delimiter: delimiter.to_owned(),
                text: unit.text().to_owned(),
            });
        }

        out.extend(
            segments
                .into_iter()
                .enumerate()
                .filter(|(_, segment)| !segment.is_empty())
                .map(|(i, segment)| {
                    let segment_kind = if i % 2 == 0 { InlineKind::Plain } else { kind };
                    InlineUnit::new(segment, segment_kind)
                }),
        );
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn code(text: &str) -> InlineUnit {
        InlineUnit::new(text, InlineKind::Code)
    }

    fn split_code(text: &str) -> Result<Vec<InlineUnit>, InlineError> {
        split_nodes_delimiter(vec![InlineUnit::plain(text)], "`", InlineKind::Code)
    }

    #[test]
    fn test_split_code_single() {
        assert_eq!(
            split_code("This is text with a `code block` word").unwrap(),
            vec![
                InlineUnit::plain("This is text with a "),
                code("code block"),
                InlineUnit::plain(" word"),
            ]
        );
    }

    #[test]
    fn test_split_code_multiple() {
        assert_eq!(
            split_code("Text with `code1` and `code2` blocks").unwrap(),
            vec![
                InlineUnit::plain("Text with "),
                code("code1"),
                InlineUnit::plain(" and "),
                code("code2"),
                InlineUnit::plain(" blocks"),
            ]
        );
    }

    #[test]
    fn test_split_bold() {
        let units = split_nodes_delimiter(
            vec![InlineUnit::plain("This is **bold** text")],
            "**",
            InlineKind::Bold,
        )
        .unwrap();
        assert_eq!(
            units,
            vec![
                InlineUnit::plain("This is "),
                InlineUnit::new("bold", InlineKind::Bold),
                InlineUnit::plain(" text"),
            ]
        );
    }

    #[test]
    fn test_split_italic() {
        let units = split_nodes_delimiter(
            vec![InlineUnit::plain("This is *italic* text")],
            "*",
            InlineKind::Italic,
        )
        .unwrap();
        assert_eq!(
            units,
            vec![
                InlineUnit::plain("This is "),
                InlineUnit::new("italic", InlineKind::Italic),
                InlineUnit::plain(" text"),
            ]
        );
    }

    #[test]
    fn test_split_at_start() {
        assert_eq!(
            split_code("`code` at the start").unwrap(),
            vec![code("code"), InlineUnit::plain(" at the start")]
        );
    }

    #[test]
    fn test_split_at_end() {
        assert_eq!(
            split_code("Text ends with `code`").unwrap(),
            vec![InlineUnit::plain("Text ends with "), code("code")]
        );
    }

    #[test]
    fn test_split_entire_string() {
        assert_eq!(
            split_code("`entire code block`").unwrap(),
            vec![code("entire code block")]
        );
    }

    #[test]
    fn test_no_delimiter() {
        assert_eq!(
            split_code("Just plain text").unwrap(),
            vec![InlineUnit::plain("Just plain text")]
        );
    }

    #[test]
    fn test_non_plain_passthrough() {
        let units = vec![
            InlineUnit::new("already `bold`", InlineKind::Bold),
            InlineUnit::link("a `link`", "https://boot.dev"),
        ];
        assert_eq!(
            split_nodes_delimiter(units.clone(), "`", InlineKind::Code).unwrap(),
            units
        );
    }

    #[test]
    fn test_multiple_units_mixed() {
        let units = vec![
            InlineUnit::plain("Text with `code`"),
            InlineUnit::new("already bold", InlineKind::Bold),
            InlineUnit::plain("More `code` here"),
        ];
        assert_eq!(
            split_nodes_delimiter(units, "`", InlineKind::Code).unwrap(),
            vec![
                InlineUnit::plain("Text with "),
                code("code"),
                InlineUnit::new("already bold", InlineKind::Bold),
                InlineUnit::plain("More "),
                code("code"),
                InlineUnit::plain(" here"),
            ]
        );
    }

    #[test]
    fn test_unmatched_delimiter_fails() {
        let err = split_code("Text with `unmatched delimiter").unwrap_err();
        assert_eq!(
            err,
            InlineError::UnmatchedDelimiter {
                delimiter: "`".to_owned(),
                text: "Text with `unmatched delimiter".to_owned(),
            }
        );
        assert!(err.to_string().contains("Unmatched delimiter"));
    }

    #[test]
    fn test_unmatched_in_later_unit_discards_earlier_output() {
        let units = vec![InlineUnit::plain("`ok`"), InlineUnit::plain("broken `")];
        assert!(split_nodes_delimiter(units, "`", InlineKind::Code).is_err());
    }

    #[test]
    fn test_three_delimiters_fail() {
        assert!(split_code("`a` `b").is_err());
    }

    #[test]
    fn test_empty_delimited_section() {
        assert_eq!(
            split_code("Text with `` empty").unwrap(),
            vec![InlineUnit::plain("Text with "), InlineUnit::plain(" empty")]
        );
    }

    #[test]
    fn test_consecutive_delimited_sections() {
        assert_eq!(
            split_code("`code1``code2`").unwrap(),
            vec![code("code1"), code("code2")]
        );
    }

    #[test]
    fn test_empty_text_produces_nothing() {
        assert!(split_code("").unwrap().is_empty());
    }

    #[test]
    fn test_empty_delimiter_fails() {
        assert_eq!(
            split_nodes_delimiter(vec![InlineUnit::plain("x")], "", InlineKind::Code),
            Err(InlineError::EmptyDelimiter)
        );
    }

    #[test]
    fn test_bold_split_on_single_star_breaks_pairs() {
        // A single-star split on bold text sees four delimiters: the empty
        // segments between each doubled star keep parity even.
        let units = split_nodes_delimiter(
            vec![InlineUnit::plain("a **b** c")],
            "*",
            InlineKind::Italic,
        )
        .unwrap();
        assert_eq!(
            units,
            vec![
                InlineUnit::plain("a "),
                InlineUnit::plain("b"),
                InlineUnit::plain(" c"),
            ]
        );
    }
}
