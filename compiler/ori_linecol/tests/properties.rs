//! Property-based tests for offset lookup.
//!
//! Sources are generated from a small alphabet that mixes ASCII, newlines
//! and multi-byte characters of every UTF-8 width, so that line boundaries
//! and rune/byte divergence come up often.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::disallowed_types,
    clippy::uninlined_format_args,
    reason = "Proptest macros generate code with these patterns"
)]

use ori_linecol::{locate_linear, LineIndex, LocateError};
use proptest::prelude::*;

/// Generate source text biased towards newlines and multi-byte chars.
fn source_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            4 => Just('a'),
            2 => Just(' '),
            3 => Just('\n'),
            1 => Just('{'),
            1 => Just('é'),
            1 => Just('€'),
            1 => Just('😀'),
        ],
        0..128,
    )
    .prop_map(|chars| chars.into_iter().collect::<String>())
}

/// Source plus an in-range offset (`0..=len`).
fn source_and_offset() -> impl Strategy<Value = (String, usize)> {
    source_strategy().prop_flat_map(|s| {
        let len = s.len();
        (Just(s), 0..=len)
    })
}

/// Extra UTF-8 bytes (beyond one per char) in `s`.
fn extra_bytes(s: &str) -> usize {
    s.len() - s.chars().count()
}

proptest! {
    #[test]
    fn terminators_match_newlines(source in source_strategy()) {
        let index = LineIndex::build(&source);
        let expected: Vec<usize> = source
            .char_indices()
            .filter(|&(_, c)| c == '\n')
            .map(|(i, _)| i)
            .collect();
        prop_assert_eq!(index.terminators(), expected.as_slice());
        prop_assert_eq!(index.line_count(), expected.len() + 1);
    }

    #[test]
    fn indexed_matches_linear((source, offset) in source_and_offset()) {
        let index = LineIndex::build(&source);
        prop_assert_eq!(index.locate(offset), locate_linear(source.as_bytes(), offset));
    }

    #[test]
    fn line_in_range((source, offset) in source_and_offset()) {
        let index = LineIndex::build(&source);
        let pos = index.locate(offset).unwrap();
        prop_assert!(pos.line >= 1 && pos.line <= index.line_count());
        prop_assert_eq!(index.line_of(offset), Ok(pos.line));
    }

    #[test]
    fn byte_column_matches_line_start((source, offset) in source_and_offset()) {
        let index = LineIndex::build(&source);
        let pos = index.locate(offset).unwrap();
        let start = index.line_start(pos.line).unwrap();
        prop_assert_eq!(pos.byte_column, offset - start + 1);
        prop_assert!(offset <= index.line_end(pos.line).unwrap());
    }

    #[test]
    fn rune_gap_equals_extra_bytes_on_line(source in source_strategy()) {
        let index = LineIndex::build(&source);
        for (offset, _) in source.char_indices().chain(std::iter::once((source.len(), ' '))) {
            let pos = index.locate(offset).unwrap();
            let start = index.line_start(pos.line).unwrap();
            let gap = extra_bytes(&source[start..offset]);
            prop_assert_eq!(pos.byte_column - pos.rune_column, gap, "offset {}", offset);
        }
    }

    #[test]
    fn byte_columns_increase_within_line(source in source_strategy()) {
        let index = LineIndex::build(&source);
        let positions: Vec<_> = (0..=source.len())
            .map(|o| index.locate(o).unwrap())
            .collect();
        for pair in positions.windows(2) {
            if pair[0].line == pair[1].line {
                prop_assert!(pair[0].byte_column < pair[1].byte_column);
                prop_assert!(pair[0].rune_column <= pair[1].rune_column);
            } else {
                prop_assert_eq!(pair[1].line, pair[0].line + 1);
                prop_assert_eq!(pair[1].byte_column, 1);
            }
        }
    }

    #[test]
    fn past_end_is_out_of_range(source in source_strategy(), extra in 1usize..64) {
        let index = LineIndex::build(&source);
        let offset = source.len() + extra;
        prop_assert_eq!(
            index.locate(offset),
            Err(LocateError::OutOfRange {
                offset: i64::try_from(offset).unwrap(),
                len: source.len(),
            })
        );
    }

    #[test]
    fn negative_is_out_of_range(source in source_strategy(), offset in i64::MIN..0) {
        let index = LineIndex::build(&source);
        prop_assert_eq!(
            index.locate_signed(offset),
            Err(LocateError::OutOfRange { offset, len: source.len() })
        );
    }

    #[test]
    fn newline_free_end_is_one_past(s in "[a-zé]{0,64}") {
        let index = LineIndex::build(&s);
        let pos = index.locate(s.len()).unwrap();
        prop_assert_eq!(pos.line, 1);
        prop_assert_eq!(pos.byte_column, s.len() + 1);
        prop_assert_eq!(pos.rune_column, s.chars().count() + 1);
    }
}
