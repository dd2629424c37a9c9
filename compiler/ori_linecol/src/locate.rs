//! Offset to position lookup.
//!
//! The line is found by a lower-bound binary search over the terminator
//! table: for a sorted table, `offset <= terminators[i]` is false for every
//! line before the one containing `offset` and true from it onwards. The
//! rune column then needs a scan of the line prefix, since the start of a
//! multi-byte character cannot be found without walking from a known
//! boundary.

use std::fmt;
use std::ops::Range;

use crate::{LineIndex, LocateError};

/// A 1-based source position.
///
/// `byte_column` counts bytes from the line start, `rune_column` counts
/// Unicode scalar values. They differ once a multi-byte character precedes
/// the offset on its line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub line: usize,
    pub byte_column: usize,
    pub rune_column: usize,
}

impl Position {
    /// Position of offset 0.
    pub const START: Position = Position {
        line: 1,
        byte_column: 1,
        rune_column: 1,
    };
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.rune_column)
    }
}

impl LineIndex<'_> {
    /// Map a byte offset to its 1-based position.
    ///
    /// Valid offsets are `0..=len`. The end-of-source offset maps one column
    /// past the last character of the final line.
    pub fn locate(&self, offset: usize) -> Result<Position, LocateError> {
        if offset == 0 {
            return Ok(Position::START);
        }
        let line_idx = self.line_idx_of(offset)?;
        let line_start = self.start_of_line_idx(line_idx);
        Ok(position_in_line(self.source(), line_idx, line_start, offset))
    }

    /// Like [`locate`](Self::locate), for offsets computed with signed
    /// arithmetic. Negative offsets are out of range.
    pub fn locate_signed(&self, offset: i64) -> Result<Position, LocateError> {
        let offset = usize::try_from(offset).map_err(|_| LocateError::OutOfRange {
            offset,
            len: self.len(),
        })?;
        self.locate(offset)
    }

    /// Locate both ends of a byte range.
    ///
    /// The end is exclusive, so `range.end == len` is allowed. A reversed
    /// range is reported as out of range at its start.
    pub fn locate_range(&self, range: Range<usize>) -> Result<(Position, Position), LocateError> {
        if range.start > range.end {
            return Err(LocateError::out_of_range(range.start, self.len()));
        }
        Ok((self.locate(range.start)?, self.locate(range.end)?))
    }

    /// 1-based line containing `offset`, without computing columns.
    pub fn line_of(&self, offset: usize) -> Result<usize, LocateError> {
        self.line_idx_of(offset).map(|idx| idx + 1)
    }

    /// 0-based line index containing `offset`.
    fn line_idx_of(&self, offset: usize) -> Result<usize, LocateError> {
        if offset > self.len() {
            return Err(LocateError::out_of_range(offset, self.len()));
        }
        let terminators = self.terminators();
        match terminators.last() {
            None => Ok(0),
            // Past the last newline: on the final line, including end-of-source.
            Some(&last) if offset > last => Ok(terminators.len()),
            Some(_) => Ok(terminators.partition_point(|&nl| nl < offset)),
        }
    }
}

/// Locate an offset by scanning `source` directly, without an index.
///
/// Same semantics as [`LineIndex::locate`] at O(offset) cost. Useful for a
/// single lookup where building an index would not pay off.
pub fn locate_linear(source: &[u8], offset: usize) -> Result<Position, LocateError> {
    if offset > source.len() {
        return Err(LocateError::out_of_range(offset, source.len()));
    }
    if offset == 0 {
        return Ok(Position::START);
    }
    let prefix = &source[..offset];
    let line_idx = memchr::memchr_iter(b'\n', prefix).count();
    let line_start = memchr::memrchr(b'\n', prefix).map_or(0, |nl| nl + 1);
    Ok(position_in_line(source, line_idx, line_start, offset))
}

fn position_in_line(source: &[u8], line_idx: usize, line_start: usize, offset: usize) -> Position {
    Position {
        line: line_idx + 1,
        byte_column: offset - line_start + 1,
        rune_column: rune_column(source, line_start, offset),
    }
}

/// Number of scalar values starting in `source[line_start..=offset]`.
///
/// An offset inside a multi-byte character reports that character's
/// column. At `offset == source.len()` the virtual end position counts
/// as one more column.
fn rune_column(source: &[u8], line_start: usize, offset: usize) -> usize {
    let before = source[line_start..offset]
        .iter()
        .filter(|&&b| !is_utf8_continuation(b))
        .count();
    match source.get(offset) {
        Some(&b) if is_utf8_continuation(b) => before,
        _ => before + 1,
    }
}

#[inline]
const fn is_utf8_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}
