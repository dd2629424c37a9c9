//! Lookup errors.

/// Error returned when an offset cannot be mapped to a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LocateError {
    /// Offset lies outside `0..=len`.
    ///
    /// `offset` is the requested offset, saturated to `i64::MAX` if it was
    /// a `usize` too large for `i64`.
    #[error("offset {offset} is out of range for source of length {len} (valid: 0..={len})")]
    OutOfRange { offset: i64, len: usize },
}

impl LocateError {
    #[inline]
    pub(crate) fn out_of_range(offset: usize, len: usize) -> Self {
        LocateError::OutOfRange {
            offset: i64::try_from(offset).unwrap_or(i64::MAX),
            len,
        }
    }
}
