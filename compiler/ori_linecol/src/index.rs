//! Line terminator index.
//!
//! Records the byte offset of every `\n` in a source blob so that line
//! lookups are a binary search instead of a linear scan from the start.

/// Pre-computed terminator table over a borrowed source.
///
/// Built once, read-only afterwards. The source is borrowed for the
/// lifetime of the index, so it cannot change underneath it; a modified
/// source needs a freshly built index.
///
/// # Example
///
/// ```
/// use ori_linecol::LineIndex;
///
/// let source = "ab\ncd\n";
/// let index = LineIndex::build(source);
///
/// assert_eq!(index.terminators(), &[2, 5]);
/// assert_eq!(index.line_count(), 3);
/// assert_eq!(index.line_str(2), Some("cd"));
/// ```
#[derive(Clone, Debug)]
pub struct LineIndex<'src> {
    source: &'src [u8],
    /// Byte offset of each `\n`, strictly increasing.
    terminators: Vec<usize>,
}

impl<'src> LineIndex<'src> {
    /// Build an index over UTF-8 text.
    pub fn build(source: &'src str) -> Self {
        Self::build_bytes(source.as_bytes())
    }

    /// Build an index over raw bytes.
    ///
    /// The bytes are not validated. Line numbers and byte columns are exact
    /// for any input; rune columns are only meaningful for valid UTF-8.
    ///
    /// `0x0A` never occurs inside a multi-byte UTF-8 sequence, so searching
    /// for the byte finds exactly the `\n` scalar values.
    #[tracing::instrument(level = "trace", skip_all, fields(len = source.len()))]
    pub fn build_bytes(source: &'src [u8]) -> Self {
        let terminators: Vec<usize> = memchr::memchr_iter(b'\n', source).collect();
        tracing::debug!(
            len = source.len(),
            terminators = terminators.len(),
            "built line index"
        );
        LineIndex {
            source,
            terminators,
        }
    }

    /// The indexed source.
    #[inline]
    pub fn source(&self) -> &'src [u8] {
        self.source
    }

    /// Length of the indexed source in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.source.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Byte offsets of every `\n`, ascending.
    #[inline]
    pub fn terminators(&self) -> &[usize] {
        &self.terminators
    }

    /// Number of lines. Always at least 1, even for an empty source.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.terminators.len() + 1
    }

    /// Byte offset where a 1-based line starts.
    ///
    /// Returns `None` for line 0 or lines past the end.
    pub fn line_start(&self, line: usize) -> Option<usize> {
        match line {
            0 => None,
            1 => Some(0),
            _ => self.terminators.get(line - 2).map(|&nl| nl + 1),
        }
    }

    /// Byte offset where a 1-based line ends, excluding its terminator.
    ///
    /// For the last line this is the source length.
    pub fn line_end(&self, line: usize) -> Option<usize> {
        if line == 0 || line > self.line_count() {
            return None;
        }
        Some(
            self.terminators
                .get(line - 1)
                .copied()
                .unwrap_or(self.source.len()),
        )
    }

    /// Bytes of a 1-based line, without its terminator.
    pub fn line_bytes(&self, line: usize) -> Option<&'src [u8]> {
        let start = self.line_start(line)?;
        let end = self.line_end(line)?;
        self.source.get(start..end)
    }

    /// Text of a 1-based line, without its terminator.
    ///
    /// Returns `None` if the line does not exist or is not valid UTF-8.
    pub fn line_str(&self, line: usize) -> Option<&'src str> {
        std::str::from_utf8(self.line_bytes(line)?).ok()
    }

    /// Start offset of the line with 0-based index `line_idx`.
    ///
    /// `line_idx` must be at most `terminators.len()`.
    #[inline]
    pub(crate) fn start_of_line_idx(&self, line_idx: usize) -> usize {
        match line_idx {
            0 => 0,
            i => self.terminators[i - 1] + 1,
        }
    }
}
