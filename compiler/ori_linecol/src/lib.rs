//! Byte offset to line/column mapping for diagnostics.
//!
//! A [`LineIndex`] is built once over an immutable source blob and records
//! the byte offset of every line terminator (`\n`). Queries then map a byte
//! offset to a 1-based [`Position`] with a binary search over those
//! terminators, followed by a scan of the matched line prefix to count
//! Unicode scalar values.
//!
//! ```
//! use ori_linecol::{LineIndex, Position};
//!
//! let source = "{\n  \"k\": \"é!\"\n}";
//! let index = LineIndex::build(source);
//!
//! // The `!` after the two-byte `é`.
//! let pos = index.locate(12).unwrap();
//! assert_eq!(pos, Position { line: 2, byte_column: 11, rune_column: 10 });
//! assert!(index.locate(source.len() + 1).is_err());
//! ```
//!
//! # Conventions
//!
//! - Lines, byte columns and rune columns are all 1-based.
//! - The end-of-source offset (`source.len()`) is valid and maps one column
//!   past the last character of the final line.
//! - An offset on a `\n` belongs to the line that newline terminates.
//!
//! # Complexity
//!
//! Construction is O(n) in the source length. Each lookup is O(log q + L)
//! where q is the number of terminators and L the byte length of the
//! matched line.

mod error;
mod index;
mod locate;

pub use error::LocateError;
pub use index::LineIndex;
pub use locate::{locate_linear, Position};

#[cfg(feature = "tracing-init")]
static TRACING_INIT: std::sync::Once = std::sync::Once::new();

/// Install a `tracing` subscriber for this crate's debug output.
///
/// Does nothing unless `RUST_LOG` is set, e.g. `RUST_LOG=ori_linecol=debug`.
/// Safe to call multiple times; only the first call has any effect.
#[cfg(feature = "tracing-init")]
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // Another subscriber may already be installed by the embedder.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
