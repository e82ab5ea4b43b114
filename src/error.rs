//! Width pass errors.
//!
//! Only upstream classification bugs are fatal: a chunk flagged as part of
//! a function argument list whose parentheses cannot be located. Everything
//! else the pass can recover from by leaving the line alone, and does so
//! silently.

use thiserror::Error;

/// Fatal invariant violation detected during splitting.
///
/// The host decides whether to report or abort; the pass stops at the
/// first one either way.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SplitError {
    /// A chunk classified as part of a function argument list has no
    /// opening parenthesis behind it at the expected level.
    #[error("no opening parenthesis found for argument list near `{text}` (column {column})")]
    MissingOpenParen {
        /// Text of the chunk that triggered the search.
        text: String,
        /// Column of the chunk that triggered the search.
        column: usize,
    },

    /// A function open parenthesis has no matching close parenthesis.
    #[error("unmatched function parenthesis at column {column}")]
    MissingCloseParen {
        /// Column of the unmatched open parenthesis.
        column: usize,
    },
}
