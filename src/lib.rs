//! Line-width enforcement for tokenized source streams.
//!
//! This crate is the width pass of a source-code beautifier: it takes a
//! chunk stream that earlier passes have already tokenized and indented,
//! finds every physical line that grew past the configured column limit,
//! and rewrites it by inserting newlines at chosen split points and
//! re-indenting the continuations. Token order is immutable; the pass only
//! adds newlines and adjusts columns.
//!
//! # Quick Start
//!
//! ```
//! use codewidth::{enforce_line_width, ChunkKind, SplitConfig, StreamBuilder};
//!
//! let mut b = StreamBuilder::new();
//! b.tok(ChunkKind::Word, "total");
//! b.tok(ChunkKind::Assign, "=");
//! b.tok(ChunkKind::Word, "first_part");
//! b.tok(ChunkKind::Arith, "+");
//! b.tok(ChunkKind::Word, "second_part");
//! b.glue(ChunkKind::Semicolon, ";");
//! let mut stream = b.finish();
//!
//! let config = SplitConfig::with_max_width(20);
//! let edits = enforce_line_width(&mut stream, &config).unwrap();
//! assert!(edits > 0);
//! ```
//!
//! # Architecture
//!
//! The pass is a single forward walk with four dispatch-driven
//! sub-strategies:
//!
//! 1. **Driver**: visits every chunk, hands the overflowing ones to the
//!    line splitter, and resumes where it says to.
//! 2. **Line splitter**: dispatches to a specialized strategy (one-liner
//!    expansion, `for` header, function argument list, template argument
//!    list) or falls back to a backward scan over the line.
//! 3. **Candidate scorer**: ranks split points by a static priority table;
//!    nesting level dominates priority.
//! 4. **Positional policy**: decides whether the newline lands before or
//!    after the chosen operator.
//!
//! Everything bottoms out in one primitive: insert a newline before a
//! chunk and reindent its line.

pub mod chunk;
pub mod config;
pub mod error;
pub mod priority;
pub mod reflow;
pub mod split;

pub use chunk::{Chunk, ChunkFlags, ChunkId, ChunkKind, ChunkStream, ParentKind, StreamBuilder};
pub use config::{OperatorPos, SplitConfig, INDENT_WIDTH, MAX_LINE_WIDTH};
pub use error::SplitError;
pub use priority::split_priority;
pub use reflow::{BraceReflow, Reflow};
pub use split::{enforce_line_width, WidthPass};
