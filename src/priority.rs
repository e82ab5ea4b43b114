//! Split priorities.
//!
//! Every token kind maps to a preference score for hosting a line break.
//! Lower is better; [`NOT_A_CANDIDATE`] (0) means the kind never hosts one.
//! The backward scan compares priorities only between candidates at the
//! same nesting level; a shallower candidate always wins regardless of
//! priority.

use crate::chunk::ChunkKind;

/// Priority of a kind that can never host a split.
pub const NOT_A_CANDIDATE: usize = 0;

/// Priorities at or above this break up common groupings (ternaries, the
/// argument list right after its open paren) and are suppressed unless the
/// width limit is being strictly enforced.
pub const GROUPING: usize = 20;

/// Priority of the keywords that head a qualified type. Splitting after
/// one is only allowed when another type component follows.
pub const QUALIFIED_TYPE: usize = 25;

/// Split preference for a token kind. Lower is better; 0 is "never".
pub fn split_priority(kind: ChunkKind) -> usize {
    match kind {
        ChunkKind::Semicolon => 1,
        ChunkKind::Comma => 2,
        ChunkKind::BoolOp => 3,
        ChunkKind::Compare => 4,
        ChunkKind::Shift => 5,
        ChunkKind::Arith => 6,
        ChunkKind::Caret => 7,
        ChunkKind::Assign => 8,
        // only between concatenated string literals
        ChunkKind::Str => 9,
        ChunkKind::ForColon => 10,
        ChunkKind::Question | ChunkKind::TernaryColon => GROUPING,
        ChunkKind::FparenOpen => 21,
        ChunkKind::Qualifier
        | ChunkKind::Class
        | ChunkKind::Struct
        | ChunkKind::Type
        | ChunkKind::Typename
        | ChunkKind::Volatile => QUALIFIED_TYPE,
        _ => NOT_A_CANDIDATE,
    }
}
