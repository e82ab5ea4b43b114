//! Split candidate scoring.
//!
//! The generic splitter scans backward from the overflowing chunk, feeding
//! every non-space chunk through [`WidthPass::try_split_here`]. The running
//! best is a `(chunk, priority)` pair; nesting level dominates priority, so
//! a split outside a parenthesized group always beats a better-scored one
//! inside it.

use tracing::trace;

use crate::chunk::{ChunkId, ChunkKind};
use crate::priority::{split_priority, GROUPING, NOT_A_CANDIDATE, QUALIFIED_TYPE};
use crate::reflow::Reflow;
use crate::split::WidthPass;

/// Best split point seen so far in a backward scan.
///
/// `chunk` is `None` until the first acceptable candidate; `priority` is
/// only meaningful while `chunk` is set, and always equals the table
/// priority of that chunk.
#[derive(Default)]
pub(crate) struct SplitCandidate {
    pub chunk: Option<ChunkId>,
    pub priority: usize,
}

impl<R: Reflow> WidthPass<'_, R> {
    /// Consider `id` as a split point, updating `best` if it qualifies.
    pub(crate) fn try_split_here(&self, best: &mut SplitCandidate, id: ChunkId) {
        let chunk = self.stream.get(id);
        let priority = split_priority(chunk.kind);
        if priority == NOT_A_CANDIDATE {
            return;
        }

        // Can't split right after a physical newline. The one exception is
        // a string literal continuing a concatenation from the line above.
        match self.stream.prev(id) {
            None => return,
            Some(prev) => {
                if self.stream.get(prev).is_newline() && chunk.kind != ChunkKind::Str {
                    trace!("rejecting split at line start");
                    return;
                }
            }
        }

        let next = self.stream.next(id);
        let next_kind = next.map(|n| self.stream.get(n).kind);

        // Empty argument lists hold nothing to move to the next line.
        if chunk.kind == ChunkKind::FparenOpen && next_kind == Some(ChunkKind::FparenClose) {
            return;
        }

        // A lone string literal stays glued to its neighbors; only
        // concatenated literals may be separated.
        if chunk.kind == ChunkKind::Str && next_kind != Some(ChunkKind::Str) {
            return;
        }

        // Ternaries and the head of an argument list are common groupings;
        // breaking them up is reserved for strict width enforcement.
        if !self.config.enforce_max_width && priority >= GROUPING {
            return;
        }

        // Don't break after the final piece of a qualified type.
        if priority == QUALIFIED_TYPE {
            let continues_type = next_kind
                .is_some_and(|k| k == ChunkKind::Word || split_priority(k) == QUALIFIED_TYPE);
            if !continues_type {
                return;
            }
        }

        let accept = match best.chunk {
            None => true,
            Some(held) => {
                let held_level = self.stream.get(held).level;
                chunk.level < held_level
                    || (chunk.level == held_level && priority < best.priority)
            }
        };
        if accept {
            trace!(text = %chunk.text, priority, level = chunk.level, "new best split point");
            best.chunk = Some(id);
            best.priority = priority;
        }
    }
}
