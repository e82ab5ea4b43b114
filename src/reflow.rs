//! Formatter collaborator seam.
//!
//! The width pass only inserts newlines and re-indents continuations.
//! Breaking a one-liner block into its multi-line form is a structural edit
//! owned by the enclosing formatter's newline machinery, so the pass
//! reaches it through the [`Reflow`] trait. [`BraceReflow`] is the primary
//! implementation.

use tracing::debug;

use crate::chunk::{ChunkFlags, ChunkId, ChunkKind, ChunkStream};

/// Hooks into the owning formatter for edits beyond newline insertion.
pub trait Reflow {
    /// Expand the one-liner block containing `pc` into multi-line form.
    ///
    /// Returns the chunk at the end of the expanded region, which is where
    /// width scanning should resume, or `None` when no one-liner region
    /// could be located.
    fn undo_one_liner(&mut self, stream: &mut ChunkStream, pc: ChunkId) -> Option<ChunkId>;

    /// Re-run brace newline normalization after an expansion.
    ///
    /// With `force`, blocks still marked as one-liners are normalized too.
    fn cleanup_braces(&mut self, stream: &mut ChunkStream, force: bool);
}

/// Brace-driven reflow over the chunk stream itself.
///
/// `undo_one_liner` drops the one-liner marking from the surrounding
/// region; `cleanup_braces` then gives every unmarked block the newlines
/// its multi-line form requires: one after each open brace and one before
/// each close brace, with the new continuations indented to statement
/// depth.
pub struct BraceReflow {
    indent_size: usize,
}

impl BraceReflow {
    /// Create a reflow that indents expanded bodies by `indent_size`.
    pub fn new(indent_size: usize) -> Self {
        BraceReflow { indent_size }
    }
}

impl Reflow for BraceReflow {
    fn undo_one_liner(&mut self, stream: &mut ChunkStream, pc: ChunkId) -> Option<ChunkId> {
        if !stream.get(pc).flags.contains(ChunkFlags::ONE_LINER) {
            return None;
        }
        // widen to the full marked region
        let mut first = pc;
        while let Some(prev) = stream.prev(first) {
            if !stream.get(prev).flags.contains(ChunkFlags::ONE_LINER) {
                break;
            }
            first = prev;
        }
        let mut last = pc;
        while let Some(next) = stream.next(last) {
            if !stream.get(next).flags.contains(ChunkFlags::ONE_LINER) {
                break;
            }
            last = next;
        }
        debug!(
            first = %stream.get(first).text,
            last = %stream.get(last).text,
            "expanding one-liner"
        );
        let mut cur = Some(first);
        while let Some(id) = cur {
            stream.get_mut(id).flags.remove(ChunkFlags::ONE_LINER);
            if id == last {
                break;
            }
            cur = stream.next(id);
        }
        Some(last)
    }

    fn cleanup_braces(&mut self, stream: &mut ChunkStream, force: bool) {
        let mut cur = stream.head();
        while let Some(id) = cur {
            cur = stream.next(id);
            let chunk = stream.get(id);
            if !force && chunk.flags.contains(ChunkFlags::ONE_LINER) {
                continue;
            }
            match chunk.kind {
                ChunkKind::BraceOpen => {
                    let Some(next) = stream.next(id) else { continue };
                    if stream.insert_newline_before(next).is_some() {
                        let body_depth = stream.get(id).brace_level + 1;
                        stream.reindent_line(next, body_depth * self.indent_size + 1);
                    }
                }
                ChunkKind::BraceClose => {
                    if stream.insert_newline_before(id).is_some() {
                        let depth = stream.get(id).brace_level;
                        stream.reindent_line(id, depth * self.indent_size + 1);
                    }
                }
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunk::StreamBuilder;

    fn one_liner_stream() -> (ChunkStream, ChunkId) {
        let mut b = StreamBuilder::new();
        b.tok(ChunkKind::Word, "if");
        b.tok(ChunkKind::SparenOpen, "(");
        b.glue(ChunkKind::Word, "x");
        b.glue(ChunkKind::SparenClose, ")");
        b.flags(ChunkFlags::ONE_LINER);
        b.tok(ChunkKind::BraceOpen, "{");
        b.tok(ChunkKind::Word, "run");
        b.glue(ChunkKind::FparenOpen, "(");
        b.glue(ChunkKind::FparenClose, ")");
        b.glue(ChunkKind::Semicolon, ";");
        let body = b.level();
        assert_eq!(body, 1);
        b.tok(ChunkKind::BraceClose, "}");
        b.flags(ChunkFlags::empty());
        let s = b.finish();
        let target = s
            .ids()
            .find(|&id| s.get(id).kind == ChunkKind::Semicolon)
            .unwrap();
        (s, target)
    }

    #[test]
    fn undo_one_liner_clears_region_and_returns_end() {
        let (mut s, target) = one_liner_stream();
        let mut reflow = BraceReflow::new(4);
        let end = reflow.undo_one_liner(&mut s, target).unwrap();
        assert_eq!(s.get(end).kind, ChunkKind::BraceClose);
        assert!(s
            .ids()
            .all(|id| !s.get(id).flags.contains(ChunkFlags::ONE_LINER)));
    }

    #[test]
    fn undo_one_liner_without_marking_returns_none() {
        let mut b = StreamBuilder::new();
        let w = b.tok(ChunkKind::Word, "x");
        let mut s = b.finish();
        let mut reflow = BraceReflow::new(4);
        assert!(reflow.undo_one_liner(&mut s, w).is_none());
    }

    #[test]
    fn cleanup_braces_expands_unmarked_blocks() {
        let (mut s, target) = one_liner_stream();
        let mut reflow = BraceReflow::new(4);
        reflow.undo_one_liner(&mut s, target).unwrap();
        reflow.cleanup_braces(&mut s, false);
        assert_eq!(s.render(), "if (x) {\n    run();\n}");
    }

    #[test]
    fn cleanup_braces_skips_marked_blocks() {
        let (mut s, _) = one_liner_stream();
        let before = s.render();
        let mut reflow = BraceReflow::new(4);
        reflow.cleanup_braces(&mut s, false);
        assert_eq!(s.render(), before);
    }

    #[test]
    fn cleanup_braces_force_expands_marked_blocks() {
        let (mut s, _) = one_liner_stream();
        let mut reflow = BraceReflow::new(4);
        reflow.cleanup_braces(&mut s, true);
        assert!(s.render().contains('\n'));
    }
}
