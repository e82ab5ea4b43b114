//! For-statement header splitting.
//!
//! An over-long `for (...)` head splits at its semicolons first. When the
//! semicolons were not enough, commas at the header level are tried next,
//! then assignments. If nothing helps the header is left alone.

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::chunk::{ChunkFlags, ChunkId, ChunkKind, ParentKind};
use crate::reflow::Reflow;
use crate::split::WidthPass;

impl<R: Reflow> WidthPass<'_, R> {
    /// Split the `for` header containing `start`.
    ///
    /// Locally recoverable: when the statement open paren cannot be found,
    /// or none of the stages bring the line under width, the header is
    /// left as it is.
    pub(super) fn split_for_stmt(&mut self, start: ChunkId) {
        let want = if self.config.full_split_for { 2 } else { 1 };
        debug!(text = %self.stream.get(start).text, want, "splitting for-statement header");

        // find the statement open paren, counting newlines on the way
        let mut open_paren = None;
        let mut nl_count = 0;
        let mut cur = start;
        while let Some(prev) = self.stream.prev(cur) {
            let chunk = self.stream.get(prev);
            if chunk.kind == ChunkKind::SparenOpen {
                open_paren = Some(prev);
                break;
            }
            nl_count += chunk.nl_count;
            cur = prev;
        }
        let Some(open_paren) = open_paren else {
            trace!("no statement open paren, giving up");
            return;
        };

        // collect header semicolons: the offender itself, then backward,
        // then forward, never leaving the statement parens
        let mut semicolons: SmallVec<[ChunkId; 2]> = SmallVec::new();
        let is_header_semicolon = |pass: &Self, id: ChunkId| {
            let c = pass.stream.get(id);
            c.kind == ChunkKind::Semicolon && c.parent == ParentKind::For
        };
        if is_header_semicolon(self, start) {
            semicolons.push(start);
        }
        let mut cur = start;
        while semicolons.len() < want {
            let Some(prev) = self.stream.prev(cur) else {
                break;
            };
            if !self.stream.get(prev).flags.contains(ChunkFlags::IN_SPAREN) {
                break;
            }
            if is_header_semicolon(self, prev) {
                semicolons.push(prev);
            }
            cur = prev;
        }
        let mut cur = start;
        while semicolons.len() < want {
            let Some(next) = self.stream.next(cur) else {
                break;
            };
            if !self.stream.get(next).flags.contains(ChunkFlags::IN_SPAREN) {
                break;
            }
            if is_header_semicolon(self, next) {
                semicolons.push(next);
            }
            cur = next;
        }

        // split after each collected semicolon, last collected first
        for &semicolon in semicolons.iter().rev() {
            if let Some(after) = self.stream.next(semicolon) {
                self.split_before(after);
            }
        }

        if !self.is_past_width(start) || nl_count > 0 {
            return;
        }

        // still over: commas at the header level
        let header_level = self.stream.get(open_paren).level + 1;
        if self.split_header_items(open_paren, start, ChunkKind::Comma, header_level) {
            return;
        }
        // then assignments
        self.split_header_items(open_paren, start, ChunkKind::Assign, header_level);
    }

    /// Split after each `kind` chunk at `level` between `open_paren` and
    /// `start`, re-checking width after every insertion. Returns true once
    /// a just-split chunk fits.
    fn split_header_items(
        &mut self,
        open_paren: ChunkId,
        start: ChunkId,
        kind: ChunkKind,
        level: usize,
    ) -> bool {
        let mut cur = open_paren;
        while let Some(next) = self.stream.next(cur) {
            if next == start {
                break;
            }
            let chunk = self.stream.get(next);
            if chunk.kind == kind && chunk.level == level {
                if let Some(after) = self.stream.next(next) {
                    self.split_before(after);
                }
                if !self.is_past_width(next) {
                    return true;
                }
            }
            cur = next;
        }
        false
    }
}
