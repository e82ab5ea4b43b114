//! Function argument list splitting.
//!
//! Two flavors. The greedy splitter walks the list once, packing as many
//! arguments per line as fit and breaking at the last comma (or the open
//! paren) that still fit. The full splitter breaks after every top-level
//! comma unconditionally.

use tracing::{debug, trace};

use crate::chunk::{ChunkId, ChunkKind};
use crate::error::SplitError;
use crate::reflow::Reflow;
use crate::split::WidthPass;

impl<R: Reflow> WidthPass<'_, R> {
    /// Split the argument list around `start`, greedily.
    ///
    /// `start` is known to need splitting. A missing open or close paren
    /// is an upstream classification bug and fatal.
    ///
    /// Returns the chunk at which the driver resumes: past the close paren
    /// when `start` sat at the open paren's own level, at the close paren
    /// otherwise.
    pub(super) fn split_fcn_params(
        &mut self,
        start: ChunkId,
    ) -> Result<Option<ChunkId>, SplitError> {
        let chunk = self.stream.get(start);
        let start_level = chunk.level;
        debug!(text = %chunk.text, column = chunk.column, "splitting function argument list");

        let fpo = if chunk.kind == ChunkKind::FparenOpen {
            start
        } else {
            // a semicolon or close paren sits at the list's own level;
            // anything else is one level inside it
            let level = match chunk.kind {
                ChunkKind::Semicolon | ChunkKind::FparenClose => Some(chunk.level),
                _ => chunk.level.checked_sub(1),
            };
            level
                .and_then(|level| self.stream.prev_of_kind(start, ChunkKind::FparenOpen, level))
                .ok_or_else(|| {
                    let chunk = self.stream.get(start);
                    SplitError::MissingOpenParen {
                        text: chunk.text.clone(),
                        column: chunk.column,
                    }
                })?
        };
        let fpo_level = self.stream.get(fpo).level;
        let fpc = self
            .stream
            .next_of_kind(fpo, ChunkKind::FparenClose, fpo_level)
            .ok_or(SplitError::MissingCloseParen {
                column: self.stream.get(fpo).column,
            })?;

        self.split_fcn_params_greedy(fpo, fpc);

        if fpo_level == start_level {
            Ok(self.stream.next(fpc))
        } else {
            Ok(Some(fpc))
        }
    }

    /// One forward walk from `fpo` through `fpc`, left-packing arguments.
    ///
    /// `splitpoint` remembers the last comma (or the open paren) that was
    /// still in bounds; when a chunk lands past the width, the line breaks
    /// after the splitpoint and the walk resumes there, so the freshly
    /// inserted newline is the next chunk seen and clears the splitpoint.
    fn split_fcn_params_greedy(&mut self, fpo: ChunkId, fpc: ChunkId) {
        let end = self.stream.next(fpc);
        // the open paren itself is a valid split point, unless the list is
        // empty and there is nothing to move
        let first_in_list = self.stream.next(fpo);
        let mut splitpoint =
            if first_in_list.map(|n| self.stream.get(n).kind) == Some(ChunkKind::FparenClose) {
                None
            } else {
                Some(fpo)
            };
        let mut min_col = self
            .stream
            .next_non_comment_non_newline(fpo)
            .map_or(1, |id| self.stream.get(id).column);
        let mut added_newlines = 0usize;
        trace!(min_col, "greedy argument split");

        let mut cur = Some(fpo);
        while let Some(id) = cur {
            if Some(id) == end {
                break;
            }
            let kind = self.stream.get(id).kind;

            if self.stream.get(id).is_newline() {
                splitpoint = None;
                cur = self.stream.next(id);
                continue;
            }

            let mut splittable_here = true;
            if kind == ChunkKind::FparenOpen || kind == ChunkKind::FparenClose {
                let next = self.stream.next(id);
                if kind == ChunkKind::FparenOpen {
                    // '()' holds nothing to move
                    if next.map(|n| self.stream.get(n).kind) == Some(ChunkKind::FparenClose) {
                        splittable_here = false;
                    }
                } else {
                    // never split at a close paren, but it still counts for
                    // the width check below
                    splittable_here = false;
                }
                // TODO: function parens do not change brace_level, so this
                // recomputation at a close paren restores the same column it
                // set at the open; decide whether it should instead restore
                // the enclosing list's continuation column.
                if !self.config.indent_from_paren {
                    let next_brace_level = next.map_or(0, |n| self.stream.get(n).brace_level);
                    min_col = next_brace_level * self.config.indent_size
                        + self.config.continuation_step()
                        + 1;
                    trace!(min_col, "recomputed continuation column");
                }
            } else if kind != ChunkKind::Comma {
                cur = self.stream.next(id);
                continue;
            }

            // While there is no splitpoint, any length is tolerated; there
            // is nowhere to break anyway. Otherwise a chunk in bounds just
            // becomes the next splitpoint, except that reaching the close
            // paren with no break made yet forces one: this list was handed
            // over because it needs splitting.
            let in_bounds = !self.is_past_width(id) && (id != fpc || added_newlines > 0);
            let point = match splitpoint {
                Some(point) if !in_bounds => point,
                _ => {
                    if splittable_here {
                        splitpoint = Some(id);
                    }
                    cur = self.stream.next(id);
                    continue;
                }
            };
            if let Some(after) = self.stream.next(point) {
                if !self.stream.get(after).is_newline() {
                    trace!(text = %self.stream.get(after).text, min_col, "breaking argument list");
                    self.stream.insert_newline_before(after);
                    self.stream.reindent_line(after, min_col);
                    self.changes += 1;
                    added_newlines += 1;
                }
            }
            // resume at the splitpoint: the new newline is seen next and
            // resets it
            cur = self.stream.next(point);
        }
    }

    /// Break after every comma at the argument list's top level.
    ///
    /// No width checks; every argument gets its own line. Locally
    /// recoverable: when no enclosing open paren exists the list is left
    /// alone (the greedy splitter that follows will report the bug).
    pub(super) fn split_fcn_params_full(&mut self, start: ChunkId) {
        debug!(text = %self.stream.get(start).text, "splitting every argument");
        let Some(inner_level) = self.stream.get(start).level.checked_sub(1) else {
            return;
        };
        let Some(fpo) = self
            .stream
            .prev_of_kind(start, ChunkKind::FparenOpen, inner_level)
        else {
            return;
        };
        let fpo_level = self.stream.get(fpo).level;

        let mut cur = self.stream.next_non_comment_non_newline(fpo);
        while let Some(id) = cur {
            let chunk = self.stream.get(id);
            if chunk.level <= fpo_level {
                break;
            }
            if chunk.level == fpo_level + 1 && chunk.kind == ChunkKind::Comma {
                if let Some(after) = self.stream.next(id) {
                    self.split_before(after);
                }
            }
            cur = self.stream.next_non_comment_non_newline(id);
        }
    }
}
