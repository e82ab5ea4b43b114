//! Template argument list splitting.
//!
//! The simplest strategy: back up from the overflowing chunk to the
//! nearest comma on the line and break after it.

use tracing::{debug, trace};

use crate::chunk::{ChunkId, ChunkKind};
use crate::reflow::Reflow;
use crate::split::WidthPass;

impl<R: Reflow> WidthPass<'_, R> {
    /// Split the template argument list before `start`.
    ///
    /// Locally recoverable: reaching a newline or the stream head before
    /// any comma leaves the line alone.
    pub(super) fn split_template(&mut self, start: ChunkId) {
        debug!(text = %self.stream.get(start).text, "splitting template argument list");

        let mut found = None;
        let mut cur = self.stream.prev(start);
        while let Some(id) = cur {
            let chunk = self.stream.get(id);
            if chunk.is_newline() {
                trace!("reached line start before a comma, giving up");
                return;
            }
            if chunk.kind == ChunkKind::Comma {
                found = Some(id);
                break;
            }
            cur = self.stream.prev(id);
        }
        let Some(comma) = found else {
            return;
        };
        let Some(after) = self.stream.next(comma) else {
            return;
        };
        if self.stream.insert_newline_before(after).is_some() {
            self.stream
                .reindent_line(after, self.config.continuation_step() + 1);
            self.changes += 1;
        }
    }
}
