//! Arena-backed chunk stream.
//!
//! The formatter's token stream is a doubly-linked list of chunks stored in
//! a flat arena. Links are `Option<ChunkId>` indices rather than pointers:
//! the null-chunk sentinel of a pointer-based design becomes an ordinary
//! `None`.
//!
//! The stream also carries the two mutation primitives every splitter ends
//! up in: [`ChunkStream::insert_newline_before`] (idempotent) and
//! [`ChunkStream::reindent_line`] (shifts the rest of the physical line by
//! the same delta).

mod flags;
mod kind;

pub use flags::ChunkFlags;
pub use kind::{ChunkKind, ParentKind};

#[cfg(test)]
mod tests;

/// Index into the chunk arena.
///
/// 4 bytes, `Copy`, O(1) compare. Indices are never invalidated: chunks are
/// only ever added, and removal is not an operation of this subsystem.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct ChunkId(u32);

impl ChunkId {
    /// Create a `ChunkId` from an arena index.
    #[inline]
    pub const fn new(index: u32) -> Self {
        ChunkId(index)
    }

    /// Get the index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Debug for ChunkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ChunkId({})", self.0)
    }
}

/// One token-sized unit in the formatter's stream.
///
/// `column` is 1-based and already assigned by the indentation passes that
/// run before width enforcement. `level` counts every bracket kind;
/// `brace_level` counts `{}` only.
#[derive(Clone, Debug)]
pub struct Chunk {
    /// Token classification.
    pub kind: ChunkKind,
    /// Owning syntactic construct.
    pub parent: ParentKind,
    /// Printable form. Empty for virtual chunks.
    pub text: String,
    /// 1-based target column.
    pub column: usize,
    /// Total nesting depth (all bracket kinds).
    pub level: usize,
    /// Nesting depth counting only braces.
    pub brace_level: usize,
    /// Positional context flags.
    pub flags: ChunkFlags,
    /// For newline chunks, how many physical newlines this represents.
    pub nl_count: usize,
    prev: Option<ChunkId>,
    next: Option<ChunkId>,
}

impl Chunk {
    /// Create a chunk with the given kind and text; everything else zeroed.
    pub fn new(kind: ChunkKind, text: impl Into<String>) -> Self {
        Chunk {
            kind,
            parent: ParentKind::None,
            text: text.into(),
            column: 1,
            level: 0,
            brace_level: 0,
            flags: ChunkFlags::empty(),
            nl_count: 0,
            prev: None,
            next: None,
        }
    }

    /// Number of columns the chunk occupies.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the chunk occupies no columns (virtual braces).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether this chunk is a physical newline.
    #[inline]
    pub fn is_newline(&self) -> bool {
        self.kind == ChunkKind::Newline
    }

    /// Whether this chunk is a comment.
    #[inline]
    pub fn is_comment(&self) -> bool {
        self.kind == ChunkKind::Comment
    }

    /// Column of the last character, `column + len - 1`.
    #[inline]
    pub fn last_column(&self) -> usize {
        (self.column + self.len()).saturating_sub(1)
    }
}

/// Doubly-linked chunk stream over a flat arena.
#[derive(Default, Debug)]
pub struct ChunkStream {
    chunks: Vec<Chunk>,
    head: Option<ChunkId>,
    tail: Option<ChunkId>,
}

impl ChunkStream {
    /// Create an empty stream.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with capacity for roughly `n` chunks.
    pub fn with_capacity(n: usize) -> Self {
        ChunkStream {
            chunks: Vec::with_capacity(n),
            head: None,
            tail: None,
        }
    }

    /// First chunk of the stream.
    #[inline]
    pub fn head(&self) -> Option<ChunkId> {
        self.head
    }

    /// Last chunk of the stream.
    #[inline]
    pub fn tail(&self) -> Option<ChunkId> {
        self.tail
    }

    /// Number of chunks in the arena.
    #[inline]
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Whether the stream holds no chunks.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Borrow a chunk.
    #[inline]
    pub fn get(&self, id: ChunkId) -> &Chunk {
        &self.chunks[id.index()]
    }

    /// Mutably borrow a chunk.
    #[inline]
    pub fn get_mut(&mut self, id: ChunkId) -> &mut Chunk {
        &mut self.chunks[id.index()]
    }

    /// Successor of `id` in stream order.
    #[inline]
    pub fn next(&self, id: ChunkId) -> Option<ChunkId> {
        self.get(id).next
    }

    /// Predecessor of `id` in stream order.
    #[inline]
    pub fn prev(&self, id: ChunkId) -> Option<ChunkId> {
        self.get(id).prev
    }

    /// Append a chunk at the end of the stream.
    pub fn push_back(&mut self, mut chunk: Chunk) -> ChunkId {
        let id = ChunkId::new(self.alloc_index());
        chunk.prev = self.tail;
        chunk.next = None;
        self.chunks.push(chunk);
        match self.tail {
            Some(tail) => self.chunks[tail.index()].next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        id
    }

    /// Insert a chunk immediately before `at`.
    pub fn insert_before(&mut self, at: ChunkId, mut chunk: Chunk) -> ChunkId {
        let id = ChunkId::new(self.alloc_index());
        let prev = self.get(at).prev;
        chunk.prev = prev;
        chunk.next = Some(at);
        self.chunks.push(chunk);
        self.chunks[at.index()].prev = Some(id);
        match prev {
            Some(p) => self.chunks[p.index()].next = Some(id),
            None => self.head = Some(id),
        }
        id
    }

    fn alloc_index(&self) -> u32 {
        u32::try_from(self.chunks.len()).unwrap_or_else(|_| {
            panic!(
                "chunk arena capacity exceeded: {} chunks, max is {}",
                self.chunks.len(),
                u32::MAX
            )
        })
    }

    /// Insert a newline chunk immediately before `at`, unless `at` is a
    /// newline or already sits at the start of a line.
    ///
    /// Returns the id of the inserted newline, or `None` when nothing was
    /// inserted. The newline inherits the anchor's levels and flags so that
    /// bounded scans (for-header, template) keep their context when they
    /// cross newlines they themselves created.
    pub fn insert_newline_before(&mut self, at: ChunkId) -> Option<ChunkId> {
        if self.get(at).is_newline() {
            return None;
        }
        if let Some(prev) = self.prev(at) {
            if self.get(prev).is_newline() {
                return None;
            }
        }
        let anchor = self.get(at);
        let mut nl = Chunk::new(ChunkKind::Newline, "\n");
        nl.column = anchor.column;
        nl.level = anchor.level;
        nl.brace_level = anchor.brace_level;
        nl.flags = anchor.flags;
        nl.parent = anchor.parent;
        nl.nl_count = 1;
        Some(self.insert_before(at, nl))
    }

    /// Move `at` to column `col` and shift the rest of its physical line by
    /// the same delta.
    pub fn reindent_line(&mut self, at: ChunkId, col: usize) {
        let delta = col as isize - self.get(at).column as isize;
        if delta == 0 {
            return;
        }
        let mut cur = Some(at);
        while let Some(id) = cur {
            let chunk = self.get_mut(id);
            if chunk.is_newline() {
                break;
            }
            chunk.column = (chunk.column as isize + delta).max(1) as usize;
            cur = self.next(id);
        }
    }

    /// Nearest preceding chunk of `kind` at exactly `level`.
    pub fn prev_of_kind(&self, from: ChunkId, kind: ChunkKind, level: usize) -> Option<ChunkId> {
        let mut cur = self.prev(from);
        while let Some(id) = cur {
            let c = self.get(id);
            if c.kind == kind && c.level == level {
                return Some(id);
            }
            cur = self.prev(id);
        }
        None
    }

    /// Nearest following chunk of `kind` at exactly `level`.
    pub fn next_of_kind(&self, from: ChunkId, kind: ChunkKind, level: usize) -> Option<ChunkId> {
        let mut cur = self.next(from);
        while let Some(id) = cur {
            let c = self.get(id);
            if c.kind == kind && c.level == level {
                return Some(id);
            }
            cur = self.next(id);
        }
        None
    }

    /// Next chunk that is neither a comment nor a newline.
    pub fn next_non_comment_non_newline(&self, from: ChunkId) -> Option<ChunkId> {
        let mut cur = self.next(from);
        while let Some(id) = cur {
            let c = self.get(id);
            if !c.is_comment() && !c.is_newline() {
                return Some(id);
            }
            cur = self.next(id);
        }
        None
    }

    /// Whether `id` is the last chunk on its physical line.
    pub fn is_last_on_line(&self, id: ChunkId) -> bool {
        match self.next(id) {
            None => true,
            Some(next) => self.get(next).is_newline(),
        }
    }

    /// Iterate chunk ids in stream order.
    pub fn ids(&self) -> Ids<'_> {
        Ids {
            stream: self,
            cur: self.head,
        }
    }

    /// Render the stream back to text, honoring each chunk's column.
    ///
    /// Intended for tests and debugging; the real emitter lives in the
    /// enclosing formatter.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let mut col = 1usize;
        for id in self.ids() {
            let c = self.get(id);
            if c.is_newline() {
                for _ in 0..c.nl_count.max(1) {
                    out.push('\n');
                }
                col = 1;
                continue;
            }
            if c.is_empty() {
                continue;
            }
            while col < c.column {
                out.push(' ');
                col += 1;
            }
            out.push_str(&c.text);
            col += c.len();
        }
        out
    }
}

/// Forward iterator over chunk ids.
pub struct Ids<'a> {
    stream: &'a ChunkStream,
    cur: Option<ChunkId>,
}

impl Iterator for Ids<'_> {
    type Item = ChunkId;

    fn next(&mut self) -> Option<ChunkId> {
        let id = self.cur?;
        self.cur = self.stream.next(id);
        Some(id)
    }
}

/// Left-to-right stream assembly with computed columns.
///
/// The builder stands in for the tokenizer and indenter: it stamps each
/// chunk with the current level, brace level, flags, and parent, and lays
/// tokens out with single-space gaps.
///
/// # Example
///
/// ```
/// use codewidth::{ChunkKind, StreamBuilder};
///
/// let mut b = StreamBuilder::new();
/// b.tok(ChunkKind::Word, "int");
/// b.tok(ChunkKind::Word, "x");
/// b.tok(ChunkKind::Assign, "=");
/// b.tok(ChunkKind::Number, "1");
/// b.glue(ChunkKind::Semicolon, ";");
/// let stream = b.finish();
/// assert_eq!(stream.render(), "int x = 1;");
/// ```
pub struct StreamBuilder {
    stream: ChunkStream,
    column: usize,
    level: usize,
    brace_level: usize,
    flags: ChunkFlags,
    parent: ParentKind,
}

impl Default for StreamBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamBuilder {
    /// Start an empty stream at column 1.
    pub fn new() -> Self {
        StreamBuilder {
            stream: ChunkStream::new(),
            column: 1,
            level: 0,
            brace_level: 0,
            flags: ChunkFlags::empty(),
            parent: ParentKind::None,
        }
    }

    /// Set the flags stamped on subsequent chunks.
    pub fn flags(&mut self, flags: ChunkFlags) -> &mut Self {
        self.flags = flags;
        self
    }

    /// Set the parent stamped on subsequent chunks.
    pub fn parent(&mut self, parent: ParentKind) -> &mut Self {
        self.parent = parent;
        self
    }

    /// Current nesting level the next chunk will be stamped with.
    #[inline]
    pub fn level(&self) -> usize {
        self.level
    }

    /// Advance the column without emitting anything (indentation).
    pub fn pad(&mut self, n: usize) -> &mut Self {
        self.column += n;
        self
    }

    /// Emit a token separated from the previous one by a single space.
    pub fn tok(&mut self, kind: ChunkKind, text: &str) -> ChunkId {
        if self.column > 1 {
            self.column += 1;
        }
        self.emit(kind, text)
    }

    /// Emit a token abutting the previous one.
    pub fn glue(&mut self, kind: ChunkKind, text: &str) -> ChunkId {
        self.emit(kind, text)
    }

    /// Emit a newline and reset to column 1.
    pub fn newline(&mut self) -> ChunkId {
        let mut nl = Chunk::new(ChunkKind::Newline, "\n");
        nl.column = self.column;
        nl.level = self.level;
        nl.brace_level = self.brace_level;
        nl.flags = self.flags;
        nl.parent = self.parent;
        nl.nl_count = 1;
        self.column = 1;
        self.stream.push_back(nl)
    }

    fn emit(&mut self, kind: ChunkKind, text: &str) -> ChunkId {
        if kind.closes_level() {
            self.level = self.level.saturating_sub(1);
            if kind == ChunkKind::BraceClose || kind == ChunkKind::VbraceClose {
                self.brace_level = self.brace_level.saturating_sub(1);
            }
        }
        let mut chunk = Chunk::new(kind, text);
        chunk.column = self.column;
        chunk.level = self.level;
        chunk.brace_level = self.brace_level;
        chunk.flags = self.flags;
        chunk.parent = self.parent;
        self.column += text.len();
        if kind.opens_level() {
            self.level += 1;
            if kind == ChunkKind::BraceOpen || kind == ChunkKind::VbraceOpen {
                self.brace_level += 1;
            }
        }
        self.stream.push_back(chunk)
    }

    /// Finish and return the assembled stream.
    pub fn finish(self) -> ChunkStream {
        self.stream
    }
}
