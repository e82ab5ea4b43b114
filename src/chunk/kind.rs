//! Chunk kind and parent-construct tags.
//!
//! `ChunkKind` is the closed set of token classifications the width pass
//! distinguishes. The tokenizer produces a richer set; everything it emits
//! that the pass does not care about arrives as [`ChunkKind::Other`].
//!
//! # Representation
//!
//! `#[repr(u8)]` keeps each tag a single byte for compact chunk storage and
//! cheap tag-based dispatch.

/// Token classification of a chunk.
///
/// # Stability
///
/// This enum is `#[non_exhaustive]`; new variants may be added as the
/// tokenizer grows. Match arms should include a wildcard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum ChunkKind {
    // === Words & literals ===
    /// Identifier.
    Word,
    /// Numeric literal.
    Number,
    /// String literal.
    Str,

    // === Operators ===
    /// Arithmetic operator (`+`, `-`, `*`, `/`, `%`).
    Arith,
    /// Bitwise xor (`^`).
    Caret,
    /// Shift operator (`<<`, `>>`).
    Shift,
    /// Comparison operator (`==`, `!=`, `<`, `<=`, `>`, `>=`).
    Compare,
    /// Boolean operator (`&&`, `||`).
    BoolOp,
    /// Assignment operator (`=`, `+=`, ...).
    Assign,
    /// Ternary `?`.
    Question,
    /// Ternary `:`.
    TernaryColon,
    /// Range-for `:`.
    ForColon,

    // === Punctuation ===
    /// `;`
    Semicolon,
    /// `,`
    Comma,

    // === Delimiters ===
    /// Plain `(` (grouping, casts).
    ParenOpen,
    /// Plain `)`.
    ParenClose,
    /// `(` opening a function call, prototype, or definition argument list.
    FparenOpen,
    /// `)` closing a function argument list.
    FparenClose,
    /// `(` following a statement keyword (`for`, `if`, `while`).
    SparenOpen,
    /// `)` closing a statement-keyword group.
    SparenClose,
    /// `<` opening a template argument list.
    AngleOpen,
    /// `>` closing a template argument list.
    AngleClose,
    /// `{`
    BraceOpen,
    /// `}`
    BraceClose,
    /// Virtual `{` (implied block, zero columns wide).
    VbraceOpen,
    /// Virtual `}` (implied block, zero columns wide).
    VbraceClose,

    // === Type heads ===
    /// Qualifier keyword (`const`, `static`, ...).
    Qualifier,
    /// `class`
    Class,
    /// `struct`
    Struct,
    /// Type name.
    Type,
    /// `typename`
    Typename,
    /// `volatile`
    Volatile,

    // === Trivia ===
    /// Physical newline (see `Chunk::nl_count`).
    Newline,
    /// Comment of any style.
    Comment,
    /// Explicit whitespace run.
    Space,

    /// Anything else the tokenizer emits.
    Other,
}

impl ChunkKind {
    /// Whether a newline must never be inserted directly before this kind.
    ///
    /// Closers, separators, and paren opens bind to what precedes them;
    /// landing a split on one of these is treated as a failed split.
    #[inline]
    pub const fn no_break_before(self) -> bool {
        matches!(
            self,
            ChunkKind::ParenOpen
                | ChunkKind::ParenClose
                | ChunkKind::FparenOpen
                | ChunkKind::FparenClose
                | ChunkKind::SparenOpen
                | ChunkKind::SparenClose
                | ChunkKind::AngleClose
                | ChunkKind::BraceClose
                | ChunkKind::Comma
                | ChunkKind::Semicolon
        )
    }

    /// Whether this kind opens a nesting level.
    #[inline]
    pub const fn opens_level(self) -> bool {
        matches!(
            self,
            ChunkKind::ParenOpen
                | ChunkKind::FparenOpen
                | ChunkKind::SparenOpen
                | ChunkKind::AngleOpen
                | ChunkKind::BraceOpen
                | ChunkKind::VbraceOpen
        )
    }

    /// Whether this kind closes a nesting level.
    #[inline]
    pub const fn closes_level(self) -> bool {
        matches!(
            self,
            ChunkKind::ParenClose
                | ChunkKind::FparenClose
                | ChunkKind::SparenClose
                | ChunkKind::AngleClose
                | ChunkKind::BraceClose
                | ChunkKind::VbraceClose
        )
    }
}

/// The syntactic construct a chunk belongs to.
///
/// Assigned by the parser; the width pass consumes it read-only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ParentKind {
    /// No owning construct recorded.
    #[default]
    None,
    /// Function definition.
    FuncDef,
    /// Function prototype.
    FuncProto,
    /// Function call.
    FuncCall,
    /// `for` statement header.
    For,
}
