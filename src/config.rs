//! Width pass configuration.
//!
//! An immutable option record bound once at pass entry. Hosts load these
//! from whatever option surface they own; the pass itself reads files and
//! environment never.

use crate::chunk::ChunkKind;

/// Default maximum line width.
pub const MAX_LINE_WIDTH: usize = 100;

/// Default spaces per indentation level.
pub const INDENT_WIDTH: usize = 4;

/// Where a newline lands relative to an operator chosen as a split point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OperatorPos {
    /// Break before the operator; it leads the continuation line.
    Lead,
    /// Break after the operator; it trails the broken line.
    #[default]
    Trail,
}

impl OperatorPos {
    /// Whether the operator should lead the continuation line.
    #[inline]
    pub const fn is_lead(self) -> bool {
        matches!(self, OperatorPos::Lead)
    }
}

/// Options consulted by the width pass.
#[derive(Clone, Debug)]
pub struct SplitConfig {
    /// Hard column limit. A token may end exactly at this column.
    pub max_width: usize,

    /// Treat `max_width` as an absolute maximum: allow splits that break up
    /// common groupings (ternaries, right after a function open paren) and
    /// take the split point nearest the limit instead of the best-scored
    /// one.
    pub enforce_max_width: bool,

    /// Put every function argument on its own line before falling back to
    /// greedy packing.
    pub full_split_args: bool,

    /// Split a `for` header at both semicolons instead of the first found.
    pub full_split_for: bool,

    /// Spaces per indentation level.
    pub indent_size: usize,

    /// Continuation indent. When 0, `indent_size` is used as the step.
    pub continuation_indent: i32,

    /// Indent continuations from the open paren; disables the continuation
    /// column recomputation inside argument lists.
    pub indent_from_paren: bool,

    /// Newline placement for arithmetic and xor operators.
    pub pos_arith: OperatorPos,
    /// Newline placement for assignment operators.
    pub pos_assign: OperatorPos,
    /// Newline placement for comparison operators.
    pub pos_compare: OperatorPos,
    /// Newline placement for ternary `?` and `:`.
    pub pos_conditional: OperatorPos,
    /// Newline placement for shift operators.
    pub pos_shift: OperatorPos,
    /// Newline placement for boolean operators.
    pub pos_bool: OperatorPos,
}

impl Default for SplitConfig {
    fn default() -> Self {
        SplitConfig {
            max_width: MAX_LINE_WIDTH,
            enforce_max_width: false,
            full_split_args: false,
            full_split_for: false,
            indent_size: INDENT_WIDTH,
            continuation_indent: 0,
            indent_from_paren: false,
            pos_arith: OperatorPos::Trail,
            pos_assign: OperatorPos::Trail,
            pos_compare: OperatorPos::Trail,
            pos_conditional: OperatorPos::Trail,
            pos_shift: OperatorPos::Trail,
            pos_bool: OperatorPos::Trail,
        }
    }
}

impl SplitConfig {
    /// Config with the given width and everything else defaulted.
    pub fn with_max_width(max_width: usize) -> Self {
        SplitConfig {
            max_width,
            ..SplitConfig::default()
        }
    }

    /// Absolute value of the continuation indent.
    #[inline]
    pub fn continuation_abs(&self) -> usize {
        self.continuation_indent.unsigned_abs() as usize
    }

    /// Continuation step: `indent_size` when `continuation_indent` is 0,
    /// `|continuation_indent|` otherwise.
    #[inline]
    pub fn continuation_step(&self) -> usize {
        if self.continuation_indent == 0 {
            self.indent_size
        } else {
            self.continuation_abs()
        }
    }

    /// Positional policy for an operator kind, if one applies.
    pub fn pos_for(&self, kind: ChunkKind) -> Option<OperatorPos> {
        match kind {
            ChunkKind::Shift => Some(self.pos_shift),
            ChunkKind::Arith | ChunkKind::Caret => Some(self.pos_arith),
            ChunkKind::Assign => Some(self.pos_assign),
            ChunkKind::Compare => Some(self.pos_compare),
            ChunkKind::Question | ChunkKind::TernaryColon => Some(self.pos_conditional),
            ChunkKind::BoolOp => Some(self.pos_bool),
            _ => None,
        }
    }
}
