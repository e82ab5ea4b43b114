//! Context flags stamped on chunks by the tokenizer and parser.
//!
//! The width pass consumes these as read-only facts about where a chunk
//! sits. The only code permitted to modify them is formatter-side (the
//! [`Reflow`](crate::reflow::Reflow) implementation clears
//! [`ONE_LINER`](ChunkFlags::ONE_LINER) when it expands a block).

use bitflags::bitflags;

bitflags! {
    /// Positional context of a chunk within the surrounding syntax.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct ChunkFlags: u16 {
        // === Enclosing construct ===

        /// Inside a `for` statement header.
        const IN_FOR = 1 << 0;
        /// Inside a function definition signature or body.
        const IN_FCN_DEF = 1 << 1;
        /// Inside a function call.
        const IN_FCN_CALL = 1 << 2;
        /// Inside a template argument list.
        const IN_TEMPLATE = 1 << 3;
        /// Inside statement-keyword parentheses (`for`/`if`/`while` head).
        const IN_SPAREN = 1 << 4;

        // === Line structure ===

        /// Part of a block whose braces and body share one physical line.
        const ONE_LINER = 1 << 5;
    }
}
