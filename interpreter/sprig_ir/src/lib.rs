//! Instruction-chunk tree shared by the Sprig chunker and execution engine.
//!
//! A [`Chunk`] is the parser's output unit: either a bare instruction line or
//! a head line grouped with the ordered list of child chunks that were
//! indented below it. The engine walks this tree directly; chunks are created
//! fresh for every parse and never mutated in place.

use std::fmt;

/// One parsed instruction.
///
/// The chunker produces a `Vec<Chunk>` per source block. A [`Chunk::Block`]
/// keeps its body chunks in source order; bodies that contained further
/// indentation hold nested blocks, everything else collapses to
/// [`Chunk::Line`] entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Chunk {
    /// An instruction with no indented body.
    Line(String),
    /// A head instruction followed by its indented body.
    Block {
        /// The unindented head line.
        head: String,
        /// Child chunks, one indent level below the head.
        body: Vec<Chunk>,
    },
}

impl Chunk {
    /// Create a bare instruction line.
    pub fn line(text: impl Into<String>) -> Self {
        Chunk::Line(text.into())
    }

    /// Create a head line with a body.
    pub fn block(head: impl Into<String>, body: Vec<Chunk>) -> Self {
        Chunk::Block {
            head: head.into(),
            body,
        }
    }

    /// The instruction text: the line itself, or the block's head line.
    pub fn head(&self) -> &str {
        match self {
            Chunk::Line(text) => text,
            Chunk::Block { head, .. } => head,
        }
    }

    /// The body chunks (empty for bare lines).
    pub fn body(&self) -> &[Chunk] {
        match self {
            Chunk::Line(_) => &[],
            Chunk::Block { body, .. } => body,
        }
    }

    /// Returns `true` if this chunk carries an indented body.
    pub fn is_block(&self) -> bool {
        matches!(self, Chunk::Block { .. })
    }
}

impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.head())
    }
}

#[cfg(test)]
mod tests;
