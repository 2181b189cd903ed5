//! The chunker: Sprig source text to a [`Chunk`] tree, and back.
//!
//! Sprig recovers block structure from indentation alone. The chunker
//! normalizes line terminators and indent markers, groups every non-indented
//! head line with the contiguous run of singly-indented lines below it, and
//! recursively re-chunks bodies that are themselves further indented. A final
//! refactor pass collapses body-less groups into bare [`Chunk::Line`]s so the
//! tree is only as deep as the source actually nests.
//!
//! Parsing is best-effort: an indented line with no preceding head is
//! reported with its 1-based line number and skipped, and chunking continues
//! with the remaining lines.
//!
//! [`encode`] is the inverse transform. It is what algorithm definitions use
//! to capture a body as re-parseable source text.

use sprig_diagnostic::{ErrorCode, Reporter};
use sprig_ir::Chunk;
use sprig_stack::ensure_headroom;

/// Canonical line terminator. `\r\n` and `\r` normalize to it.
pub const TERMINATOR: char = '\n';

/// Canonical indent unit. Four spaces normalize to it.
pub const INDENT: char = '\t';

const SPACE_INDENT: &str = "    ";

/// Parses source text into chunk trees.
pub struct Chunker<'r> {
    reporter: &'r Reporter,
}

impl<'r> Chunker<'r> {
    pub fn new(reporter: &'r Reporter) -> Self {
        Chunker { reporter }
    }

    /// Parse `source` into a chunk tree.
    ///
    /// Empty or all-blank input yields an empty tree and a warning. Syntax
    /// errors are reported per offending line; the rest of the source is
    /// still parsed.
    pub fn decode(&self, source: &str) -> Vec<Chunk> {
        if source.trim().is_empty() {
            self.reporter.warning("no code to run");
            return Vec::new();
        }
        refactor(self.create(source, 0))
    }

    /// Group lines into chunks. `line_offset` is the absolute index of
    /// `source`'s first line, for error reporting inside nested bodies.
    fn create(&self, source: &str, line_offset: usize) -> Vec<Chunk> {
        let normalized = normalize_terminators(source);

        let mut chunks = Vec::new();
        let mut head: Option<String> = None;
        let mut body: Vec<String> = Vec::new();
        let mut body_start = 0;

        for (line_id, raw_line) in normalized.split(TERMINATOR).enumerate() {
            if raw_line.trim().is_empty() {
                continue;
            }
            let line = normalize_indents(raw_line);
            if let Some(stripped) = line.strip_prefix(INDENT) {
                if head.is_none() {
                    self.reporter.error(
                        ErrorCode::E1001,
                        format!(
                            "unexpected indentation in line {}:\n{raw_line}",
                            line_offset + line_id + 1
                        ),
                    );
                    continue;
                }
                if body.is_empty() {
                    body_start = line_id;
                }
                body.push(stripped.to_string());
                continue;
            }
            if let Some(finished) = head.take() {
                chunks.push(self.seal(
                    finished,
                    std::mem::take(&mut body),
                    line_offset + body_start,
                ));
            }
            head = Some(line);
        }
        if let Some(finished) = head {
            chunks.push(self.seal(finished, body, line_offset + body_start));
        }

        chunks
    }

    /// Finish one head/body group. Bodies that still contain indented lines
    /// are re-chunked recursively, with line numbers offset to the body's
    /// position in the overall source.
    fn seal(&self, head: String, body: Vec<String>, body_offset: usize) -> Chunk {
        let nested = if body.iter().any(|line| line.starts_with(INDENT)) {
            let body_source = body.join("\n");
            ensure_headroom(|| self.create(&body_source, body_offset))
        } else {
            body.into_iter().map(Chunk::Line).collect()
        };
        Chunk::Block { head, body: nested }
    }
}

/// Collapse blocks with no body into bare lines, recursively. Deeper
/// structure survives only where the source actually nested.
fn refactor(chunks: Vec<Chunk>) -> Vec<Chunk> {
    chunks
        .into_iter()
        .map(|chunk| match chunk {
            Chunk::Line(_) => chunk,
            Chunk::Block { head, body } => {
                if body.is_empty() {
                    Chunk::Line(head)
                } else {
                    Chunk::Block {
                        head,
                        body: ensure_headroom(|| refactor(body)),
                    }
                }
            }
        })
        .collect()
}

/// Reconstruct source text from a chunk tree, indenting each body one unit
/// below its head.
pub fn encode(chunks: &[Chunk], indent: &str, terminator: &str) -> String {
    let mut lines = Vec::new();
    push_lines(chunks, indent, 0, &mut lines);
    lines.join(terminator)
}

fn push_lines(chunks: &[Chunk], indent: &str, depth: usize, lines: &mut Vec<String>) {
    for chunk in chunks {
        match chunk {
            Chunk::Line(text) => lines.push(format!("{}{text}", indent.repeat(depth))),
            Chunk::Block { head, body } => {
                lines.push(format!("{}{head}", indent.repeat(depth)));
                ensure_headroom(|| push_lines(body, indent, depth + 1, lines));
            }
        }
    }
}

fn normalize_terminators(source: &str) -> String {
    source.replace("\r\n", "\n").replace('\r', "\n")
}

fn normalize_indents(line: &str) -> String {
    line.replace(SPACE_INDENT, "\t")
}

#[cfg(test)]
mod tests;
