//! The control signal threaded back from every run.
//!
//! `run()` stops executing remaining sibling chunks as soon as a
//! non-continue flow surfaces, and every invocation boundary applies
//! [`Flow::unwind`] when it pops its frame. That pairing reproduces
//! multi-level early exit exactly: `Exit(n)` unwinds `n` further dynamic
//! frames beyond the one that raised it, stopping sibling execution at each
//! level on the way out. `Return` passes through structure boundaries
//! untouched and is consumed by the nearest algorithm boundary as the
//! call's result.

use crate::value::Value;

#[derive(Clone, Debug, PartialEq)]
pub enum Flow {
    /// Keep executing sibling chunks.
    Continue,
    /// Unwind to the nearest algorithm boundary with this result.
    Return(Value),
    /// Unwind this many more invocation boundaries.
    Exit(usize),
}

impl Flow {
    pub fn is_continue(&self) -> bool {
        matches!(self, Flow::Continue)
    }

    /// The conversion every invocation boundary applies after popping its
    /// frame: an exhausted exit becomes continue, a pending one loses a
    /// level, everything else passes through.
    #[must_use]
    pub fn unwind(self) -> Flow {
        match self {
            Flow::Exit(0) => Flow::Continue,
            Flow::Exit(n) => Flow::Exit(n - 1),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unwind_counts_down_exits() {
        assert_eq!(Flow::Exit(2).unwind(), Flow::Exit(1));
        assert_eq!(Flow::Exit(1).unwind(), Flow::Exit(0));
        assert_eq!(Flow::Exit(0).unwind(), Flow::Continue);
    }

    #[test]
    fn test_unwind_passes_return_and_continue() {
        assert_eq!(Flow::Continue.unwind(), Flow::Continue);
        assert_eq!(
            Flow::Return(Value::Number(5)).unwind(),
            Flow::Return(Value::Number(5))
        );
    }
}
