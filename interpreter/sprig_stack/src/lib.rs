//! Stack safety for deeply recursive Sprig programs.
//!
//! The engine walks chunk trees recursively, and Sprig algorithms may call
//! themselves without any language-level depth limit. Every recursion point
//! in the chunker and the engine wraps its recursive call in
//! [`ensure_headroom`], which grows the native stack on demand instead of
//! overflowing it.
//!
//! # Configuration
//!
//! - **Red zone**: 64KB. If less than this remains, the stack is grown.
//! - **Growth size**: 2MB per allocation.
//!
//! A single engine frame is small, so the 64KB red zone leaves ample margin;
//! the 2MB growth step keeps the number of allocations low even for programs
//! recursing tens of thousands of frames deep.

/// Minimum remaining stack before growing (64KB).
const RED_ZONE: usize = 64 * 1024;

/// Additional stack allocated per growth (2MB).
const GROWTH_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, growing the stack first if the remaining space is below the
/// red zone.
///
/// Wrap recursive calls that track program nesting or call depth:
///
/// ```text
/// fn run_block(&mut self, body: &[Chunk]) -> Flow {
///     ensure_headroom(|| {
///         // ... recursive execution ...
///     })
/// }
/// ```
#[inline]
pub fn ensure_headroom<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, GROWTH_SIZE, f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_returns_closure_result() {
        assert_eq!(ensure_headroom(|| 7), 7);
    }

    #[test]
    fn test_deep_recursion_does_not_overflow() {
        fn countdown(n: u64) -> u64 {
            ensure_headroom(|| if n == 0 { 0 } else { countdown(n - 1) + 1 })
        }

        // Deep enough to overflow a default thread stack without growth.
        assert_eq!(countdown(200_000), 200_000);
    }

    #[test]
    fn test_works_with_results() {
        let result: Result<u32, String> = ensure_headroom(|| Ok(99));
        assert_eq!(result, Ok(99));
    }
}
