//! Diagnostic reporting for the Sprig interpreter.
//!
//! Every error and warning the chunker or engine produces flows through a
//! [`Reporter`]: a shared sink that renders to stderr, keeps an in-memory
//! history for inspection, counts errors, and applies the configured
//! exit-on-error policy. The core never terminates the process on its own;
//! that decision belongs here.
//!
//! Errors are categorised by [`ErrorCode`], one variant per failure family
//! (syntax, undefined names, argument contracts, ...), each with a stable
//! `E####` display code.

mod code;
mod reporter;

pub use code::ErrorCode;
pub use reporter::{Diagnostic, Reporter, Severity, Verbosity};
