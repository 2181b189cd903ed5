//! Error codes for all interpreter diagnostics.
//!
//! Format: E#### where the first digit indicates the failure family:
//! - E0xxx: core / host errors
//! - E1xxx: syntax errors
//! - E2xxx: name resolution errors
//! - E3xxx: call-contract errors
//! - E4xxx: value errors

use std::fmt;

/// Error codes for all interpreter diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Core errors (E0xxx)
    /// Internal engine invariant broken (e.g. an instruction with no name).
    E0001,
    /// Missing or empty source input.
    E0002,

    // Syntax errors (E1xxx)
    /// Unexpected indentation: an indented line with no preceding head.
    E1001,

    // Name resolution errors (E2xxx)
    /// Unknown bare name used as an inspection request.
    E2001,
    /// Unknown (or non-invocable) callable name.
    E2002,
    /// Bare token that is neither a literal, a variable, nor a callable.
    E2003,

    // Call-contract errors (E3xxx)
    /// Required argument missing.
    E3001,
    /// Too many arguments.
    E3002,
    /// Argument has an unusable type.
    E3003,
    /// Early-exit request beyond the available call depth, or negative.
    E3004,

    // Value errors (E4xxx)
    /// Collection lookup missed every key.
    E4001,
}

impl ErrorCode {
    /// The stable code string, e.g. `"E2002"`.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E3001 => "E3001",
            ErrorCode::E3002 => "E3002",
            ErrorCode::E3003 => "E3003",
            ErrorCode::E3004 => "E3004",
            ErrorCode::E4001 => "E4001",
        }
    }

    /// Human-readable category name, used in rendered diagnostics.
    pub fn category(self) -> &'static str {
        match self {
            ErrorCode::E0001 => "engine",
            ErrorCode::E0002 => "source",
            ErrorCode::E1001 => "indentation",
            ErrorCode::E2001 => "undefined object",
            ErrorCode::E2002 => "undefined algorithm",
            ErrorCode::E2003 => "undefined value",
            ErrorCode::E3001 => "argument missing",
            ErrorCode::E3002 => "argument overflow",
            ErrorCode::E3003 => "argument type",
            ErrorCode::E3004 => "out of bound",
            ErrorCode::E4001 => "key",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_display_matches_as_str() {
        assert_eq!(ErrorCode::E2002.to_string(), "E2002");
        assert_eq!(ErrorCode::E4001.as_str(), "E4001");
    }

    #[test]
    fn test_category_names() {
        assert_eq!(ErrorCode::E1001.category(), "indentation");
        assert_eq!(ErrorCode::E3004.category(), "out of bound");
    }
}
