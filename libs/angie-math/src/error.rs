//! # Error Types
//!
//! Errors for the strict entry points of the math crate. The lenient vector
//! literal reader never fails; it writes `NaN` into the slots it cannot read.
//!
//! ## Error Policy
//!
//! - Lenient parsing propagates `NaN` instead of erroring
//! - Strict parsing and swizzles report explicit errors
//! - Errors carry the offending text for debugging

use thiserror::Error;

// =============================================================================
// PARSE ERROR
// =============================================================================

/// Errors produced by the strict vector literal parser.
///
/// ## Example
///
/// ```rust
/// use angie_math::{ParseError, Vec3};
///
/// match "[1, 2]".parse::<Vec3>() {
///     Ok(v) => println!("parsed {}", v),
///     Err(ParseError::WrongArity { found }) => eprintln!("got {} components", found),
///     Err(e) => eprintln!("other error: {}", e),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The input was empty or only whitespace.
    #[error("vector literal is empty")]
    Empty,

    /// The literal did not contain exactly three components.
    #[error("expected 3 components, found {found}")]
    WrongArity {
        /// Number of separator-delimited tokens found.
        found: usize,
    },

    /// The opening and closing brackets do not form a pair.
    #[error("bracket '{open}' closed by '{close}'")]
    MismatchedBrackets {
        /// Opening bracket.
        open: char,
        /// Closing bracket.
        close: char,
    },

    /// A component could not be read as a number.
    #[error("invalid number '{text}' for component {index}")]
    InvalidNumber {
        /// Zero-based component index (0 = x).
        index: usize,
        /// The token after bracket and whitespace trimming.
        text: String,
    },
}

// =============================================================================
// SWIZZLE ERROR
// =============================================================================

/// Errors produced by [`Vec3::swizzle`](crate::Vec3::swizzle).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SwizzleError {
    /// The pattern was empty.
    #[error("swizzle pattern is empty")]
    Empty,

    /// The pattern requested more components than allowed.
    #[error("swizzle pattern of length {len} exceeds the maximum of {max}")]
    TooLong {
        /// Length of the requested pattern.
        len: usize,
        /// Maximum pattern length.
        max: usize,
    },

    /// The pattern named something other than `x`, `y` or `z`.
    #[error("invalid swizzle component '{ch}'")]
    InvalidComponent {
        /// The offending character.
        ch: char,
    },
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for strict parsing.
///
/// ## Example
///
/// ```rust
/// use angie_math::error::MathResult;
/// use angie_math::Vec3;
///
/// fn origin() -> MathResult<Vec3> {
///     "[0, 0, 0]".parse()
/// }
/// assert_eq!(origin().unwrap(), Vec3::ZERO);
/// ```
pub type MathResult<T> = Result<T, ParseError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Test error display messages.
    #[test]
    fn test_error_display() {
        let arity = ParseError::WrongArity { found: 2 };
        assert!(arity.to_string().contains("found 2"));

        let invalid = ParseError::InvalidNumber {
            index: 1,
            text: "abc".to_string(),
        };
        assert!(invalid.to_string().contains("abc"));
        assert!(invalid.to_string().contains("component 1"));

        let brackets = ParseError::MismatchedBrackets {
            open: '[',
            close: ')',
        };
        assert_eq!(brackets.to_string(), "bracket '[' closed by ')'");

        let swizzle = SwizzleError::InvalidComponent { ch: 'w' };
        assert!(swizzle.to_string().contains('w'));
    }

    /// Test error types are Send + Sync.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ParseError>();
        assert_send_sync::<SwizzleError>();
    }
}
