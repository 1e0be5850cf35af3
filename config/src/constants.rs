//! # Configuration Constants
//!
//! Centralized constants for the angie math libraries. Precision values,
//! vector literal syntax and limits are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Text Format**: Separator and bracket characters for vector literals
//! - **Limits**: Upper bounds for swizzle patterns

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Tolerance used to decide whether a vector has unit length.
///
/// A vector is considered normalized when `|length - 1| < NORMALIZED_TOLERANCE`.
///
/// # Example
///
/// ```rust
/// use angie_config::constants::NORMALIZED_TOLERANCE;
///
/// let length: f64 = 0.9999999999;
/// assert!((length - 1.0).abs() < NORMALIZED_TOLERANCE);
/// ```
pub const NORMALIZED_TOLERANCE: f64 = 1e-9;

// =============================================================================
// TEXT FORMAT CONSTANTS
// =============================================================================

/// Default separator between components of a vector literal.
///
/// # Example
///
/// ```rust
/// use angie_config::constants::DEFAULT_SEPARATOR;
///
/// let tokens: Vec<&str> = "[1, 2, 3]".split(DEFAULT_SEPARATOR).collect();
/// assert_eq!(tokens.len(), 3);
/// ```
pub const DEFAULT_SEPARATOR: &str = ",";

/// Characters accepted before the first component of a vector literal.
pub const OPEN_BRACKETS: [char; 3] = ['[', '(', '{'];

/// Characters accepted after the last component of a vector literal.
pub const CLOSE_BRACKETS: [char; 3] = [']', ')', '}'];

/// Text emitted for positive infinity when formatting components.
///
/// Matches the token the lenient parser recognises, so formatted vectors
/// re-parse to the same value.
pub const INFINITY_TEXT: &str = "Infinity";

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of components a swizzle pattern may request.
///
/// # Example
///
/// ```rust
/// use angie_config::constants::MAX_SWIZZLE_LEN;
///
/// let pattern = "xyzx";
/// assert!(pattern.len() <= MAX_SWIZZLE_LEN);
/// ```
pub const MAX_SWIZZLE_LEN: usize = 4;

// =============================================================================
// GLOBAL CONFIG
// =============================================================================

/// Immutable snapshot of configuration settings shared between crates.
///
/// # Examples
/// ```
/// use angie_config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.tolerance > 0.0);
/// assert_eq!(config.separator, ",");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GlobalConfig {
    /// Tolerance for unit-length checks.
    pub tolerance: f64,
    /// Separator used when reading vector literals.
    pub separator: String,
}

impl GlobalConfig {
    /// Builds a configuration, rejecting a non-positive tolerance or an
    /// empty separator.
    ///
    /// # Examples
    /// ```
    /// use angie_config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-6, ";").expect("valid config");
    /// assert_eq!(cfg.separator, ";");
    /// ```
    pub fn new(tolerance: f64, separator: &str) -> Result<Self, ConfigError> {
        if tolerance.is_nan() || tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if separator.is_empty() {
            return Err(ConfigError::EmptySeparator);
        }
        Ok(Self {
            tolerance,
            separator: separator.to_string(),
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            tolerance: NORMALIZED_TOLERANCE,
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero, negative or NaN.
    InvalidTolerance(f64),
    /// Raised when the separator is the empty string.
    EmptySeparator,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive: {value}")
            }
            ConfigError::EmptySeparator => write!(f, "separator must not be empty"),
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Returns true when `c` may open a vector literal.
#[inline]
pub fn is_open_bracket(c: char) -> bool {
    OPEN_BRACKETS.contains(&c)
}

/// Returns true when `c` may close a vector literal.
#[inline]
pub fn is_close_bracket(c: char) -> bool {
    CLOSE_BRACKETS.contains(&c)
}

/// Returns the bracket that closes `open`, or `None` if `open` is not an
/// opening bracket.
///
/// # Example
///
/// ```rust
/// use angie_config::constants::closing_bracket;
///
/// assert_eq!(closing_bracket('('), Some(')'));
/// assert_eq!(closing_bracket(']'), None);
/// ```
#[inline]
pub fn closing_bracket(open: char) -> Option<char> {
    OPEN_BRACKETS
        .iter()
        .position(|&c| c == open)
        .map(|i| CLOSE_BRACKETS[i])
}
