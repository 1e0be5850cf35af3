//! # Vector Literals
//!
//! Formatting and parsing of the `"[x, y, z]"` text form.
//!
//! ```text
//! vector-literal := [open]? number sep number sep number [close]?
//! open  := '[' | '(' | '{'
//! close := ']' | ')' | '}'
//! sep   := caller supplied separator, default ","
//! ```
//!
//! Two readers are provided:
//!
//! - **Lenient** ([`Vec3::read_str`]): reads the longest numeric prefix of
//!   each token and writes `NaN` for anything it cannot read. Never fails.
//! - **Strict** ([`Vec3::parse_strict`], [`str::parse`]): requires exactly
//!   three well-formed numbers and reports a [`ParseError`] otherwise.

use super::Vec3;
use crate::config::VectorConfig;
use crate::error::{MathResult, ParseError};
use angie_config::constants::{
    closing_bracket, is_close_bracket, is_open_bracket, DEFAULT_SEPARATOR, INFINITY_TEXT,
};
use std::fmt;
use std::str::FromStr;

/// Text `Display` writes for a `NaN` component.
const NAN_TEXT: &str = "NaN";

// =============================================================================
// FORMATTING
// =============================================================================

/// Formats one component the way the readers expect it back.
struct Component(f64);

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_infinite() {
            let sign = if self.0 < 0.0 { "-" } else { "" };
            write!(f, "{sign}{INFINITY_TEXT}")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl fmt::Display for Vec3 {
    /// Writes `[x, y, z]` using the shortest text that reads back to the
    /// same value (`0`, `2.111`, `NaN`, `-Infinity`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}, {}]",
            Component(self.x),
            Component(self.y),
            Component(self.z)
        )
    }
}

// =============================================================================
// NUMBER PREFIX SCANNER
// =============================================================================

/// Reads the longest leading float literal of `text`.
///
/// Leading whitespace is skipped, then an optional sign followed by either
/// `Infinity` or digits with an optional fraction and exponent. Scanning
/// stops at the first character that cannot extend the number; trailing
/// text is ignored. Returns `NaN` when no digits are found.
///
/// ```rust
/// use angie_math::parse_float_prefix;
///
/// assert_eq!(parse_float_prefix("  3.25abc"), 3.25);
/// assert_eq!(parse_float_prefix("-1e3]"), -1000.0);
/// assert_eq!(parse_float_prefix(".5"), 0.5);
/// assert_eq!(parse_float_prefix("-Infinity"), f64::NEG_INFINITY);
/// assert!(parse_float_prefix("x1").is_nan());
/// ```
pub fn parse_float_prefix(text: &str) -> f64 {
    scan_number(text.trim_start()).map_or(f64::NAN, |(value, _)| value)
}

/// Scans a float literal at the very start of `s` and returns its value
/// with the number of bytes consumed, or `None` when `s` does not start
/// with a number.
fn scan_number(s: &str) -> Option<(f64, usize)> {
    let bytes = s.as_bytes();
    let len = bytes.len();
    let digits_in = |from: usize| bytes[from..].iter().take_while(|b| b.is_ascii_digit()).count();

    let mut end = 0;
    let negative = bytes.first() == Some(&b'-');
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    if s[end..].starts_with(INFINITY_TEXT) {
        let value = if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        return Some((value, end + INFINITY_TEXT.len()));
    }

    let int_digits = digits_in(end);
    end += int_digits;

    let mut frac_digits = 0;
    if end < len && bytes[end] == b'.' {
        frac_digits = digits_in(end + 1);
        // A lone "." is not a number; "5." and ".5" are.
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if end < len && matches!(bytes[end], b'e' | b'E') {
        let mut exp_start = end + 1;
        if exp_start < len && matches!(bytes[exp_start], b'+' | b'-') {
            exp_start += 1;
        }
        let exp_digits = digits_in(exp_start);
        if exp_digits > 0 {
            end = exp_start + exp_digits;
        }
    }

    s[..end].parse().ok().map(|value| (value, end))
}

/// Reads a whole token as a number, accepting exactly what the prefix
/// scanner consumes plus the `NaN` text written by `Display`.
fn parse_component(token: &str) -> Option<f64> {
    if token == NAN_TEXT {
        return Some(f64::NAN);
    }
    match scan_number(token) {
        Some((value, consumed)) if consumed == token.len() => Some(value),
        _ => None,
    }
}

// =============================================================================
// LENIENT READER
// =============================================================================

/// Splits a literal on `separator` and trims the bracket from the first
/// and last tokens.
fn tokenize<'a>(text: &'a str, separator: &str) -> Vec<&'a str> {
    let mut tokens: Vec<&str> = text.split(separator).collect();
    if let Some(first) = tokens.first_mut() {
        *first = first.trim_start_matches(|c: char| c.is_whitespace() || is_open_bracket(c));
    }
    let last = tokens.len().min(3).saturating_sub(1);
    if let Some(token) = tokens.get_mut(last) {
        *token = token.trim_end_matches(|c: char| c.is_whitespace() || is_close_bracket(c));
    }
    tokens
}

impl Vec3 {
    /// Reads a comma separated literal into this vector. See
    /// [`Vec3::read_str_with`].
    ///
    /// ```rust
    /// use angie_math::Vec3;
    /// let mut v = Vec3::default();
    /// v.read_str("{1.5555, 5, 18.0333}");
    /// assert_eq!(v, Vec3::new(1.5555, 5.0, 18.0333));
    /// ```
    pub fn read_str(&mut self, text: &str) -> &mut Self {
        self.read_str_with(text, DEFAULT_SEPARATOR)
    }

    /// Reads a literal whose components are split by `separator`.
    ///
    /// An empty separator falls back to `","`. Each of the first three tokens
    /// is read with [`parse_float_prefix`]; a missing or unreadable token
    /// writes `NaN` so partial input stays detectable. An empty `text` logs a
    /// warning and leaves the vector untouched.
    ///
    /// ```rust
    /// use angie_math::Vec3;
    /// let mut v = Vec3::default();
    /// v.read_str_with("[1; 2; 3]", ";");
    /// assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
    ///
    /// v.read_str("(1,3)");
    /// assert_eq!((v.x, v.y), (1.0, 3.0));
    /// assert!(v.z.is_nan());
    /// ```
    pub fn read_str_with(&mut self, text: &str, separator: &str) -> &mut Self {
        if text.is_empty() {
            tracing::warn!("vector literal is empty, vector left unchanged");
            return self;
        }
        let separator = if separator.is_empty() {
            DEFAULT_SEPARATOR
        } else {
            separator
        };

        let tokens = tokenize(text, separator);
        let component = |i: usize| tokens.get(i).map_or(f64::NAN, |t| parse_float_prefix(t));
        self.set(component(0), component(1), component(2));

        if self.x.is_nan() || self.y.is_nan() || self.z.is_nan() {
            tracing::debug!(literal = %text, "vector literal has unreadable components");
        }
        self
    }

    /// Reads a literal using the separator from `config`.
    pub fn read_str_config(&mut self, text: &str, config: &VectorConfig) -> &mut Self {
        self.read_str_with(text, &config.separator)
    }

    /// Builds a vector from a literal with the lenient reader, starting from
    /// the zero vector.
    ///
    /// ```rust
    /// use angie_math::Vec3;
    /// let v = Vec3::from_str_lenient("  (    1    ,       2    ,   3   )    ", ",");
    /// assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
    /// ```
    pub fn from_str_lenient(text: &str, separator: &str) -> Vec3 {
        let mut v = Vec3::ZERO;
        v.read_str_with(text, separator);
        v
    }

    // =========================================================================
    // STRICT READER
    // =========================================================================

    /// Parses a literal that must hold exactly three well-formed numbers.
    ///
    /// At most one opening and one closing bracket are stripped, and when
    /// both are present they must pair up. Every token must be a complete
    /// number in the form [`parse_float_prefix`] reads, or `NaN`.
    ///
    /// ```rust
    /// use angie_math::{ParseError, Vec3};
    ///
    /// assert_eq!(Vec3::parse_strict("(1; 2; 3)", ";").unwrap(), Vec3::new(1.0, 2.0, 3.0));
    /// assert_eq!(
    ///     Vec3::parse_strict("(1, 2)", ",").unwrap_err(),
    ///     ParseError::WrongArity { found: 2 }
    /// );
    /// ```
    pub fn parse_strict(text: &str, separator: &str) -> MathResult<Vec3> {
        let inner = strip_brackets(text)?;
        let separator = if separator.is_empty() {
            DEFAULT_SEPARATOR
        } else {
            separator
        };

        let tokens: Vec<&str> = inner.split(separator).map(str::trim).collect();
        if tokens.len() != 3 {
            return Err(ParseError::WrongArity {
                found: tokens.len(),
            });
        }

        let mut components = [0.0; 3];
        for (index, (slot, token)) in components.iter_mut().zip(&tokens).enumerate() {
            *slot = parse_component(token).ok_or_else(|| ParseError::InvalidNumber {
                index,
                text: token.to_string(),
            })?;
        }
        Ok(Vec3::from(components))
    }
}

/// Trims whitespace and then at most one bracket from each end of a strict
/// literal.
fn strip_brackets(text: &str) -> MathResult<&str> {
    let mut inner = text.trim();
    if inner.is_empty() {
        return Err(ParseError::Empty);
    }

    let open = inner.chars().next().filter(|&c| is_open_bracket(c));
    if let Some(c) = open {
        inner = &inner[c.len_utf8()..];
    }
    let close = inner.chars().next_back().filter(|&c| is_close_bracket(c));
    if let Some(c) = close {
        inner = &inner[..inner.len() - c.len_utf8()];
    }

    if let (Some(open), Some(close)) = (open, close) {
        if closing_bracket(open) != Some(close) {
            return Err(ParseError::MismatchedBrackets { open, close });
        }
    }
    Ok(inner)
}

impl FromStr for Vec3 {
    type Err = ParseError;

    /// Strict parse with the default `","` separator.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Vec3::parse_strict(s, DEFAULT_SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_scanner_follows_leading_number() {
        assert_eq!(parse_float_prefix("42"), 42.0);
        assert_eq!(parse_float_prefix("  -0.5 "), -0.5);
        assert_eq!(parse_float_prefix("+7"), 7.0);
        assert_eq!(parse_float_prefix("5."), 5.0);
        assert_eq!(parse_float_prefix("3)"), 3.0);
        assert_eq!(parse_float_prefix("1.2.3"), 1.2);
        assert_eq!(parse_float_prefix("2e"), 2.0);
        assert_eq!(parse_float_prefix("2e+"), 2.0);
        assert_eq!(parse_float_prefix("2E-2x"), 0.02);
        assert_eq!(parse_float_prefix("Infinity and beyond"), f64::INFINITY);
    }

    #[test]
    fn prefix_scanner_rejects_non_numbers() {
        for text in ["", " ", ".", "-", "+.", "abc", "NaN", "e5", "inf"] {
            assert!(parse_float_prefix(text).is_nan(), "{text:?} should be NaN");
        }
    }

    #[test]
    fn tokenize_trims_outer_brackets_only() {
        assert_eq!(tokenize(" [1, 2, 3] ", ","), vec!["1", " 2", " 3"]);
        assert_eq!(tokenize("(1,3)", ","), vec!["1", "3"]);
        assert_eq!(tokenize("{5}", ","), vec!["5"]);
        // only the first three tokens are considered for the closing bracket
        assert_eq!(tokenize("1,2,3),4", ","), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn display_uses_shortest_text() {
        assert_eq!(Vec3::ZERO.to_string(), "[0, 0, 0]");
        assert_eq!(Vec3::new(0.31, 2.1110, 0.5711).to_string(), "[0.31, 2.111, 0.5711]");
        assert_eq!(
            Vec3::new(f64::NAN, f64::INFINITY, f64::NEG_INFINITY).to_string(),
            "[NaN, Infinity, -Infinity]"
        );
    }

    #[test]
    fn empty_separator_defaults_to_comma() {
        let v = Vec3::from_str_lenient("1,2,3", "");
        assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn strict_reports_bad_component() {
        let err = "[1, two, 3]".parse::<Vec3>().unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidNumber {
                index: 1,
                text: "two".to_string()
            }
        );
        assert_eq!("   ".parse::<Vec3>().unwrap_err(), ParseError::Empty);
        assert_eq!(
            "1,2,3,4".parse::<Vec3>().unwrap_err(),
            ParseError::WrongArity { found: 4 }
        );
    }

    #[test]
    fn strict_rejects_foreign_float_spellings() {
        for (text, index) in [
            ("[inf, 1, 2]", 0),
            ("[1, nan, 2]", 1),
            ("[1, 2, infinity]", 2),
            ("[1, 2, 3abc]", 2),
            ("[1, 2e, 3]", 1),
            ("[NAN, 1, 2]", 0),
        ] {
            match text.parse::<Vec3>() {
                Err(ParseError::InvalidNumber { index: found, .. }) => assert_eq!(found, index, "{text}"),
                other => panic!("{text:?} parsed as {other:?}"),
            }
        }
        let lenient = Vec3::from_str_lenient("[inf, nan, infinity]", ",");
        assert!(lenient.x.is_nan() && lenient.y.is_nan() && lenient.z.is_nan());
    }

    #[test]
    fn strict_reads_formatted_nan() {
        let v = "[NaN, 1, -Infinity]".parse::<Vec3>().unwrap();
        assert!(v.x.is_nan());
        assert_eq!((v.y, v.z), (1.0, f64::NEG_INFINITY));
    }

    #[test]
    fn strict_strips_one_bracket_per_side() {
        assert!(matches!(
            "((1, 2, 3))".parse::<Vec3>().unwrap_err(),
            ParseError::InvalidNumber { index: 0, .. }
        ));
        assert_eq!(
            "[1,2,3)".parse::<Vec3>().unwrap_err(),
            ParseError::MismatchedBrackets {
                open: '[',
                close: ')'
            }
        );
        assert_eq!("(1,2,3".parse::<Vec3>().unwrap(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!("1,2,3}".parse::<Vec3>().unwrap(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn strict_reads_formatted_infinity() {
        let v = Vec3::new(1.0, f64::INFINITY, -2.5);
        assert_eq!(v.to_string().parse::<Vec3>().unwrap(), v);
    }
}
