//! Strict decimal parsing for identifiers, counts and reply tokens.
//!
//! Every numeric field in the booking protocol is a plain decimal
//! rendering: no `+` prefix, no surrounding whitespace, no trailing
//! garbage. `str::parse` alone is too lenient here (it accepts a
//! leading `+`), so these helpers validate the raw bytes first and only
//! then convert.
//!
//! Failures are reported through `Result`; every representable value,
//! including `u32::MAX`, is a legitimate `Ok` outcome.

use std::fmt;

/// Why a numeric token was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseIdError {
    /// The token was empty.
    Empty,
    /// The token contains a byte outside the accepted decimal form.
    InvalidDigit,
    /// The value does not fit the target integer width.
    OutOfRange,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseIdError::Empty => write!(f, "empty numeric field"),
            ParseIdError::InvalidDigit => write!(f, "invalid digit in numeric field"),
            ParseIdError::OutOfRange => write!(f, "numeric field out of range"),
        }
    }
}

impl std::error::Error for ParseIdError {}

/// Parse an unsigned decimal token.
///
/// Accepts ASCII digits only: `"042"` is fine, `"+42"`, `" 42"` and
/// `"42x"` are not.
pub fn parse_bounded_uint(token: &str) -> Result<u32, ParseIdError> {
    if token.is_empty() {
        return Err(ParseIdError::Empty);
    }
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseIdError::InvalidDigit);
    }
    token.parse::<u32>().map_err(|_| ParseIdError::OutOfRange)
}

/// Parse a signed decimal token.
///
/// Reply fields may be negative, so a single leading `-` is accepted;
/// everything after it must be ASCII digits.
pub fn parse_int(token: &str) -> Result<i32, ParseIdError> {
    if token.is_empty() {
        return Err(ParseIdError::Empty);
    }
    let digits = token.strip_prefix('-').unwrap_or(token);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseIdError::InvalidDigit);
    }
    token.parse::<i32>().map_err(|_| ParseIdError::OutOfRange)
}
