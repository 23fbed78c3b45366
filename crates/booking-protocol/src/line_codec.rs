//! Line-oriented text codec for the booking protocol.
//!
//! Request format (client to server), one line:
//!
//! `<identity> <wanted_seats> [<pref> ...]`
//!
//! Reply format (server to client), one line:
//!
//! - rejection: a single token `<status>` with `status < 0`
//! - allocation: `<t0> <t1> ... <tN-1>`, every token a signed decimal;
//!   the number of tokens is the element count of the record
//!
//! Tokens are separated by exactly one space and the line ends with a
//! newline. The encoder returns the line without the trailing newline;
//! the transport appends it. The decoder tolerates a present or absent
//! final newline and nothing else: doubled, leading or trailing spaces
//! produce empty tokens and fail.

use std::fmt;

use booking_core::ident::parse_int;
use booking_core::{RequestMessage, ServerReply};

use crate::wire::FIELD_SEPARATOR;

/// Errors that can arise when decoding a reply line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// The reply line carried no tokens at all.
    EmptyReply,
    /// A token was not a signed decimal integer.
    InvalidToken { index: usize, token: String },
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::EmptyReply => write!(f, "empty reply line"),
            ProtocolError::InvalidToken { index, token } => {
                write!(f, "reply token {index} is not an integer: {token:?}")
            }
        }
    }
}

impl std::error::Error for ProtocolError {}

/// Format a request as a single line, without the trailing newline.
pub fn encode_request(msg: &RequestMessage) -> String {
    let mut line = msg.client.to_string();
    line.push(FIELD_SEPARATOR);
    line.push_str(&msg.wanted_seats.to_string());
    for seat in &msg.preferred_seats {
        line.push(FIELD_SEPARATOR);
        line.push_str(&seat.to_string());
    }
    line
}

/// Decode one reply line into a classified [`ServerReply`].
///
/// A negative leading token short-circuits into [`ServerReply::Error`]
/// and the rest of the line is not consulted. Otherwise every token is
/// parsed and carried in the allocation payload, in wire order.
pub fn decode_reply(raw_line: &str) -> Result<ServerReply, ProtocolError> {
    let line = raw_line.strip_suffix('\n').unwrap_or(raw_line);
    if line.is_empty() {
        return Err(ProtocolError::EmptyReply);
    }

    let tokens: Vec<&str> = line.split(FIELD_SEPARATOR).collect();

    let first = parse_token(0, tokens[0])?;
    if first < 0 {
        return Ok(ServerReply::error(first));
    }

    let mut seats = Vec::with_capacity(tokens.len());
    seats.push(first);
    for (index, token) in tokens.iter().enumerate().skip(1) {
        seats.push(parse_token(index, token)?);
    }
    Ok(ServerReply::allocated(seats))
}

fn parse_token(index: usize, token: &str) -> Result<i32, ProtocolError> {
    parse_int(token).map_err(|_| ProtocolError::InvalidToken {
        index,
        token: token.to_string(),
    })
}
