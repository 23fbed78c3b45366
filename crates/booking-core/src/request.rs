//! Request building and parameter validation.
//!
//! All user-supplied parameters pass through [`build_request`] before
//! any FIFO work happens. A failure here is a usage error: the process
//! reports it and exits without ever touching the filesystem.

use std::fmt;

use crate::ident::parse_bounded_uint;
use crate::messages::{ClientId, RequestMessage};

/// A validated invocation: how long to wait, and what to ask for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientRequest {
    /// Reply wait bound in whole seconds. Always nonzero.
    pub timeout_secs: u32,
    /// The request to publish.
    pub message: RequestMessage,
}

/// Why the invocation parameters were rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// The timeout was not a positive nonzero integer.
    InvalidTimeout,
    /// The wanted-seat count was not an unsigned integer.
    InvalidSeatCount,
    /// A preference entry was not an unsigned integer.
    InvalidSeatId { token: String },
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::InvalidTimeout => {
                write!(f, "the timeout value must be a positive integer")
            }
            RequestError::InvalidSeatCount => {
                write!(f, "the number of wanted seats must be an unsigned integer")
            }
            RequestError::InvalidSeatId { token } => {
                write!(f, "seat identifiers must be unsigned integers, got {token:?}")
            }
        }
    }
}

impl std::error::Error for RequestError {}

/// Validate the raw invocation parameters and build the request.
///
/// `pref_list` is a single argument holding whitespace-separated seat
/// identifiers; every entry must parse or the whole invocation is
/// rejected. The list may be empty and may hold more entries than the
/// seat count. A timeout of zero is rejected: the wait bound must be
/// real.
pub fn build_request(
    client: ClientId,
    timeout: &str,
    wanted_seats: &str,
    pref_list: &str,
) -> Result<ClientRequest, RequestError> {
    let timeout_secs =
        parse_bounded_uint(timeout).map_err(|_| RequestError::InvalidTimeout)?;
    if timeout_secs == 0 {
        return Err(RequestError::InvalidTimeout);
    }

    let wanted_seats =
        parse_bounded_uint(wanted_seats).map_err(|_| RequestError::InvalidSeatCount)?;

    let mut preferred_seats = Vec::new();
    for token in pref_list.split_whitespace() {
        let seat = parse_bounded_uint(token).map_err(|_| RequestError::InvalidSeatId {
            token: token.to_string(),
        })?;
        preferred_seats.push(seat);
    }

    Ok(ClientRequest {
        timeout_secs,
        message: RequestMessage::new(client, wanted_seats, preferred_seats),
    })
}
