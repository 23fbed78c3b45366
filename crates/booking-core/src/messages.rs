//! Logical message types exchanged with the booking server.
//!
//! These are transport-agnostic:
//! - [`RequestMessage`]: what the client asks the server for.
//! - [`ServerReply`]: what the server answered, already classified.
//!
//! Wire encoding and decoding live in the `booking-protocol` crate;
//! this module carries no formatting rules.

/// Identifier of the requesting client process.
///
/// The server derives the reply FIFO name from this value, so it must
/// be unique among concurrently running clients. In practice it is the
/// process id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClientId(pub u32);

impl std::fmt::Display for ClientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A seat request, built once per invocation and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestMessage {
    /// Requester identity, also the reply routing key.
    pub client: ClientId,
    /// Number of seats the client wants allocated. Zero is allowed.
    pub wanted_seats: u32,
    /// Ordered seat preferences. May be empty, and may hold more
    /// entries than `wanted_seats`; the server decides what to do with
    /// the excess.
    pub preferred_seats: Vec<u32>,
}

impl RequestMessage {
    pub fn new(client: ClientId, wanted_seats: u32, preferred_seats: Vec<u32>) -> Self {
        RequestMessage {
            client,
            wanted_seats,
            preferred_seats,
        }
    }

    /// Number of preference entries actually supplied.
    pub fn preferred_count(&self) -> usize {
        self.preferred_seats.len()
    }
}

/// A classified server reply.
///
/// The variant is decided by the sign of the leading reply token: a
/// negative value is a rejection status, anything else starts an
/// allocation payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerReply {
    /// The server refused the request with a negative status code.
    Error { status: i32 },
    /// The server allocated seats. `seats` holds every token of the
    /// reply line, one element per token, in wire order.
    Allocated { seats: Vec<i32> },
}

impl ServerReply {
    pub fn error(status: i32) -> Self {
        ServerReply::Error { status }
    }

    pub fn allocated(seats: Vec<i32>) -> Self {
        ServerReply::Allocated { seats }
    }

    /// Number of payload elements carried by the reply.
    pub fn element_count(&self) -> usize {
        match self {
            ServerReply::Error { .. } => 1,
            ServerReply::Allocated { seats } => seats.len(),
        }
    }

    /// Fields of the booking-log record for this reply, in order.
    ///
    /// Rejections log the bare status code. Allocations log the element
    /// count followed by every element; the count is derived here, at
    /// the record boundary, and is not stored in the reply itself.
    pub fn log_fields(&self) -> Vec<i32> {
        match self {
            ServerReply::Error { status } => vec![*status],
            ServerReply::Allocated { seats } => {
                let mut fields = Vec::with_capacity(seats.len() + 1);
                fields.push(seats.len() as i32);
                fields.extend_from_slice(seats);
                fields
            }
        }
    }
}
