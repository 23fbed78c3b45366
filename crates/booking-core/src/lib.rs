//! booking-core
//!
//! Pure booking client logic:
//! - Strict decimal parsing for every numeric field on the wire
//! - Logical request and reply message types
//! - Invocation parameter validation and request building
//!
//! No I/O happens here; the FIFO transport and the wire format live in
//! the `booking-protocol` and `booking-client` crates.

pub mod ident;
pub mod messages;
pub mod request;

pub use ident::{parse_bounded_uint, parse_int, ParseIdError};
pub use messages::{ClientId, RequestMessage, ServerReply};
pub use request::{build_request, ClientRequest, RequestError};
