//! booking-protocol
//!
//! Wire-level rules shared by both halves of the booking system:
//!
//! - [`wire`]: the FIFO naming scheme and shared constants
//! - [`line_codec`]: the single-line text format spoken over the FIFOs
//!
//! This crate turns logical booking messages
//! ([`booking_core::RequestMessage`] / [`booking_core::ServerReply`])
//! into protocol lines and back again. It owns no file descriptors;
//! the transport lives in `booking-client`.

pub mod line_codec;
pub mod wire;

pub use line_codec::{decode_reply, encode_request, ProtocolError};
pub use wire::{reply_fifo_name, REPLY_FIFO_PREFIX, REPLY_ID_WIDTH, REQUEST_FIFO_NAME};
