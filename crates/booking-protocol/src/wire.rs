//! Wire-level constants and FIFO naming.
//!
//! Both sides of the protocol agree on:
//! - the well-known FIFO the server reads requests from,
//! - the naming scheme for per-client reply FIFOs,
//! - the token separator used by the line formats.
//!
//! The encode/decode logic itself lives in [`crate::line_codec`].

use booking_core::ClientId;

/// Name of the well-known FIFO the server reads requests from.
pub const REQUEST_FIFO_NAME: &str = "requests";

/// Fixed prefix of every reply FIFO name.
pub const REPLY_FIFO_PREFIX: &str = "ans";

/// Width of the zero-padded identity field in a reply FIFO name.
pub const REPLY_ID_WIDTH: usize = 5;

/// Token separator in both the request and the reply line format.
pub const FIELD_SEPARATOR: char = ' ';

/// Derive the reply FIFO name for a client identity.
///
/// The name is [`REPLY_FIFO_PREFIX`] followed by the identity rendered
/// as exactly [`REPLY_ID_WIDTH`] decimal digits. Identities wider than
/// the field are reduced modulo `10^REPLY_ID_WIDTH`; a residue
/// collision between live clients still fails loudly when the second
/// one tries to create the FIFO.
pub fn reply_fifo_name(client: ClientId) -> String {
    let modulus = 10u32.pow(REPLY_ID_WIDTH as u32);
    format!(
        "{}{:0width$}",
        REPLY_FIFO_PREFIX,
        client.0 % modulus,
        width = REPLY_ID_WIDTH
    )
}
