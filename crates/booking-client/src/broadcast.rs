//! Publishing the request to the server.
//!
//! The server reads newline-delimited request lines from a well-known
//! FIFO. Publishing opens that FIFO as a non-blocking pipe sender: when
//! the FIFO is missing, or exists but has no reader behind it, the open
//! fails immediately instead of blocking forever, and the whole
//! invocation fails with it.

use std::io;
use std::path::Path;

use booking_core::RequestMessage;
use booking_protocol::line_codec;
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::net::unix::pipe;
use tracing::debug;

#[derive(Debug, Error)]
pub enum BroadcastError {
    /// The request FIFO is missing or nobody is reading it.
    #[error("cannot reach the booking server at {fifo}: {source}")]
    Unreachable { fifo: String, source: io::Error },
    /// The FIFO has a reader but the write failed.
    #[error("failed to write the request to {fifo}: {source}")]
    Write { fifo: String, source: io::Error },
}

/// Encode `msg` and publish it on the request FIFO at `path`.
pub async fn broadcast_request(path: &Path, msg: &RequestMessage) -> Result<(), BroadcastError> {
    let fifo = path.display().to_string();

    let mut sender = pipe::OpenOptions::new()
        .open_sender(path)
        .map_err(|source| BroadcastError::Unreachable {
            fifo: fifo.clone(),
            source,
        })?;

    let mut line = line_codec::encode_request(msg);
    line.push('\n');

    sender
        .write_all(line.as_bytes())
        .await
        .map_err(|source| BroadcastError::Write {
            fifo: fifo.clone(),
            source,
        })?;
    sender
        .flush()
        .await
        .map_err(|source| BroadcastError::Write { fifo, source })?;

    debug!(client = %msg.client, bytes = line.len(), "request published");
    Ok(())
}
