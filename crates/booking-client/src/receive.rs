//! Timed wait for the single server reply.
//!
//! The countdown and the read are two event sources racing for one
//! outcome: either the reply line arrives first or the timer elapses
//! first. `tokio::time::timeout` expresses the race directly. The timer
//! is armed before the FIFO is opened and dropped the moment the read
//! completes, so a countdown that elapses after a successful read has
//! no observable effect.
//!
//! The FIFO is opened in read-write mode: the open never blocks waiting
//! for the server to attach, and the held write end keeps the read from
//! reporting end-of-file before the server has connected.

use std::io;
use std::path::Path;
use std::time::Duration;

use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::net::unix::pipe;
use tokio::time;
use tracing::debug;

/// Failure shapes of the timed wait, each with its own exit status.
#[derive(Debug, Error)]
pub enum ReceiveError {
    #[error("failed to open reply fifo for reading: {0}")]
    Open(io::Error),
    #[error("failed to read the server reply: {0}")]
    Read(io::Error),
    #[error("no server reply within {0} seconds")]
    Timeout(u64),
}

/// Wait up to `timeout` for one reply line on the FIFO at `path`.
///
/// Returns the raw line, trailing newline included. At most one line is
/// consumed; anything the server writes after it is left unread.
pub async fn receive_reply(path: &Path, timeout: Duration) -> Result<String, ReceiveError> {
    let wait = async {
        let receiver = pipe::OpenOptions::new()
            .read_write(true)
            .open_receiver(path)
            .map_err(ReceiveError::Open)?;
        debug!(path = %path.display(), "reply fifo open, waiting");

        let mut reader = BufReader::new(receiver);
        let mut line = String::new();
        let n = reader
            .read_line(&mut line)
            .await
            .map_err(ReceiveError::Read)?;
        if n == 0 {
            // Every writer vanished before sending anything. Report a
            // failed read, not an empty reply.
            return Err(ReceiveError::Read(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "reply fifo closed before any data",
            )));
        }
        Ok(line)
    };

    match time::timeout(timeout, wait).await {
        Ok(result) => result,
        Err(_) => Err(ReceiveError::Timeout(timeout.as_secs())),
    }
}
