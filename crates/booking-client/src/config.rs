//! Configuration for the booking client.
//!
//! Everything runs on defaults; a few environment variables override
//! where the FIFOs and the booking log live:
//!
//! - `BOOKING_FIFO_DIR`: directory holding the FIFOs (default `.`)
//! - `BOOKING_REQUEST_FIFO`: request FIFO file name (default `requests`)
//! - `BOOKING_LOG_FILE`: booking log path (default `clog.txt`)

use std::env;
use std::path::PathBuf;

use booking_core::ClientId;
use booking_protocol::wire;

/// Default booking log path, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "clog.txt";

/// Client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding both the request FIFO and the reply FIFOs.
    pub fifo_dir: PathBuf,

    /// File name of the request FIFO inside `fifo_dir`.
    pub request_fifo: String,

    /// Path of the booking log the reply sink appends to.
    pub log_file: PathBuf,
}

impl Config {
    /// Build a `Config` from environment variables, falling back to the
    /// protocol defaults.
    pub fn from_env() -> Self {
        let fifo_dir = env::var("BOOKING_FIFO_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));
        let request_fifo = env::var("BOOKING_REQUEST_FIFO")
            .unwrap_or_else(|_| wire::REQUEST_FIFO_NAME.to_string());
        let log_file = env::var("BOOKING_LOG_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_LOG_FILE));

        Config {
            fifo_dir,
            request_fifo,
            log_file,
        }
    }

    /// Full path of the request FIFO.
    pub fn request_fifo_path(&self) -> PathBuf {
        self.fifo_dir.join(&self.request_fifo)
    }

    /// Full path of the reply FIFO for a client identity.
    pub fn reply_fifo_path(&self, client: ClientId) -> PathBuf {
        self.fifo_dir.join(wire::reply_fifo_name(client))
    }
}
