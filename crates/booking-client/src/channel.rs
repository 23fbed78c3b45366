//! Private reply channel lifecycle.
//!
//! Each invocation owns exactly one reply FIFO, created before the
//! request is published and unlinked on every exit path. Cleanup is
//! tied to the guard's `Drop`, so early returns, fatal errors and the
//! timeout path all remove the FIFO without per-branch calls.

use std::io;
use std::path::{Path, PathBuf};

use nix::sys::stat::Mode;
use nix::unistd::mkfifo;
use tracing::{debug, warn};

/// Owning guard for the private reply FIFO.
///
/// Creating the guard creates the FIFO; dropping it unlinks it.
/// Removal is idempotent.
#[derive(Debug)]
pub struct ReplyChannel {
    path: PathBuf,
}

impl ReplyChannel {
    /// Create the FIFO at `path` with mode 0660.
    ///
    /// The path must not exist yet: a collision, whether a leftover
    /// from a crashed run or another live client with the same identity
    /// residue, surfaces as an error here.
    pub fn create(path: PathBuf) -> io::Result<Self> {
        let mode = Mode::S_IRUSR | Mode::S_IWUSR | Mode::S_IRGRP | Mode::S_IWGRP;
        mkfifo(&path, mode).map_err(io::Error::other)?;
        debug!(path = %path.display(), "created reply fifo");
        Ok(ReplyChannel { path })
    }

    /// Path of the FIFO.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Unlink the FIFO now. Safe to call more than once.
    pub fn remove(&self) {
        unlink(&self.path);
    }
}

impl Drop for ReplyChannel {
    fn drop(&mut self) {
        self.remove();
    }
}

/// Remove a FIFO if present. A path that was never created, or was
/// already removed, is not an error.
pub fn unlink(path: &Path) {
    match std::fs::remove_file(path) {
        Ok(()) => debug!(path = %path.display(), "removed reply fifo"),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => warn!(path = %path.display(), error = %e, "failed to remove reply fifo"),
    }
}
