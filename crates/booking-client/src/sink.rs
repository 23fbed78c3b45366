//! Booking log sink.
//!
//! Classified replies are recorded, one line per invocation, in the
//! shape downstream consumers of the booking log expect: a tag word
//! followed by the record fields. Allocations log the element count and
//! then every element; rejections log the bare status code.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use booking_core::ServerReply;
use tracing::info;

/// Where classified replies get recorded.
pub trait ReplySink {
    fn record(&mut self, reply: &ServerReply) -> io::Result<()>;
}

/// Appends one record per reply to the booking log file.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSink { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReplySink for FileSink {
    fn record(&mut self, reply: &ServerReply) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", format_record(reply))?;
        info!(log = %self.path.display(), "reply recorded");
        Ok(())
    }
}

/// Collects records in memory instead of touching the filesystem.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub records: Vec<String>,
}

impl ReplySink for MemorySink {
    fn record(&mut self, reply: &ServerReply) -> io::Result<()> {
        self.records.push(format_record(reply));
        Ok(())
    }
}

/// Render the log record for a reply: tag word plus the reply's log
/// fields, space-separated.
pub fn format_record(reply: &ServerReply) -> String {
    let tag = match reply {
        ServerReply::Error { .. } => "refused",
        ServerReply::Allocated { .. } => "booked",
    };
    let mut record = String::from(tag);
    for field in reply.log_fields() {
        record.push(' ');
        record.push_str(&field.to_string());
    }
    record
}
