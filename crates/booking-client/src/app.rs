//! One complete booking exchange, from raw invocation parameters to
//! process exit status.
//!
//! The flow is strictly sequential: validate parameters, create the
//! private reply FIFO, publish the request, wait (bounded) for the
//! reply, decode it, record it. The reply FIFO guard is dropped on
//! every path out of [`run`], so the FIFO never outlives the process.

use std::process::{self, ExitCode};
use std::time::Duration;

use booking_core::{build_request, ClientId, ServerReply};
use booking_protocol::line_codec;
use tracing::{error, info, warn};

use crate::broadcast;
use crate::channel::ReplyChannel;
use crate::config::Config;
use crate::receive::{self, ReceiveError};
use crate::sink::{FileSink, ReplySink};

/// Process exit statuses, one per failure shape.
///
/// Callers tell the failure modes apart by exit code alone, so every
/// variant stays distinct. `BadParameters` is 2, the same code clap
/// exits with when the argument count is wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success = 0,
    BadParameters = 2,
    ChannelCreate = 3,
    ChannelOpen = 4,
    ReadReply = 5,
    ParseReply = 6,
    Timeout = 7,
    Broadcast = 8,
    Interrupted = 9,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status as u8)
    }
}

/// Run one booking exchange and report how it went.
///
/// `timeout`, `wanted_seats` and `pref_list` arrive as the raw
/// command-line strings; validation happens here so that a usage error
/// exits before any FIFO exists.
pub async fn run(
    config: &Config,
    timeout: &str,
    wanted_seats: &str,
    pref_list: &str,
) -> ExitStatus {
    let client = ClientId(process::id());

    let request = match build_request(client, timeout, wanted_seats, pref_list) {
        Ok(request) => request,
        Err(e) => {
            error!(error = %e, "invalid parameters");
            print_usage();
            return ExitStatus::BadParameters;
        }
    };
    info!(
        %client,
        wanted = request.message.wanted_seats,
        preferred = request.message.preferred_count(),
        timeout_secs = request.timeout_secs,
        "requesting seats"
    );

    let channel = match ReplyChannel::create(config.reply_fifo_path(client)) {
        Ok(channel) => channel,
        Err(e) => {
            error!(error = %e, "failed to create the reply fifo");
            return ExitStatus::ChannelCreate;
        }
    };

    if let Err(e) =
        broadcast::broadcast_request(&config.request_fifo_path(), &request.message).await
    {
        error!(error = %e, "failed to publish the request");
        return ExitStatus::Broadcast;
    }

    let timeout = Duration::from_secs(u64::from(request.timeout_secs));
    let received = tokio::select! {
        received = receive::receive_reply(channel.path(), timeout) => received,
        _ = tokio::signal::ctrl_c() => {
            error!("interrupted while waiting for the server reply");
            return ExitStatus::Interrupted;
        }
    };

    let raw_line = match received {
        Ok(line) => line,
        Err(e) => {
            error!(error = %e, "no usable server reply");
            return receive_status(&e);
        }
    };

    let reply = match line_codec::decode_reply(&raw_line) {
        Ok(reply) => reply,
        Err(e) => {
            error!(error = %e, line = raw_line.trim_end(), "malformed server reply");
            return ExitStatus::ParseReply;
        }
    };

    let mut sink = FileSink::new(&config.log_file);
    if let Err(e) = sink.record(&reply) {
        // The reply itself is good; a log write failure does not change
        // the outcome of the exchange.
        warn!(error = %e, log = %sink.path().display(), "failed to record the reply");
    }

    match &reply {
        ServerReply::Error { status } => {
            info!(status, "server refused the request");
        }
        ServerReply::Allocated { seats } => {
            info!(count = seats.len(), "seats allocated");
        }
    }
    ExitStatus::Success
}

fn receive_status(err: &ReceiveError) -> ExitStatus {
    match err {
        ReceiveError::Open(_) => ExitStatus::ChannelOpen,
        ReceiveError::Read(_) => ExitStatus::ReadReply,
        ReceiveError::Timeout(_) => ExitStatus::Timeout,
    }
}

fn print_usage() {
    eprintln!("usage: booking-client <time_out> <num_wanted_seats> <pref_seat_list>");
}
