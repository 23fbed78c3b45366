use std::process::ExitCode;

use booking_client::app;
use booking_client::config::Config;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(name = "booking-client")]
#[clap(about = "FIFO seat booking client")]
struct Cli {
    /// Seconds to wait for the server reply (positive integer)
    time_out: String,

    /// Number of seats wanted (zero is allowed)
    num_wanted_seats: String,

    /// Preferred seat identifiers, space-separated, as one argument
    pref_seat_list: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Diagnostics go to stderr; stdout stays clean for callers.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env();
    app::run(&config, &cli.time_out, &cli.num_wanted_seats, &cli.pref_seat_list)
        .await
        .into()
}
