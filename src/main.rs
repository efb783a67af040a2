//! CLI entry point: collect and display inventory and LLDP neighbors
//! for one switch.

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use log::error;

/// Collect and display LLDP neighbors and device inventory.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Switch hostname or IP
    #[arg(long)]
    switch: String,

    /// Login username
    #[arg(long)]
    username: String,

    /// Login password
    #[arg(long)]
    password: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let report = match lldpscout::collect(&cli.switch, &cli.username, &cli.password).await {
        Ok(report) => report,
        Err(e) => {
            error!("[{}] collection failed: {e}", cli.switch);
            return ExitCode::FAILURE;
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = lldpscout::render_report(&mut out, &report) {
        error!("failed to write report: {e}");
        return ExitCode::FAILURE;
    }
    let _ = out.flush();

    ExitCode::SUCCESS
}
