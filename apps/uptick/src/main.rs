//! Uptick binary entry point.

use clap::Parser;
use std::process::ExitCode;
use uptick::cli::{Cli, cmd_run, init_tracing, report_failure};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cmd_run(&cli, std::io::stdout()).await {
        Ok(summary) => {
            tracing::debug!(lines = summary.lines, "exiting");
            ExitCode::SUCCESS
        }
        Err(e) => {
            report_failure(&e, std::io::stderr());
            ExitCode::FAILURE
        }
    }
}
