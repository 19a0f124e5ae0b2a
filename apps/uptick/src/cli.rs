//! # CLI
//!
//! Command-line flags and the run command.
//!
//! With no flags the classic preset runs as-is. Flags only pick another
//! preset, override its step count or delay, or change how lines are printed.

use crate::clock::{Clock, TokioClock};
use crate::decorate::Decorator;
use crate::emitter::{self, RunSummary};
use crate::error::AppError;
use crate::sink::{JsonSink, TextSink};
use clap::Parser;
use std::io::Write;
use tracing_subscriber::EnvFilter;
use uptick_core::{RunConfig, Variant};

/// Prints a greeting, counts up with a pause per step, then says Done.
#[derive(Debug, Clone, Parser)]
#[command(name = "uptick", version, about)]
pub struct Cli {
    /// Preset to run (classic, long-running)
    #[arg(long, default_value_t = Variant::Classic)]
    pub variant: Variant,

    /// Override the preset's step count
    #[arg(long)]
    pub steps: Option<u32>,

    /// Override the preset's per-step delay, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Print lines without terminal colors
    #[arg(long)]
    pub no_color: bool,

    /// Print one JSON object per line instead of text
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            variant: Variant::Classic,
            steps: None,
            delay_ms: None,
            no_color: false,
            json: false,
            verbose: false,
        }
    }
}

impl Cli {
    /// Resolve the flags into a validated run configuration.
    pub fn run_config(&self) -> Result<RunConfig, AppError> {
        let mut config = RunConfig::from_variant(self.variant);
        if let Some(steps) = self.steps {
            config = config.with_steps(steps)?;
        }
        if let Some(delay_ms) = self.delay_ms {
            config = config.with_delay_ms(delay_ms)?;
        }
        Ok(config)
    }

    /// Decorator matching the color flags and the environment.
    pub fn decorator(&self) -> Decorator {
        if self.no_color {
            Decorator::plain()
        } else {
            Decorator::auto()
        }
    }
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise `warn`, or `debug` with `--verbose`.
/// Calling this twice is harmless.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Report a failed run on `err`, once.
///
/// Writing the report is best effort; there is nowhere left to send a failure.
pub fn report_failure<W: Write>(error: &AppError, mut err: W) {
    let _ = writeln!(err, "error: {}", error);
}

/// Run with the real tokio clock, writing to `out`.
pub async fn cmd_run<W: Write>(cli: &Cli, out: W) -> Result<RunSummary, AppError> {
    cmd_run_with_clock(cli, TokioClock, out).await
}

/// Run with any clock, writing to `out`.
pub async fn cmd_run_with_clock<C, W>(cli: &Cli, clock: C, out: W) -> Result<RunSummary, AppError>
where
    C: Clock,
    W: Write,
{
    let config = cli.run_config()?;
    if cli.json {
        let mut sink = JsonSink::new(out);
        emitter::run(config, clock, &mut sink).await
    } else {
        let mut sink = TextSink::new(out, cli.decorator());
        emitter::run(config, clock, &mut sink).await
    }
}

// =============================================================================
// TESTS
// =============================================================================
