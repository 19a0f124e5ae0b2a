//! # Delayed Counter Emitter
//!
//! Drives a [`Plan`] on a [`Clock`]: pauses are awaited, every other event
//! becomes a [`Line`].
//!
//! The emitter is an async, lazy sequence. Each call to
//! [`Emitter::next_line`] runs the plan up to (and including) the next line,
//! sleeping through any pause on the way. Steps are strictly sequential since
//! there is only ever one task pulling from the plan.
//!
//! An emitter cannot be restarted. Once it returns `None` it keeps returning
//! `None`; build a new one to run again.

use crate::clock::Clock;
use crate::error::AppError;
use crate::sink::{Line, LineSink};
use std::time::Duration;
use tracing::{debug, info};
use uptick_core::{Event, Plan, RunConfig};

/// Async lazy sequence of output lines for one run.
#[derive(Debug)]
pub struct Emitter<C> {
    config: RunConfig,
    plan: Plan,
    clock: C,
    lines: usize,
    paused: Duration,
}

impl<C: Clock> Emitter<C> {
    /// Start a fresh run. The counter state begins at the configured start.
    pub fn new(config: RunConfig, clock: C) -> Self {
        let plan = Plan::new(&config);
        Self {
            config,
            plan,
            clock,
            lines: 0,
            paused: Duration::ZERO,
        }
    }

    /// Configuration this run was started with.
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Lines produced so far.
    pub fn lines_emitted(&self) -> usize {
        self.lines
    }

    /// Total time requested from the clock so far.
    pub fn time_paused(&self) -> Duration {
        self.paused
    }

    /// True once the terminal line has been produced.
    pub fn is_finished(&self) -> bool {
        self.plan.is_finished()
    }

    /// Produce the next line, sleeping through any pause before it.
    ///
    /// With message-then-delay ordering the final pause sits between the last
    /// counter line and `Done`, so it is awaited by the call that returns
    /// `Done`.
    pub async fn next_line(&mut self) -> Option<Line> {
        while let Some(event) = self.plan.next() {
            if let Event::Pause(delay) = event {
                let duration = delay.as_duration();
                debug!(delay_ms = delay.as_millis(), "pausing");
                self.clock.sleep(duration).await;
                self.paused = self.paused.saturating_add(duration);
                continue;
            }

            if let Some(line) = Line::from_event(event, &self.config.notice) {
                self.lines += 1;
                if let Some(count) = line.count {
                    debug!(count, "counter tick");
                }
                return Some(line);
            }
        }
        None
    }
}

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Lines written to the sink.
    pub lines: usize,
    /// Count shown on the last counter line.
    pub last_count: Option<u64>,
    /// Total time spent paused.
    pub paused: Duration,
}

/// Run a whole emitter into a sink.
///
/// Each line reaches the sink before the next pause begins. Sink errors stop
/// the run and are returned as-is.
pub async fn run<C, S>(config: RunConfig, clock: C, sink: &mut S) -> Result<RunSummary, AppError>
where
    C: Clock,
    S: LineSink + ?Sized,
{
    let mut emitter = Emitter::new(config, clock);
    let config = emitter.config();
    info!(
        steps = config.steps.get(),
        delay_ms = config.delay.as_millis(),
        order = ?config.order,
        "run starting"
    );

    let mut last_count = None;
    while let Some(line) = emitter.next_line().await {
        if line.count.is_some() {
            last_count = line.count;
        }
        sink.emit(&line)?;
    }

    let summary = RunSummary {
        lines: emitter.lines_emitted(),
        last_count,
        paused: emitter.time_paused(),
    };
    info!(lines = summary.lines, paused_ms = summary.paused.as_millis() as u64, "run finished");
    Ok(summary)
}

// =============================================================================
// TESTS
// =============================================================================
