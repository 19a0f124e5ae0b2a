//! Integration tests for the Uptick emitter and run command.
//!
//! Time is virtual throughout: tokio tests start with a paused clock, and the
//! recording clock below returns immediately while noting each request.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use std::future::Future;
use std::sync::Mutex;
use std::time::Duration;
use tokio::time::Instant;
use uptick::cli::{Cli, cmd_run, cmd_run_with_clock};
use uptick::{AppError, Clock, Decorator, Emitter, Line, LineKind, TextSink, TokioClock, run};
use uptick_core::{RunConfig, Variant};

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Clock that never waits and remembers what it was asked for.
#[derive(Debug, Default)]
struct RecordingClock {
    requests: Mutex<Vec<Duration>>,
}

impl RecordingClock {
    fn requests(&self) -> Vec<Duration> {
        self.requests.lock().unwrap().clone()
    }
}

impl Clock for RecordingClock {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        self.requests.lock().unwrap().push(duration);
        std::future::ready(())
    }
}

/// Writer that always fails.
struct BrokenPipe;

impl std::io::Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn plain_cli(variant: Variant) -> Cli {
    Cli {
        variant,
        no_color: true,
        ..Cli::default()
    }
}

/// Run a preset to completion with the paused tokio clock; return stdout text.
async fn run_text(cli: &Cli) -> String {
    let mut out = Vec::new();
    cmd_run(cli, &mut out).await.unwrap();
    String::from_utf8(out).unwrap()
}

/// Drive an emitter and record how far virtual time had moved at each line.
async fn timed_lines(config: RunConfig) -> Vec<(Duration, Line)> {
    let start = Instant::now();
    let mut emitter = Emitter::new(config, TokioClock);
    let mut lines = Vec::new();
    while let Some(line) = emitter.next_line().await {
        lines.push((start.elapsed(), line));
    }
    lines
}

// =============================================================================
// SCENARIO TESTS
// =============================================================================

#[tokio::test(start_paused = true)]
async fn test_classic_output() {
    let text = run_text(&plain_cli(Variant::Classic)).await;
    assert_eq!(
        text,
        "Hello world!\n\
         I depend on a third party library, see?\n\
         I've been up for 1 seconds\n\
         I've been up for 2 seconds\n\
         I've been up for 3 seconds\n\
         Done\n"
    );
}

#[tokio::test(start_paused = true)]
async fn test_long_running_output() {
    let text = run_text(&plain_cli(Variant::LongRunning)).await;
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 23);
    assert_eq!(lines[0], "Hello world!");
    assert_eq!(lines[1], "I'm dependant on a third party library, see?");
    assert_eq!(lines[2], "I've been up for 0 seconds");
    assert_eq!(lines[21], "I've been up for 19 seconds");
    assert_eq!(lines[22], "Done");
}

#[tokio::test(start_paused = true)]
async fn test_overrides_change_step_count() {
    let cli = Cli {
        steps: Some(5),
        delay_ms: Some(10),
        ..plain_cli(Variant::Classic)
    };
    let text = run_text(&cli).await;
    assert_eq!(text.lines().count(), 8);
    assert!(text.contains("I've been up for 5 seconds"));
}

// =============================================================================
// TIMING TESTS
// =============================================================================

#[tokio::test(start_paused = true)]
async fn test_classic_counter_waits_for_its_delay() {
    let lines = timed_lines(RunConfig::from_variant(Variant::Classic)).await;
    let at: Vec<(u64, LineKind)> = lines
        .iter()
        .map(|(t, l)| (t.as_secs(), l.kind))
        .collect();
    assert_eq!(
        at,
        vec![
            (0, LineKind::Greeting),
            (0, LineKind::Notice),
            (1, LineKind::Counter),
            (2, LineKind::Counter),
            (3, LineKind::Counter),
            (3, LineKind::Done),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_long_running_first_counter_is_immediate() {
    let lines = timed_lines(RunConfig::from_variant(Variant::LongRunning)).await;
    let (first_at, first) = &lines[2];
    assert_eq!(first.count, Some(0));
    assert_eq!(*first_at, Duration::ZERO);

    let (last_at, last) = &lines[21];
    assert_eq!(last.count, Some(19));
    assert_eq!(last_at.as_secs(), 19);

    let (done_at, done) = &lines[22];
    assert_eq!(done.kind, LineKind::Done);
    assert_eq!(done_at.as_secs(), 20);
}

#[tokio::test(start_paused = true)]
async fn test_no_counter_line_before_its_delay() {
    let config = RunConfig::new(7, 300).unwrap();
    let delay = Duration::from_millis(300);
    for (at, line) in timed_lines(config).await {
        if let Some(count) = line.count {
            // Classic counting starts at 1, so count n follows n pauses.
            assert!(at >= delay * count as u32, "count {} at {:?}", count, at);
        }
    }
}

#[tokio::test]
async fn test_recording_clock_sees_every_pause() {
    let clock = RecordingClock::default();
    let mut lines: Vec<Line> = Vec::new();
    let config = RunConfig::new(4, 250).unwrap();
    let summary = run(config, &clock, &mut lines).await.unwrap();

    assert_eq!(clock.requests(), vec![Duration::from_millis(250); 4]);
    assert_eq!(summary.paused, Duration::from_secs(1));
    assert_eq!(summary.lines, 7);
    assert_eq!(summary.last_count, Some(4));
}

// =============================================================================
// RERUN TESTS
// =============================================================================

#[tokio::test(start_paused = true)]
async fn test_rerun_starts_fresh() {
    let config = RunConfig::from_variant(Variant::Classic);

    let mut first: Vec<Line> = Vec::new();
    run(config.clone(), TokioClock, &mut first).await.unwrap();
    let mut second: Vec<Line> = Vec::new();
    run(config, TokioClock, &mut second).await.unwrap();

    assert_eq!(first, second);
    let counts: Vec<u64> = second.iter().filter_map(|l| l.count).collect();
    assert_eq!(counts, vec![1, 2, 3]);
}

// =============================================================================
// OUTPUT MODE TESTS
// =============================================================================

#[tokio::test(start_paused = true)]
async fn test_json_mode_emits_one_object_per_line() {
    let cli = Cli {
        json: true,
        ..plain_cli(Variant::Classic)
    };
    let mut out = Vec::new();
    cmd_run_with_clock(&cli, RecordingClock::default(), &mut out)
        .await
        .unwrap();

    let rows: Vec<Line> = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|row| serde_json::from_str(row).unwrap())
        .collect();
    assert_eq!(rows.len(), 6);
    assert_eq!(rows[0].kind, LineKind::Greeting);
    assert_eq!(rows[1].kind, LineKind::Notice);
    assert_eq!(rows[4].count, Some(3));
    assert_eq!(rows[5].text, "Done");
    assert!(rows.iter().all(|row| row.style.is_none()));
}

#[tokio::test(start_paused = true)]
async fn test_colored_text_only_styles_notice_and_counters() {
    let mut sink = TextSink::new(Vec::new(), Decorator::colored());
    run(RunConfig::from_variant(Variant::Classic), TokioClock, &mut sink)
        .await
        .unwrap();
    let text = String::from_utf8(sink.into_inner()).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "Hello world!");
    assert_eq!(
        lines[1],
        "\u{1b}[1;37;44mI depend on a third party library, see?\u{1b}[0m"
    );
    assert_eq!(lines[2], "\u{1b}[1;92mI've been up for 1 seconds\u{1b}[0m");
    assert_eq!(lines[5], "Done");
}

// =============================================================================
// ERROR TESTS
// =============================================================================

#[tokio::test(start_paused = true)]
async fn test_invalid_override_fails_before_output() {
    let cli = Cli {
        steps: Some(0),
        ..plain_cli(Variant::Classic)
    };
    let mut out = Vec::new();
    let result = cmd_run(&cli, &mut out).await;
    assert!(matches!(result, Err(AppError::Config(_))));
    assert!(out.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_write_failure_propagates() {
    let result = cmd_run(&plain_cli(Variant::Classic), BrokenPipe).await;
    assert!(matches!(result, Err(AppError::Io(_))));
}
