//! # Step Plan
//!
//! The lazy sequence of events a run performs.
//!
//! A plan is an iterator: it yields each [`Event`] on demand and is consumed
//! by iteration. There is no rewind. Repeating a run means building a new
//! plan from the same [`RunConfig`], which starts from a fresh counter.
//!
//! ```text
//! Greeting, Notice, [step 0], [step 1], ..., [step N-1], Done
//!
//! step (DelayThenMessage) = Pause, Counter(n)
//! step (MessageThenDelay) = Counter(n), Pause
//! ```

use crate::config::{CountStart, RunConfig, StepOrder};
use crate::Delay;
use serde::{Deserialize, Serialize};
use std::iter::FusedIterator;

/// One thing a run does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "value", rename_all = "kebab-case")]
pub enum Event {
    /// Print the greeting.
    Greeting,
    /// Print the styled notice.
    Notice,
    /// Suspend for the given delay.
    Pause(Delay),
    /// Print the counter line for this count.
    Counter(u64),
    /// Print the completion line.
    Done,
}

impl Event {
    /// True for events that produce an output line.
    #[must_use]
    pub fn is_line(&self) -> bool {
        !matches!(self, Event::Pause(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Greeting,
    Notice,
    /// Inside step `index`; `half` is 0 before the first event of the step
    /// and 1 before the second.
    Step { index: u64, half: u8 },
    Done,
    Finished,
}

/// Lazy, single-use event sequence for one run.
#[derive(Debug, Clone)]
pub struct Plan {
    steps: u64,
    delay: Delay,
    first_count: CountStart,
    order: StepOrder,
    phase: Phase,
}

impl Plan {
    /// Start a fresh plan for the given configuration.
    #[must_use]
    pub fn new(config: &RunConfig) -> Self {
        Self {
            steps: config.step_count(),
            delay: config.delay,
            first_count: config.first_count,
            order: config.order,
            phase: Phase::Greeting,
        }
    }

    /// True once every event has been yielded.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    fn count_at(&self, index: u64) -> u64 {
        self.first_count.value() + index
    }

    fn step_event(&self, index: u64, half: u8) -> Event {
        let pause_first = self.order == StepOrder::DelayThenMessage;
        if (half == 0) == pause_first {
            Event::Pause(self.delay)
        } else {
            Event::Counter(self.count_at(index))
        }
    }

    fn remaining(&self) -> u64 {
        let step_events = self.steps.saturating_mul(2);
        match self.phase {
            Phase::Greeting => step_events + 3,
            Phase::Notice => step_events + 2,
            Phase::Step { index, half } => {
                let consumed = index.saturating_mul(2) + u64::from(half);
                step_events - consumed + 1
            }
            Phase::Done => 1,
            Phase::Finished => 0,
        }
    }
}

impl Iterator for Plan {
    type Item = Event;

    fn next(&mut self) -> Option<Event> {
        match self.phase {
            Phase::Greeting => {
                self.phase = Phase::Notice;
                Some(Event::Greeting)
            }
            Phase::Notice => {
                self.phase = Phase::Step { index: 0, half: 0 };
                Some(Event::Notice)
            }
            Phase::Step { index, half: 0 } => {
                self.phase = Phase::Step { index, half: 1 };
                Some(self.step_event(index, 0))
            }
            Phase::Step { index, .. } => {
                let next = index + 1;
                self.phase = if next < self.steps {
                    Phase::Step {
                        index: next,
                        half: 0,
                    }
                } else {
                    Phase::Done
                };
                Some(self.step_event(index, 1))
            }
            Phase::Done => {
                self.phase = Phase::Finished;
                Some(Event::Done)
            }
            Phase::Finished => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.remaining()).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Plan {}

impl FusedIterator for Plan {}

// =============================================================================
// TESTS
// =============================================================================
