//! # Run Configuration
//!
//! The explicit run context handed to a [`Plan`](crate::Plan).
//!
//! Two presets exist, one per supplied copy of the demo. They differ in step
//! count, counting start, where the pause sits inside a step, and the wording
//! of the notice line. Everything else is shared.

use crate::{Delay, Error, Result};
use std::fmt;
use std::num::NonZeroU32;
use std::ops::Range;
use std::str::FromStr;
use std::time::Duration;

/// Notice text of the classic preset.
pub const CLASSIC_NOTICE: &str = "I depend on a third party library, see?";

/// Notice text of the long-running preset.
pub const LONG_RUNNING_NOTICE: &str = "I'm dependant on a third party library, see?";

// =============================================================================
// VARIANT
// =============================================================================

/// Named run presets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Variant {
    /// 3 steps, counting from 1, pause before each message.
    #[default]
    Classic,
    /// 20 steps, counting from 0, pause after each message.
    LongRunning,
}

impl Variant {
    /// All presets, in display order.
    pub const ALL: [Variant; 2] = [Variant::Classic, Variant::LongRunning];

    /// Stable name used on the command line.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Variant::Classic => "classic",
            Variant::LongRunning => "long-running",
        }
    }

    /// Parse a preset name.
    pub fn parse(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(Variant::Classic),
            "long-running" | "long_running" => Ok(Variant::LongRunning),
            other => Err(Error::UnknownVariant(other.to_string())),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Variant::parse(s)
    }
}

// =============================================================================
// COUNTING AND ORDERING
// =============================================================================

/// First value shown on a counter line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountStart {
    Zero,
    One,
}

impl CountStart {
    #[must_use]
    pub fn value(self) -> u64 {
        match self {
            CountStart::Zero => 0,
            CountStart::One => 1,
        }
    }
}

/// Position of the pause within a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepOrder {
    /// Wait, then print. The first counter line appears after one delay.
    DelayThenMessage,
    /// Print, then wait. The first counter line appears immediately and
    /// `Done` follows the last delay.
    MessageThenDelay,
}

// =============================================================================
// RUN CONFIG
// =============================================================================

/// Everything a single run needs to know.
///
/// Built from a [`Variant`] or from explicit values, then adjusted with the
/// `with_*` setters. Step count and delay are validated to be non-zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Number of counter steps.
    pub steps: NonZeroU32,
    /// Pause per step.
    pub delay: Delay,
    /// Value shown on the first counter line.
    pub first_count: CountStart,
    /// Whether the pause precedes or follows each counter line.
    pub order: StepOrder,
    /// Text of the styled notice line.
    pub notice: String,
}

impl RunConfig {
    /// Create a config with explicit step count and delay.
    ///
    /// Counting start, order, and notice come from [`Variant::Classic`].
    pub fn new(steps: u32, delay_ms: u64) -> Result<Self> {
        Self::from_variant(Variant::Classic)
            .with_steps(steps)?
            .with_delay_ms(delay_ms)
    }

    /// Create the config of a named preset.
    #[must_use]
    pub fn from_variant(variant: Variant) -> Self {
        match variant {
            Variant::Classic => Self {
                steps: NonZeroU32::MIN.saturating_add(2),
                delay: Delay::ONE_SECOND,
                first_count: CountStart::One,
                order: StepOrder::DelayThenMessage,
                notice: CLASSIC_NOTICE.to_string(),
            },
            Variant::LongRunning => Self {
                steps: NonZeroU32::MIN.saturating_add(19),
                delay: Delay::ONE_SECOND,
                first_count: CountStart::Zero,
                order: StepOrder::MessageThenDelay,
                notice: LONG_RUNNING_NOTICE.to_string(),
            },
        }
    }

    /// Replace the step count. Rejects `0`.
    pub fn with_steps(mut self, steps: u32) -> Result<Self> {
        self.steps = NonZeroU32::new(steps).ok_or(Error::ZeroSteps)?;
        Ok(self)
    }

    /// Replace the per-step delay. Rejects `0`.
    pub fn with_delay_ms(mut self, delay_ms: u64) -> Result<Self> {
        self.delay = Delay::from_millis(delay_ms)?;
        Ok(self)
    }

    #[must_use]
    pub fn with_first_count(mut self, first_count: CountStart) -> Self {
        self.first_count = first_count;
        self
    }

    #[must_use]
    pub fn with_order(mut self, order: StepOrder) -> Self {
        self.order = order;
        self
    }

    #[must_use]
    pub fn with_notice(mut self, notice: impl Into<String>) -> Self {
        self.notice = notice.into();
        self
    }

    /// Number of counter steps as a plain integer.
    #[must_use]
    pub fn step_count(&self) -> u64 {
        u64::from(self.steps.get())
    }

    /// Counter values shown during a run, in order.
    #[must_use]
    pub fn counts(&self) -> Range<u64> {
        let first = self.first_count.value();
        first..first + self.step_count()
    }

    /// Lines a run writes: greeting, notice, one per step, `Done`.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.steps.get() as usize + 3
    }

    /// Time spent paused over a whole run.
    #[must_use]
    pub fn total_delay(&self) -> Duration {
        Duration::from_millis(self.delay.as_millis().saturating_mul(self.step_count()))
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::from_variant(Variant::default())
    }
}

// =============================================================================
// TESTS
// =============================================================================
