//! # Uptick Core - The Logic
//!
//! Deterministic step planner for the delayed counter emitter.
//!
//! A run greets, shows one styled notice, counts through a fixed number of
//! steps with a fixed pause per step, then reports completion. This crate
//! describes that run as data:
//!
//! - [`RunConfig`]: the explicit run context (steps, delay, counting start, order)
//! - [`Plan`]: the lazy sequence of [`Event`]s a run performs
//! - [`messages`]: the texts that appear on screen
//! - [`Style`]: display attributes handed to whatever renders the text
//!
//! Nothing here sleeps, prints, or reads a clock. The app layer drives a
//! [`Plan`] with a real (or paused) timer.
//!
//! ```
//! use uptick_core::{Event, Plan, RunConfig, Variant};
//!
//! let config = RunConfig::from_variant(Variant::Classic);
//! let counts: Vec<u64> = Plan::new(&config)
//!     .filter_map(|event| match event {
//!         Event::Counter(count) => Some(count),
//!         _ => None,
//!     })
//!     .collect();
//! assert_eq!(counts, vec![1, 2, 3]);
//! ```

pub mod config;
pub mod messages;
pub mod plan;
pub mod style;

pub use config::{CountStart, RunConfig, StepOrder, Variant};
pub use plan::{Event, Plan};
pub use style::{Color, Style};

use serde::{Deserialize, Serialize};
use std::num::NonZeroU64;
use std::time::Duration;
use thiserror::Error;

// =============================================================================
// ERROR TYPE
// =============================================================================

/// Errors raised while building a run configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A run needs at least one step.
    #[error("step count must be at least 1")]
    ZeroSteps,

    /// A pause of zero milliseconds is not a pause.
    #[error("delay must be at least 1 ms")]
    ZeroDelay,

    /// The variant name did not match any preset.
    #[error("unknown variant '{0}' (expected 'classic' or 'long-running')")]
    UnknownVariant(String),
}

/// Result alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;

// =============================================================================
// DELAY
// =============================================================================

/// Per-step pause, in whole milliseconds. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Delay(NonZeroU64);

impl Delay {
    /// One second, the pause both presets use.
    pub const ONE_SECOND: Self = Self(NonZeroU64::MIN.saturating_add(999));

    /// Create a delay from milliseconds.
    ///
    /// Returns [`Error::ZeroDelay`] for `0`.
    pub fn from_millis(millis: u64) -> Result<Self> {
        NonZeroU64::new(millis).map(Self).ok_or(Error::ZeroDelay)
    }

    /// Milliseconds in this delay.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0.get()
    }

    /// The delay as a [`Duration`].
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0.get())
    }
}

impl Default for Delay {
    fn default() -> Self {
        Self::ONE_SECOND
    }
}

// =============================================================================
// TESTS
// =============================================================================
