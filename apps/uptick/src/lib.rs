//! # Uptick Library
//!
//! This library exposes the Uptick modules for testing and integration.
//!
//! The main binary uses these modules through the `main.rs` entry point.

pub mod cli;
pub mod clock;
pub mod decorate;
pub mod emitter;
pub mod error;
pub mod sink;

pub use clock::{Clock, TokioClock};
pub use decorate::Decorator;
pub use emitter::{Emitter, RunSummary, run};
pub use error::AppError;
pub use sink::{JsonSink, Line, LineKind, LineSink, TextSink};

// Re-export uptick_core for convenience
pub use uptick_core;
