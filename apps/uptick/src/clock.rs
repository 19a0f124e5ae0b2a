//! # Clock
//!
//! The suspension primitive the emitter waits on.
//!
//! Production runs use [`TokioClock`], which parks only the calling task.
//! Tests either pause tokio's timer (`start_paused = true`) so sleeps resolve
//! instantly in virtual time, or supply their own `Clock` that records the
//! requested durations.

use std::future::Future;
use std::time::Duration;

/// Something that can suspend the current task for a duration.
pub trait Clock {
    /// Wait for `duration` without blocking the thread.
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send;
}

/// Clock backed by `tokio::time::sleep`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

impl Clock for TokioClock {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        tokio::time::sleep(duration)
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        (**self).sleep(duration)
    }
}
