//! Scheduler port — repeating timers.

use thermaldash_domain::interval::RefreshInterval;

/// Work a repeating timer performs on every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerTask {
    RefreshImage,
    RefreshStatus,
}

/// Creates and cancels repeating timers.
///
/// The adapter decides how a [`TimerTask`] is carried out when its timer
/// fires; the application only decides when timers exist and at which period.
pub trait Scheduler {
    /// Owned handle to one running timer.
    type Handle;

    /// Start a timer that performs `task` every `period`, first tick after
    /// one full period.
    fn every(&self, task: TimerTask, period: RefreshInterval) -> Self::Handle;

    /// Stop a timer. It never fires again.
    fn cancel(&self, handle: Self::Handle);
}
