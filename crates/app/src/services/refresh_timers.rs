//! Refresh timers — the Stopped/Running lifecycle of the two polling timers.
//!
//! ```text
//!            start(P)                 restart(P')
//!  Stopped ───────────▶ Running(P) ─────────────▶ Running(P')
//!     ▲                     │
//!     └────── stop() ───────┘
//! ```
//!
//! Every transition cancels the current timer pair before creating the next
//! one, so at most one image timer and one status timer exist at any time.

use thermaldash_domain::interval::RefreshInterval;

use crate::ports::{Scheduler, TimerTask};

/// Current lifecycle state.
#[derive(Debug)]
enum TimerState<H> {
    Stopped,
    Running {
        period: RefreshInterval,
        image: H,
        status: H,
    },
}

/// Owner of the image and status timer handles.
pub struct RefreshTimers<S: Scheduler> {
    scheduler: S,
    state: TimerState<S::Handle>,
}

impl<S: Scheduler> RefreshTimers<S> {
    /// Create a stopped timer pair.
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            state: TimerState::Stopped,
        }
    }

    /// Start both timers at `period`. Equivalent to [`restart`](Self::restart)
    /// when already running.
    pub fn start(&mut self, period: RefreshInterval) {
        self.restart(period);
    }

    /// Cancel the running timers (if any) and create a new pair at `period`.
    pub fn restart(&mut self, period: RefreshInterval) {
        self.stop();
        let image = self.scheduler.every(TimerTask::RefreshImage, period);
        let status = self.scheduler.every(TimerTask::RefreshStatus, period);
        self.state = TimerState::Running {
            period,
            image,
            status,
        };
        tracing::debug!(period_ms = period.as_millis(), "refresh timers running");
    }

    /// Cancel both timers.
    pub fn stop(&mut self) {
        if let TimerState::Running { image, status, .. } =
            std::mem::replace(&mut self.state, TimerState::Stopped)
        {
            self.scheduler.cancel(image);
            self.scheduler.cancel(status);
        }
    }

    /// Period of the running timers, `None` when stopped.
    #[must_use]
    pub fn period(&self) -> Option<RefreshInterval> {
        match &self.state {
            TimerState::Running { period, .. } => Some(*period),
            TimerState::Stopped => None,
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        matches!(self.state, TimerState::Running { .. })
    }
}
