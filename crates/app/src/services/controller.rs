//! Dashboard controller — page-load sequence and refresh-interval changes.

use std::cell::RefCell;
use std::rc::Rc;

use thermaldash_domain::error::DashboardError;
use thermaldash_domain::interval::RefreshInterval;
use thermaldash_domain::log::Notice;

use crate::ports::{Clock, DashboardView, Scheduler, ThermalFeed};
use crate::services::dashboard_service::{DashboardService, StatusOutcome};
use crate::services::refresh_timers::RefreshTimers;

/// Session-wide controller: one per page, shared by every handler.
///
/// Holds the refresh timers explicitly instead of module-level state. All
/// methods run to completion on the event-loop thread, so a timer restart is
/// never interleaved with another input.
pub struct DashboardController<F, C, V, S: Scheduler> {
    service: Rc<DashboardService<F, C, V>>,
    timers: RefCell<RefreshTimers<S>>,
}

impl<F, C, V, S> DashboardController<F, C, V, S>
where
    F: ThermalFeed,
    C: Clock,
    V: DashboardView,
    S: Scheduler,
{
    /// Create a stopped controller. `scheduler` must carry out timer ticks
    /// against the same `service`.
    pub fn new(service: Rc<DashboardService<F, C, V>>, scheduler: S) -> Self {
        Self {
            service,
            timers: RefCell::new(RefreshTimers::new(scheduler)),
        }
    }

    #[must_use]
    pub fn service(&self) -> &Rc<DashboardService<F, C, V>> {
        &self.service
    }

    /// Page load: start both timers at `period`, announce readiness, then
    /// poll the status once outside the timer cadence.
    ///
    /// The timers are running and the ready line is logged before this
    /// future is first polled.
    pub fn start(&self, period: RefreshInterval) -> impl Future<Output = StatusOutcome> + use<F, C, V, S> {
        self.timers.borrow_mut().start(period);
        self.service.refresh_image();
        self.service.notify(&Notice::UiReady);
        tracing::info!(period_ms = period.as_millis(), "dashboard started");

        let service = Rc::clone(&self.service);
        async move { service.refresh_status().await }
    }

    /// Apply a new value from the interval control.
    ///
    /// On success both timers are replaced by a pair at the new period. An
    /// unusable value is logged and leaves the running timers untouched.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::InvalidInterval`] when `raw` is not a
    /// positive number of milliseconds.
    pub fn change_interval(&self, raw: &str) -> Result<RefreshInterval, DashboardError> {
        let period = raw.parse::<RefreshInterval>().inspect_err(|_| {
            self.service
                .notify(&Notice::IntervalRejected(raw.to_string()));
        })?;
        self.timers.borrow_mut().restart(period);
        tracing::info!(period_ms = period.as_millis(), "refresh interval changed");
        Ok(period)
    }

    /// Period of the running timers, `None` before [`start`](Self::start).
    #[must_use]
    pub fn period(&self) -> Option<RefreshInterval> {
        self.timers.borrow().period()
    }

    /// Cancel both timers.
    pub fn stop(&self) {
        self.timers.borrow_mut().stop();
    }
}
