//! Dashboard service — image refresh, status polling and frame capture.

use std::cell::RefCell;

use thermaldash_domain::config::DashboardConfig;
use thermaldash_domain::endpoint::{cache_busted, capture_filename};
use thermaldash_domain::log::{LogEntry, Notice};
use thermaldash_domain::reading::FrameStats;
use thermaldash_domain::sequence::RequestSequence;

use crate::ports::{Clock, DashboardView, FetchError, ThermalFeed};

/// What one status poll did to the page.
#[derive(Debug, Clone, PartialEq)]
pub enum StatusOutcome {
    /// Readout and legend now show these stats.
    Updated(FrameStats),
    /// The server had no frame yet; numeric fields untouched.
    NoData,
    /// A newer response had already been applied; this one was dropped.
    Stale,
    /// The request or its decoding failed; numeric fields untouched.
    Failed(FetchError),
}

impl StatusOutcome {
    /// The log line announcing this outcome.
    #[must_use]
    pub fn notice(&self) -> Notice {
        match self {
            Self::Updated(_) => Notice::StatusUpdated,
            Self::NoData => Notice::NoDataYet,
            Self::Stale => Notice::StaleStatus,
            Self::Failed(err) => Notice::FetchFailed(err.to_string()),
        }
    }
}

/// A frame ready to be handed to the host as a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capture {
    /// `thermal_<epoch_millis>.jpg`.
    pub filename: String,
    /// Raw image bytes as served by `/image`.
    pub bytes: Vec<u8>,
}

/// Application service behind the dashboard page.
pub struct DashboardService<F, C, V> {
    feed: F,
    clock: C,
    view: V,
    image_endpoint: String,
    sequence: RefCell<RequestSequence>,
}

impl<F, C, V> DashboardService<F, C, V>
where
    F: ThermalFeed,
    C: Clock,
    V: DashboardView,
{
    /// Create a new service writing to `view`.
    pub fn new(feed: F, clock: C, view: V, config: &DashboardConfig) -> Self {
        Self {
            feed,
            clock,
            view,
            image_endpoint: config.image_endpoint.clone(),
            sequence: RefCell::new(RequestSequence::new()),
        }
    }

    /// Point the image at a cache-busted URL so the host fetches a fresh frame.
    ///
    /// Load failures are left to the host (broken-image presentation).
    pub fn refresh_image(&self) {
        let src = cache_busted(&self.image_endpoint, self.clock.epoch_millis());
        self.view.show_image(&src);
    }

    /// Poll `/status` once and reflect the result on the page.
    ///
    /// Always appends exactly one log line, after any numeric update. Errors
    /// are contained here and reported through the log only.
    pub async fn refresh_status(&self) -> StatusOutcome {
        let ticket = self.sequence.borrow_mut().issue();
        let result = self.feed.fetch_status().await;

        let outcome = match result {
            Err(err) => {
                tracing::warn!(ticket = ticket.get(), error = %err, "status fetch failed");
                StatusOutcome::Failed(err)
            }
            Ok(reading) => {
                let fresh = self.sequence.borrow_mut().try_apply(ticket);
                match reading.stats() {
                    _ if !fresh => {
                        tracing::debug!(ticket = ticket.get(), "discarding stale status");
                        StatusOutcome::Stale
                    }
                    Some(stats) => {
                        self.view.show_readout(stats.readout());
                        self.view.show_legend(stats.legend());
                        StatusOutcome::Updated(stats)
                    }
                    None => StatusOutcome::NoData,
                }
            }
        };

        self.notify(&outcome.notice());
        outcome
    }

    /// Fetch the current frame and name it for download.
    ///
    /// # Errors
    ///
    /// Returns the [`FetchError`] of the image request. Nothing is logged;
    /// the caller reports it through the host.
    pub async fn capture(&self) -> Result<Capture, FetchError> {
        let bytes = self.feed.fetch_image().await?;
        let filename = capture_filename(self.clock.epoch_millis());
        tracing::debug!(%filename, size = bytes.len(), "frame captured");
        Ok(Capture { filename, bytes })
    }

    /// Append a timestamped line to the log panel.
    pub fn notify(&self, notice: &Notice) {
        self.view
            .append_log(LogEntry::new(self.clock.wall_time(), notice.to_string()));
    }
}
