//! View port — the on-screen elements the dashboard writes to.

use thermaldash_domain::log::LogEntry;
use thermaldash_domain::reading::{Legend, Readout};

/// Typed bindings to the dashboard page.
///
/// Implementations are built once at startup with every binding present.
pub trait DashboardView {
    /// Point the thermal image at `src`; the host fetches and renders it.
    fn show_image(&self, src: &str);

    /// Write the `min`/`max`/`avg` labels.
    fn show_readout(&self, readout: Readout);

    /// Write the colour-bar legend labels.
    fn show_legend(&self, legend: Legend);

    /// Prepend a line to the log panel.
    fn append_log(&self, entry: LogEntry);
}
