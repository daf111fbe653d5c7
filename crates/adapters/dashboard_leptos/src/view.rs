//! Leptos signals as the dashboard view.

use leptos::prelude::*;
use thermaldash_app::ports::DashboardView;
use thermaldash_domain::log::{EventLog, LogEntry};
use thermaldash_domain::reading::{Legend, Readout};

/// Typed view bindings: one signal per group of page elements.
///
/// Created once at startup; components read the signals, the application
/// writes them through [`DashboardView`].
#[derive(Debug, Clone, Copy)]
pub struct SignalView {
    pub image_src: RwSignal<String>,
    pub readout: RwSignal<Readout>,
    pub legend: RwSignal<Legend>,
    pub log: RwSignal<EventLog>,
}

impl SignalView {
    /// Create empty bindings keeping at most `log_capacity` log lines.
    #[must_use]
    pub fn new(log_capacity: usize) -> Self {
        Self {
            image_src: RwSignal::new(String::new()),
            readout: RwSignal::new(Readout::default()),
            legend: RwSignal::new(Legend::default()),
            log: RwSignal::new(EventLog::with_capacity(log_capacity)),
        }
    }
}

impl DashboardView for SignalView {
    fn show_image(&self, src: &str) {
        self.image_src.set(src.to_string());
    }

    fn show_readout(&self, readout: Readout) {
        self.readout.set(readout);
    }

    fn show_legend(&self, legend: Legend) {
        self.legend.set(legend);
    }

    fn append_log(&self, entry: LogEntry) {
        self.log.update(|log| log.push(entry));
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;

    use super::*;

    fn entry(message: &str) -> LogEntry {
        LogEntry::new(NaiveTime::from_hms_opt(8, 30, 0).unwrap(), message)
    }

    #[test]
    fn should_write_readout_and_legend_signals() {
        let view = SignalView::new(10);
        let readout = Readout {
            min: "20.12".into(),
            max: "35.46".into(),
            avg: "27.00".into(),
        };

        view.show_readout(readout.clone());
        view.show_image("/image?ts=1");

        assert_eq!(view.readout.get_untracked(), readout);
        assert_eq!(view.image_src.get_untracked(), "/image?ts=1");
        assert_eq!(view.legend.get_untracked(), Legend::default());
    }

    #[test]
    fn should_cap_log_at_configured_capacity() {
        let view = SignalView::new(2);

        for message in ["one", "two", "three"] {
            view.append_log(entry(message));
        }

        view.log.with_untracked(|log| {
            let lines: Vec<_> = log.iter().map(ToString::to_string).collect();
            assert_eq!(lines, ["[08:30:00] three", "[08:30:00] two"]);
        });
    }
}
