//! In-memory port implementations shared by the service tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::future::Future;
use std::rc::Rc;

use chrono::NaiveTime;
use thermaldash_domain::interval::RefreshInterval;
use thermaldash_domain::log::LogEntry;
use thermaldash_domain::reading::{Legend, Readout, StatusReading};
use tokio::sync::oneshot;

use crate::ports::{Clock, DashboardView, FetchError, Fullscreen, Scheduler, ThermalFeed, TimerTask};

type StatusResult = Result<StatusReading, FetchError>;

enum Scripted<T> {
    Ready(T),
    Pending(oneshot::Receiver<T>),
}

/// Feed answering from queues filled by the test, in order.
#[derive(Default)]
pub struct ScriptedFeed {
    statuses: RefCell<VecDeque<Scripted<StatusResult>>>,
    images: RefCell<VecDeque<Result<Vec<u8>, FetchError>>>,
}

impl ScriptedFeed {
    pub fn push_status(&self, result: StatusResult) {
        self.statuses.borrow_mut().push_back(Scripted::Ready(result));
    }

    /// Queue a response that resolves when the test sends it.
    pub fn push_pending_status(&self, rx: oneshot::Receiver<StatusResult>) {
        self.statuses.borrow_mut().push_back(Scripted::Pending(rx));
    }

    pub fn push_image(&self, result: Result<Vec<u8>, FetchError>) {
        self.images.borrow_mut().push_back(result);
    }
}

impl ThermalFeed for ScriptedFeed {
    fn fetch_status(&self) -> impl Future<Output = StatusResult> {
        let next = self.statuses.borrow_mut().pop_front();
        async move {
            match next {
                Some(Scripted::Ready(result)) => result,
                Some(Scripted::Pending(rx)) => rx
                    .await
                    .unwrap_or_else(|_| Err(FetchError::Network("sender dropped".into()))),
                None => Err(FetchError::Network("no scripted status".into())),
            }
        }
    }

    fn fetch_image(&self) -> impl Future<Output = Result<Vec<u8>, FetchError>> {
        let next = self.images.borrow_mut().pop_front();
        async move { next.unwrap_or_else(|| Err(FetchError::Network("no scripted image".into()))) }
    }
}

/// Clock frozen at 2023-11-14T22:13:20Z, wall time 12:00:00.
pub struct FixedClock {
    pub epoch_millis: i64,
    pub wall_time: NaiveTime,
}

impl Default for FixedClock {
    fn default() -> Self {
        Self {
            epoch_millis: 1_700_000_000_000,
            wall_time: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
        }
    }
}

impl Clock for FixedClock {
    fn epoch_millis(&self) -> i64 {
        self.epoch_millis
    }

    fn wall_time(&self) -> NaiveTime {
        self.wall_time
    }
}

/// One write performed on the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    Image(String),
    Readout { min: String, max: String, avg: String },
    Legend { max: String, mid: String, min: String },
    Log(String),
}

/// View recording every write in order.
#[derive(Default, Clone)]
pub struct RecordingView {
    events: Rc<RefCell<Vec<ViewEvent>>>,
}

impl RecordingView {
    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.borrow().clone()
    }

    pub fn log_lines(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                ViewEvent::Log(line) => Some(line.clone()),
                _ => None,
            })
            .collect()
    }
}

impl DashboardView for RecordingView {
    fn show_image(&self, src: &str) {
        self.events.borrow_mut().push(ViewEvent::Image(src.to_string()));
    }

    fn show_readout(&self, readout: Readout) {
        self.events.borrow_mut().push(ViewEvent::Readout {
            min: readout.min,
            max: readout.max,
            avg: readout.avg,
        });
    }

    fn show_legend(&self, legend: Legend) {
        self.events.borrow_mut().push(ViewEvent::Legend {
            max: legend.max,
            mid: legend.mid,
            min: legend.min,
        });
    }

    fn append_log(&self, entry: LogEntry) {
        self.events.borrow_mut().push(ViewEvent::Log(entry.to_string()));
    }
}

#[derive(Default)]
struct Timers {
    next_id: u32,
    active: Vec<(u32, TimerTask, RefreshInterval)>,
    cancelled: usize,
}

/// Scheduler that only tracks which timers exist. Clones share state.
#[derive(Default, Clone)]
pub struct FakeScheduler {
    timers: Rc<RefCell<Timers>>,
}

impl FakeScheduler {
    pub fn active(&self) -> Vec<(TimerTask, RefreshInterval)> {
        self.timers
            .borrow()
            .active
            .iter()
            .map(|&(_, task, period)| (task, period))
            .collect()
    }

    pub fn cancelled(&self) -> usize {
        self.timers.borrow().cancelled
    }
}

impl Scheduler for FakeScheduler {
    type Handle = u32;

    fn every(&self, task: TimerTask, period: RefreshInterval) -> u32 {
        let mut timers = self.timers.borrow_mut();
        timers.next_id += 1;
        let id = timers.next_id;
        timers.active.push((id, task, period));
        id
    }

    fn cancel(&self, handle: u32) {
        let mut timers = self.timers.borrow_mut();
        timers.active.retain(|&(id, _, _)| id != handle);
        timers.cancelled += 1;
    }
}

/// Fullscreen toggled in memory; refuses to enter when `supported` is false.
pub struct FakeScreen {
    pub active: RefCell<bool>,
    pub supported: bool,
}

impl Default for FakeScreen {
    fn default() -> Self {
        Self {
            active: RefCell::new(false),
            supported: true,
        }
    }
}

impl Fullscreen for FakeScreen {
    type Error = &'static str;

    fn is_active(&self) -> bool {
        *self.active.borrow()
    }

    fn enter(&self) -> Result<(), Self::Error> {
        if !self.supported {
            return Err("fullscreen unsupported");
        }
        *self.active.borrow_mut() = true;
        Ok(())
    }

    fn exit(&self) -> Result<(), Self::Error> {
        *self.active.borrow_mut() = false;
        Ok(())
    }
}
