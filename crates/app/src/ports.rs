//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the host
//! environment (browser, test harness). Futures returned here are not `Send`:
//! the browser runs them on its single event-loop thread.

pub mod clock;
pub mod feed;
pub mod fullscreen;
pub mod scheduler;
pub mod view;

pub use clock::Clock;
pub use feed::{FetchError, ThermalFeed};
pub use fullscreen::Fullscreen;
pub use scheduler::{Scheduler, TimerTask};
pub use view::DashboardView;
