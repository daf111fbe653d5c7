//! # thermaldash-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `ThermalFeed` — fetch the status document and the current image
//!   - `Scheduler` — create and cancel repeating timers
//!   - `DashboardView` — write readouts, legend, image source and log lines
//!   - `Clock` — epoch milliseconds and wall-clock time
//!   - `Fullscreen` — query, enter and leave fullscreen mode
//! - Define **driving/inbound** use-cases:
//!   - `DashboardService` — refresh image, refresh status, capture a frame
//!   - `RefreshTimers` — the Stopped/Running timer lifecycle
//!   - `DashboardController` — page-load sequence and interval changes
//! - Provide **in-process infrastructure** that doesn't need IO (system clock)
//!
//! ## Concurrency
//! Everything here runs on a single event-loop thread. Services use `Cell` and
//! `RefCell` and are intentionally `!Sync`.
//!
//! ## Dependency rule
//! Depends on `thermaldash-domain` only. Never imports adapter crates.
//! Adapters depend on *this* crate, not the reverse.

pub mod clock;
pub mod ports;
pub mod services;
