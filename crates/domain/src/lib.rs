//! # thermaldash-domain
//!
//! Pure domain model for the thermaldash thermal-camera dashboard.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, log-line clock labels
//! - Define **Status readings** (the `/status` payload) and their rendered
//!   forms: two-decimal **Readouts** and the one-decimal colour-bar **Legend**
//! - Define the **Refresh interval** shared by both polling timers
//! - Define the **Event log** (bounded, newest-first) and its notices
//! - Define **Request sequencing** used to discard out-of-order responses
//! - Define endpoint URL helpers, the dashboard configuration and the
//!   page element contract
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod config;
pub mod element;
pub mod endpoint;
pub mod interval;
pub mod log;
pub mod reading;
pub mod sequence;
