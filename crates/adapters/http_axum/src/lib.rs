//! # thermaldash-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the compiled browser dashboard (static files)
//! - Serve the dashboard configuration as `/config.json`
//! - Forward `/status` and `/image` to the upstream camera server so the
//!   browser sees them on its own origin
//!
//! The camera endpoints themselves are implemented upstream; this adapter
//! only relays status code, content type and body.
//!
//! ## Dependency rule
//! Depends on `thermaldash-domain` for the configuration type. Never leaks
//! axum types into the domain.

pub mod dashboard;
pub mod error;
pub mod proxy;
pub mod router;
pub mod state;
