//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts via `#[from]`.
//! This module holds the ones raised by domain invariants.

/// Errors raised when a domain invariant is violated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DashboardError {
    /// The refresh interval was zero, negative, or not a number.
    #[error("invalid refresh interval {0:?}")]
    InvalidInterval(String),

    /// A configuration value is out of range.
    #[error("invalid dashboard configuration: {0}")]
    InvalidConfig(&'static str),

    /// A page element the dashboard binds to is absent.
    #[error("missing view binding #{0}")]
    MissingBinding(&'static str),
}
