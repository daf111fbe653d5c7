//! Application services — use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.

pub mod controller;
pub mod dashboard_service;
pub mod fullscreen;
pub mod refresh_timers;

#[cfg(test)]
mod fakes;
