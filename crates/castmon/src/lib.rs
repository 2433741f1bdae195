//! Castmon - live terminal dashboard for a Cast speaker's local status
//! endpoint.
//!
//! Polls `/setup/eureka_info?options=detail` on a fixed interval, extracts
//! a fixed field set from the JSON response, and renders a color-coded
//! report. Read-only: no device control, no discovery, no persistence.

pub mod cli;
pub mod client;
pub mod config;
pub mod render;
pub mod runtime;
pub mod snapshot;
pub mod view;
