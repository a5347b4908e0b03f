//! Command handlers.
//!
//! Each handler drives the navigator in the `CliContext` and writes its
//! result to `out`. Notifications go to stderr through the console sink.

pub mod listen;
pub mod rooms;
pub mod route;
