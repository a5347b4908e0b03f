//! Core services - the flows that tie components to ports.
//!
//! Services are pure orchestrators: they only see port traits, never a
//! concrete backend, recognizer, or canvas.

mod navigator;

pub use navigator::{MAPPED_FLOOR, Navigator, NavigatorDeps, RouteSummary};
