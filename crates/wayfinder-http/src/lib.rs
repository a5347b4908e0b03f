#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// `DefaultNavigationClient` is meant to be used through `NavigationApiPort`,
// not its internal generic structure
#![allow(private_interfaces, private_bounds)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultNavigationClient;

// Configuration
pub use config::{DEFAULT_API_BASE_URL, HttpClientConfig};

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;
