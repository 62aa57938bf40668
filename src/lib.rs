//! Courtside: a coach availability and booking-cart API server.
//!
//! Layered HTTP backend: handlers parse and shape requests, services own
//! the business rules, repositories own storage access. Repositories are
//! trait objects so services are tested against an in-memory store.

use shadow_rs::shadow;

shadow!(build);

pub mod api;
pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod logger;
pub mod models;
pub mod repositories;
pub mod schema;
pub mod server;
pub mod services;
pub mod state;
pub mod utils;

/// Crate version from build-time metadata.
pub fn pkg_version() -> &'static str {
    build::PKG_VERSION
}
