//! Player Tracker Web Interface
//!
//! Server-rendered dashboard pages and a small JSON API over the same view model.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod components;
pub mod handlers;
pub mod pages;
pub mod routes;
pub mod server;
pub mod state;

// Re-export the main functions
pub use server::{build_app, build_app_with_state};
pub use state::AppState;
