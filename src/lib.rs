//! Lume Client - Rust binding for the Lume dating app REST API
//!
//! This library wraps the Lume backend's HTTP endpoints behind a typed
//! client. It covers session authorization, discovery preferences,
//! location pings, swipes, messaging and the activity feed.

pub mod client;
pub mod config;
pub mod models;

// Re-export commonly used types
pub use client::{ApiError, Client};
pub use config::Settings;
pub use models::{Gender, ReportCause};
