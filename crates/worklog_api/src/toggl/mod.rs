//! Toggl Track client: projects, time entries and entry tagging.

mod client;
mod config;
mod models;

pub use client::TogglClient;
pub use config::{TogglConfig, DEFAULT_API_BASE, DEFAULT_COOLDOWN_MS};
pub use models::{Project, TagAction, TimeEntry};
