//! GMAO Maintenance Management System
//!
//! Tracks equipment, schedules and executes maintenance work orders and
//! derives reliability metrics (MTBF, MTTR, availability) from their history,
//! exposed through a REST JSON API.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod maintenance;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
