//! IT Asset Tracker
//!
//! A Rust implementation of the asset tracking backend, providing a REST JSON
//! API over hardware assets, procurement requests, categories and assignment
//! records, with a thin OAuth2 bridge to an external CRM.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
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
