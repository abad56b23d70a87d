//! Ganaderia Livestock Farm Management System
//!
//! A Rust implementation of the Ganaderia server, providing a REST JSON API
//! for browsing farms and computing consolidated farm/herd/animal/personnel
//! statistics for owners and administrators.

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
