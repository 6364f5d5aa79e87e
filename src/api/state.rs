//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;
use std::time::Duration;

use crate::config::{Config, DEFAULT_REQUEST_TIMEOUT_SECS};
use crate::infra::Database;
use crate::services::{DoctorService, ServiceContainer, Services};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Doctor registration service
    pub doctor_service: Arc<dyn DoctorService>,
    /// Database connection
    pub database: Arc<Database>,
    /// Deadline applied to every request
    pub request_timeout: Duration,
}

impl AppState {
    /// Create application state from database connection and config.
    ///
    /// Wires the SeaORM-backed repository into the services through
    /// the ServiceContainer.
    pub fn from_config(database: Arc<Database>, config: &Config) -> Self {
        let container = Services::from_connection(database.get_connection());

        Self {
            doctor_service: container.doctors(),
            database,
            request_timeout: config.request_timeout(),
        }
    }

    /// Create new application state with manually injected services.
    pub fn new(doctor_service: Arc<dyn DoctorService>, database: Arc<Database>) -> Self {
        Self {
            doctor_service,
            database,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    /// Override the per-request deadline.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}
