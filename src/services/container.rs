//! Service Container - Centralized service access.
//!
//! Wires repositories into services once at startup so handlers only
//! ever see service traits.

use std::sync::Arc;

use super::DoctorService;
use crate::infra::DoctorStore;

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get doctor service
    fn doctors(&self) -> Arc<dyn DoctorService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    doctor_service: Arc<dyn DoctorService>,
}

impl Services {
    /// Create a new service container with all services initialized
    pub fn new(doctor_service: Arc<dyn DoctorService>) -> Self {
        Self { doctor_service }
    }

    /// Create service container from a database connection
    pub fn from_connection(db: sea_orm::DatabaseConnection) -> Self {
        use super::DoctorManager;

        let repository = Arc::new(DoctorStore::new(db));
        let doctor_service = Arc::new(DoctorManager::new(repository));

        Self { doctor_service }
    }
}

impl ServiceContainer for Services {
    fn doctors(&self) -> Arc<dyn DoctorService> {
        self.doctor_service.clone()
    }
}
