//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on repository traits, injected
//! through their constructors.

pub mod container;
mod doctor_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use doctor_service::{DoctorManager, DoctorService};
