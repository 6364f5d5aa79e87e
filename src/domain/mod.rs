//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.

pub mod doctor;
pub mod password;

pub use doctor::{Address, CreateDoctor, Doctor, DoctorResponse, NewDoctor};
pub use password::Password;
