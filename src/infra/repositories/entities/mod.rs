//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod doctor;

// Re-exports for public API convenience
#[allow(unused_imports)]
pub use doctor::{ActiveModel as DoctorActiveModel, Entity as DoctorEntity, Model as DoctorModel};
