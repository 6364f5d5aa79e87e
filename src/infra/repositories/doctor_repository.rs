//! Doctor repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
    SqlErr,
};
use uuid::Uuid;

use super::entities::doctor::{self, ActiveModel, Entity as DoctorEntity};
use crate::config::{INDEX_DOCTORS_CRM, INDEX_DOCTORS_EMAIL};
use crate::domain::{Doctor, NewDoctor};
use crate::errors::{AppError, AppResult, DuplicateField};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Doctor repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait DoctorRepository: Send + Sync {
    /// Insert a new doctor and return it with its generated id.
    ///
    /// A unique-index rejection from the database surfaces as
    /// `AppError::AlreadyExists` for the violated field.
    async fn save(&self, doctor: NewDoctor) -> AppResult<Doctor>;

    /// Find doctor by exact email
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Doctor>>;

    /// Find doctor by exact CRM number
    async fn find_by_crm(&self, crm: &str) -> AppResult<Option<Doctor>>;
}

/// Concrete implementation of DoctorRepository backed by SeaORM
pub struct DoctorStore {
    db: DatabaseConnection,
}

impl DoctorStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DoctorRepository for DoctorStore {
    async fn save(&self, doctor: NewDoctor) -> AppResult<Doctor> {
        let now = chrono::Utc::now();
        let address = doctor.address;

        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(doctor.name),
            email: Set(doctor.email),
            password_hash: Set(doctor.password_hash),
            specialty: Set(doctor.specialty),
            crm: Set(doctor.crm),
            phone: Set(doctor.phone),
            address_neighborhood: Set(address.as_ref().map(|a| a.neighborhood.clone())),
            address_street: Set(address.as_ref().map(|a| a.street.clone())),
            address_number: Set(address.as_ref().map(|a| a.number.clone())),
            address_city: Set(address.as_ref().map(|a| a.city.clone())),
            address_state: Set(address.as_ref().map(|a| a.state.clone())),
            address_zip_code: Set(address.as_ref().map(|a| a.zip_code.clone())),
            address_complement: Set(address.and_then(|a| a.complement)),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(translate_insert_error)?;
        Ok(Doctor::from(model))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Doctor>> {
        let result = DoctorEntity::find()
            .filter(doctor::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Doctor::from))
    }

    async fn find_by_crm(&self, crm: &str) -> AppResult<Option<Doctor>> {
        let result = DoctorEntity::find()
            .filter(doctor::Column::Crm.eq(crm))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Doctor::from))
    }
}

/// Map a unique-index rejection on insert to the matching domain error.
fn translate_insert_error(err: DbErr) -> AppError {
    if let Some(SqlErr::UniqueConstraintViolation(message)) = err.sql_err() {
        if let Some(field) = violated_field(&message) {
            tracing::info!(field = field.column(), "Insert rejected by unique index");
            return AppError::already_exists(field);
        }
    }
    AppError::from(err)
}

/// Identify which doctor field a unique-violation message refers to.
pub(crate) fn violated_field(message: &str) -> Option<DuplicateField> {
    if message.contains(INDEX_DOCTORS_EMAIL) {
        Some(DuplicateField::Email)
    } else if message.contains(INDEX_DOCTORS_CRM) {
        Some(DuplicateField::Crm)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violated_field_email() {
        let msg = r#"duplicate key value violates unique constraint "idx_doctors_email""#;
        assert_eq!(violated_field(msg), Some(DuplicateField::Email));
    }

    #[test]
    fn test_violated_field_crm() {
        let msg = r#"duplicate key value violates unique constraint "idx_doctors_crm""#;
        assert_eq!(violated_field(msg), Some(DuplicateField::Crm));
    }

    #[test]
    fn test_violated_field_unknown_index() {
        let msg = r#"duplicate key value violates unique constraint "doctors_pkey""#;
        assert_eq!(violated_field(msg), None);
    }

    #[test]
    fn test_non_constraint_error_stays_database_error() {
        let err = translate_insert_error(DbErr::Custom("connection reset".into()));
        assert!(matches!(err, AppError::Database(_)));
    }
}
