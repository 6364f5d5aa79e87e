//! Doctor service - Handles doctor registration.
//!
//! Runs the uniqueness pre-checks (email first, then CRM), hashes the
//! password and persists the record through the repository.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{CreateDoctor, Doctor, NewDoctor, Password};
use crate::errors::{AppError, AppResult, DuplicateField};
use crate::infra::DoctorRepository;

/// Doctor service trait for dependency injection.
#[async_trait]
pub trait DoctorService: Send + Sync {
    /// Register a new doctor.
    ///
    /// Fails with `AppError::AlreadyExists` when the email or the CRM is
    /// already taken. Email is checked first.
    async fn create_doctor(&self, input: CreateDoctor) -> AppResult<Doctor>;
}

/// Concrete implementation of DoctorService.
pub struct DoctorManager {
    repository: Arc<dyn DoctorRepository>,
}

impl DoctorManager {
    /// Create new doctor service over a repository
    pub fn new(repository: Arc<dyn DoctorRepository>) -> Self {
        Self { repository }
    }

    async fn ensure_unique(&self, email: &str, crm: &str) -> AppResult<()> {
        if self.repository.find_by_email(email).await?.is_some() {
            return Err(AppError::already_exists(DuplicateField::Email));
        }

        if self.repository.find_by_crm(crm).await?.is_some() {
            return Err(AppError::already_exists(DuplicateField::Crm));
        }

        Ok(())
    }
}

#[async_trait]
impl DoctorService for DoctorManager {
    async fn create_doctor(&self, mut input: CreateDoctor) -> AppResult<Doctor> {
        if let Err(e) = self.ensure_unique(&input.email, &input.crm).await {
            if let AppError::AlreadyExists(field) = &e {
                tracing::info!(field = field.column(), "Doctor registration rejected");
            }
            return Err(e);
        }

        // Hashing runs on the blocking pool
        let plain = std::mem::take(&mut input.password);
        let password_hash = tokio::task::spawn_blocking(move || Password::new(&plain))
            .await
            .map_err(|e| AppError::internal(format!("Password hashing task failed: {}", e)))??
            .into_string();

        let doctor = self
            .repository
            .save(NewDoctor::from_input(input, password_hash))
            .await?;

        tracing::info!(doctor_id = %doctor.id, "Doctor registered");
        Ok(doctor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Address;
    use crate::infra::MockDoctorRepository;
    use chrono::Utc;
    use mockall::predicate::eq;
    use uuid::Uuid;

    fn input() -> CreateDoctor {
        CreateDoctor {
            name: "Ana Souza".to_string(),
            email: "ana@x.com".to_string(),
            password: "12345678".to_string(),
            specialty: "Cardiology".to_string(),
            crm: "CRM123".to_string(),
            phone: "5551234".to_string(),
            address: Some(Address {
                neighborhood: "Centro".to_string(),
                street: "Rua das Flores".to_string(),
                number: "42".to_string(),
                city: "São Paulo".to_string(),
                state: "SP".to_string(),
                zip_code: "01001-000".to_string(),
                complement: Some("Sala 3".to_string()),
            }),
        }
    }

    fn persisted(doctor: NewDoctor) -> Doctor {
        let now = Utc::now();
        Doctor {
            id: Uuid::new_v4(),
            name: doctor.name,
            email: doctor.email,
            password_hash: doctor.password_hash,
            specialty: doctor.specialty,
            crm: doctor.crm,
            phone: doctor.phone,
            address: doctor.address,
            created_at: now,
            updated_at: now,
        }
    }

    fn existing() -> Doctor {
        persisted(NewDoctor::from_input(input(), "hash".to_string()))
    }

    #[tokio::test]
    async fn test_create_doctor_success() {
        let mut repo = MockDoctorRepository::new();
        repo.expect_find_by_email()
            .with(eq("ana@x.com"))
            .times(1)
            .returning(|_| Ok(None));
        repo.expect_find_by_crm()
            .with(eq("CRM123"))
            .times(1)
            .returning(|_| Ok(None));
        repo.expect_save()
            .times(1)
            .returning(|doctor| Ok(persisted(doctor)));

        let service = DoctorManager::new(Arc::new(repo));
        let doctor = service.create_doctor(input()).await.unwrap();

        assert!(!doctor.id.is_nil());
        assert_eq!(doctor.email, "ana@x.com");
        assert_eq!(doctor.address, input().address);
    }

    #[tokio::test]
    async fn test_create_doctor_hashes_password() {
        let mut repo = MockDoctorRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(None));
        repo.expect_find_by_crm().returning(|_| Ok(None));
        repo.expect_save()
            .withf(|doctor| {
                doctor.password_hash != "12345678"
                    && Password::from_hash(doctor.password_hash.clone()).verify("12345678")
            })
            .times(1)
            .returning(|doctor| Ok(persisted(doctor)));

        let service = DoctorManager::new(Arc::new(repo));
        assert!(service.create_doctor(input()).await.is_ok());
    }

    #[tokio::test]
    async fn test_duplicate_email_is_rejected_without_insert() {
        let mut repo = MockDoctorRepository::new();
        repo.expect_find_by_email()
            .returning(|_| Ok(Some(existing())));
        repo.expect_find_by_crm().times(0);
        repo.expect_save().times(0);

        let service = DoctorManager::new(Arc::new(repo));
        let err = service.create_doctor(input()).await.unwrap_err();

        assert!(matches!(err, AppError::AlreadyExists(DuplicateField::Email)));
        assert_eq!(err.to_string(), "O email já está cadastrado");
    }

    #[tokio::test]
    async fn test_duplicate_crm_is_rejected_without_insert() {
        let mut repo = MockDoctorRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(None));
        repo.expect_find_by_crm()
            .returning(|_| Ok(Some(existing())));
        repo.expect_save().times(0);

        let service = DoctorManager::new(Arc::new(repo));
        let err = service.create_doctor(input()).await.unwrap_err();

        assert!(matches!(err, AppError::AlreadyExists(DuplicateField::Crm)));
        assert_eq!(err.to_string(), "O CRM já está cadastrado");
    }

    #[tokio::test]
    async fn test_email_checked_before_crm() {
        let mut repo = MockDoctorRepository::new();
        repo.expect_find_by_email()
            .returning(|_| Ok(Some(existing())));
        repo.expect_find_by_crm()
            .returning(|_| Ok(Some(existing())));
        repo.expect_save().times(0);

        let service = DoctorManager::new(Arc::new(repo));
        let err = service.create_doctor(input()).await.unwrap_err();

        assert!(matches!(err, AppError::AlreadyExists(DuplicateField::Email)));
    }

    #[tokio::test]
    async fn test_unique_violation_on_save_propagates() {
        let mut repo = MockDoctorRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(None));
        repo.expect_find_by_crm().returning(|_| Ok(None));
        repo.expect_save()
            .returning(|_| Err(AppError::already_exists(DuplicateField::Crm)));

        let service = DoctorManager::new(Arc::new(repo));
        let err = service.create_doctor(input()).await.unwrap_err();

        assert!(matches!(err, AppError::AlreadyExists(DuplicateField::Crm)));
    }

    #[tokio::test]
    async fn test_storage_failure_is_unclassified() {
        let mut repo = MockDoctorRepository::new();
        repo.expect_find_by_email()
            .returning(|_| Err(AppError::from(sea_orm::DbErr::Custom("down".into()))));
        repo.expect_save().times(0);

        let service = DoctorManager::new(Arc::new(repo));
        let err = service.create_doctor(input()).await.unwrap_err();

        assert!(matches!(err, AppError::Database(_)));
    }
}
