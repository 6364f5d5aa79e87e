//! Doctor domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Postal address embedded in a doctor record.
///
/// Has no identity of its own; it is stored in the doctor's row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[validate(length(min = 1, message = "Bairro é obrigatório"))]
    #[schema(example = "Centro")]
    pub neighborhood: String,
    #[validate(length(min = 1, message = "Logradouro é obrigatório"))]
    #[schema(example = "Rua das Flores")]
    pub street: String,
    #[validate(length(min = 1, message = "Número é obrigatório"))]
    #[schema(example = "42")]
    pub number: String,
    #[validate(length(min = 1, message = "Cidade é obrigatória"))]
    #[schema(example = "São Paulo")]
    pub city: String,
    #[validate(length(min = 1, message = "UF é obrigatória"))]
    #[schema(example = "SP")]
    pub state: String,
    #[validate(length(min = 1, message = "CEP é obrigatório"))]
    #[schema(example = "01001-000")]
    pub zip_code: String,
    #[serde(default)]
    #[schema(example = "Sala 3")]
    pub complement: Option<String>,
}

/// Doctor domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub specialty: String,
    pub crm: String,
    pub phone: String,
    pub address: Option<Address>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input to the creation workflow (password still in plain text)
#[derive(Debug, Clone)]
pub struct CreateDoctor {
    pub name: String,
    pub email: String,
    pub password: String,
    pub specialty: String,
    pub crm: String,
    pub phone: String,
    pub address: Option<Address>,
}

/// Doctor ready to be persisted; the password is already hashed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDoctor {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub specialty: String,
    pub crm: String,
    pub phone: String,
    pub address: Option<Address>,
}

impl NewDoctor {
    /// Build a persistable doctor from the creation input and a password hash
    pub fn from_input(input: CreateDoctor, password_hash: String) -> Self {
        Self {
            name: input.name,
            email: input.email,
            password_hash,
            specialty: input.specialty,
            crm: input.crm,
            phone: input.phone,
            address: input.address,
        }
    }
}

/// Doctor response (safe to return to client, never carries the password)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DoctorResponse {
    /// Unique doctor identifier
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    #[schema(example = "Ana Souza")]
    pub name: String,
    #[schema(example = "ana@x.com")]
    pub email: String,
    #[schema(example = "Cardiology")]
    pub specialty: String,
    /// Medical license registration number
    #[schema(example = "CRM123")]
    pub crm: String,
    #[schema(example = "5551234")]
    pub phone: String,
    pub address: Option<Address>,
}

impl From<Doctor> for DoctorResponse {
    fn from(doctor: Doctor) -> Self {
        Self {
            id: doctor.id,
            name: doctor.name,
            email: doctor.email,
            specialty: doctor.specialty,
            crm: doctor.crm,
            phone: doctor.phone,
            address: doctor.address,
        }
    }
}
