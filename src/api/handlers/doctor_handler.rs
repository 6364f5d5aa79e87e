//! Doctor handlers.

use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{Address, CreateDoctor, DoctorResponse};
use crate::errors::AppResult;

/// Doctor registration request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateDoctorRequest {
    /// Full name
    #[validate(length(min = 3, max = 100, message = "Nome deve ter entre 3 e 100 caracteres"))]
    #[validate(custom(function = "not_blank"))]
    #[schema(example = "Ana Souza", min_length = 3, max_length = 100)]
    pub name: String,
    /// Contact and login email, unique across doctors
    #[validate(email(message = "Email inválido"))]
    #[validate(length(min = 3, max = 100, message = "Email deve ter entre 3 e 100 caracteres"))]
    #[schema(example = "ana@x.com", min_length = 3, max_length = 100)]
    pub email: String,
    /// Plain-text password, hashed before storage
    #[validate(length(min = 8, max = 100, message = "Senha deve ter entre 8 e 100 caracteres"))]
    #[validate(custom(function = "not_blank"))]
    #[schema(example = "12345678", min_length = 8, max_length = 100)]
    pub password: String,
    #[validate(length(min = 3, max = 100, message = "Especialidade deve ter entre 3 e 100 caracteres"))]
    #[validate(custom(function = "not_blank"))]
    #[schema(example = "Cardiology", min_length = 3, max_length = 100)]
    pub specialty: String,
    /// Medical license registration number, unique across doctors
    #[validate(length(min = 3, max = 100, message = "CRM deve ter entre 3 e 100 caracteres"))]
    #[validate(custom(function = "not_blank"))]
    #[schema(example = "CRM123", min_length = 3, max_length = 100)]
    pub crm: String,
    #[validate(length(min = 3, max = 100, message = "Telefone deve ter entre 3 e 100 caracteres"))]
    #[validate(custom(function = "not_blank"))]
    #[schema(example = "5551234", min_length = 3, max_length = 100)]
    pub phone: String,
    #[validate(nested)]
    #[serde(default)]
    pub address: Option<Address>,
}

impl From<CreateDoctorRequest> for CreateDoctor {
    fn from(req: CreateDoctorRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            password: req.password,
            specialty: req.specialty,
            crm: req.crm,
            phone: req.phone,
            address: req.address,
        }
    }
}

/// Reject values made only of whitespace
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("não pode estar em branco".into());
        return Err(err);
    }
    Ok(())
}

/// Create doctor routes
pub fn doctor_routes() -> Router<AppState> {
    Router::new().route("/", post(create_doctor))
}

/// Register a new doctor
#[utoipa::path(
    post,
    path = "/doctors",
    tag = "Doctors",
    request_body = CreateDoctorRequest,
    responses(
        (status = 201, description = "Doctor registered successfully", body = DoctorResponse),
        (status = 400, description = "Validation error, or email/CRM already registered"),
        (status = 500, description = "Unexpected failure")
    )
)]
pub async fn create_doctor(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateDoctorRequest>,
) -> AppResult<(StatusCode, Json<DoctorResponse>)> {
    let doctor = state
        .doctor_service
        .create_doctor(CreateDoctor::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(DoctorResponse::from(doctor))))
}
