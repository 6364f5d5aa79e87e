//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::doctor_handler;
use crate::domain::{Address, DoctorResponse};

/// OpenAPI documentation for the Doctor Registry
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Doctor Registry",
        version = "0.1.0",
        description = "Doctor registration API with Axum, SeaORM, and clean architecture",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        doctor_handler::create_doctor,
    ),
    components(
        schemas(
            Address,
            DoctorResponse,
            doctor_handler::CreateDoctorRequest,
        )
    ),
    tags(
        (name = "Doctors", description = "Doctor registration")
    )
)]
pub struct ApiDoc;
