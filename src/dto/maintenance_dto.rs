use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;
use validator::{Validate, ValidationError};

// Request para registrar un mantenimiento
#[derive(Debug, Deserialize, Validate)]
#[validate(schema(function = "validate_odometer", skip_on_field_errors = false))]
pub struct CreateMaintenanceRequest {
    pub vehicle_id: Uuid,
    pub service_date: NaiveDate,

    #[validate(length(min = 1))]
    pub service_type: String,

    #[validate(length(min = 1))]
    pub description: String,

    #[validate(custom = "crate::utils::validation::validate_non_negative_amount")]
    pub cost: Decimal,

    pub odometer_reading_before: Decimal,
    pub odometer_reading_after: Decimal,

    pub status: Option<String>,
}

fn validate_odometer(request: &CreateMaintenanceRequest) -> Result<(), ValidationError> {
    crate::utils::validation::validate_odometer_order(
        request.odometer_reading_before,
        request.odometer_reading_after,
    )
}

// Request para actualizar un mantenimiento
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateMaintenanceRequest {
    pub service_date: Option<NaiveDate>,

    #[validate(length(min = 1))]
    pub service_type: Option<String>,

    #[validate(length(min = 1))]
    pub description: Option<String>,

    #[validate(custom = "crate::utils::validation::validate_non_negative_amount")]
    pub cost: Option<Decimal>,

    pub odometer_reading_before: Option<Decimal>,
    pub odometer_reading_after: Option<Decimal>,

    pub status: Option<String>,
}

// Query params del listado de mantenimientos
#[derive(Debug, Default, Deserialize)]
pub struct ListMaintenanceQuery {
    pub vehicle_id: Option<Uuid>,
    pub status: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}
