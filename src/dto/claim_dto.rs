use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

// Request para dar de alta un siniestro
#[derive(Debug, Deserialize, Validate)]
pub struct CreateClaimRequest {
    pub vehicle_id: Uuid,
    pub claim_date: NaiveDate,

    #[validate(custom = "crate::utils::validation::validate_positive_amount")]
    pub claim_amount: Decimal,

    #[validate(length(min = 1))]
    pub reason: String,
}

// Request para cambiar el estado de un siniestro
#[derive(Debug, Deserialize)]
pub struct UpdateClaimStatusRequest {
    pub status: String,
}

// Query params del listado de siniestros
#[derive(Debug, Default, Deserialize)]
pub struct ListClaimsQuery {
    pub vehicle_id: Option<Uuid>,
    pub status: Option<String>,
}
