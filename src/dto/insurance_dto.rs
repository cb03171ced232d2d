use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::dto::vehicle_dto::VehicleResponse;
use crate::models::insurance::Insurance;
use crate::models::insurance_history::InsuranceHistoryRow;

// Request para dar de alta o reemplazar la póliza de un vehículo
#[derive(Debug, Deserialize, Validate)]
#[validate(schema(function = "validate_policy_dates", skip_on_field_errors = false))]
pub struct InsuranceRequest {
    #[validate(custom = "crate::utils::validation::validate_policy_number")]
    pub policy_number: String,

    #[validate(custom = "crate::utils::validation::validate_insurer")]
    pub insurer: String,

    #[validate(length(min = 1))]
    pub policy_type: String,

    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub issue_date: NaiveDate,

    #[validate(custom = "crate::utils::validation::validate_premium_amount")]
    pub premium_amount: Decimal,

    #[validate(length(min = 1))]
    pub payment_mode: String,
}

fn validate_policy_dates(request: &InsuranceRequest) -> Result<(), ValidationError> {
    crate::utils::validation::validate_date_order(request.start_date, request.end_date)
}

impl InsuranceRequest {
    pub fn into_insurance(self) -> Insurance {
        Insurance {
            policy_number: self.policy_number.trim().to_string(),
            insurer: self.insurer.trim().to_string(),
            policy_type: self.policy_type.trim().to_string(),
            start_date: self.start_date,
            end_date: self.end_date,
            issue_date: self.issue_date,
            premium_amount: self.premium_amount,
            payment_mode: self.payment_mode.trim().to_string(),
            has_insurance: true,
        }
    }
}

// Resultado de la reconciliación de pólizas vencidas
#[derive(Debug, Serialize)]
pub struct ReconciliationResponse {
    pub updated_vehicles: Vec<VehicleResponse>,
    pub insurance_history: Vec<InsuranceHistoryRow>,
}
