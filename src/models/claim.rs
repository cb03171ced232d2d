//! Modelo de Claim
//!
//! Los siniestros son una colección normalizada que referencia al vehículo.
//! Dar de alta un siniestro exige que el vehículo tenga póliza viva.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estados permitidos para un siniestro
pub const CLAIM_STATUSES: [&str; 3] = ["Pending", "Approved", "Rejected"];

/// Claim principal - mapea a la tabla claims
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Claim {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub claim_date: NaiveDate,
    pub claim_amount: Decimal,
    pub reason: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
