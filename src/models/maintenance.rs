//! Modelo de registros de mantenimiento

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estados permitidos para un registro de mantenimiento
pub const MAINTENANCE_STATUSES: [&str; 3] = ["scheduled", "in_progress", "completed"];

/// Registro de mantenimiento - mapea a la tabla maintenance
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MaintenanceRecord {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub service_date: NaiveDate,
    pub service_type: String,
    pub description: String,
    pub cost: Decimal,
    pub odometer_reading_before: Decimal,
    pub odometer_reading_after: Decimal,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
