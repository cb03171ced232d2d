//! Modelo de Driver
//!
//! La asignación conductor-vehículo es una lista de ids sin integridad
//! referencial: los ids huérfanos se filtran defensivamente al leer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estados permitidos para un conductor
pub const DRIVER_STATUSES: [&str; 2] = ["active", "inactive"];

/// Driver principal - mapea a la tabla drivers
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Driver {
    pub id: Uuid,
    pub name: String,
    pub license_number: String,
    pub phone: String,
    pub address: String,
    pub status: String,
    pub assigned_vehicle_ids: Vec<Uuid>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Driver {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
