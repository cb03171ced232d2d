//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle que mapea exactamente a la tabla
//! vehicles. La póliza de seguro va embebida como columna JSONB nullable y
//! el borrado es lógico vía deleted_at.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use super::insurance::Insurance;

/// Vehicle principal - mapea a la tabla vehicles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: Uuid,
    pub make: String,
    pub model: String,
    pub registration_number: String,
    pub purchase_date: NaiveDate,
    pub purchase_price: Decimal,
    pub fuel_type: String,
    pub engine_number: String,
    pub chassis_number: String,
    pub kilometers: Decimal,
    pub color: String,
    pub owner: String,
    pub phone: String,
    pub address: String,
    pub insurance: Option<Json<Insurance>>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Payload de inserción/reemplazo: los campos que llegan del formulario
/// de registro, sin id ni columnas de ciclo de vida.
#[derive(Debug, Clone)]
pub struct NewVehicle {
    pub make: String,
    pub model: String,
    pub registration_number: String,
    pub purchase_date: NaiveDate,
    pub purchase_price: Decimal,
    pub fuel_type: String,
    pub engine_number: String,
    pub chassis_number: String,
    pub kilometers: Decimal,
    pub color: String,
    pub owner: String,
    pub phone: String,
    pub address: String,
}

impl Vehicle {
    /// Un vehículo con deleted_at presente está borrado lógicamente
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Póliza embebida, si existe
    pub fn insurance(&self) -> Option<&Insurance> {
        self.insurance.as_ref().map(|j| &j.0)
    }

    /// Fecha de fin de la póliza embebida, si existe
    pub fn insurance_end_date(&self) -> Option<NaiveDate> {
        self.insurance().map(|i| i.end_date)
    }
}
