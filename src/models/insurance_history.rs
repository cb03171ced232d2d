//! Modelo del histórico de seguros
//!
//! Tabla append-only: cada fila es una póliza superada, producida cuando el
//! reconciliador archiva una póliza vencida o cuando una póliza nueva
//! reemplaza a una existente. Nunca se actualiza ni se borra.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::insurance::Insurance;
use super::vehicle::Vehicle;

/// Motivo por el que una póliza terminó en el histórico
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveReason {
    Expired,
    Replaced,
}

impl ArchiveReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArchiveReason::Expired => "expired",
            ArchiveReason::Replaced => "replaced",
        }
    }
}

/// Fila del histórico de seguros - mapea a la tabla insurance_history
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InsuranceHistoryRow {
    pub id: String,
    pub vehicle_id: Uuid,
    pub registration_number: String,
    pub make: String,
    pub model: String,
    pub policy_number: String,
    pub insurer: String,
    pub policy_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub issue_date: NaiveDate,
    pub premium_amount: Decimal,
    pub payment_mode: String,
    pub status: String,
    pub archived_at: DateTime<Utc>,
}

impl InsuranceHistoryRow {
    /// Identificador con formato `{vehicle_id}-{motivo}-{millis}`
    pub fn history_id(vehicle_id: Uuid, reason: ArchiveReason, at: DateTime<Utc>) -> String {
        format!("{}-{}-{}", vehicle_id, reason.as_str(), at.timestamp_millis())
    }

    /// Construir la fila de histórico a partir de la póliza viva de un vehículo
    pub fn from_policy(
        vehicle: &Vehicle,
        policy: &Insurance,
        status: &str,
        reason: ArchiveReason,
        archived_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Self::history_id(vehicle.id, reason, archived_at),
            vehicle_id: vehicle.id,
            registration_number: vehicle.registration_number.clone(),
            make: vehicle.make.clone(),
            model: vehicle.model.clone(),
            policy_number: policy.policy_number.clone(),
            insurer: policy.insurer.clone(),
            policy_type: policy.policy_type.clone(),
            start_date: policy.start_date,
            end_date: policy.end_date,
            issue_date: policy.issue_date,
            premium_amount: policy.premium_amount,
            payment_mode: policy.payment_mode.clone(),
            status: status.to_string(),
            archived_at,
        }
    }
}
