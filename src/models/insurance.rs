//! Modelo de Insurance
//!
//! La póliza vive embebida en la fila del vehículo (columna JSONB, relación
//! uno a uno, se sobrescribe en el sitio). El histórico de pólizas vencidas
//! o reemplazadas vive en la tabla insurance_history.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Póliza de seguro embebida en el vehículo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insurance {
    pub policy_number: String,
    pub insurer: String,
    pub policy_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub issue_date: NaiveDate,
    pub premium_amount: Decimal,
    pub payment_mode: String,
    pub has_insurance: bool,
}

/// Estado de una póliza respecto a su fecha de fin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InsuranceStatus {
    Valid,
    ExpiringSoon,
    Expired,
    Unknown,
}

impl InsuranceStatus {
    /// Etiqueta usada por la API y las vistas
    pub fn as_str(&self) -> &'static str {
        match self {
            InsuranceStatus::Valid => "valid",
            InsuranceStatus::ExpiringSoon => "expiring-soon",
            InsuranceStatus::Expired => "expired",
            InsuranceStatus::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for InsuranceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
