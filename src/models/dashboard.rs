//! Modelos del resumen de dashboard
//!
//! Agregados de solo lectura para la pantalla principal: totales, cubetas de
//! estado de seguros y serie mensual de costes para las gráficas.

use rust_decimal::Decimal;
use serde::Serialize;

/// Cubetas de estado de seguro sobre la flota activa
#[derive(Debug, Default, Serialize)]
pub struct InsuranceStatusBuckets {
    pub valid: i64,
    pub expiring_soon: i64,
    pub expired: i64,
    pub uninsured: i64,
}

/// Totales de siniestros por estado
#[derive(Debug, Default, Serialize)]
pub struct ClaimTotals {
    pub pending: i64,
    pub approved: i64,
    pub rejected: i64,
}

/// Punto de la serie mensual de costes de mantenimiento
#[derive(Debug, Serialize)]
pub struct MonthlyCost {
    pub month: String,
    pub total: Decimal,
}

/// Resumen del dashboard
#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    pub total_vehicles: i64,
    pub total_drivers: i64,
    pub insurance: InsuranceStatusBuckets,
    pub claims: ClaimTotals,
    pub total_maintenance_cost: Decimal,
    pub total_expense_amount: Decimal,
    pub maintenance_cost_by_month: Vec<MonthlyCost>,
}
