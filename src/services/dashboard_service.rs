//! Agregados del dashboard
//!
//! Solo lectura: cuenta flota, conductores y siniestros, clasifica las
//! pólizas en cubetas y arma la serie mensual de costes para las gráficas.
//! No dispara ninguna reconciliación.

use chrono::{NaiveDate, Utc};
use sqlx::PgPool;

use crate::models::dashboard::{ClaimTotals, DashboardSummary, InsuranceStatusBuckets, MonthlyCost};
use crate::models::insurance::InsuranceStatus;
use crate::models::vehicle::Vehicle;
use crate::repositories::claim_repository::ClaimRepository;
use crate::repositories::driver_repository::DriverRepository;
use crate::repositories::expense_repository::ExpenseRepository;
use crate::repositories::maintenance_repository::MaintenanceRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::insurance_status;
use crate::utils::errors::AppError;

/// Clasificar la flota activa en cubetas de estado de seguro
pub fn insurance_buckets(
    vehicles: &[Vehicle],
    today: NaiveDate,
    window_days: i64,
) -> InsuranceStatusBuckets {
    let mut buckets = InsuranceStatusBuckets::default();

    for vehicle in vehicles {
        match insurance_status::classify_vehicle(vehicle, today, window_days) {
            Some(InsuranceStatus::Valid) => buckets.valid += 1,
            Some(InsuranceStatus::ExpiringSoon) => buckets.expiring_soon += 1,
            Some(InsuranceStatus::Expired) => buckets.expired += 1,
            Some(InsuranceStatus::Unknown) | None => buckets.uninsured += 1,
        }
    }

    buckets
}

pub struct DashboardService {
    vehicles: VehicleRepository,
    drivers: DriverRepository,
    claims: ClaimRepository,
    maintenance: MaintenanceRepository,
    expenses: ExpenseRepository,
    window_days: i64,
}

impl DashboardService {
    pub fn new(pool: PgPool, window_days: i64) -> Self {
        Self {
            vehicles: VehicleRepository::new(pool.clone()),
            drivers: DriverRepository::new(pool.clone()),
            claims: ClaimRepository::new(pool.clone()),
            maintenance: MaintenanceRepository::new(pool.clone()),
            expenses: ExpenseRepository::new(pool),
            window_days,
        }
    }

    pub async fn summary(&self) -> Result<DashboardSummary, AppError> {
        let fleet = self.vehicles.find_all_active().await?;
        let today = Utc::now().date_naive();

        let insurance = insurance_buckets(&fleet, today, self.window_days);

        let claims = ClaimTotals {
            pending: self.claims.count_by_status("Pending").await?,
            approved: self.claims.count_by_status("Approved").await?,
            rejected: self.claims.count_by_status("Rejected").await?,
        };

        let maintenance_cost_by_month = self
            .maintenance
            .cost_totals_by_month()
            .await?
            .into_iter()
            .map(|(month, total)| MonthlyCost { month, total })
            .collect();

        Ok(DashboardSummary {
            total_vehicles: fleet.len() as i64,
            total_drivers: self.drivers.count_active().await?,
            insurance,
            claims,
            total_maintenance_cost: self.maintenance.total_cost().await?,
            total_expense_amount: self.expenses.total_amount().await?,
            maintenance_cost_by_month,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::insurance::Insurance;
    use chrono::Duration;
    use rust_decimal::Decimal;
    use sqlx::types::Json;
    use uuid::Uuid;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn vehicle(end_date: Option<NaiveDate>) -> Vehicle {
        Vehicle {
            id: Uuid::new_v4(),
            make: "Honda".to_string(),
            model: "City".to_string(),
            registration_number: "DL8CAF5031".to_string(),
            purchase_date: NaiveDate::from_ymd_opt(2023, 1, 10).unwrap(),
            purchase_price: Decimal::from(1_100_000),
            fuel_type: "Petrol".to_string(),
            engine_number: "L15B71234A".to_string(),
            chassis_number: "MRHGM6640MP123456".to_string(),
            kilometers: Decimal::from(18_000),
            color: "Silver".to_string(),
            owner: "Neha Sharma".to_string(),
            phone: "9988776655".to_string(),
            address: "3 Lodhi Estate, New Delhi".to_string(),
            insurance: end_date.map(|end| {
                Json(Insurance {
                    policy_number: "DL/POL-1100".to_string(),
                    insurer: "Shield Mutual".to_string(),
                    policy_type: "Comprehensive".to_string(),
                    start_date: end - Duration::days(365),
                    end_date: end,
                    issue_date: end - Duration::days(365),
                    premium_amount: Decimal::from(15000),
                    payment_mode: "Yearly".to_string(),
                    has_insurance: true,
                })
            }),
            deleted_at: None,
            created_at: today().and_hms_opt(8, 0, 0).unwrap().and_utc(),
        }
    }

    #[test]
    fn test_buckets_cover_every_vehicle_once() {
        let fleet = vec![
            vehicle(Some(today() + Duration::days(200))),
            vehicle(Some(today() + Duration::days(10))),
            vehicle(Some(today() - Duration::days(3))),
            vehicle(None),
            vehicle(None),
        ];

        let buckets = insurance_buckets(&fleet, today(), 30);

        assert_eq!(buckets.valid, 1);
        assert_eq!(buckets.expiring_soon, 1);
        assert_eq!(buckets.expired, 1);
        assert_eq!(buckets.uninsured, 2);
        assert_eq!(
            buckets.valid + buckets.expiring_soon + buckets.expired + buckets.uninsured,
            fleet.len() as i64
        );
    }

    #[test]
    fn test_empty_fleet_gives_zeroed_buckets() {
        let buckets = insurance_buckets(&[], today(), 30);
        assert_eq!(buckets.valid, 0);
        assert_eq!(buckets.expiring_soon, 0);
        assert_eq!(buckets.expired, 0);
        assert_eq!(buckets.uninsured, 0);
    }
}
