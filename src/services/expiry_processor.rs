//! Reconciliación de pólizas vencidas
//!
//! Operación batch explícita: se invoca desde su propio endpoint, nunca como
//! efecto colateral de una lectura. La planificación es pura; la ejecución
//! archiva y limpia cada póliza en una transacción por vehículo.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::insurance::InsuranceStatus;
use crate::models::insurance_history::{ArchiveReason, InsuranceHistoryRow};
use crate::models::vehicle::Vehicle;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::insurance_status;
use crate::utils::errors::AppError;

/// Archivado pendiente para un vehículo con póliza vencida
#[derive(Debug)]
pub struct PlannedArchive {
    pub vehicle_id: Uuid,
    pub history_row: InsuranceHistoryRow,
}

/// Decidir qué pólizas archivar. No toca la base de datos: sobre vehículos
/// ya reconciliados devuelve una lista vacía, lo que hace la operación
/// segura de repetir.
pub fn plan_reconciliation(
    vehicles: &[Vehicle],
    today: NaiveDate,
    window_days: i64,
    now: DateTime<Utc>,
) -> Vec<PlannedArchive> {
    let mut planned = Vec::new();

    for vehicle in vehicles {
        let policy = match vehicle.insurance() {
            Some(policy) => policy,
            None => continue,
        };

        let status = insurance_status::classify(Some(policy.end_date), today, window_days);
        if status != InsuranceStatus::Expired {
            continue;
        }

        let history_row = InsuranceHistoryRow::from_policy(
            vehicle,
            policy,
            InsuranceStatus::Expired.as_str(),
            ArchiveReason::Expired,
            now,
        );

        planned.push(PlannedArchive {
            vehicle_id: vehicle.id,
            history_row,
        });
    }

    planned
}

pub struct ExpiryProcessor {
    repository: VehicleRepository,
    window_days: i64,
}

impl ExpiryProcessor {
    pub fn new(pool: PgPool, window_days: i64) -> Self {
        Self {
            repository: VehicleRepository::new(pool),
            window_days,
        }
    }

    /// Ejecutar la reconciliación completa. Devuelve todos los vehículos
    /// activos (con la póliza ya limpiada en memoria donde aplique) y las
    /// filas recién archivadas.
    pub async fn process_expired_insurance(
        &self,
    ) -> Result<(Vec<Vehicle>, Vec<InsuranceHistoryRow>), AppError> {
        let mut vehicles = self.repository.find_all_active().await?;
        let now = Utc::now();
        let today = now.date_naive();

        let planned = plan_reconciliation(&vehicles, today, self.window_days, now);
        if planned.is_empty() {
            log::info!("✅ Reconciliación de seguros: nada que archivar");
            return Ok((vehicles, Vec::new()));
        }

        log::info!("📋 Reconciliación de seguros: {} póliza(s) vencida(s)", planned.len());

        let mut archived = Vec::with_capacity(planned.len());
        for archive in planned {
            self.repository
                .archive_and_clear_insurance(archive.vehicle_id, &archive.history_row)
                .await?;

            log::info!(
                "📋 Póliza {} archivada para vehículo {}",
                archive.history_row.policy_number,
                archive.vehicle_id
            );

            if let Some(vehicle) = vehicles.iter_mut().find(|v| v.id == archive.vehicle_id) {
                vehicle.insurance = None;
            }
            archived.push(archive.history_row);
        }

        Ok((vehicles, archived))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::insurance::Insurance;
    use chrono::Duration;
    use rust_decimal::Decimal;
    use sqlx::types::Json;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn now() -> DateTime<Utc> {
        today().and_hms_opt(9, 30, 0).unwrap().and_utc()
    }

    fn policy(end_date: NaiveDate) -> Insurance {
        Insurance {
            policy_number: "POL/2024-001".to_string(),
            insurer: "Acme Assurance".to_string(),
            policy_type: "Comprehensive".to_string(),
            start_date: end_date - Duration::days(365),
            end_date,
            issue_date: end_date - Duration::days(365),
            premium_amount: Decimal::from(12500),
            payment_mode: "Yearly".to_string(),
            has_insurance: true,
        }
    }

    fn vehicle(insurance: Option<Insurance>) -> Vehicle {
        Vehicle {
            id: Uuid::new_v4(),
            make: "Maruti".to_string(),
            model: "Swift".to_string(),
            registration_number: "MH12AB1234".to_string(),
            purchase_date: NaiveDate::from_ymd_opt(2022, 3, 1).unwrap(),
            purchase_price: Decimal::from(650_000),
            fuel_type: "Petrol".to_string(),
            engine_number: "K12MN48812".to_string(),
            chassis_number: "MA3EYD32S00512345".to_string(),
            kilometers: Decimal::from(42_000),
            color: "White".to_string(),
            owner: "Asha Patil".to_string(),
            phone: "9876543210".to_string(),
            address: "14 MG Road, Pune 411001".to_string(),
            insurance: insurance.map(Json),
            deleted_at: None,
            created_at: now(),
        }
    }

    #[test]
    fn test_expired_policy_is_planned_with_history_row() {
        let yesterday = today() - Duration::days(1);
        let vehicles = vec![vehicle(Some(policy(yesterday)))];

        let planned = plan_reconciliation(&vehicles, today(), 30, now());

        assert_eq!(planned.len(), 1);
        let row = &planned[0].history_row;
        assert!(row.id.starts_with(&format!("{}-expired-", vehicles[0].id)));
        assert_eq!(row.end_date, yesterday);
        assert_eq!(row.status, "expired");
        assert_eq!(row.vehicle_id, vehicles[0].id);
        assert_eq!(row.registration_number, "MH12AB1234");
    }

    #[test]
    fn test_active_policy_is_not_planned() {
        let vehicles = vec![
            vehicle(Some(policy(today() + Duration::days(3)))),
            vehicle(Some(policy(today() + Duration::days(200)))),
        ];

        let planned = plan_reconciliation(&vehicles, today(), 5, now());
        assert!(planned.is_empty());
    }

    #[test]
    fn test_policy_ending_today_is_not_planned() {
        let vehicles = vec![vehicle(Some(policy(today())))];
        let planned = plan_reconciliation(&vehicles, today(), 30, now());
        assert!(planned.is_empty());
    }

    #[test]
    fn test_uninsured_vehicles_pass_through() {
        let vehicles = vec![vehicle(None), vehicle(None)];
        let planned = plan_reconciliation(&vehicles, today(), 30, now());
        assert!(planned.is_empty());
    }

    // Tras limpiar las pólizas vencidas, una segunda pasada no planifica nada.
    #[test]
    fn test_second_pass_plans_nothing() {
        let yesterday = today() - Duration::days(1);
        let mut vehicles = vec![vehicle(Some(policy(yesterday))), vehicle(None)];

        let first = plan_reconciliation(&vehicles, today(), 30, now());
        assert_eq!(first.len(), 1);

        for archive in &first {
            if let Some(v) = vehicles.iter_mut().find(|v| v.id == archive.vehicle_id) {
                v.insurance = None;
            }
        }

        let second = plan_reconciliation(&vehicles, today(), 30, now());
        assert!(second.is_empty());
    }

    #[test]
    fn test_mixed_fleet_only_expired_planned() {
        let expired_a = vehicle(Some(policy(today() - Duration::days(10))));
        let expired_b = vehicle(Some(policy(today() - Duration::days(1))));
        let valid = vehicle(Some(policy(today() + Duration::days(90))));
        let uninsured = vehicle(None);
        let expired_ids = [expired_a.id, expired_b.id];

        let vehicles = vec![expired_a, valid, expired_b, uninsured];
        let planned = plan_reconciliation(&vehicles, today(), 30, now());

        assert_eq!(planned.len(), 2);
        for archive in &planned {
            assert!(expired_ids.contains(&archive.vehicle_id));
        }
    }
}
