//! Transformación de pólizas vivas a filas de histórico
//!
//! La vista de histórico muestra una fila uniforme por póliza: las vivas se
//! derivan aquí de los vehículos, las superadas salen de la tabla
//! insurance_history. El campo status lleva siempre la etiqueta clasificada.

use chrono::{DateTime, NaiveDate, Utc};

use crate::models::insurance_history::InsuranceHistoryRow;
use crate::models::vehicle::Vehicle;
use crate::services::insurance_status;

/// Una fila por vehículo con póliza presente, ordenadas de más reciente a
/// más antigua por fecha de emisión.
pub fn transform_to_history_rows(
    vehicles: &[Vehicle],
    today: NaiveDate,
    window_days: i64,
    now: DateTime<Utc>,
) -> Vec<InsuranceHistoryRow> {
    let mut rows: Vec<InsuranceHistoryRow> = vehicles
        .iter()
        .filter_map(|vehicle| {
            let policy = vehicle.insurance()?;
            let status = insurance_status::classify(Some(policy.end_date), today, window_days);

            Some(InsuranceHistoryRow {
                id: format!("{}-current", vehicle.id),
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
                status: status.as_str().to_string(),
                archived_at: now,
            })
        })
        .collect();

    rows.sort_by(|a, b| b.issue_date.cmp(&a.issue_date));
    rows
}

/// Vista combinada: pólizas vivas primero (recién derivadas), luego las
/// archivadas, ambas de más reciente a más antigua.
pub fn merge_history(
    live_rows: Vec<InsuranceHistoryRow>,
    mut archived_rows: Vec<InsuranceHistoryRow>,
) -> Vec<InsuranceHistoryRow> {
    archived_rows.sort_by(|a, b| {
        b.archived_at
            .cmp(&a.archived_at)
            .then(b.issue_date.cmp(&a.issue_date))
    });

    let mut merged = live_rows;
    merged.extend(archived_rows);
    merged
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

    fn now() -> DateTime<Utc> {
        today().and_hms_opt(12, 0, 0).unwrap().and_utc()
    }

    fn vehicle_with_policy(issue_date: NaiveDate, end_date: NaiveDate) -> Vehicle {
        Vehicle {
            id: Uuid::new_v4(),
            make: "Tata".to_string(),
            model: "Nexon".to_string(),
            registration_number: "KA05MN6789".to_string(),
            purchase_date: NaiveDate::from_ymd_opt(2021, 7, 15).unwrap(),
            purchase_price: Decimal::from(900_000),
            fuel_type: "Diesel".to_string(),
            engine_number: "D15TN99120".to_string(),
            chassis_number: "MAT62533A8H123456".to_string(),
            kilometers: Decimal::from(61_500),
            color: "Blue".to_string(),
            owner: "Ravi Kumar".to_string(),
            phone: "9123456780".to_string(),
            address: "7 Residency Road, Bengaluru".to_string(),
            insurance: Some(Json(Insurance {
                policy_number: "KA/POL-7788".to_string(),
                insurer: "United Cover".to_string(),
                policy_type: "Third Party".to_string(),
                start_date: issue_date,
                end_date,
                issue_date,
                premium_amount: Decimal::from(8900),
                payment_mode: "Monthly".to_string(),
                has_insurance: true,
            })),
            deleted_at: None,
            created_at: now(),
        }
    }

    fn uninsured_vehicle() -> Vehicle {
        let mut vehicle = vehicle_with_policy(today(), today());
        vehicle.insurance = None;
        vehicle
    }

    #[test]
    fn test_one_row_per_insured_vehicle() {
        let vehicles = vec![
            vehicle_with_policy(today() - Duration::days(300), today() + Duration::days(65)),
            uninsured_vehicle(),
            vehicle_with_policy(today() - Duration::days(100), today() + Duration::days(10)),
        ];

        let rows = transform_to_history_rows(&vehicles, today(), 30, now());
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_status_is_classified_label() {
        let vehicles = vec![
            vehicle_with_policy(today() - Duration::days(400), today() - Duration::days(2)),
            vehicle_with_policy(today() - Duration::days(200), today() + Duration::days(10)),
            vehicle_with_policy(today() - Duration::days(100), today() + Duration::days(300)),
        ];

        let rows = transform_to_history_rows(&vehicles, today(), 30, now());
        let statuses: Vec<&str> = rows.iter().map(|r| r.status.as_str()).collect();

        assert!(statuses.contains(&"expired"));
        assert!(statuses.contains(&"expiring-soon"));
        assert!(statuses.contains(&"valid"));
    }

    #[test]
    fn test_rows_sorted_newest_issue_first() {
        let oldest = vehicle_with_policy(today() - Duration::days(900), today() + Duration::days(30));
        let newest = vehicle_with_policy(today() - Duration::days(10), today() + Duration::days(355));
        let middle = vehicle_with_policy(today() - Duration::days(400), today() + Duration::days(100));

        let vehicles = vec![oldest.clone(), newest.clone(), middle.clone()];
        let rows = transform_to_history_rows(&vehicles, today(), 30, now());

        assert_eq!(rows[0].vehicle_id, newest.id);
        assert_eq!(rows[1].vehicle_id, middle.id);
        assert_eq!(rows[2].vehicle_id, oldest.id);
    }

    #[test]
    fn test_merge_puts_live_rows_before_archived() {
        let live = transform_to_history_rows(
            &[vehicle_with_policy(today() - Duration::days(5), today() + Duration::days(360))],
            today(),
            30,
            now(),
        );
        let live_id = live[0].id.clone();

        let mut old_row = live[0].clone();
        old_row.id = format!("{}-expired-123", old_row.vehicle_id);
        old_row.status = "expired".to_string();
        old_row.archived_at = now() - Duration::days(40);

        let mut older_row = old_row.clone();
        older_row.id = format!("{}-expired-99", older_row.vehicle_id);
        older_row.archived_at = now() - Duration::days(400);

        let merged = merge_history(live, vec![older_row.clone(), old_row.clone()]);

        assert_eq!(merged.len(), 3);
        assert_eq!(merged[0].id, live_id);
        assert_eq!(merged[1].id, old_row.id);
        assert_eq!(merged[2].id, older_row.id);
    }
}
