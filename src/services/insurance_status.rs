//! Clasificación de estado de pólizas
//!
//! Función pura que mapea la fecha de fin de una póliza a una cubeta de
//! estado con granularidad de día. La ventana de preaviso es un único valor
//! configurable (EXPIRY_WARNING_DAYS) para toda la aplicación.

use chrono::{Duration, NaiveDate};

use crate::models::insurance::InsuranceStatus;
use crate::models::vehicle::Vehicle;

/// Ventana de preaviso por defecto, en días
pub const DEFAULT_EXPIRY_WARNING_DAYS: i64 = 30;

/// Clasificar una fecha de fin de póliza respecto a "hoy".
///
/// - `Expired` si la fecha es estrictamente anterior a hoy.
/// - `ExpiringSoon` si cae entre hoy y hoy + `window_days`, ambos inclusive.
/// - `Valid` si queda más allá de la ventana.
/// - `Unknown` si no hay fecha.
pub fn classify(end_date: Option<NaiveDate>, today: NaiveDate, window_days: i64) -> InsuranceStatus {
    let end = match end_date {
        Some(end) => end,
        None => return InsuranceStatus::Unknown,
    };

    if end < today {
        InsuranceStatus::Expired
    } else if end <= today + Duration::days(window_days) {
        InsuranceStatus::ExpiringSoon
    } else {
        InsuranceStatus::Valid
    }
}

/// Variante sobre el valor crudo que llega de formularios o registros viejos.
/// Cadenas vacías, el centinela "-" y fechas no parseables cuentan como Unknown.
pub fn classify_str(end_date: &str, today: NaiveDate, window_days: i64) -> InsuranceStatus {
    let trimmed = end_date.trim();
    if trimmed.is_empty() || trimmed == "-" {
        return InsuranceStatus::Unknown;
    }

    match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        Ok(date) => classify(Some(date), today, window_days),
        Err(_) => InsuranceStatus::Unknown,
    }
}

/// Estado de la póliza embebida de un vehículo, si la tiene
pub fn classify_vehicle(vehicle: &Vehicle, today: NaiveDate, window_days: i64) -> Option<InsuranceStatus> {
    vehicle
        .insurance_end_date()
        .map(|end| classify(Some(end), today, window_days))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn test_expired_strictly_before_today() {
        let yesterday = today() - Duration::days(1);
        assert_eq!(classify(Some(yesterday), today(), 30), InsuranceStatus::Expired);
    }

    #[test]
    fn test_today_is_expiring_soon_not_expired() {
        assert_eq!(classify(Some(today()), today(), 30), InsuranceStatus::ExpiringSoon);
    }

    #[test]
    fn test_window_boundary_inclusive() {
        let edge = today() + Duration::days(30);
        assert_eq!(classify(Some(edge), today(), 30), InsuranceStatus::ExpiringSoon);

        let beyond = today() + Duration::days(31);
        assert_eq!(classify(Some(beyond), today(), 30), InsuranceStatus::Valid);
    }

    #[test]
    fn test_three_days_out_with_five_day_window() {
        let end = today() + Duration::days(3);
        assert_eq!(classify(Some(end), today(), 5), InsuranceStatus::ExpiringSoon);
    }

    #[test]
    fn test_missing_date_is_unknown() {
        assert_eq!(classify(None, today(), 30), InsuranceStatus::Unknown);
    }

    // La clasificación particiona la línea de fechas: cada fecha cae en
    // exactamente una cubeta para un "hoy" y una ventana fijos.
    #[test]
    fn test_partition_is_total_and_non_overlapping() {
        let window = 30;
        for offset in -60..=60 {
            let end = today() + Duration::days(offset);
            let status = classify(Some(end), today(), window);
            let expected = if offset < 0 {
                InsuranceStatus::Expired
            } else if offset <= window {
                InsuranceStatus::ExpiringSoon
            } else {
                InsuranceStatus::Valid
            };
            assert_eq!(status, expected, "offset {}", offset);
        }
    }

    #[test]
    fn test_classify_str_sentinels_and_garbage() {
        assert_eq!(classify_str("-", today(), 30), InsuranceStatus::Unknown);
        assert_eq!(classify_str("", today(), 30), InsuranceStatus::Unknown);
        assert_eq!(classify_str("  ", today(), 30), InsuranceStatus::Unknown);
        assert_eq!(classify_str("not-a-date", today(), 30), InsuranceStatus::Unknown);
        assert_eq!(classify_str("2025-13-45", today(), 30), InsuranceStatus::Unknown);
    }

    #[test]
    fn test_classify_str_valid_date() {
        assert_eq!(classify_str("2030-01-01", today(), 30), InsuranceStatus::Valid);
        assert_eq!(classify_str("2020-01-01", today(), 30), InsuranceStatus::Expired);
    }
}
