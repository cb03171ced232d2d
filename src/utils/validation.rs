//! Utilidades de validación
//!
//! Este módulo contiene las reglas de validación por campo para los
//! formularios de registro de vehículos, seguros y conductores.

use chrono::{NaiveDate, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use validator::ValidationError;

/// Precio mínimo de compra aceptado para registrar un vehículo
pub const MIN_PURCHASE_PRICE: u32 = 45_000;

/// Tipos de combustible permitidos
pub const FUEL_TYPES: [&str; 5] = ["Petrol", "Diesel", "Electric", "Hybrid", "CNG"];

lazy_static! {
    static ref PHONE_REGEX: Regex = Regex::new(r"^[0-9]\d{9}$").unwrap();
    static ref POLICY_NUMBER_REGEX: Regex = Regex::new(r"^[A-Z0-9/-]+$").unwrap();
}

fn field_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

/// Validar que un string no esté vacío después de trim
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(field_error("not_empty", "This field is required"));
    }
    Ok(())
}

/// Validar longitud mínima después de trim
pub fn validate_min_length(value: &str, min: usize) -> Result<(), ValidationError> {
    let len = value.trim().chars().count();
    if len < min {
        let mut error = field_error("min_length", "Value is too short");
        error.add_param("min".into(), &min);
        error.add_param("actual".into(), &len);
        return Err(error);
    }
    Ok(())
}

/// Validar número de matriculación (mínimo 5 caracteres)
pub fn validate_registration_number(value: &str) -> Result<(), ValidationError> {
    if value.trim().chars().count() < 5 {
        return Err(field_error(
            "registration_number",
            "Registration number must be at least 5 characters",
        ));
    }
    Ok(())
}

/// Validar número de motor (mínimo 5 caracteres)
pub fn validate_engine_number(value: &str) -> Result<(), ValidationError> {
    if value.trim().chars().count() < 5 {
        return Err(field_error(
            "engine_number",
            "Engine number must be at least 5 characters",
        ));
    }
    Ok(())
}

/// Validar número de chasis (mínimo 10 caracteres)
pub fn validate_chassis_number(value: &str) -> Result<(), ValidationError> {
    if value.trim().chars().count() < 10 {
        return Err(field_error(
            "chassis_number",
            "Chassis number must be at least 10 characters",
        ));
    }
    Ok(())
}

/// Validar teléfono: exactamente 10 dígitos
pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    if !PHONE_REGEX.is_match(value.trim()) {
        let mut error = field_error("phone", "Phone number must be exactly 10 digits");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar dirección (mínimo 10 caracteres)
pub fn validate_address(value: &str) -> Result<(), ValidationError> {
    if value.trim().chars().count() < 10 {
        return Err(field_error(
            "address",
            "Address must be at least 10 characters",
        ));
    }
    Ok(())
}

/// Validar tipo de combustible contra el conjunto permitido
pub fn validate_fuel_type(value: &str) -> Result<(), ValidationError> {
    if !FUEL_TYPES.contains(&value.trim()) {
        let mut error = field_error(
            "fuel_type",
            "Fuel type must be one of Petrol, Diesel, Electric, Hybrid or CNG",
        );
        error.add_param("value".into(), &value.to_string());
        error.add_param("allowed".into(), &FUEL_TYPES);
        return Err(error);
    }
    Ok(())
}

/// Validar precio de compra (mínimo 45000)
pub fn validate_purchase_price(value: &Decimal) -> Result<(), ValidationError> {
    if *value < Decimal::from(MIN_PURCHASE_PRICE) {
        let mut error = field_error(
            "purchase_price",
            "Purchase price must be at least 45000",
        );
        error.add_param("min".into(), &MIN_PURCHASE_PRICE);
        return Err(error);
    }
    Ok(())
}

/// Validar kilometraje (no negativo)
pub fn validate_kilometers(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() {
        return Err(field_error("kilometers", "Kilometers cannot be negative"));
    }
    Ok(())
}

/// Validar fecha de compra: requerida y no futura
pub fn validate_purchase_date(value: &NaiveDate) -> Result<(), ValidationError> {
    let today = Utc::now().date_naive();
    if *value > today {
        let mut error = field_error(
            "purchase_date",
            "Purchase date cannot be in the future",
        );
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar número de póliza: mínimo 5 caracteres, solo [A-Z0-9/-]
pub fn validate_policy_number(value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.chars().count() < 5 || !POLICY_NUMBER_REGEX.is_match(trimmed) {
        let mut error = field_error(
            "policy_number",
            "Policy number must be at least 5 characters using A-Z, 0-9, '/' or '-'",
        );
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar aseguradora (mínimo 2 caracteres)
pub fn validate_insurer(value: &str) -> Result<(), ValidationError> {
    if value.trim().chars().count() < 2 {
        return Err(field_error(
            "insurer",
            "Insurer name must be at least 2 characters",
        ));
    }
    Ok(())
}

/// Validar prima del seguro (estrictamente positiva)
pub fn validate_premium_amount(value: &Decimal) -> Result<(), ValidationError> {
    if *value <= Decimal::ZERO {
        return Err(field_error(
            "premium_amount",
            "Premium amount must be greater than zero",
        ));
    }
    Ok(())
}

/// Validar que un importe sea estrictamente positivo
pub fn validate_positive_amount(value: &Decimal) -> Result<(), ValidationError> {
    if *value <= Decimal::ZERO {
        return Err(field_error("amount", "Amount must be greater than zero"));
    }
    Ok(())
}

/// Validar que un importe no sea negativo
pub fn validate_non_negative_amount(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() {
        return Err(field_error("amount", "Amount cannot be negative"));
    }
    Ok(())
}

/// Validar que la fecha de fin sea estrictamente posterior a la de inicio
pub fn validate_date_order(start: NaiveDate, end: NaiveDate) -> Result<(), ValidationError> {
    if end <= start {
        let mut error = field_error("end_date", "End date must be after start date");
        error.add_param("start_date".into(), &start.to_string());
        error.add_param("end_date".into(), &end.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que la lectura del odómetro no retroceda tras el servicio
pub fn validate_odometer_order(before: Decimal, after: Decimal) -> Result<(), ValidationError> {
    if after < before {
        let mut error = field_error(
            "odometer_reading_after",
            "Odometer reading after service cannot be lower than before",
        );
        error.add_param("before".into(), &before.to_string());
        error.add_param("after".into(), &after.to_string());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_validate_registration_number() {
        assert!(validate_registration_number("MH12AB1234").is_ok());
        assert!(validate_registration_number("AB12").is_err());
    }

    #[test]
    fn test_validate_phone_boundaries() {
        assert!(validate_phone("9876543210").is_ok());
        assert!(validate_phone("987654321").is_err()); // 9 dígitos
        assert!(validate_phone("98765432100").is_err()); // 11 dígitos
        assert!(validate_phone("987654321a").is_err());
    }

    #[test]
    fn test_validate_purchase_price_boundaries() {
        assert!(validate_purchase_price(&Decimal::from_str("45000").unwrap()).is_ok());
        assert!(validate_purchase_price(&Decimal::from_str("44999").unwrap()).is_err());
        assert!(validate_purchase_price(&Decimal::from_str("45000.01").unwrap()).is_ok());
    }

    #[test]
    fn test_validate_kilometers() {
        assert!(validate_kilometers(&Decimal::ZERO).is_ok());
        assert!(validate_kilometers(&Decimal::from_str("-1").unwrap()).is_err());
    }

    #[test]
    fn test_validate_fuel_type() {
        for fuel in FUEL_TYPES {
            assert!(validate_fuel_type(fuel).is_ok());
        }
        assert!(validate_fuel_type("Kerosene").is_err());
        assert!(validate_fuel_type("").is_err());
    }

    #[test]
    fn test_validate_purchase_date_not_future() {
        let today = Utc::now().date_naive();
        assert!(validate_purchase_date(&today).is_ok());
        assert!(validate_purchase_date(&(today - chrono::Duration::days(30))).is_ok());
        assert!(validate_purchase_date(&(today + chrono::Duration::days(1))).is_err());
    }

    #[test]
    fn test_validate_policy_number() {
        assert!(validate_policy_number("POL/2024-001").is_ok());
        assert!(validate_policy_number("AB12").is_err()); // demasiado corto
        assert!(validate_policy_number("pol_2024").is_err()); // charset inválido
    }

    #[test]
    fn test_validate_premium_amount() {
        assert!(validate_premium_amount(&Decimal::from(12500)).is_ok());
        assert!(validate_premium_amount(&Decimal::ZERO).is_err());
        assert!(validate_premium_amount(&Decimal::from_str("-100").unwrap()).is_err());
    }

    #[test]
    fn test_validate_amounts() {
        assert!(validate_positive_amount(&Decimal::from(1)).is_ok());
        assert!(validate_positive_amount(&Decimal::ZERO).is_err());
        assert!(validate_non_negative_amount(&Decimal::ZERO).is_ok());
        assert!(validate_non_negative_amount(&Decimal::from_str("-0.01").unwrap()).is_err());
    }

    #[test]
    fn test_validate_date_order() {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        assert!(validate_date_order(start, end).is_ok());
        assert!(validate_date_order(end, start).is_err());
        assert!(validate_date_order(start, start).is_err());
    }

    #[test]
    fn test_validate_odometer_order() {
        let before = Decimal::from(42000);
        assert!(validate_odometer_order(before, Decimal::from(42150)).is_ok());
        assert!(validate_odometer_order(before, before).is_ok());
        assert!(validate_odometer_order(before, Decimal::from(41000)).is_err());
    }

    #[test]
    fn test_validate_chassis_and_engine_numbers() {
        assert!(validate_chassis_number("MA3EYD32S00").is_ok());
        assert!(validate_chassis_number("SHORT").is_err());
        assert!(validate_engine_number("K15BN12345").is_ok());
        assert!(validate_engine_number("K15").is_err());
    }

    #[test]
    fn test_validate_address() {
        assert!(validate_address("221B Baker Street, Pune").is_ok());
        assert!(validate_address("short").is_err());
    }
}
