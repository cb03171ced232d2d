use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::insurance::Insurance;
use crate::models::vehicle::{NewVehicle, Vehicle};
use crate::services::insurance_status;

// Request para registrar un vehículo. Todos los campos son obligatorios;
// las reglas por campo viven en utils::validation.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterVehicleRequest {
    #[validate(length(min = 2, max = 100))]
    pub make: String,

    #[validate(length(min = 1, max = 100))]
    pub model: String,

    #[validate(custom = "crate::utils::validation::validate_registration_number")]
    pub registration_number: String,

    #[validate(custom = "crate::utils::validation::validate_purchase_date")]
    pub purchase_date: NaiveDate,

    #[validate(custom = "crate::utils::validation::validate_purchase_price")]
    pub purchase_price: Decimal,

    #[validate(custom = "crate::utils::validation::validate_fuel_type")]
    pub fuel_type: String,

    #[validate(custom = "crate::utils::validation::validate_engine_number")]
    pub engine_number: String,

    #[validate(custom = "crate::utils::validation::validate_chassis_number")]
    pub chassis_number: String,

    #[validate(custom = "crate::utils::validation::validate_kilometers")]
    pub kilometers: Decimal,

    #[validate(length(min = 2, max = 50))]
    pub color: String,

    #[validate(length(min = 2, max = 100))]
    pub owner: String,

    #[validate(custom = "crate::utils::validation::validate_phone")]
    pub phone: String,

    #[validate(custom = "crate::utils::validation::validate_address")]
    pub address: String,
}

impl From<RegisterVehicleRequest> for NewVehicle {
    fn from(request: RegisterVehicleRequest) -> Self {
        Self {
            make: request.make.trim().to_string(),
            model: request.model.trim().to_string(),
            registration_number: request.registration_number.trim().to_string(),
            purchase_date: request.purchase_date,
            purchase_price: request.purchase_price,
            fuel_type: request.fuel_type.trim().to_string(),
            engine_number: request.engine_number.trim().to_string(),
            chassis_number: request.chassis_number.trim().to_string(),
            kilometers: request.kilometers,
            color: request.color.trim().to_string(),
            owner: request.owner.trim().to_string(),
            phone: request.phone.trim().to_string(),
            address: request.address.trim().to_string(),
        }
    }
}

// Request para actualización completa (PUT) - mismas reglas que el registro
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 2, max = 100))]
    pub make: String,

    #[validate(length(min = 1, max = 100))]
    pub model: String,

    #[validate(custom = "crate::utils::validation::validate_registration_number")]
    pub registration_number: String,

    #[validate(custom = "crate::utils::validation::validate_purchase_date")]
    pub purchase_date: NaiveDate,

    #[validate(custom = "crate::utils::validation::validate_purchase_price")]
    pub purchase_price: Decimal,

    #[validate(custom = "crate::utils::validation::validate_fuel_type")]
    pub fuel_type: String,

    #[validate(custom = "crate::utils::validation::validate_engine_number")]
    pub engine_number: String,

    #[validate(custom = "crate::utils::validation::validate_chassis_number")]
    pub chassis_number: String,

    #[validate(custom = "crate::utils::validation::validate_kilometers")]
    pub kilometers: Decimal,

    #[validate(length(min = 2, max = 50))]
    pub color: String,

    #[validate(length(min = 2, max = 100))]
    pub owner: String,

    #[validate(custom = "crate::utils::validation::validate_phone")]
    pub phone: String,

    #[validate(custom = "crate::utils::validation::validate_address")]
    pub address: String,
}

impl From<UpdateVehicleRequest> for NewVehicle {
    fn from(request: UpdateVehicleRequest) -> Self {
        Self {
            make: request.make.trim().to_string(),
            model: request.model.trim().to_string(),
            registration_number: request.registration_number.trim().to_string(),
            purchase_date: request.purchase_date,
            purchase_price: request.purchase_price,
            fuel_type: request.fuel_type.trim().to_string(),
            engine_number: request.engine_number.trim().to_string(),
            chassis_number: request.chassis_number.trim().to_string(),
            kilometers: request.kilometers,
            color: request.color.trim().to_string(),
            owner: request.owner.trim().to_string(),
            phone: request.phone.trim().to_string(),
            address: request.address.trim().to_string(),
        }
    }
}

// Request para actualización parcial (PATCH) - solo atributos mutables
#[derive(Debug, Deserialize, Validate)]
pub struct PatchVehicleRequest {
    #[validate(custom = "crate::utils::validation::validate_kilometers")]
    pub kilometers: Option<Decimal>,

    #[validate(length(min = 2, max = 50))]
    pub color: Option<String>,

    #[validate(length(min = 2, max = 100))]
    pub owner: Option<String>,

    #[validate(custom = "crate::utils::validation::validate_phone")]
    pub phone: Option<String>,

    #[validate(custom = "crate::utils::validation::validate_address")]
    pub address: Option<String>,

    #[validate(custom = "crate::utils::validation::validate_fuel_type")]
    pub fuel_type: Option<String>,
}

// Query params del listado
#[derive(Debug, Default, Deserialize)]
pub struct ListVehiclesQuery {
    pub include_deleted: Option<bool>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

// Response de vehículo con el estado de póliza ya clasificado
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
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
    pub insurance: Option<Insurance>,
    pub insurance_status: Option<String>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl VehicleResponse {
    /// El estado se deriva en el servidor; los consumidores no re-clasifican.
    pub fn from_vehicle(vehicle: Vehicle, today: NaiveDate, window_days: i64) -> Self {
        let insurance_status = insurance_status::classify_vehicle(&vehicle, today, window_days)
            .map(|status| status.as_str().to_string());

        Self {
            id: vehicle.id,
            make: vehicle.make,
            model: vehicle.model,
            registration_number: vehicle.registration_number,
            purchase_date: vehicle.purchase_date,
            purchase_price: vehicle.purchase_price,
            fuel_type: vehicle.fuel_type,
            engine_number: vehicle.engine_number,
            chassis_number: vehicle.chassis_number,
            kilometers: vehicle.kilometers,
            color: vehicle.color,
            owner: vehicle.owner,
            phone: vehicle.phone,
            address: vehicle.address,
            insurance: vehicle.insurance.map(|j| j.0),
            insurance_status,
            deleted_at: vehicle.deleted_at,
            created_at: vehicle.created_at,
        }
    }
}
