use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::driver::Driver;

// Request para dar de alta un conductor
#[derive(Debug, Deserialize, Validate)]
pub struct CreateDriverRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: String,

    #[validate(length(min = 5, max = 50))]
    pub license_number: String,

    #[validate(custom = "crate::utils::validation::validate_phone")]
    pub phone: String,

    #[validate(custom = "crate::utils::validation::validate_address")]
    pub address: String,

    pub status: Option<String>,
}

// Request para actualizar un conductor
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateDriverRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: Option<String>,

    #[validate(length(min = 5, max = 50))]
    pub license_number: Option<String>,

    #[validate(custom = "crate::utils::validation::validate_phone")]
    pub phone: Option<String>,

    #[validate(custom = "crate::utils::validation::validate_address")]
    pub address: Option<String>,

    pub status: Option<String>,
}

// Request para reemplazar la lista de vehículos asignados.
// No se exige integridad referencial: los ids huérfanos se filtran al leer.
#[derive(Debug, Deserialize)]
pub struct AssignVehiclesRequest {
    pub vehicle_ids: Vec<Uuid>,
}

// Query params del listado de conductores
#[derive(Debug, Default, Deserialize)]
pub struct ListDriversQuery {
    pub include_deleted: Option<bool>,
}

// Response de conductor con asignaciones ya depuradas
#[derive(Debug, Serialize)]
pub struct DriverResponse {
    pub id: Uuid,
    pub name: String,
    pub license_number: String,
    pub phone: String,
    pub address: String,
    pub status: String,
    pub assigned_vehicle_ids: Vec<Uuid>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl DriverResponse {
    /// `live_vehicle_ids` son los ids de vehículos activos; las asignaciones
    /// que no aparecen ahí se descartan.
    pub fn from_driver(driver: Driver, live_vehicle_ids: &[Uuid]) -> Self {
        let assigned_vehicle_ids = driver
            .assigned_vehicle_ids
            .into_iter()
            .filter(|id| live_vehicle_ids.contains(id))
            .collect();

        Self {
            id: driver.id,
            name: driver.name,
            license_number: driver.license_number,
            phone: driver.phone,
            address: driver.address,
            status: driver.status,
            assigned_vehicle_ids,
            deleted_at: driver.deleted_at,
            created_at: driver.created_at,
        }
    }
}
