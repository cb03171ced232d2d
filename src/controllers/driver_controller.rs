use crate::dto::common::ApiResponse;
use crate::dto::driver_dto::{
    AssignVehiclesRequest, CreateDriverRequest, DriverResponse, UpdateDriverRequest,
};
use crate::models::driver::DRIVER_STATUSES;
use crate::repositories::driver_repository::DriverRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct DriverController {
    drivers: DriverRepository,
    vehicles: VehicleRepository,
}

impl DriverController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            drivers: DriverRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool),
        }
    }

    fn check_status(status: &str) -> Result<(), AppError> {
        if !DRIVER_STATUSES.contains(&status) {
            return Err(AppError::BadRequest(format!(
                "Driver status must be one of {:?}",
                DRIVER_STATUSES
            )));
        }
        Ok(())
    }

    pub async fn create(
        &self,
        request: CreateDriverRequest,
    ) -> Result<ApiResponse<DriverResponse>, AppError> {
        request.validate()?;

        let status = request.status.unwrap_or_else(|| "active".to_string());
        Self::check_status(&status)?;

        if self
            .drivers
            .license_number_exists(request.license_number.trim())
            .await?
        {
            return Err(AppError::Conflict(
                "A driver with this license number already exists".to_string(),
            ));
        }

        let driver = self
            .drivers
            .create(
                request.name.trim().to_string(),
                request.license_number.trim().to_string(),
                request.phone.trim().to_string(),
                request.address.trim().to_string(),
                status,
            )
            .await?;

        log::info!("🪪 Conductor registrado: {}", driver.license_number);

        let live_ids = self.vehicles.live_vehicle_ids().await?;
        Ok(ApiResponse::success_with_message(
            DriverResponse::from_driver(driver, &live_ids),
            "Driver registered successfully".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<DriverResponse, AppError> {
        let driver = self
            .drivers
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Driver not found".to_string()))?;

        let live_ids = self.vehicles.live_vehicle_ids().await?;
        Ok(DriverResponse::from_driver(driver, &live_ids))
    }

    pub async fn list(&self, include_deleted: bool) -> Result<Vec<DriverResponse>, AppError> {
        let drivers = self.drivers.find_all(include_deleted).await?;
        let live_ids = self.vehicles.live_vehicle_ids().await?;

        Ok(drivers
            .into_iter()
            .map(|d| DriverResponse::from_driver(d, &live_ids))
            .collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateDriverRequest,
    ) -> Result<ApiResponse<DriverResponse>, AppError> {
        request.validate()?;

        if let Some(status) = &request.status {
            Self::check_status(status)?;
        }

        let driver = self
            .drivers
            .update(
                id,
                request.name,
                request.license_number,
                request.phone,
                request.address,
                request.status,
            )
            .await?;

        let live_ids = self.vehicles.live_vehicle_ids().await?;
        Ok(ApiResponse::success_with_message(
            DriverResponse::from_driver(driver, &live_ids),
            "Driver updated successfully".to_string(),
        ))
    }

    pub async fn set_assignments(
        &self,
        id: Uuid,
        request: AssignVehiclesRequest,
    ) -> Result<ApiResponse<DriverResponse>, AppError> {
        let driver = self.drivers.set_assignments(id, request.vehicle_ids).await?;

        let live_ids = self.vehicles.live_vehicle_ids().await?;
        Ok(ApiResponse::success_with_message(
            DriverResponse::from_driver(driver, &live_ids),
            "Assignments updated".to_string(),
        ))
    }

    pub async fn soft_delete(&self, id: Uuid) -> Result<ApiResponse<DriverResponse>, AppError> {
        let driver = self.drivers.soft_delete(id).await?;

        let live_ids = self.vehicles.live_vehicle_ids().await?;
        Ok(ApiResponse::success_with_message(
            DriverResponse::from_driver(driver, &live_ids),
            "Driver deleted".to_string(),
        ))
    }

    pub async fn restore(&self, id: Uuid) -> Result<ApiResponse<DriverResponse>, AppError> {
        let driver = self.drivers.restore(id).await?;

        let live_ids = self.vehicles.live_vehicle_ids().await?;
        Ok(ApiResponse::success_with_message(
            DriverResponse::from_driver(driver, &live_ids),
            "Driver restored".to_string(),
        ))
    }

    pub async fn hard_delete(&self, id: Uuid) -> Result<(), AppError> {
        self.drivers
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Driver not found".to_string()))?;

        self.drivers.hard_delete(id).await
    }
}
