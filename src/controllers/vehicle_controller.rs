use crate::dto::common::ApiResponse;
use crate::dto::vehicle_dto::{
    ListVehiclesQuery, PatchVehicleRequest, RegisterVehicleRequest, UpdateVehicleRequest,
    VehicleResponse,
};
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;
use crate::utils::pagination::{Paginated, PaginationParams};
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct VehicleController {
    repository: VehicleRepository,
    window_days: i64,
}

impl VehicleController {
    pub fn new(pool: PgPool, window_days: i64) -> Self {
        Self {
            repository: VehicleRepository::new(pool),
            window_days,
        }
    }

    fn to_response(&self, vehicle: crate::models::vehicle::Vehicle) -> VehicleResponse {
        VehicleResponse::from_vehicle(vehicle, Utc::now().date_naive(), self.window_days)
    }

    pub async fn register(
        &self,
        request: RegisterVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request.validate()?;

        // Matrícula única entre los vehículos activos
        let registration_number = request.registration_number.trim().to_string();
        if self
            .repository
            .registration_number_exists(&registration_number, None)
            .await?
        {
            return Err(AppError::Conflict(
                "A vehicle with this registration number already exists".to_string(),
            ));
        }

        let vehicle = self.repository.create(request.into()).await?;
        log::info!("🚗 Vehículo registrado: {}", vehicle.registration_number);

        Ok(ApiResponse::success_with_message(
            self.to_response(vehicle),
            "Vehicle registered successfully".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<VehicleResponse, AppError> {
        let vehicle = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        Ok(self.to_response(vehicle))
    }

    pub async fn list(
        &self,
        query: ListVehiclesQuery,
    ) -> Result<Paginated<VehicleResponse>, AppError> {
        let include_deleted = query.include_deleted.unwrap_or(false);
        let params = PaginationParams {
            page: query.page,
            per_page: query.per_page,
        };

        let vehicles = self
            .repository
            .find_page(include_deleted, params.per_page(), params.offset())
            .await?;
        let total = self.repository.count(include_deleted).await?;

        let items = vehicles.into_iter().map(|v| self.to_response(v)).collect();
        Ok(Paginated::new(items, total, &params))
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request.validate()?;

        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        let registration_number = request.registration_number.trim().to_string();
        if self
            .repository
            .registration_number_exists(&registration_number, Some(id))
            .await?
        {
            return Err(AppError::Conflict(
                "A vehicle with this registration number already exists".to_string(),
            ));
        }

        let vehicle = self.repository.update(id, request.into()).await?;

        Ok(ApiResponse::success_with_message(
            self.to_response(vehicle),
            "Vehicle updated successfully".to_string(),
        ))
    }

    pub async fn patch(
        &self,
        id: Uuid,
        request: PatchVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request.validate()?;

        let vehicle = self
            .repository
            .patch(
                id,
                request.kilometers,
                request.color,
                request.owner,
                request.phone,
                request.address,
                request.fuel_type,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            self.to_response(vehicle),
            "Vehicle updated successfully".to_string(),
        ))
    }

    pub async fn soft_delete(&self, id: Uuid) -> Result<ApiResponse<VehicleResponse>, AppError> {
        let vehicle = self.repository.soft_delete(id).await?;
        log::info!("🗑️ Vehículo {} marcado como borrado", id);

        Ok(ApiResponse::success_with_message(
            self.to_response(vehicle),
            "Vehicle deleted".to_string(),
        ))
    }

    pub async fn restore(&self, id: Uuid) -> Result<ApiResponse<VehicleResponse>, AppError> {
        let vehicle = self.repository.restore(id).await?;
        log::info!("♻️ Vehículo {} restaurado", id);

        Ok(ApiResponse::success_with_message(
            self.to_response(vehicle),
            "Vehicle restored".to_string(),
        ))
    }

    pub async fn hard_delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        self.repository.hard_delete(id).await?;
        log::warn!("🗑️ Vehículo {} eliminado definitivamente", id);
        Ok(())
    }
}
