use crate::dto::common::ApiResponse;
use crate::dto::maintenance_dto::{
    CreateMaintenanceRequest, ListMaintenanceQuery, UpdateMaintenanceRequest,
};
use crate::models::maintenance::{MaintenanceRecord, MAINTENANCE_STATUSES};
use crate::repositories::maintenance_repository::MaintenanceRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;
use crate::utils::pagination::{Paginated, PaginationParams};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct MaintenanceController {
    maintenance: MaintenanceRepository,
    vehicles: VehicleRepository,
}

impl MaintenanceController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            maintenance: MaintenanceRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool),
        }
    }

    fn check_status(status: &str) -> Result<(), AppError> {
        if !MAINTENANCE_STATUSES.contains(&status) {
            return Err(AppError::BadRequest(format!(
                "Maintenance status must be one of {:?}",
                MAINTENANCE_STATUSES
            )));
        }
        Ok(())
    }

    pub async fn create(
        &self,
        request: CreateMaintenanceRequest,
    ) -> Result<ApiResponse<MaintenanceRecord>, AppError> {
        request.validate()?;

        let status = request.status.unwrap_or_else(|| "scheduled".to_string());
        Self::check_status(&status)?;

        self.vehicles
            .find_by_id(request.vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        let record = self
            .maintenance
            .create(
                request.vehicle_id,
                request.service_date,
                request.service_type.trim().to_string(),
                request.description.trim().to_string(),
                request.cost,
                request.odometer_reading_before,
                request.odometer_reading_after,
                status,
            )
            .await?;

        log::info!("🔧 Mantenimiento registrado para vehículo {}", request.vehicle_id);

        Ok(ApiResponse::success_with_message(
            record,
            "Maintenance record created".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<MaintenanceRecord, AppError> {
        self.maintenance
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Maintenance record not found".to_string()))
    }

    pub async fn list(
        &self,
        query: ListMaintenanceQuery,
    ) -> Result<Paginated<MaintenanceRecord>, AppError> {
        if let Some(status) = &query.status {
            Self::check_status(status)?;
        }

        let params = PaginationParams {
            page: query.page,
            per_page: query.per_page,
        };

        let records = self
            .maintenance
            .find_filtered(
                query.vehicle_id,
                query.status.clone(),
                params.per_page(),
                params.offset(),
            )
            .await?;
        let total = self
            .maintenance
            .count_filtered(query.vehicle_id, query.status)
            .await?;

        Ok(Paginated::new(records, total, &params))
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateMaintenanceRequest,
    ) -> Result<ApiResponse<MaintenanceRecord>, AppError> {
        request.validate()?;

        if let Some(status) = &request.status {
            Self::check_status(status)?;
        }

        // Si llegan ambas lecturas, mantener la coherencia del odómetro
        if let (Some(before), Some(after)) =
            (request.odometer_reading_before, request.odometer_reading_after)
        {
            if after < before {
                return Err(AppError::BadRequest(
                    "Odometer reading after service cannot be lower than before".to_string(),
                ));
            }
        }

        let record = self
            .maintenance
            .update(
                id,
                request.service_date,
                request.service_type,
                request.description,
                request.cost,
                request.odometer_reading_before,
                request.odometer_reading_after,
                request.status,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            record,
            "Maintenance record updated".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.maintenance.delete(id).await
    }
}
