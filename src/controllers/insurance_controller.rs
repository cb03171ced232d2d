use crate::dto::common::ApiResponse;
use crate::dto::insurance_dto::{InsuranceRequest, ReconciliationResponse};
use crate::dto::vehicle_dto::VehicleResponse;
use crate::models::insurance_history::{ArchiveReason, InsuranceHistoryRow};
use crate::repositories::insurance_history_repository::InsuranceHistoryRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::expiry_processor::ExpiryProcessor;
use crate::services::history_transformer::{merge_history, transform_to_history_rows};
use crate::services::insurance_status;
use crate::utils::errors::AppError;
use crate::utils::pagination::{paginate_slice, Paginated, PaginationParams};
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct InsuranceController {
    vehicles: VehicleRepository,
    history: InsuranceHistoryRepository,
    processor: ExpiryProcessor,
    window_days: i64,
}

impl InsuranceController {
    pub fn new(pool: PgPool, window_days: i64) -> Self {
        Self {
            vehicles: VehicleRepository::new(pool.clone()),
            history: InsuranceHistoryRepository::new(pool.clone()),
            processor: ExpiryProcessor::new(pool, window_days),
            window_days,
        }
    }

    /// Alta o reemplazo de la póliza de un vehículo. Si ya había una póliza,
    /// la anterior queda archivada en el histórico dentro de la misma
    /// transacción que escribe la nueva.
    pub async fn set_insurance(
        &self,
        vehicle_id: Uuid,
        request: InsuranceRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request.validate()?;

        let vehicle = self
            .vehicles
            .find_by_id(vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        if vehicle.is_deleted() {
            return Err(AppError::BadRequest(
                "Cannot set insurance on a deleted vehicle".to_string(),
            ));
        }

        let now = Utc::now();
        let new_policy = request.into_insurance();

        let updated = match vehicle.insurance() {
            Some(previous) => {
                let status =
                    insurance_status::classify(Some(previous.end_date), now.date_naive(), self.window_days);
                let row = InsuranceHistoryRow::from_policy(
                    &vehicle,
                    previous,
                    status.as_str(),
                    ArchiveReason::Replaced,
                    now,
                );
                log::info!(
                    "📋 Póliza {} reemplazada en vehículo {}",
                    previous.policy_number,
                    vehicle_id
                );
                self.vehicles
                    .archive_and_replace_insurance(vehicle_id, &row, &new_policy)
                    .await?
            }
            None => self.vehicles.set_insurance(vehicle_id, &new_policy).await?,
        };

        Ok(ApiResponse::success_with_message(
            VehicleResponse::from_vehicle(updated, now.date_naive(), self.window_days),
            "Insurance saved successfully".to_string(),
        ))
    }

    /// Quitar la póliza sin archivarla
    pub async fn clear_insurance(
        &self,
        vehicle_id: Uuid,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        self.vehicles
            .find_by_id(vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        let vehicle = self.vehicles.clear_insurance(vehicle_id).await?;

        Ok(ApiResponse::success_with_message(
            VehicleResponse::from_vehicle(vehicle, Utc::now().date_naive(), self.window_days),
            "Insurance removed".to_string(),
        ))
    }

    /// Reconciliación explícita de pólizas vencidas
    pub async fn reconcile(&self) -> Result<ReconciliationResponse, AppError> {
        let (vehicles, insurance_history) = self.processor.process_expired_insurance().await?;
        let today = Utc::now().date_naive();

        let updated_vehicles = vehicles
            .into_iter()
            .map(|v| VehicleResponse::from_vehicle(v, today, self.window_days))
            .collect();

        Ok(ReconciliationResponse {
            updated_vehicles,
            insurance_history,
        })
    }

    /// Vista combinada del histórico: pólizas vivas + archivadas, paginada
    pub async fn history(
        &self,
        params: PaginationParams,
    ) -> Result<Paginated<InsuranceHistoryRow>, AppError> {
        let now = Utc::now();
        let vehicles = self.vehicles.find_all_active().await?;

        let live = transform_to_history_rows(&vehicles, now.date_naive(), self.window_days, now);
        let archived = self.history.find_all().await?;

        let merged = merge_history(live, archived);
        Ok(paginate_slice(&merged, &params))
    }

    /// Histórico de un único vehículo
    pub async fn history_for_vehicle(
        &self,
        vehicle_id: Uuid,
    ) -> Result<Vec<InsuranceHistoryRow>, AppError> {
        let now = Utc::now();
        let vehicle = self
            .vehicles
            .find_by_id(vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        let live = transform_to_history_rows(
            std::slice::from_ref(&vehicle),
            now.date_naive(),
            self.window_days,
            now,
        );
        let archived = self.history.find_by_vehicle(vehicle_id).await?;

        Ok(merge_history(live, archived))
    }
}
