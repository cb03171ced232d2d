use crate::dto::claim_dto::{CreateClaimRequest, ListClaimsQuery, UpdateClaimStatusRequest};
use crate::dto::common::ApiResponse;
use crate::models::claim::{Claim, CLAIM_STATUSES};
use crate::repositories::claim_repository::ClaimRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct ClaimController {
    claims: ClaimRepository,
    vehicles: VehicleRepository,
}

impl ClaimController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            claims: ClaimRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateClaimRequest,
    ) -> Result<ApiResponse<Claim>, AppError> {
        request.validate()?;

        let vehicle = self
            .vehicles
            .find_by_id(request.vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        if vehicle.is_deleted() {
            return Err(AppError::BadRequest(
                "Cannot register a claim for a deleted vehicle".to_string(),
            ));
        }

        // Sin póliza viva no hay siniestro que tramitar
        if vehicle.insurance().is_none() {
            return Err(AppError::BadRequest(
                "Cannot register a claim: the vehicle has no active insurance".to_string(),
            ));
        }

        let claim = self
            .claims
            .create(
                request.vehicle_id,
                request.claim_date,
                request.claim_amount,
                request.reason.trim().to_string(),
            )
            .await?;

        log::info!("📝 Siniestro registrado para vehículo {}", request.vehicle_id);

        Ok(ApiResponse::success_with_message(
            claim,
            "Claim submitted successfully".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Claim, AppError> {
        self.claims
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Claim not found".to_string()))
    }

    pub async fn list(&self, query: ListClaimsQuery) -> Result<Vec<Claim>, AppError> {
        if let Some(status) = &query.status {
            if !CLAIM_STATUSES.contains(&status.as_str()) {
                return Err(AppError::BadRequest(format!(
                    "Unknown claim status '{}'",
                    status
                )));
            }
        }

        self.claims.find_filtered(query.vehicle_id, query.status).await
    }

    pub async fn update_status(
        &self,
        id: Uuid,
        request: UpdateClaimStatusRequest,
    ) -> Result<ApiResponse<Claim>, AppError> {
        if !CLAIM_STATUSES.contains(&request.status.as_str()) {
            return Err(AppError::BadRequest(format!(
                "Claim status must be one of {:?}",
                CLAIM_STATUSES
            )));
        }

        let claim = self.claims.update_status(id, request.status).await?;

        Ok(ApiResponse::success_with_message(
            claim,
            "Claim status updated".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.claims.delete(id).await
    }
}
