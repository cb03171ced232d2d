use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, patch, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::claim_controller::ClaimController;
use crate::dto::claim_dto::{CreateClaimRequest, ListClaimsQuery, UpdateClaimStatusRequest};
use crate::dto::common::ApiResponse;
use crate::models::claim::Claim;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_claim_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_claim))
        .route("/", get(list_claims))
        .route("/:id", get(get_claim))
        .route("/:id", patch(update_claim_status))
        .route("/:id", delete(delete_claim))
}

async fn create_claim(
    State(state): State<AppState>,
    Json(request): Json<CreateClaimRequest>,
) -> Result<Json<ApiResponse<Claim>>, AppError> {
    let controller = ClaimController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_claims(
    State(state): State<AppState>,
    Query(query): Query<ListClaimsQuery>,
) -> Result<Json<Vec<Claim>>, AppError> {
    let controller = ClaimController::new(state.pool.clone());
    let response = controller.list(query).await?;
    Ok(Json(response))
}

async fn get_claim(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Claim>, AppError> {
    let controller = ClaimController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_claim_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateClaimStatusRequest>,
) -> Result<Json<ApiResponse<Claim>>, AppError> {
    let controller = ClaimController::new(state.pool.clone());
    let response = controller.update_status(id, request).await?;
    Ok(Json(response))
}

async fn delete_claim(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = ClaimController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Claim deleted"
    })))
}
