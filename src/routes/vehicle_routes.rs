use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, patch, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::insurance_controller::InsuranceController;
use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::common::{ApiResponse, DeleteParams};
use crate::dto::insurance_dto::InsuranceRequest;
use crate::dto::vehicle_dto::{
    ListVehiclesQuery, PatchVehicleRequest, RegisterVehicleRequest, UpdateVehicleRequest,
    VehicleResponse,
};
use crate::models::insurance_history::InsuranceHistoryRow;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::pagination::Paginated;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", post(register_vehicle))
        .route("/", get(list_vehicles))
        .route("/:id", get(get_vehicle))
        .route("/:id", put(update_vehicle))
        .route("/:id", patch(patch_vehicle))
        .route("/:id", delete(delete_vehicle))
        .route("/:id/restore", post(restore_vehicle))
        .route("/:id/insurance", put(set_insurance))
        .route("/:id/insurance", delete(clear_insurance))
        .route("/:id/insurance/history", get(vehicle_insurance_history))
}

async fn register_vehicle(
    State(state): State<AppState>,
    Json(request): Json<RegisterVehicleRequest>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone(), state.config.expiry_warning_days);
    let response = controller.register(request).await?;
    Ok(Json(response))
}

async fn list_vehicles(
    State(state): State<AppState>,
    Query(query): Query<ListVehiclesQuery>,
) -> Result<Json<Paginated<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone(), state.config.expiry_warning_days);
    let response = controller.list(query).await?;
    Ok(Json(response))
}

async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<VehicleResponse>, AppError> {
    let controller = VehicleController::new(state.pool.clone(), state.config.expiry_warning_days);
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateVehicleRequest>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone(), state.config.expiry_warning_days);
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn patch_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<PatchVehicleRequest>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone(), state.config.expiry_warning_days);
    let response = controller.patch(id, request).await?;
    Ok(Json(response))
}

async fn delete_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<DeleteParams>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = VehicleController::new(state.pool.clone(), state.config.expiry_warning_days);

    if params.hard.unwrap_or(false) {
        controller.hard_delete(id).await?;
        Ok(Json(serde_json::json!({
            "success": true,
            "message": "Vehicle permanently deleted"
        })))
    } else {
        let response = controller.soft_delete(id).await?;
        Ok(Json(serde_json::to_value(response).map_err(|e| {
            AppError::Internal(format!("Error serializing response: {}", e))
        })?))
    }
}

async fn restore_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone(), state.config.expiry_warning_days);
    let response = controller.restore(id).await?;
    Ok(Json(response))
}

async fn set_insurance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<InsuranceRequest>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let controller = InsuranceController::new(state.pool.clone(), state.config.expiry_warning_days);
    let response = controller.set_insurance(id, request).await?;
    Ok(Json(response))
}

async fn clear_insurance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let controller = InsuranceController::new(state.pool.clone(), state.config.expiry_warning_days);
    let response = controller.clear_insurance(id).await?;
    Ok(Json(response))
}

async fn vehicle_insurance_history(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<InsuranceHistoryRow>>, AppError> {
    let controller = InsuranceController::new(state.pool.clone(), state.config.expiry_warning_days);
    let response = controller.history_for_vehicle(id).await?;
    Ok(Json(response))
}
