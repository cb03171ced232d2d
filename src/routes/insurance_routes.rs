use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};

use crate::controllers::insurance_controller::InsuranceController;
use crate::dto::insurance_dto::ReconciliationResponse;
use crate::models::insurance_history::InsuranceHistoryRow;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::pagination::{Paginated, PaginationParams};

pub fn create_insurance_router() -> Router<AppState> {
    Router::new()
        .route("/history", get(insurance_history))
        .route("/reconcile", post(reconcile_expired))
}

async fn insurance_history(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<Paginated<InsuranceHistoryRow>>, AppError> {
    let controller = InsuranceController::new(state.pool.clone(), state.config.expiry_warning_days);
    let response = controller.history(params).await?;
    Ok(Json(response))
}

/// Disparo explícito de la reconciliación; ninguna lectura la ejecuta por
/// efecto colateral.
async fn reconcile_expired(
    State(state): State<AppState>,
) -> Result<Json<ReconciliationResponse>, AppError> {
    let controller = InsuranceController::new(state.pool.clone(), state.config.expiry_warning_days);
    let response = controller.reconcile().await?;
    Ok(Json(response))
}
