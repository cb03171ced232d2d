use axum::{extract::State, routing::get, Json, Router};

use crate::models::dashboard::DashboardSummary;
use crate::services::dashboard_service::DashboardService;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_dashboard_router() -> Router<AppState> {
    Router::new().route("/summary", get(dashboard_summary))
}

async fn dashboard_summary(
    State(state): State<AppState>,
) -> Result<Json<DashboardSummary>, AppError> {
    let service = DashboardService::new(state.pool.clone(), state.config.expiry_warning_days);
    let summary = service.summary().await?;
    Ok(Json(summary))
}
