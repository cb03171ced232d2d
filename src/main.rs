use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use fleet_maintenance::config::environment::EnvironmentConfig;
use fleet_maintenance::database::DatabaseConnection;
use fleet_maintenance::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use fleet_maintenance::routes;
use fleet_maintenance::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚚 Fleet Maintenance - API de gestión de flota");
    info!("==============================================");

    let config = EnvironmentConfig::default();

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let pool = db_connection.pool().clone();

    // CORS: orígenes explícitos si están configurados, permisivo en desarrollo
    let cors = if config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(config.cors_origins.clone())
    };

    let port = config.port;
    let app_state = AppState::new(pool, config);

    let app = Router::new()
        .route("/health", get(health_check))
        .nest("/api/vehicles", routes::vehicle_routes::create_vehicle_router())
        .nest("/api/insurance", routes::insurance_routes::create_insurance_router())
        .nest("/api/drivers", routes::driver_routes::create_driver_router())
        .nest("/api/maintenance", routes::maintenance_routes::create_maintenance_router())
        .nest("/api/claims", routes::claim_routes::create_claim_router())
        .nest("/api/expenses", routes::expense_routes::create_expense_router())
        .nest("/api/dashboard", routes::dashboard_routes::create_dashboard_router())
        .layer(cors)
        .with_state(app_state);

    let addr: SocketAddr = format!("0.0.0.0:{}", port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🚗 Vehículos:");
    info!("   POST   /api/vehicles - Registrar vehículo");
    info!("   GET    /api/vehicles - Listar vehículos (paginado)");
    info!("   GET    /api/vehicles/:id - Obtener vehículo");
    info!("   PUT    /api/vehicles/:id - Actualizar vehículo");
    info!("   PATCH  /api/vehicles/:id - Actualización parcial");
    info!("   DELETE /api/vehicles/:id - Borrado lógico (?hard=true definitivo)");
    info!("   POST   /api/vehicles/:id/restore - Restaurar vehículo");
    info!("🛡️ Seguros:");
    info!("   PUT    /api/vehicles/:id/insurance - Alta/reemplazo de póliza");
    info!("   DELETE /api/vehicles/:id/insurance - Quitar póliza");
    info!("   GET    /api/vehicles/:id/insurance/history - Histórico por vehículo");
    info!("   GET    /api/insurance/history - Histórico completo");
    info!("   POST   /api/insurance/reconcile - Reconciliar pólizas vencidas");
    info!("🪪 Conductores:");
    info!("   POST   /api/drivers - Registrar conductor");
    info!("   GET    /api/drivers - Listar conductores");
    info!("   PUT    /api/drivers/:id/assignments - Asignar vehículos");
    info!("🔧 Mantenimiento:");
    info!("   POST   /api/maintenance - Registrar mantenimiento");
    info!("   GET    /api/maintenance - Listar (filtros vehicle_id/status)");
    info!("📝 Siniestros:");
    info!("   POST   /api/claims - Dar de alta siniestro");
    info!("   PATCH  /api/claims/:id - Cambiar estado");
    info!("💰 Gastos:");
    info!("   POST   /api/expenses - Registrar gasto");
    info!("📊 Dashboard:");
    info!("   GET    /api/dashboard/summary - Resumen y series para gráficas");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Health check simple
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "service": "fleet-maintenance",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
