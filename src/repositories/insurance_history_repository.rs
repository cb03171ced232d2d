use crate::models::insurance_history::InsuranceHistoryRow;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use uuid::Uuid;

/// Acceso de solo lectura al histórico. Las inserciones ocurren únicamente
/// dentro de las transacciones de archivado del VehicleRepository.
pub struct InsuranceHistoryRepository {
    pool: PgPool,
}

impl InsuranceHistoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> Result<Vec<InsuranceHistoryRow>, AppError> {
        let rows = sqlx::query_as::<_, InsuranceHistoryRow>(
            "SELECT * FROM insurance_history ORDER BY archived_at DESC, issue_date DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn find_by_vehicle(&self, vehicle_id: Uuid) -> Result<Vec<InsuranceHistoryRow>, AppError> {
        let rows = sqlx::query_as::<_, InsuranceHistoryRow>(
            r#"
            SELECT * FROM insurance_history
            WHERE vehicle_id = $1
            ORDER BY archived_at DESC, issue_date DESC
            "#,
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
