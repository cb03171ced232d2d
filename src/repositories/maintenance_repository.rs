use crate::models::maintenance::MaintenanceRecord;
use crate::utils::errors::AppError;
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

pub struct MaintenanceRepository {
    pool: PgPool,
}

impl MaintenanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        vehicle_id: Uuid,
        service_date: NaiveDate,
        service_type: String,
        description: String,
        cost: Decimal,
        odometer_reading_before: Decimal,
        odometer_reading_after: Decimal,
        status: String,
    ) -> Result<MaintenanceRecord, AppError> {
        let record = sqlx::query_as::<_, MaintenanceRecord>(
            r#"
            INSERT INTO maintenance (
                id, vehicle_id, service_date, service_type, description, cost,
                odometer_reading_before, odometer_reading_after, status, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(vehicle_id)
        .bind(service_date)
        .bind(service_type)
        .bind(description)
        .bind(cost)
        .bind(odometer_reading_before)
        .bind(odometer_reading_after)
        .bind(status)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<MaintenanceRecord>, AppError> {
        let record =
            sqlx::query_as::<_, MaintenanceRecord>("SELECT * FROM maintenance WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(record)
    }

    pub async fn find_filtered(
        &self,
        vehicle_id: Option<Uuid>,
        status: Option<String>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<MaintenanceRecord>, AppError> {
        let records = sqlx::query_as::<_, MaintenanceRecord>(
            r#"
            SELECT * FROM maintenance
            WHERE ($1::uuid IS NULL OR vehicle_id = $1)
            AND ($2::text IS NULL OR status = $2)
            ORDER BY service_date DESC, created_at DESC
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(vehicle_id)
        .bind(status)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    pub async fn count_filtered(
        &self,
        vehicle_id: Option<Uuid>,
        status: Option<String>,
    ) -> Result<i64, AppError> {
        let result: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM maintenance
            WHERE ($1::uuid IS NULL OR vehicle_id = $1)
            AND ($2::text IS NULL OR status = $2)
            "#,
        )
        .bind(vehicle_id)
        .bind(status)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: Uuid,
        service_date: Option<NaiveDate>,
        service_type: Option<String>,
        description: Option<String>,
        cost: Option<Decimal>,
        odometer_reading_before: Option<Decimal>,
        odometer_reading_after: Option<Decimal>,
        status: Option<String>,
    ) -> Result<MaintenanceRecord, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Maintenance record not found".to_string()))?;

        let record = sqlx::query_as::<_, MaintenanceRecord>(
            r#"
            UPDATE maintenance
            SET service_date = $2, service_type = $3, description = $4, cost = $5,
                odometer_reading_before = $6, odometer_reading_after = $7, status = $8
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(service_date.unwrap_or(current.service_date))
        .bind(service_type.unwrap_or(current.service_type))
        .bind(description.unwrap_or(current.description))
        .bind(cost.unwrap_or(current.cost))
        .bind(odometer_reading_before.unwrap_or(current.odometer_reading_before))
        .bind(odometer_reading_after.unwrap_or(current.odometer_reading_after))
        .bind(status.unwrap_or(current.status))
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM maintenance WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Maintenance record not found".to_string()));
        }

        Ok(())
    }

    /// Coste total y serie mensual para las gráficas del dashboard
    pub async fn cost_totals_by_month(&self) -> Result<Vec<(String, Decimal)>, AppError> {
        let rows: Vec<(String, Decimal)> = sqlx::query_as(
            r#"
            SELECT to_char(service_date, 'YYYY-MM') AS month, COALESCE(SUM(cost), 0) AS total
            FROM maintenance
            GROUP BY month
            ORDER BY month
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn total_cost(&self) -> Result<Decimal, AppError> {
        let result: (Decimal,) =
            sqlx::query_as("SELECT COALESCE(SUM(cost), 0) FROM maintenance")
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }
}
