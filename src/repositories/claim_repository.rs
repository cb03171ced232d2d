use crate::models::claim::Claim;
use crate::utils::errors::AppError;
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

pub struct ClaimRepository {
    pool: PgPool,
}

impl ClaimRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        vehicle_id: Uuid,
        claim_date: NaiveDate,
        claim_amount: Decimal,
        reason: String,
    ) -> Result<Claim, AppError> {
        let claim = sqlx::query_as::<_, Claim>(
            r#"
            INSERT INTO claims (id, vehicle_id, claim_date, claim_amount, reason, status, created_at)
            VALUES ($1, $2, $3, $4, $5, 'Pending', $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(vehicle_id)
        .bind(claim_date)
        .bind(claim_amount)
        .bind(reason)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(claim)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Claim>, AppError> {
        let claim = sqlx::query_as::<_, Claim>("SELECT * FROM claims WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(claim)
    }

    pub async fn find_filtered(
        &self,
        vehicle_id: Option<Uuid>,
        status: Option<String>,
    ) -> Result<Vec<Claim>, AppError> {
        let claims = sqlx::query_as::<_, Claim>(
            r#"
            SELECT * FROM claims
            WHERE ($1::uuid IS NULL OR vehicle_id = $1)
            AND ($2::text IS NULL OR status = $2)
            ORDER BY claim_date DESC, created_at DESC
            "#,
        )
        .bind(vehicle_id)
        .bind(status)
        .fetch_all(&self.pool)
        .await?;

        Ok(claims)
    }

    pub async fn update_status(&self, id: Uuid, status: String) -> Result<Claim, AppError> {
        let claim = sqlx::query_as::<_, Claim>(
            "UPDATE claims SET status = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Claim not found".to_string()))?;

        Ok(claim)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM claims WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Claim not found".to_string()));
        }

        Ok(())
    }

    pub async fn count_by_status(&self, status: &str) -> Result<i64, AppError> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM claims WHERE status = $1")
            .bind(status)
            .fetch_one(&self.pool)
            .await?;

        Ok(result.0)
    }
}
