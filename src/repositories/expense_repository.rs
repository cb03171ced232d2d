use crate::models::expense::Expense;
use crate::utils::errors::AppError;
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

pub struct ExpenseRepository {
    pool: PgPool,
}

impl ExpenseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        vehicle_id: Uuid,
        expense_date: NaiveDate,
        category: String,
        amount: Decimal,
        description: Option<String>,
    ) -> Result<Expense, AppError> {
        let expense = sqlx::query_as::<_, Expense>(
            r#"
            INSERT INTO expenses (id, vehicle_id, expense_date, category, amount, description, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(vehicle_id)
        .bind(expense_date)
        .bind(category)
        .bind(amount)
        .bind(description)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(expense)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Expense>, AppError> {
        let expense = sqlx::query_as::<_, Expense>("SELECT * FROM expenses WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(expense)
    }

    pub async fn find_filtered(&self, vehicle_id: Option<Uuid>) -> Result<Vec<Expense>, AppError> {
        let expenses = sqlx::query_as::<_, Expense>(
            r#"
            SELECT * FROM expenses
            WHERE ($1::uuid IS NULL OR vehicle_id = $1)
            ORDER BY expense_date DESC, created_at DESC
            "#,
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(expenses)
    }

    pub async fn update(
        &self,
        id: Uuid,
        expense_date: Option<NaiveDate>,
        category: Option<String>,
        amount: Option<Decimal>,
        description: Option<String>,
    ) -> Result<Expense, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Expense not found".to_string()))?;

        let expense = sqlx::query_as::<_, Expense>(
            r#"
            UPDATE expenses
            SET expense_date = $2, category = $3, amount = $4, description = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(expense_date.unwrap_or(current.expense_date))
        .bind(category.unwrap_or(current.category))
        .bind(amount.unwrap_or(current.amount))
        .bind(description.or(current.description))
        .fetch_one(&self.pool)
        .await?;

        Ok(expense)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM expenses WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Expense not found".to_string()));
        }

        Ok(())
    }

    pub async fn total_amount(&self) -> Result<Decimal, AppError> {
        let result: (Decimal,) =
            sqlx::query_as("SELECT COALESCE(SUM(amount), 0) FROM expenses")
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }
}
