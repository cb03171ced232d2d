use crate::dto::common::ApiResponse;
use crate::dto::expense_dto::{CreateExpenseRequest, ListExpensesQuery, UpdateExpenseRequest};
use crate::models::expense::Expense;
use crate::repositories::expense_repository::ExpenseRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct ExpenseController {
    expenses: ExpenseRepository,
    vehicles: VehicleRepository,
}

impl ExpenseController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            expenses: ExpenseRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateExpenseRequest,
    ) -> Result<ApiResponse<Expense>, AppError> {
        request.validate()?;

        self.vehicles
            .find_by_id(request.vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        let expense = self
            .expenses
            .create(
                request.vehicle_id,
                request.expense_date,
                request.category.trim().to_string(),
                request.amount,
                request.description,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            expense,
            "Expense recorded".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Expense, AppError> {
        self.expenses
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Expense not found".to_string()))
    }

    pub async fn list(&self, query: ListExpensesQuery) -> Result<Vec<Expense>, AppError> {
        self.expenses.find_filtered(query.vehicle_id).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateExpenseRequest,
    ) -> Result<ApiResponse<Expense>, AppError> {
        request.validate()?;

        let expense = self
            .expenses
            .update(
                id,
                request.expense_date,
                request.category,
                request.amount,
                request.description,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            expense,
            "Expense updated".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.expenses.delete(id).await
    }
}
