use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

// Request para registrar un gasto
#[derive(Debug, Deserialize, Validate)]
pub struct CreateExpenseRequest {
    pub vehicle_id: Uuid,
    pub expense_date: NaiveDate,

    #[validate(length(min = 1))]
    pub category: String,

    #[validate(custom = "crate::utils::validation::validate_positive_amount")]
    pub amount: Decimal,

    pub description: Option<String>,
}

// Request para actualizar un gasto
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateExpenseRequest {
    pub expense_date: Option<NaiveDate>,

    #[validate(length(min = 1))]
    pub category: Option<String>,

    #[validate(custom = "crate::utils::validation::validate_positive_amount")]
    pub amount: Option<Decimal>,

    pub description: Option<String>,
}

// Query params del listado de gastos
#[derive(Debug, Default, Deserialize)]
pub struct ListExpensesQuery {
    pub vehicle_id: Option<Uuid>,
}
