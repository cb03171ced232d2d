use crate::models::insurance::Insurance;
use crate::models::insurance_history::InsuranceHistoryRow;
use crate::models::vehicle::{NewVehicle, Vehicle};
use crate::utils::errors::AppError;
use chrono::Utc;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new: NewVehicle) -> Result<Vehicle, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (
                id, make, model, registration_number, purchase_date, purchase_price,
                fuel_type, engine_number, chassis_number, kilometers, color,
                owner, phone, address, insurance, deleted_at, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, NULL, NULL, $15)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(new.make)
        .bind(new.model)
        .bind(new.registration_number)
        .bind(new.purchase_date)
        .bind(new.purchase_price)
        .bind(new.fuel_type)
        .bind(new.engine_number)
        .bind(new.chassis_number)
        .bind(new.kilometers)
        .bind(new.color)
        .bind(new.owner)
        .bind(new.phone)
        .bind(new.address)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    pub async fn find_page(
        &self,
        include_deleted: bool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            r#"
            SELECT * FROM vehicles
            WHERE deleted_at IS NULL OR $1
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(include_deleted)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    pub async fn count(&self, include_deleted: bool) -> Result<i64, AppError> {
        let result: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM vehicles WHERE deleted_at IS NULL OR $1")
                .bind(include_deleted)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    /// Todos los vehículos activos, sin paginar. Lo usan el reconciliador,
    /// el histórico y el dashboard.
    pub async fn find_all_active(&self) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            "SELECT * FROM vehicles WHERE deleted_at IS NULL ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    pub async fn live_vehicle_ids(&self) -> Result<Vec<Uuid>, AppError> {
        let rows: Vec<(Uuid,)> =
            sqlx::query_as("SELECT id FROM vehicles WHERE deleted_at IS NULL")
                .fetch_all(&self.pool)
                .await?;

        Ok(rows.into_iter().map(|(id,)| id).collect())
    }

    pub async fn registration_number_exists(
        &self,
        registration_number: &str,
        exclude_id: Option<Uuid>,
    ) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM vehicles
                WHERE registration_number = $1
                AND deleted_at IS NULL
                AND ($2::uuid IS NULL OR id <> $2)
            )
            "#,
        )
        .bind(registration_number)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    /// Reemplazo completo de los atributos descriptivos (PUT)
    pub async fn update(&self, id: Uuid, new: NewVehicle) -> Result<Vehicle, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET make = $2, model = $3, registration_number = $4, purchase_date = $5,
                purchase_price = $6, fuel_type = $7, engine_number = $8,
                chassis_number = $9, kilometers = $10, color = $11, owner = $12,
                phone = $13, address = $14
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(new.make)
        .bind(new.model)
        .bind(new.registration_number)
        .bind(new.purchase_date)
        .bind(new.purchase_price)
        .bind(new.fuel_type)
        .bind(new.engine_number)
        .bind(new.chassis_number)
        .bind(new.kilometers)
        .bind(new.color)
        .bind(new.owner)
        .bind(new.phone)
        .bind(new.address)
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    /// Actualización parcial (PATCH): los campos ausentes conservan su valor
    pub async fn patch(
        &self,
        id: Uuid,
        kilometers: Option<rust_decimal::Decimal>,
        color: Option<String>,
        owner: Option<String>,
        phone: Option<String>,
        address: Option<String>,
        fuel_type: Option<String>,
    ) -> Result<Vehicle, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET kilometers = $2, color = $3, owner = $4, phone = $5, address = $6, fuel_type = $7
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(kilometers.unwrap_or(current.kilometers))
        .bind(color.unwrap_or(current.color))
        .bind(owner.unwrap_or(current.owner))
        .bind(phone.unwrap_or(current.phone))
        .bind(address.unwrap_or(current.address))
        .bind(fuel_type.unwrap_or(current.fuel_type))
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn set_insurance(&self, id: Uuid, insurance: &Insurance) -> Result<Vehicle, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            "UPDATE vehicles SET insurance = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(Json(insurance))
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn clear_insurance(&self, id: Uuid) -> Result<Vehicle, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            "UPDATE vehicles SET insurance = NULL WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    /// Archivar la póliza en el histórico y limpiarla del vehículo en una
    /// sola transacción: nunca queda histórico sin limpiar ni limpieza sin
    /// histórico.
    pub async fn archive_and_clear_insurance(
        &self,
        vehicle_id: Uuid,
        row: &InsuranceHistoryRow,
    ) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        insert_history_row(&mut tx, row).await?;

        sqlx::query("UPDATE vehicles SET insurance = NULL WHERE id = $1")
            .bind(vehicle_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }

    /// Archivar la póliza actual y escribir la nueva en una sola transacción
    pub async fn archive_and_replace_insurance(
        &self,
        vehicle_id: Uuid,
        row: &InsuranceHistoryRow,
        new_insurance: &Insurance,
    ) -> Result<Vehicle, AppError> {
        let mut tx = self.pool.begin().await?;

        insert_history_row(&mut tx, row).await?;

        let vehicle = sqlx::query_as::<_, Vehicle>(
            "UPDATE vehicles SET insurance = $2 WHERE id = $1 RETURNING *",
        )
        .bind(vehicle_id)
        .bind(Json(new_insurance))
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(vehicle)
    }

    pub async fn soft_delete(&self, id: Uuid) -> Result<Vehicle, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            "UPDATE vehicles SET deleted_at = $2 WHERE id = $1 AND deleted_at IS NULL RETURNING *",
        )
        .bind(id)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Vehicle not found or already deleted".to_string()))?;

        Ok(vehicle)
    }

    pub async fn restore(&self, id: Uuid) -> Result<Vehicle, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            "UPDATE vehicles SET deleted_at = NULL WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        Ok(vehicle)
    }

    pub async fn hard_delete(&self, id: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

async fn insert_history_row(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    row: &InsuranceHistoryRow,
) -> Result<(), AppError> {
    sqlx::query(
        r#"
        INSERT INTO insurance_history (
            id, vehicle_id, registration_number, make, model, policy_number,
            insurer, policy_type, start_date, end_date, issue_date,
            premium_amount, payment_mode, status, archived_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
        "#,
    )
    .bind(&row.id)
    .bind(row.vehicle_id)
    .bind(&row.registration_number)
    .bind(&row.make)
    .bind(&row.model)
    .bind(&row.policy_number)
    .bind(&row.insurer)
    .bind(&row.policy_type)
    .bind(row.start_date)
    .bind(row.end_date)
    .bind(row.issue_date)
    .bind(row.premium_amount)
    .bind(&row.payment_mode)
    .bind(&row.status)
    .bind(row.archived_at)
    .execute(&mut **tx)
    .await?;

    Ok(())
}
