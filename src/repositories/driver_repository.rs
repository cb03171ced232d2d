use crate::models::driver::Driver;
use crate::utils::errors::AppError;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

pub struct DriverRepository {
    pool: PgPool,
}

impl DriverRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        name: String,
        license_number: String,
        phone: String,
        address: String,
        status: String,
    ) -> Result<Driver, AppError> {
        let driver = sqlx::query_as::<_, Driver>(
            r#"
            INSERT INTO drivers (
                id, name, license_number, phone, address, status,
                assigned_vehicle_ids, deleted_at, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, '{}', NULL, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(license_number)
        .bind(phone)
        .bind(address)
        .bind(status)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(driver)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Driver>, AppError> {
        let driver = sqlx::query_as::<_, Driver>("SELECT * FROM drivers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(driver)
    }

    pub async fn find_all(&self, include_deleted: bool) -> Result<Vec<Driver>, AppError> {
        let drivers = sqlx::query_as::<_, Driver>(
            r#"
            SELECT * FROM drivers
            WHERE deleted_at IS NULL OR $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(include_deleted)
        .fetch_all(&self.pool)
        .await?;

        Ok(drivers)
    }

    pub async fn count_active(&self) -> Result<i64, AppError> {
        let result: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM drivers WHERE deleted_at IS NULL")
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    pub async fn license_number_exists(&self, license_number: &str) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM drivers WHERE license_number = $1 AND deleted_at IS NULL)",
        )
        .bind(license_number)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    pub async fn update(
        &self,
        id: Uuid,
        name: Option<String>,
        license_number: Option<String>,
        phone: Option<String>,
        address: Option<String>,
        status: Option<String>,
    ) -> Result<Driver, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Driver not found".to_string()))?;

        let driver = sqlx::query_as::<_, Driver>(
            r#"
            UPDATE drivers
            SET name = $2, license_number = $3, phone = $4, address = $5, status = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name.unwrap_or(current.name))
        .bind(license_number.unwrap_or(current.license_number))
        .bind(phone.unwrap_or(current.phone))
        .bind(address.unwrap_or(current.address))
        .bind(status.unwrap_or(current.status))
        .fetch_one(&self.pool)
        .await?;

        Ok(driver)
    }

    /// Reemplazar la lista de asignaciones. Los duplicados se eliminan antes
    /// de escribir; no se comprueba que los vehículos existan.
    pub async fn set_assignments(&self, id: Uuid, vehicle_ids: Vec<Uuid>) -> Result<Driver, AppError> {
        let mut deduped: Vec<Uuid> = Vec::with_capacity(vehicle_ids.len());
        for vehicle_id in vehicle_ids {
            if !deduped.contains(&vehicle_id) {
                deduped.push(vehicle_id);
            }
        }

        let driver = sqlx::query_as::<_, Driver>(
            "UPDATE drivers SET assigned_vehicle_ids = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(deduped)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Driver not found".to_string()))?;

        Ok(driver)
    }

    pub async fn soft_delete(&self, id: Uuid) -> Result<Driver, AppError> {
        let driver = sqlx::query_as::<_, Driver>(
            "UPDATE drivers SET deleted_at = $2 WHERE id = $1 AND deleted_at IS NULL RETURNING *",
        )
        .bind(id)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Driver not found or already deleted".to_string()))?;

        Ok(driver)
    }

    pub async fn restore(&self, id: Uuid) -> Result<Driver, AppError> {
        let driver = sqlx::query_as::<_, Driver>(
            "UPDATE drivers SET deleted_at = NULL WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Driver not found".to_string()))?;

        Ok(driver)
    }

    pub async fn hard_delete(&self, id: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM drivers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
