//! Assets repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::asset::{Asset, CreateAsset, UpdateAsset},
};

use super::conflict_on_unique;

#[derive(Clone)]
pub struct AssetsRepository {
    pool: Pool<Postgres>,
}

impl AssetsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get asset by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Asset> {
        sqlx::query_as::<_, Asset>("SELECT * FROM assets WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Asset with id {} not found", id)))
    }

    /// List all assets, newest first
    pub async fn list(&self) -> AppResult<Vec<Asset>> {
        let assets = sqlx::query_as::<_, Asset>("SELECT * FROM assets ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await?;
        Ok(assets)
    }

    /// Create a new asset. The asset tag is the business key; a duplicate
    /// fails with Conflict.
    pub async fn create(&self, asset: &CreateAsset) -> AppResult<Asset> {
        sqlx::query_as::<_, Asset>(
            r#"
            INSERT INTO assets (
                asset_tag, name, category, brand, model, serial_number,
                purchase_date, warranty_expiry, status, location, notes
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(&asset.asset_tag)
        .bind(&asset.name)
        .bind(&asset.category)
        .bind(&asset.brand)
        .bind(&asset.model)
        .bind(&asset.serial_number)
        .bind(asset.purchase_date)
        .bind(asset.warranty_expiry)
        .bind(asset.status)
        .bind(&asset.location)
        .bind(&asset.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            conflict_on_unique(
                e,
                &format!("Asset tag '{}' already exists", asset.asset_tag),
            )
        })
    }

    /// Partial update; absent fields keep their current value. Runs under a
    /// row lock so the status-ownership check cannot race a concurrent
    /// assignment: while an Active assignment exists the status column
    /// belongs to the assignment engine.
    pub async fn update(&self, id: i32, fields: &UpdateAsset) -> AppResult<Asset> {
        let mut tx = self.pool.begin().await?;

        let exists: Option<i32> =
            sqlx::query_scalar("SELECT id FROM assets WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;

        if exists.is_none() {
            return Err(AppError::NotFound(format!("Asset with id {} not found", id)));
        }

        if fields.status.is_some() {
            let has_active: bool = sqlx::query_scalar(
                "SELECT EXISTS(SELECT 1 FROM assignments WHERE asset_id = $1 AND status = 'Active')",
            )
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

            if has_active {
                return Err(AppError::Conflict(
                    "Asset status is managed by its active assignment".to_string(),
                ));
            }
        }

        let updated = sqlx::query_as::<_, Asset>(
            r#"
            UPDATE assets SET
                asset_tag = COALESCE($2, asset_tag),
                name = COALESCE($3, name),
                category = COALESCE($4, category),
                brand = COALESCE($5, brand),
                model = COALESCE($6, model),
                serial_number = COALESCE($7, serial_number),
                purchase_date = COALESCE($8, purchase_date),
                warranty_expiry = COALESCE($9, warranty_expiry),
                status = COALESCE($10, status),
                location = COALESCE($11, location),
                notes = COALESCE($12, notes),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&fields.asset_tag)
        .bind(&fields.name)
        .bind(&fields.category)
        .bind(&fields.brand)
        .bind(&fields.model)
        .bind(&fields.serial_number)
        .bind(fields.purchase_date)
        .bind(fields.warranty_expiry)
        .bind(fields.status)
        .bind(&fields.location)
        .bind(&fields.notes)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| conflict_on_unique(e, "Asset tag already exists"))?;

        tx.commit().await?;
        Ok(updated)
    }

    /// Delete an asset. Fails with Conflict while an Active assignment still
    /// references it; the FK constraint is the storage-level backstop.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let exists: Option<i32> =
            sqlx::query_scalar("SELECT id FROM assets WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;

        if exists.is_none() {
            return Err(AppError::NotFound(format!("Asset with id {} not found", id)));
        }

        let has_active: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM assignments WHERE asset_id = $1 AND status = 'Active')",
        )
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        if has_active {
            return Err(AppError::Conflict(
                "Asset has an active assignment and cannot be deleted".to_string(),
            ));
        }

        sqlx::query("DELETE FROM assignments WHERE asset_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM assets WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }
}
