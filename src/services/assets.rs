//! Asset lifecycle service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        asset::{Asset, CreateAsset, UpdateAsset},
        enums::AssetStatus,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct AssetsService {
    repository: Repository,
}

impl AssetsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Get an asset by ID
    pub async fn get_asset(&self, id: i32) -> AppResult<Asset> {
        self.repository.assets.get_by_id(id).await
    }

    /// List all assets
    pub async fn list_assets(&self) -> AppResult<Vec<Asset>> {
        self.repository.assets.list().await
    }

    /// Create a new asset. The Assigned status only ever comes from the
    /// assignment engine; a client cannot manufacture it.
    pub async fn create_asset(&self, asset: CreateAsset) -> AppResult<Asset> {
        asset.validate()?;
        if asset.status == AssetStatus::Assigned {
            return Err(AppError::Validation(
                "Status 'Assigned' is set by the assignment engine and cannot be written directly"
                    .to_string(),
            ));
        }
        self.repository.assets.create(&asset).await
    }

    /// Update an asset. Status writes are refused for the Assigned value,
    /// and refused entirely while an Active assignment owns the field (the
    /// repository re-checks that under the asset row lock).
    pub async fn update_asset(&self, id: i32, fields: UpdateAsset) -> AppResult<Asset> {
        if fields.status == Some(AssetStatus::Assigned) {
            return Err(AppError::Validation(
                "Status 'Assigned' is set by the assignment engine and cannot be written directly"
                    .to_string(),
            ));
        }
        self.repository.assets.update(id, &fields).await
    }

    /// Delete an asset; refused while an Active assignment references it
    pub async fn delete_asset(&self, id: i32) -> AppResult<()> {
        self.repository.assets.delete(id).await
    }
}
