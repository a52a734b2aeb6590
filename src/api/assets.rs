//! Asset inventory endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    error::AppResult,
    models::asset::{Asset, CreateAsset, UpdateAsset},
};

use super::{CreatedResponse, Json, MessageResponse};

/// List all assets
#[utoipa::path(
    get,
    path = "/assets",
    tag = "assets",
    responses(
        (status = 200, description = "List of assets, newest first", body = Vec<Asset>)
    )
)]
pub async fn list_assets(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Asset>>> {
    let assets = state.services.assets.list_assets().await?;
    Ok(Json(assets))
}

/// Get asset details by ID
#[utoipa::path(
    get,
    path = "/assets/{id}",
    tag = "assets",
    params(
        ("id" = i32, Path, description = "Asset ID")
    ),
    responses(
        (status = 200, description = "Asset details", body = Asset),
        (status = 404, description = "Asset not found")
    )
)]
pub async fn get_asset(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Asset>> {
    let asset = state.services.assets.get_asset(id).await?;
    Ok(Json(asset))
}

/// Create a new asset
#[utoipa::path(
    post,
    path = "/assets",
    tag = "assets",
    request_body = CreateAsset,
    responses(
        (status = 201, description = "Asset created", body = CreatedResponse),
        (status = 400, description = "Missing required field"),
        (status = 409, description = "Asset tag already exists")
    )
)]
pub async fn create_asset(
    State(state): State<crate::AppState>,
    Json(asset): Json<CreateAsset>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let created = state.services.assets.create_asset(asset).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id: created.id,
            message: "Asset created successfully".to_string(),
        }),
    ))
}

/// Update an existing asset (partial body)
#[utoipa::path(
    put,
    path = "/assets/{id}",
    tag = "assets",
    params(
        ("id" = i32, Path, description = "Asset ID")
    ),
    request_body = UpdateAsset,
    responses(
        (status = 200, description = "Asset updated", body = MessageResponse),
        (status = 404, description = "Asset not found"),
        (status = 409, description = "Status managed by active assignment, or duplicate tag")
    )
)]
pub async fn update_asset(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(fields): Json<UpdateAsset>,
) -> AppResult<Json<MessageResponse>> {
    state.services.assets.update_asset(id, fields).await?;

    Ok(Json(MessageResponse {
        message: "Asset updated successfully".to_string(),
    }))
}

/// Delete an asset
#[utoipa::path(
    delete,
    path = "/assets/{id}",
    tag = "assets",
    params(
        ("id" = i32, Path, description = "Asset ID")
    ),
    responses(
        (status = 200, description = "Asset deleted", body = MessageResponse),
        (status = 404, description = "Asset not found"),
        (status = 409, description = "Asset has an active assignment")
    )
)]
pub async fn delete_asset(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.services.assets.delete_asset(id).await?;

    Ok(Json(MessageResponse {
        message: "Asset deleted successfully".to_string(),
    }))
}
