//! CRM sync endpoints

use axum::extract::State;
use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::error::AppResult;

use super::Json;

/// One-way export of an asset to the CRM
#[derive(Deserialize, ToSchema)]
pub struct SyncAssetRequest {
    /// Caller-supplied CRM access token
    pub access_token: String,
    pub asset_id: i32,
}

/// Push an asset record to the CRM
#[utoipa::path(
    post,
    path = "/zoho/sync-asset",
    tag = "zoho",
    request_body = SyncAssetRequest,
    responses(
        (status = 200, description = "CRM response, relayed verbatim"),
        (status = 404, description = "Asset not found"),
        (status = 502, description = "CRM unreachable or rejected the record")
    )
)]
pub async fn sync_asset(
    State(state): State<crate::AppState>,
    Json(request): Json<SyncAssetRequest>,
) -> AppResult<Json<Value>> {
    let asset = state.services.assets.get_asset(request.asset_id).await?;
    let response = state
        .services
        .zoho
        .sync_asset(&request.access_token, &asset)
        .await?;
    Ok(Json(response))
}
