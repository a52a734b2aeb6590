//! OAuth2 bridge endpoints
//!
//! Stateless proxy to the external identity provider; token responses are
//! relayed to the caller and never stored.

use axum::{
    extract::State,
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::error::AppResult;

use super::Json;

/// Token exchange body
#[derive(Deserialize, ToSchema)]
pub struct TokenRequest {
    /// Authorization code from the provider redirect
    pub code: String,
}

/// Token refresh body
#[derive(Deserialize, ToSchema)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Redirect to the provider's authorization page
#[utoipa::path(
    get,
    path = "/oauth/authorize",
    tag = "oauth",
    responses(
        (status = 307, description = "Redirect to the provider's consent screen")
    )
)]
pub async fn authorize(State(state): State<crate::AppState>) -> impl IntoResponse {
    Redirect::temporary(&state.services.zoho.authorize_url())
}

/// Exchange an authorization code for tokens
#[utoipa::path(
    post,
    path = "/oauth/token",
    tag = "oauth",
    request_body = TokenRequest,
    responses(
        (status = 200, description = "Provider token response, relayed verbatim"),
        (status = 502, description = "Provider unreachable or rejected the exchange")
    )
)]
pub async fn token(
    State(state): State<crate::AppState>,
    Json(request): Json<TokenRequest>,
) -> AppResult<Json<Value>> {
    let tokens = state.services.zoho.exchange_code(&request.code).await?;
    Ok(Json(tokens))
}

/// Refresh an access token
#[utoipa::path(
    post,
    path = "/oauth/refresh",
    tag = "oauth",
    request_body = RefreshRequest,
    responses(
        (status = 200, description = "Provider token response, relayed verbatim"),
        (status = 502, description = "Provider unreachable or rejected the refresh")
    )
)]
pub async fn refresh(
    State(state): State<crate::AppState>,
    Json(request): Json<RefreshRequest>,
) -> AppResult<Json<Value>> {
    let tokens = state
        .services
        .zoho
        .refresh_token(&request.refresh_token)
        .await?;
    Ok(Json(tokens))
}
