//! Dashboard endpoints

use axum::extract::State;

use crate::{error::AppResult, services::stats::StatsResponse};

use super::Json;

/// Dashboard statistics: total assets, pending requests, assets per status
#[utoipa::path(
    get,
    path = "/dashboard/stats",
    tag = "dashboard",
    responses(
        (status = 200, description = "Aggregate counts from one consistent snapshot", body = StatsResponse)
    )
)]
pub async fn get_stats(State(state): State<crate::AppState>) -> AppResult<Json<StatsResponse>> {
    let stats = state.services.stats.get_stats().await?;
    Ok(Json(stats))
}
