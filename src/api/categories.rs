//! Category lookup endpoints

use axum::extract::State;

use crate::{error::AppResult, models::category::Category};

use super::Json;

/// List all categories
#[utoipa::path(
    get,
    path = "/categories",
    tag = "categories",
    responses(
        (status = 200, description = "Categories ordered by name", body = Vec<Category>)
    )
)]
pub async fn list_categories(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Category>>> {
    let categories = state.services.categories.list_categories().await?;
    Ok(Json(categories))
}
