//! API handlers for the asset tracker REST endpoints

pub mod assets;
pub mod assignments;
pub mod categories;
pub mod dashboard;
pub mod health;
pub mod oauth;
pub mod openapi;
pub mod requests;
pub mod zoho;

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::AppError;

/// JSON body wrapper. Extraction failures (malformed body, missing required
/// field, unknown enum label) surface as a 400 with the standard `{error}`
/// shape instead of axum's plain-text rejection.
pub struct Json<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for Json<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Json(value)),
            Err(rejection) => Err(AppError::Validation(rejection.body_text())),
        }
    }
}

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

/// Mutation acknowledgement, `{id, message}` shape
#[derive(Serialize, ToSchema)]
pub struct CreatedResponse {
    pub id: i32,
    pub message: String,
}

/// Plain acknowledgement
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
