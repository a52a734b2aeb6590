//! Procurement request endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::request::{CreateRequest, Request, UpdateRequestStatus},
};

use super::{Json, MessageResponse};

/// Create response carrying the generated request identifier
#[derive(Serialize, ToSchema)]
pub struct RequestCreatedResponse {
    pub id: i32,
    pub request_id: String,
    pub message: String,
}

/// List all requests
#[utoipa::path(
    get,
    path = "/requests",
    tag = "requests",
    responses(
        (status = 200, description = "List of requests, newest first", body = Vec<Request>)
    )
)]
pub async fn list_requests(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Request>>> {
    let requests = state.services.requests.list_requests().await?;
    Ok(Json(requests))
}

/// Get request details by ID
#[utoipa::path(
    get,
    path = "/requests/{id}",
    tag = "requests",
    params(
        ("id" = i32, Path, description = "Request ID")
    ),
    responses(
        (status = 200, description = "Request details", body = Request),
        (status = 404, description = "Request not found")
    )
)]
pub async fn get_request(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Request>> {
    let request = state.services.requests.get_request(id).await?;
    Ok(Json(request))
}

/// Create a new procurement request
#[utoipa::path(
    post,
    path = "/requests",
    tag = "requests",
    request_body = CreateRequest,
    responses(
        (status = 201, description = "Request created", body = RequestCreatedResponse),
        (status = 400, description = "Missing required field")
    )
)]
pub async fn create_request(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateRequest>,
) -> AppResult<(StatusCode, Json<RequestCreatedResponse>)> {
    let created = state.services.requests.create_request(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(RequestCreatedResponse {
            id: created.id,
            request_id: created.request_id,
            message: "Request created successfully".to_string(),
        }),
    ))
}

/// Update request status and approval metadata
#[utoipa::path(
    put,
    path = "/requests/{id}",
    tag = "requests",
    params(
        ("id" = i32, Path, description = "Request ID")
    ),
    request_body = UpdateRequestStatus,
    responses(
        (status = 200, description = "Request updated", body = MessageResponse),
        (status = 404, description = "Request not found")
    )
)]
pub async fn update_request(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(update): Json<UpdateRequestStatus>,
) -> AppResult<Json<MessageResponse>> {
    state.services.requests.update_status(id, update).await?;

    Ok(Json(MessageResponse {
        message: "Request updated successfully".to_string(),
    }))
}
