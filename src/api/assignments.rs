//! Assignment lifecycle endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    error::AppResult,
    models::assignment::{AssignmentDetails, CreateAssignment, ReturnAssignment},
};

use super::{CreatedResponse, Json, MessageResponse};

/// List all assignments
#[utoipa::path(
    get,
    path = "/assignments",
    tag = "assignments",
    responses(
        (status = 200, description = "Assignments with asset summaries, newest first", body = Vec<AssignmentDetails>)
    )
)]
pub async fn list_assignments(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<AssignmentDetails>>> {
    let assignments = state.services.assignments.list_assignments().await?;
    Ok(Json(assignments))
}

/// Get assignment details by ID
#[utoipa::path(
    get,
    path = "/assignments/{id}",
    tag = "assignments",
    params(
        ("id" = i32, Path, description = "Assignment ID")
    ),
    responses(
        (status = 200, description = "Assignment details", body = AssignmentDetails),
        (status = 404, description = "Assignment not found")
    )
)]
pub async fn get_assignment(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<AssignmentDetails>> {
    let assignment = state.services.assignments.get_assignment(id).await?;
    Ok(Json(assignment))
}

/// Assign an asset to an employee
#[utoipa::path(
    post,
    path = "/assignments",
    tag = "assignments",
    request_body = CreateAssignment,
    responses(
        (status = 201, description = "Assignment created", body = CreatedResponse),
        (status = 400, description = "Missing required field or signature"),
        (status = 404, description = "Asset not found"),
        (status = 409, description = "Asset is already assigned")
    )
)]
pub async fn create_assignment(
    State(state): State<crate::AppState>,
    Json(assignment): Json<CreateAssignment>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let created = state
        .services
        .assignments
        .create_assignment(assignment)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id: created.id,
            message: "Assignment created successfully".to_string(),
        }),
    ))
}

/// Return an assigned asset
#[utoipa::path(
    put,
    path = "/assignments/{id}/return",
    tag = "assignments",
    params(
        ("id" = i32, Path, description = "Assignment ID")
    ),
    request_body = ReturnAssignment,
    responses(
        (status = 200, description = "Asset returned", body = MessageResponse),
        (status = 404, description = "Assignment not found or already returned")
    )
)]
pub async fn return_assignment(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(body): Json<ReturnAssignment>,
) -> AppResult<Json<MessageResponse>> {
    state
        .services
        .assignments
        .return_assignment(id, body.return_notes.as_deref())
        .await?;

    Ok(Json(MessageResponse {
        message: "Asset returned successfully".to_string(),
    }))
}
