//! Procurement request model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::enums::{RequestPriority, RequestStatus};

/// Procurement request model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Request {
    pub id: i32,
    /// Human-readable identifier, e.g. `REQ-1704067200000-x7Qb2K`
    pub request_id: String,
    pub requester_name: String,
    pub requester_email: String,
    pub department: String,
    pub asset_type: String,
    pub description: Option<String>,
    pub priority: RequestPriority,
    pub status: RequestStatus,
    pub request_date: DateTime<Utc>,
    /// Set when status first moves off Pending
    pub approved_date: Option<DateTime<Utc>>,
    pub approved_by: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create request body
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateRequest {
    #[validate(length(min = 1, message = "requester_name is required"))]
    pub requester_name: String,
    #[validate(email(message = "requester_email must be a valid email"))]
    pub requester_email: String,
    #[validate(length(min = 1, message = "department is required"))]
    pub department: String,
    #[validate(length(min = 1, message = "asset_type is required"))]
    pub asset_type: String,
    pub description: Option<String>,
    #[serde(default)]
    pub priority: RequestPriority,
}

/// Status/approval update body
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateRequestStatus {
    pub status: RequestStatus,
    pub approved_by: Option<String>,
    pub notes: Option<String>,
}
