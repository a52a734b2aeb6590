//! Assignment model and related types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::enums::AssignmentStatus;

/// Assignment model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Assignment {
    pub id: i32,
    pub asset_id: i32,
    pub assigned_to: String,
    pub assigned_to_email: String,
    pub assigned_to_department: String,
    pub assigned_to_employee_id: String,
    pub assignment_date: NaiveDate,
    pub location: String,
    pub purpose: String,
    pub expected_return_date: Option<NaiveDate>,
    pub terms_and_conditions: bool,
    pub notes: Option<String>,
    /// Opaque signature token (typed name or image-derived)
    pub assignee_signature: String,
    pub assigned_by: String,
    pub assigned_by_signature: String,
    pub status: AssignmentStatus,
    pub created_at: DateTime<Utc>,
    pub returned_at: Option<DateTime<Utc>>,
}

/// Assignment joined with asset summary fields for display
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AssignmentDetails {
    pub id: i32,
    pub asset_id: i32,
    pub assigned_to: String,
    pub assigned_to_email: String,
    pub assigned_to_department: String,
    pub assigned_to_employee_id: String,
    pub assignment_date: NaiveDate,
    pub location: String,
    pub purpose: String,
    pub expected_return_date: Option<NaiveDate>,
    pub terms_and_conditions: bool,
    pub notes: Option<String>,
    pub assignee_signature: String,
    pub assigned_by: String,
    pub assigned_by_signature: String,
    pub status: AssignmentStatus,
    pub created_at: DateTime<Utc>,
    pub returned_at: Option<DateTime<Utc>>,
    pub asset_name: String,
    pub asset_tag: String,
    pub category: String,
}

/// Create assignment request body. All identity fields, the date, location,
/// purpose and both signatures are required and must be non-empty.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateAssignment {
    pub asset_id: i32,
    #[validate(length(min = 1, message = "assigned_to is required"))]
    pub assigned_to: String,
    #[validate(email(message = "assigned_to_email must be a valid email"))]
    pub assigned_to_email: String,
    #[validate(length(min = 1, message = "assigned_to_department is required"))]
    pub assigned_to_department: String,
    #[validate(length(min = 1, message = "assigned_to_employee_id is required"))]
    pub assigned_to_employee_id: String,
    pub assignment_date: NaiveDate,
    #[validate(length(min = 1, message = "location is required"))]
    pub location: String,
    #[validate(length(min = 1, message = "purpose is required"))]
    pub purpose: String,
    pub expected_return_date: Option<NaiveDate>,
    #[serde(default = "default_terms")]
    pub terms_and_conditions: bool,
    pub notes: Option<String>,
    #[validate(length(min = 1, message = "assignee_signature is required"))]
    pub assignee_signature: String,
    #[validate(length(min = 1, message = "assigned_by is required"))]
    pub assigned_by: String,
    #[validate(length(min = 1, message = "assigned_by_signature is required"))]
    pub assigned_by_signature: String,
}

fn default_terms() -> bool {
    true
}

/// Return request body
#[derive(Debug, Deserialize, ToSchema)]
pub struct ReturnAssignment {
    pub return_notes: Option<String>,
}
