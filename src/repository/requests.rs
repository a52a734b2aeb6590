//! Procurement requests repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::request::{CreateRequest, Request, UpdateRequestStatus},
};

use super::conflict_on_unique;

#[derive(Clone)]
pub struct RequestsRepository {
    pool: Pool<Postgres>,
}

impl RequestsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get request by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Request> {
        sqlx::query_as::<_, Request>("SELECT * FROM requests WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Request with id {} not found", id)))
    }

    /// List all requests, newest first
    pub async fn list(&self) -> AppResult<Vec<Request>> {
        let requests =
            sqlx::query_as::<_, Request>("SELECT * FROM requests ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;
        Ok(requests)
    }

    /// Create a new request with the given generated request id
    pub async fn create(&self, request_id: &str, request: &CreateRequest) -> AppResult<Request> {
        sqlx::query_as::<_, Request>(
            r#"
            INSERT INTO requests (
                request_id, requester_name, requester_email, department,
                asset_type, description, priority
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(request_id)
        .bind(&request.requester_name)
        .bind(&request.requester_email)
        .bind(&request.department)
        .bind(&request.asset_type)
        .bind(&request.description)
        .bind(request.priority)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| conflict_on_unique(e, "Request id collision, please retry"))
    }

    /// Update request status; approval metadata is recorded when the status
    /// moves off Pending. Approver and notes are overwritten with the body
    /// values, omitted fields included.
    pub async fn update_status(&self, id: i32, update: &UpdateRequestStatus) -> AppResult<Request> {
        sqlx::query_as::<_, Request>(
            r#"
            UPDATE requests SET
                status = $2,
                approved_by = $3,
                notes = $4,
                approved_date = CASE WHEN $2 <> 'Pending' THEN NOW() ELSE approved_date END,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(update.status)
        .bind(&update.approved_by)
        .bind(&update.notes)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Request with id {} not found", id)))
    }
}
