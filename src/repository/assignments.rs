//! Assignments repository for database operations
//!
//! Assignment creation and return both mutate the assignment row and the
//! referenced asset row inside one transaction, with the asset row locked
//! first. "At most one Active assignment per asset" is re-checked under that
//! lock and backed by a partial unique index, so two concurrent assignment
//! requests for the same asset cannot both succeed.

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::assignment::{Assignment, AssignmentDetails, CreateAssignment},
};

use super::conflict_on_unique;

const DETAILS_SELECT: &str = r#"
    SELECT a.*, ast.name AS asset_name, ast.asset_tag, ast.category
    FROM assignments a
    JOIN assets ast ON a.asset_id = ast.id
"#;

#[derive(Clone)]
pub struct AssignmentsRepository {
    pool: Pool<Postgres>,
}

impl AssignmentsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get assignment by ID, joined with asset summary fields
    pub async fn get_by_id(&self, id: i32) -> AppResult<AssignmentDetails> {
        sqlx::query_as::<_, AssignmentDetails>(&format!("{} WHERE a.id = $1", DETAILS_SELECT))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Assignment with id {} not found", id)))
    }

    /// List all assignments, newest first, joined with asset summary fields
    pub async fn list(&self) -> AppResult<Vec<AssignmentDetails>> {
        let assignments = sqlx::query_as::<_, AssignmentDetails>(&format!(
            "{} ORDER BY a.created_at DESC",
            DETAILS_SELECT
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(assignments)
    }

    /// Create a new assignment and mark the asset Assigned
    pub async fn create(&self, assignment: &CreateAssignment) -> AppResult<Assignment> {
        let mut tx = self.pool.begin().await?;

        let asset: Option<i32> =
            sqlx::query_scalar("SELECT id FROM assets WHERE id = $1 FOR UPDATE")
                .bind(assignment.asset_id)
                .fetch_optional(&mut *tx)
                .await?;

        if asset.is_none() {
            return Err(AppError::NotFound(format!(
                "Asset with id {} not found",
                assignment.asset_id
            )));
        }

        let already_assigned: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM assignments WHERE asset_id = $1 AND status = 'Active')",
        )
        .bind(assignment.asset_id)
        .fetch_one(&mut *tx)
        .await?;

        if already_assigned {
            return Err(AppError::Conflict("Asset is already assigned".to_string()));
        }

        let created = sqlx::query_as::<_, Assignment>(
            r#"
            INSERT INTO assignments (
                asset_id, assigned_to, assigned_to_email, assigned_to_department,
                assigned_to_employee_id, assignment_date, location, purpose,
                expected_return_date, terms_and_conditions, notes,
                assignee_signature, assigned_by, assigned_by_signature
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING *
            "#,
        )
        .bind(assignment.asset_id)
        .bind(&assignment.assigned_to)
        .bind(&assignment.assigned_to_email)
        .bind(&assignment.assigned_to_department)
        .bind(&assignment.assigned_to_employee_id)
        .bind(assignment.assignment_date)
        .bind(&assignment.location)
        .bind(&assignment.purpose)
        .bind(assignment.expected_return_date)
        .bind(assignment.terms_and_conditions)
        .bind(&assignment.notes)
        .bind(&assignment.assignee_signature)
        .bind(&assignment.assigned_by)
        .bind(&assignment.assigned_by_signature)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| conflict_on_unique(e, "Asset is already assigned"))?;

        sqlx::query(
            "UPDATE assets SET status = 'Assigned', assigned_to = $2, updated_at = NOW() WHERE id = $1",
        )
        .bind(assignment.asset_id)
        .bind(&assignment.assigned_to)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(created)
    }

    /// Return an assignment and revert the asset to Available. A second
    /// return attempt finds no Active row and fails with NotFound.
    pub async fn return_assignment(
        &self,
        id: i32,
        return_notes: Option<&str>,
    ) -> AppResult<Assignment> {
        let mut tx = self.pool.begin().await?;

        let active: Option<i32> = sqlx::query_scalar(
            "SELECT id FROM assignments WHERE id = $1 AND status = 'Active' FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        if active.is_none() {
            return Err(AppError::NotFound(format!(
                "Active assignment with id {} not found",
                id
            )));
        }

        let returned = sqlx::query_as::<_, Assignment>(
            r#"
            UPDATE assignments
            SET status = 'Returned', returned_at = NOW(), notes = $2
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(return_notes)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            "UPDATE assets SET status = 'Available', assigned_to = NULL, updated_at = NOW() WHERE id = $1",
        )
        .bind(returned.asset_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(returned)
    }
}
