//! Assignment engine service

use validator::Validate;

use crate::{
    error::AppResult,
    models::assignment::{Assignment, AssignmentDetails, CreateAssignment},
    repository::Repository,
};

#[derive(Clone)]
pub struct AssignmentsService {
    repository: Repository,
}

impl AssignmentsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Get an assignment by ID, with asset summary fields
    pub async fn get_assignment(&self, id: i32) -> AppResult<AssignmentDetails> {
        self.repository.assignments.get_by_id(id).await
    }

    /// List all assignments, newest first
    pub async fn list_assignments(&self) -> AppResult<Vec<AssignmentDetails>> {
        self.repository.assignments.list().await
    }

    /// Assign an asset. Fails fast on missing fields, an unknown asset, or
    /// an asset that already has an Active assignment.
    pub async fn create_assignment(&self, assignment: CreateAssignment) -> AppResult<Assignment> {
        assignment.validate()?;
        self.repository.assignments.create(&assignment).await
    }

    /// Process a return. The second attempt on the same assignment fails
    /// with NotFound.
    pub async fn return_assignment(
        &self,
        id: i32,
        return_notes: Option<&str>,
    ) -> AppResult<Assignment> {
        self.repository
            .assignments
            .return_assignment(id, return_notes)
            .await
    }
}
