//! Procurement request workflow service

use rand::distributions::Alphanumeric;
use rand::Rng;
use validator::Validate;

use crate::{
    error::AppResult,
    models::request::{CreateRequest, Request, UpdateRequestStatus},
    repository::Repository,
};

/// Generate a human-readable request identifier. The random suffix keeps ids
/// unique when two requests land within the same millisecond.
fn generate_request_id() -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(6)
        .map(char::from)
        .collect();
    format!("REQ-{}-{}", chrono::Utc::now().timestamp_millis(), suffix)
}

#[derive(Clone)]
pub struct RequestsService {
    repository: Repository,
}

impl RequestsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Get a request by ID
    pub async fn get_request(&self, id: i32) -> AppResult<Request> {
        self.repository.requests.get_by_id(id).await
    }

    /// List all requests, newest first
    pub async fn list_requests(&self) -> AppResult<Vec<Request>> {
        self.repository.requests.list().await
    }

    /// Create a new procurement request
    pub async fn create_request(&self, request: CreateRequest) -> AppResult<Request> {
        request.validate()?;
        let request_id = generate_request_id();
        self.repository.requests.create(&request_id, &request).await
    }

    /// Update status and approval metadata
    pub async fn update_status(
        &self,
        id: i32,
        update: UpdateRequestStatus,
    ) -> AppResult<Request> {
        self.repository.requests.update_status(id, &update).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn request_ids_have_expected_shape() {
        let id = generate_request_id();
        let mut parts = id.splitn(3, '-');
        assert_eq!(parts.next(), Some("REQ"));
        assert!(parts.next().unwrap().parse::<i64>().is_ok());
        assert_eq!(parts.next().unwrap().len(), 6);
    }

    #[test]
    fn request_ids_are_unique_within_one_millisecond() {
        // A burst of generations lands in far fewer milliseconds than ids,
        // so collisions would show up here without the random suffix.
        let ids: HashSet<String> = (0..1000).map(|_| generate_request_id()).collect();
        assert_eq!(ids.len(), 1000);
    }
}
