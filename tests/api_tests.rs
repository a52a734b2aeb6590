//! API integration tests
//!
//! These run against a live server with a reachable Postgres instance:
//! `cargo test -- --ignored`

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:3001/api";

/// Unique asset tag per test run; the database persists between runs.
fn unique_tag(prefix: &str) -> String {
    format!("{}-{}", prefix, chrono::Utc::now().timestamp_micros())
}

async fn create_asset(client: &Client, tag: &str) -> i32 {
    let response = client
        .post(format!("{}/assets", BASE_URL))
        .json(&json!({
            "asset_tag": tag,
            "name": "Laptop X",
            "category": "Laptop"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    body["id"].as_i64().expect("No id in response") as i32
}

fn assignment_body(asset_id: i32) -> Value {
    json!({
        "asset_id": asset_id,
        "assigned_to": "Jane",
        "assigned_to_email": "j@co.com",
        "assigned_to_department": "Eng",
        "assigned_to_employee_id": "E1",
        "assignment_date": "2024-01-01",
        "location": "HQ",
        "purpose": "work",
        "assignee_signature": "Jane Doe",
        "assigned_by": "IT Desk",
        "assigned_by_signature": "IT Desk"
    })
}

async fn get_asset(client: &Client, id: i32) -> Value {
    let response = client
        .get(format!("{}/assets/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    response.json().await.expect("Failed to parse response")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_categories_seeded() {
    let client = Client::new();

    let response = client
        .get(format!("{}/categories", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let names: Vec<&str> = body
        .as_array()
        .expect("Expected array")
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"Laptop"));
    assert!(names.contains(&"Software License"));
}

#[tokio::test]
#[ignore]
async fn test_duplicate_asset_tag_conflicts() {
    let client = Client::new();
    let tag = unique_tag("DUP");

    create_asset(&client, &tag).await;

    let response = client
        .post(format!("{}/assets", BASE_URL))
        .json(&json!({
            "asset_tag": tag,
            "name": "Laptop Y",
            "category": "Laptop"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 409);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["error"].is_string());
}

#[tokio::test]
#[ignore]
async fn test_asset_create_missing_name_rejected() {
    let client = Client::new();

    let response = client
        .post(format!("{}/assets", BASE_URL))
        .json(&json!({
            "asset_tag": unique_tag("VAL"),
            "name": "",
            "category": "Laptop"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_assignment_unknown_asset_not_found() {
    let client = Client::new();

    let response = client
        .post(format!("{}/assignments", BASE_URL))
        .json(&assignment_body(999_999_999))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_assignment_missing_signature_rejected() {
    let client = Client::new();
    let asset_id = create_asset(&client, &unique_tag("SIG")).await;

    let mut body = assignment_body(asset_id);
    body["assignee_signature"] = json!("");

    let response = client
        .post(format!("{}/assignments", BASE_URL))
        .json(&body)
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    // Fail-fast validation must not have touched the asset
    let asset = get_asset(&client, asset_id).await;
    assert_eq!(asset["status"], "Available");
}

/// Full assignment lifecycle: create, assign, double-assign conflict,
/// return, double-return rejection.
#[tokio::test]
#[ignore]
async fn test_assignment_lifecycle() {
    let client = Client::new();
    let asset_id = create_asset(&client, &unique_tag("AST")).await;

    // Assign
    let response = client
        .post(format!("{}/assignments", BASE_URL))
        .json(&assignment_body(asset_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    let assignment_id = body["id"].as_i64().expect("No id in response");

    // Asset flips to Assigned with the assignee label
    let asset = get_asset(&client, asset_id).await;
    assert_eq!(asset["status"], "Assigned");
    assert_eq!(asset["assigned_to"], "Jane");

    // Second assignment on the same asset conflicts
    let response = client
        .post(format!("{}/assignments", BASE_URL))
        .json(&assignment_body(asset_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 409);

    // Return
    let response = client
        .put(format!("{}/assignments/{}/return", BASE_URL, assignment_id))
        .json(&json!({ "return_notes": "returned, good condition" }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    // Asset reverts to Available and the assignee label is cleared
    let asset = get_asset(&client, asset_id).await;
    assert_eq!(asset["status"], "Available");
    assert!(asset["assigned_to"].is_null());

    // Notes were overwritten on the assignment record
    let response = client
        .get(format!("{}/assignments/{}", BASE_URL, assignment_id))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "Returned");
    assert_eq!(body["notes"], "returned, good condition");
    assert!(body["returned_at"].is_string());

    // Second return attempt is an error, not a no-op
    let response = client
        .put(format!("{}/assignments/{}/return", BASE_URL, assignment_id))
        .json(&json!({ "return_notes": "again" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_delete_assigned_asset_conflicts() {
    let client = Client::new();
    let asset_id = create_asset(&client, &unique_tag("DEL")).await;

    let response = client
        .post(format!("{}/assignments", BASE_URL))
        .json(&assignment_body(asset_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let response = client
        .delete(format!("{}/assets/{}", BASE_URL, asset_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 409);
}

#[tokio::test]
#[ignore]
async fn test_status_not_client_settable_while_assigned() {
    let client = Client::new();
    let asset_id = create_asset(&client, &unique_tag("STS")).await;

    let response = client
        .post(format!("{}/assignments", BASE_URL))
        .json(&assignment_body(asset_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let response = client
        .put(format!("{}/assets/{}", BASE_URL, asset_id))
        .json(&json!({ "status": "Available" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 409);

    // Other fields remain editable
    let response = client
        .put(format!("{}/assets/{}", BASE_URL, asset_id))
        .json(&json!({ "location": "Branch office" }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
}

#[tokio::test]
#[ignore]
async fn test_client_cannot_manufacture_assigned_status() {
    let client = Client::new();

    // On create
    let response = client
        .post(format!("{}/assets", BASE_URL))
        .json(&json!({
            "asset_tag": unique_tag("MAN"),
            "name": "Laptop X",
            "category": "Laptop",
            "status": "Assigned"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);

    // On update, even with no active assignment in the way
    let asset_id = create_asset(&client, &unique_tag("MAN")).await;
    let response = client
        .put(format!("{}/assets/{}", BASE_URL, asset_id))
        .json(&json!({ "status": "Assigned" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);

    let asset = get_asset(&client, asset_id).await;
    assert_eq!(asset["status"], "Available");
}

/// A status write racing an assignment must never leave an asset whose
/// status disagrees with its Active assignment.
#[tokio::test]
#[ignore]
async fn test_concurrent_status_write_keeps_invariant() {
    let client = Client::new();
    let asset_id = create_asset(&client, &unique_tag("INV")).await;

    let assign = {
        let client = client.clone();
        let body = assignment_body(asset_id);
        tokio::spawn(async move {
            client
                .post(format!("{}/assignments", BASE_URL))
                .json(&body)
                .send()
                .await
                .expect("Failed to send request")
                .status()
                .as_u16()
        })
    };
    let update = {
        let client = client.clone();
        tokio::spawn(async move {
            client
                .put(format!("{}/assets/{}", BASE_URL, asset_id))
                .json(&json!({ "status": "Maintenance" }))
                .send()
                .await
                .expect("Failed to send request")
                .status()
                .as_u16()
        })
    };

    // The assignment always wins the asset (the update either lands first
    // and is overwritten, or loses the row lock and conflicts).
    assert_eq!(assign.await.expect("task panicked"), 201);
    let update_status = update.await.expect("task panicked");
    assert!(update_status == 200 || update_status == 409);

    let asset = get_asset(&client, asset_id).await;
    assert_eq!(asset["status"], "Assigned");
}

#[tokio::test]
#[ignore]
async fn test_concurrent_assignments_single_winner() {
    let client = Client::new();
    let asset_id = create_asset(&client, &unique_tag("RACE")).await;

    let mut handles = Vec::new();
    for _ in 0..8 {
        let client = client.clone();
        let body = assignment_body(asset_id);
        handles.push(tokio::spawn(async move {
            client
                .post(format!("{}/assignments", BASE_URL))
                .json(&body)
                .send()
                .await
                .expect("Failed to send request")
                .status()
                .as_u16()
        }));
    }

    let mut created = 0;
    let mut conflicts = 0;
    for handle in handles {
        match handle.await.expect("task panicked") {
            201 => created += 1,
            409 => conflicts += 1,
            other => panic!("unexpected status {}", other),
        }
    }

    assert_eq!(created, 1);
    assert_eq!(conflicts, 7);
}

#[tokio::test]
#[ignore]
async fn test_request_workflow() {
    let client = Client::new();

    let response = client
        .post(format!("{}/requests", BASE_URL))
        .json(&json!({
            "requester_name": "Jane",
            "requester_email": "j@co.com",
            "department": "Eng",
            "asset_type": "Laptop",
            "description": "Replacement laptop"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    let id = body["id"].as_i64().expect("No id in response");
    let request_id = body["request_id"].as_str().expect("No request_id");
    assert!(request_id.starts_with("REQ-"));

    // Defaults
    let response = client
        .get(format!("{}/requests/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "Pending");
    assert_eq!(body["priority"], "Medium");
    assert!(body["approved_date"].is_null());

    // Approve
    let response = client
        .put(format!("{}/requests/{}", BASE_URL, id))
        .json(&json!({
            "status": "Approved",
            "approved_by": "CTO"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let response = client
        .get(format!("{}/requests/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "Approved");
    assert_eq!(body["approved_by"], "CTO");
    assert!(body["approved_date"].is_string());
}

#[tokio::test]
#[ignore]
async fn test_request_invalid_status_rejected() {
    let client = Client::new();

    let response = client
        .post(format!("{}/requests", BASE_URL))
        .json(&json!({
            "requester_name": "Jane",
            "requester_email": "j@co.com",
            "department": "Eng",
            "asset_type": "Laptop"
        }))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    let id = body["id"].as_i64().unwrap();

    let response = client
        .put(format!("{}/requests/{}", BASE_URL, id))
        .json(&json!({ "status": "Archived" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["error"].is_string());
}

#[tokio::test]
#[ignore]
async fn test_malformed_body_gets_error_shape() {
    let client = Client::new();
    let asset_id = create_asset(&client, &unique_tag("BODY")).await;

    // Required field missing entirely
    let mut body = assignment_body(asset_id);
    body.as_object_mut().unwrap().remove("assignment_date");

    let response = client
        .post(format!("{}/assignments", BASE_URL))
        .json(&body)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["error"].is_string());
}

#[tokio::test]
#[ignore]
async fn test_request_update_overwrites_notes() {
    let client = Client::new();

    let response = client
        .post(format!("{}/requests", BASE_URL))
        .json(&json!({
            "requester_name": "Jane",
            "requester_email": "j@co.com",
            "department": "Eng",
            "asset_type": "Laptop"
        }))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    let id = body["id"].as_i64().unwrap();

    let response = client
        .put(format!("{}/requests/{}", BASE_URL, id))
        .json(&json!({
            "status": "Approved",
            "approved_by": "CTO",
            "notes": "budget confirmed"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    // A later update without notes clears them rather than keeping the old
    // value
    let response = client
        .put(format!("{}/requests/{}", BASE_URL, id))
        .json(&json!({ "status": "Rejected" }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let response = client
        .get(format!("{}/requests/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "Rejected");
    assert!(body["notes"].is_null());
    assert!(body["approved_by"].is_null());
}

#[tokio::test]
#[ignore]
async fn test_dashboard_stats_shape() {
    let client = Client::new();
    create_asset(&client, &unique_tag("DSH")).await;

    let response = client
        .get(format!("{}/dashboard/stats", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["totalAssets"].as_i64().unwrap() >= 1);
    assert!(body["pendingRequests"].is_number());

    let by_status = body["assetsByStatus"].as_array().expect("Expected array");
    let available = by_status
        .iter()
        .find(|e| e["status"] == "Available")
        .expect("No Available bucket");
    assert!(available["count"].as_i64().unwrap() >= 1);
}
