//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{assets, assignments, categories, dashboard, health, oauth, requests, zoho};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "IT Asset Tracker API",
        version = "1.0.0",
        description = "Asset inventory, assignment and procurement REST API",
        license(name = "MIT")
    ),
    servers(
        (url = "/api", description = "API root")
    ),
    paths(
        // Health
        health::health_check,
        // Assets
        assets::list_assets,
        assets::get_asset,
        assets::create_asset,
        assets::update_asset,
        assets::delete_asset,
        // Requests
        requests::list_requests,
        requests::get_request,
        requests::create_request,
        requests::update_request,
        // Categories
        categories::list_categories,
        // Assignments
        assignments::list_assignments,
        assignments::get_assignment,
        assignments::create_assignment,
        assignments::return_assignment,
        // Dashboard
        dashboard::get_stats,
        // OAuth bridge
        oauth::authorize,
        oauth::token,
        oauth::refresh,
        // CRM sync
        zoho::sync_asset,
    ),
    components(
        schemas(
            // Shared
            crate::api::CreatedResponse,
            crate::api::MessageResponse,
            crate::error::ErrorResponse,
            health::HealthResponse,
            // Assets
            crate::models::asset::Asset,
            crate::models::asset::CreateAsset,
            crate::models::asset::UpdateAsset,
            crate::models::enums::AssetStatus,
            // Requests
            crate::models::request::Request,
            crate::models::request::CreateRequest,
            crate::models::request::UpdateRequestStatus,
            crate::models::enums::RequestStatus,
            crate::models::enums::RequestPriority,
            requests::RequestCreatedResponse,
            // Categories
            crate::models::category::Category,
            // Assignments
            crate::models::assignment::Assignment,
            crate::models::assignment::AssignmentDetails,
            crate::models::assignment::CreateAssignment,
            crate::models::assignment::ReturnAssignment,
            crate::models::enums::AssignmentStatus,
            // Dashboard
            crate::services::stats::StatsResponse,
            crate::services::stats::StatusCount,
            // OAuth / CRM
            oauth::TokenRequest,
            oauth::RefreshRequest,
            zoho::SyncAssetRequest,
        )
    ),
    tags(
        (name = "health", description = "Service health"),
        (name = "assets", description = "Asset inventory"),
        (name = "requests", description = "Procurement requests"),
        (name = "categories", description = "Category reference data"),
        (name = "assignments", description = "Assignment lifecycle"),
        (name = "dashboard", description = "Aggregate statistics"),
        (name = "oauth", description = "OAuth2 bridge"),
        (name = "zoho", description = "CRM export")
    )
)]
pub struct ApiDoc;

/// Create the Swagger UI router
pub fn create_openapi_router() -> Router {
    Router::new().merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
