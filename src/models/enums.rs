//! Shared domain enums
//!
//! Status and priority values are stored as their label strings in TEXT
//! columns, so the JSON and SQL representations are identical.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// AssetStatus
// ---------------------------------------------------------------------------

/// Asset lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "TEXT")]
pub enum AssetStatus {
    Available,
    Assigned,
    Maintenance,
    Retired,
}

impl AssetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetStatus::Available => "Available",
            AssetStatus::Assigned => "Assigned",
            AssetStatus::Maintenance => "Maintenance",
            AssetStatus::Retired => "Retired",
        }
    }
}

impl Default for AssetStatus {
    fn default() -> Self {
        AssetStatus::Available
    }
}

impl std::fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AssignmentStatus
// ---------------------------------------------------------------------------

/// Assignment lifecycle status. Active implies the asset is currently held
/// by the assignee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "TEXT")]
pub enum AssignmentStatus {
    Active,
    Returned,
}

impl AssignmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssignmentStatus::Active => "Active",
            AssignmentStatus::Returned => "Returned",
        }
    }
}

impl Default for AssignmentStatus {
    fn default() -> Self {
        AssignmentStatus::Active
    }
}

impl std::fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RequestStatus
// ---------------------------------------------------------------------------

/// Procurement request status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "TEXT")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::Approved => "Approved",
            RequestStatus::Rejected => "Rejected",
        }
    }
}

impl Default for RequestStatus {
    fn default() -> Self {
        RequestStatus::Pending
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RequestPriority
// ---------------------------------------------------------------------------

/// Procurement request priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "TEXT")]
pub enum RequestPriority {
    Low,
    Medium,
    High,
}

impl RequestPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestPriority::Low => "Low",
            RequestPriority::Medium => "Medium",
            RequestPriority::High => "High",
        }
    }
}

impl Default for RequestPriority {
    fn default() -> Self {
        RequestPriority::Medium
    }
}

impl std::fmt::Display for RequestPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_labels_match_stored_values() {
        assert_eq!(AssetStatus::Available.as_str(), "Available");
        assert_eq!(AssignmentStatus::Returned.as_str(), "Returned");
        assert_eq!(RequestStatus::Pending.as_str(), "Pending");
        assert_eq!(RequestPriority::Medium.as_str(), "Medium");
    }

    #[test]
    fn json_representation_uses_labels() {
        assert_eq!(
            serde_json::to_string(&AssetStatus::Assigned).unwrap(),
            "\"Assigned\""
        );
        let status: AssignmentStatus = serde_json::from_str("\"Active\"").unwrap();
        assert_eq!(status, AssignmentStatus::Active);
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!(serde_json::from_str::<RequestStatus>("\"Archived\"").is_err());
    }
}
