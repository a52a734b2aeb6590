//! Data models for the asset tracker

pub mod asset;
pub mod assignment;
pub mod category;
pub mod enums;
pub mod request;

// Re-export commonly used types
pub use asset::{Asset, CreateAsset, UpdateAsset};
pub use assignment::{Assignment, AssignmentDetails, CreateAssignment, ReturnAssignment};
pub use category::Category;
pub use enums::{AssetStatus, AssignmentStatus, RequestPriority, RequestStatus};
pub use request::{CreateRequest, Request, UpdateRequestStatus};
