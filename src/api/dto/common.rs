//! DTOs shared across endpoint groups.

use serde::Serialize;
use utoipa::ToSchema;

/// Acknowledgement body for delete operations.
#[derive(Debug, Serialize, ToSchema)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
