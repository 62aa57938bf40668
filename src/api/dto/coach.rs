//! Coach DTOs for API responses.

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{Coach, CoachStatus};

/// One coach in the public listing.
#[derive(Debug, Serialize, ToSchema)]
pub struct CoachResponse {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub status: CoachStatus,
    pub hometown: Option<String>,
    pub position: Option<String>,
}

impl From<Coach> for CoachResponse {
    fn from(coach: Coach) -> Self {
        Self {
            id: coach.id,
            first_name: coach.first_name,
            last_name: coach.last_name,
            status: coach.status,
            hometown: coach.hometown,
            position: coach.position,
        }
    }
}
