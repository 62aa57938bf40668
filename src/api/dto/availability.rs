//! Availability DTOs for API requests and responses.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use utoipa::{IntoParams, ToSchema};

use crate::models::Availability;

/// Request body for replacing a coach's slots on one date.
///
/// `time_slots` is kept as raw JSON so shape errors surface through the
/// service's ordered validation rather than a deserialization failure.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SetAvailabilityRequest {
    pub date: String,
    pub time_slots: JsonValue,
}

/// Query parameters for reading a coach's slots.
#[derive(Debug, Deserialize, IntoParams)]
pub struct AvailabilityQueryParams {
    /// Exact date filter (`YYYY-MM-DD`); omit for the next 30 days
    pub date: Option<String>,
}

/// One availability record in API responses.
#[derive(Debug, Serialize, ToSchema)]
pub struct AvailabilityResponse {
    pub id: i32,
    pub coach_id: i32,
    pub date: String,
    pub time_slots: JsonValue,
}

impl From<Availability> for AvailabilityResponse {
    fn from(record: Availability) -> Self {
        Self {
            id: record.id,
            coach_id: record.coach_id,
            date: record.date,
            time_slots: record.time_slots,
        }
    }
}
