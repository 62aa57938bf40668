//! Coach availability models.
//!
//! An availability record holds one coach's bookable time slots for a single
//! calendar date. The slot mapping is stored as JSONB and parsed into
//! [`TimeSlots`] for type-safe access.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

/// Booking medium for a time slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    Zoom,
    Inperson,
}

impl Modality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Modality::Zoom => "zoom",
            Modality::Inperson => "inperson",
        }
    }
}

/// Mapping from an `HH:MM` time-of-day key to the modalities offered at that
/// time. `BTreeMap` keeps the slots ordered by time.
///
/// Duplicate modalities within one slot are allowed and preserved.
pub type TimeSlots = BTreeMap<String, Vec<Modality>>;

/// Parse a JSONB slot mapping into typed [`TimeSlots`].
pub fn time_slots_from_json(value: &JsonValue) -> Result<TimeSlots, serde_json::Error> {
    serde_json::from_value(value.clone())
}

/// Convert typed [`TimeSlots`] to JSONB for database storage.
pub fn time_slots_to_json(slots: &TimeSlots) -> Result<JsonValue, serde_json::Error> {
    serde_json::to_value(slots)
}

/// Availability query model for SELECT operations
#[derive(Debug, Queryable, Selectable, Serialize, Clone)]
#[diesel(table_name = crate::schema::coach_availability)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Availability {
    pub id: i32,
    pub coach_id: i32,
    pub date: String,
    pub time_slots: JsonValue,
    pub created_at: NaiveDateTime,
}

/// NewAvailability insert model for INSERT/upsert operations
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::coach_availability)]
pub struct NewAvailability {
    pub coach_id: i32,
    pub date: String,
    pub time_slots: JsonValue,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_time_slots_roundtrip() {
        let value = json!({
            "09:00": ["zoom", "inperson"],
            "14:30": ["zoom"]
        });
        let slots = time_slots_from_json(&value).unwrap();
        assert_eq!(slots["09:00"], vec![Modality::Zoom, Modality::Inperson]);
        assert_eq!(time_slots_to_json(&slots).unwrap(), value);
    }

    #[test]
    fn test_time_slots_ordered_by_time() {
        let value = json!({
            "14:30": ["zoom"],
            "09:00": ["inperson"],
            "11:15": ["zoom"]
        });
        let slots = time_slots_from_json(&value).unwrap();
        let keys: Vec<&String> = slots.keys().collect();
        assert_eq!(keys, ["09:00", "11:15", "14:30"]);
    }

    #[test]
    fn test_unknown_modality_rejected() {
        let value = json!({ "09:00": ["video"] });
        assert!(time_slots_from_json(&value).is_err());
    }

    #[test]
    fn test_duplicate_modalities_preserved() {
        let value = json!({ "09:00": ["zoom", "zoom"] });
        let slots = time_slots_from_json(&value).unwrap();
        assert_eq!(slots["09:00"].len(), 2);
    }
}
