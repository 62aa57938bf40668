//! Coach availability business logic.
//!
//! Owns the validation and upsert path for a coach's per-date time slots and
//! the public read side (exact date or rolling 30-day window).

use std::sync::Arc;

use chrono::{Days, Utc};
use serde_json::Value as JsonValue;

use crate::error::{AppError, AppResult};
use crate::models::{Availability, NewAvailability, time_slots_from_json, time_slots_to_json};
use crate::repositories::{AvailabilityRepository, CoachRepository};
use crate::services::validation::{validate_date, validate_time};

/// Days of availability returned when no date filter is supplied.
const DEFAULT_WINDOW_DAYS: u64 = 30;

/// Availability service coordinating coach lookups and slot storage.
#[derive(Clone)]
pub struct AvailabilityService {
    coaches: Arc<dyn CoachRepository>,
    availability: Arc<dyn AvailabilityRepository>,
}

impl AvailabilityService {
    pub fn new(
        coaches: Arc<dyn CoachRepository>,
        availability: Arc<dyn AvailabilityRepository>,
    ) -> Self {
        Self {
            coaches,
            availability,
        }
    }

    /// Replaces a coach's slots for one date.
    ///
    /// Preconditions are checked in order and the first failure wins:
    /// coach exists, date shape, slot payload is an object, every key is a
    /// 24-hour `HH:MM` time, every value is a non-empty array of known
    /// modalities. The write is a keyed upsert: the stored mapping for
    /// `(coach, date)` is fully replaced, never merged.
    pub async fn set_slots(
        &self,
        coach_id: i32,
        date: &str,
        time_slots: &JsonValue,
    ) -> AppResult<Availability> {
        self.coaches
            .find_by_id(coach_id)
            .await?
            .ok_or_else(|| AppError::NotFound {
                entity: "coach".to_string(),
                field: "id".to_string(),
                value: coach_id.to_string(),
            })?;

        validate_date("date", date)?;

        let slots = time_slots.as_object().ok_or_else(|| AppError::InvalidFormat {
            message: "time_slots must be an object mapping times to modality arrays".to_string(),
        })?;

        for key in slots.keys() {
            if !validate_time(key) {
                return Err(AppError::InvalidFormat {
                    message: format!("Invalid time slot key '{}'. Use 24-hour HH:MM", key),
                });
            }
        }

        for (key, value) in slots.iter() {
            let modalities = value.as_array().ok_or_else(|| AppError::InvalidFormat {
                message: format!("Slot '{}' must be an array of modalities", key),
            })?;
            if modalities.is_empty() {
                return Err(AppError::InvalidFormat {
                    message: format!("Slot '{}' must list at least one modality", key),
                });
            }
            for modality in modalities {
                match modality.as_str() {
                    Some("zoom") | Some("inperson") => {}
                    _ => {
                        return Err(AppError::InvalidFormat {
                            message: format!(
                                "Slot '{}' contains an unknown modality; expected 'zoom' or 'inperson'",
                                key
                            ),
                        });
                    }
                }
            }
        }

        // Round-trip through the typed mapping so stored JSON is ordered by
        // time-of-day key.
        let typed = time_slots_from_json(time_slots).map_err(|e| AppError::InvalidFormat {
            message: format!("Invalid time_slots payload: {}", e),
        })?;
        let canonical = time_slots_to_json(&typed).map_err(|e| AppError::Internal {
            source: anyhow::Error::from(e),
        })?;

        self.availability
            .upsert(NewAvailability {
                coach_id,
                date: date.to_string(),
                time_slots: canonical,
            })
            .await
    }

    /// Reads a coach's slots: exact date when a filter is given, otherwise
    /// the inclusive `[today, today + 30 days]` window ascending by date.
    ///
    /// Public read with no ownership restriction; no rows is an empty list,
    /// not an error.
    pub async fn get_slots(
        &self,
        coach_id: i32,
        date: Option<&str>,
    ) -> AppResult<Vec<Availability>> {
        match date {
            Some(date) => self.availability.find_by_date(coach_id, date).await,
            None => {
                let today = Utc::now().date_naive();
                let end = today + Days::new(DEFAULT_WINDOW_DAYS);
                let from = today.format("%Y-%m-%d").to_string();
                let to = end.format("%Y-%m-%d").to_string();
                self.availability.list_range(coach_id, &from, &to).await
            }
        }
    }

    /// Removes a coach's slots for one date.
    ///
    /// Deleting a date with no record is a silent no-op.
    pub async fn delete_slots(&self, coach_id: i32, date: &str) -> AppResult<()> {
        self.coaches
            .find_by_id(coach_id)
            .await?
            .ok_or_else(|| AppError::NotFound {
                entity: "coach".to_string(),
                field: "id".to_string(),
                value: coach_id.to_string(),
            })?;

        validate_date("date", date)?;

        self.availability.delete(coach_id, date).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CoachStatus;
    use crate::repositories::MemoryStore;
    use serde_json::json;

    fn service_with_coach() -> (AvailabilityService, i32) {
        let store = MemoryStore::new();
        let coach = store.seed_coach("Alex", "Rivera", CoachStatus::Approved);
        let service = AvailabilityService::new(Arc::new(store.clone()), Arc::new(store));
        (service, coach.id)
    }

    #[tokio::test]
    async fn test_set_then_get_round_trips() {
        let (service, coach_id) = service_with_coach();
        let slots = json!({ "09:00": ["zoom", "inperson"], "14:30": ["zoom"] });

        let stored = service.set_slots(coach_id, "2030-06-01", &slots).await.unwrap();
        assert!(stored.id > 0);

        let rows = service.get_slots(coach_id, Some("2030-06-01")).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].time_slots, slots);
    }

    #[tokio::test]
    async fn test_unknown_coach_is_not_found() {
        let (service, _) = service_with_coach();
        let result = service.set_slots(9999, "2030-06-01", &json!({})).await;
        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_invalid_month_rejected() {
        let (service, coach_id) = service_with_coach();
        let result = service
            .set_slots(coach_id, "2024-13-01", &json!({ "09:00": ["zoom"] }))
            .await;
        assert!(matches!(result, Err(AppError::InvalidFormat { .. })));
    }

    #[tokio::test]
    async fn test_out_of_range_time_key_rejected() {
        let (service, coach_id) = service_with_coach();
        let result = service
            .set_slots(coach_id, "2030-06-01", &json!({ "24:00": ["zoom"] }))
            .await;
        match result {
            Err(AppError::InvalidFormat { message }) => assert!(message.contains("24:00")),
            other => panic!("expected InvalidFormat, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unknown_modality_rejected() {
        let (service, coach_id) = service_with_coach();
        let result = service
            .set_slots(coach_id, "2030-06-01", &json!({ "09:00": ["video"] }))
            .await;
        assert!(matches!(result, Err(AppError::InvalidFormat { .. })));
    }

    #[tokio::test]
    async fn test_empty_modality_array_rejected() {
        let (service, coach_id) = service_with_coach();
        let result = service
            .set_slots(coach_id, "2030-06-01", &json!({ "09:00": [] }))
            .await;
        assert!(matches!(result, Err(AppError::InvalidFormat { .. })));
    }

    #[tokio::test]
    async fn test_non_object_payload_rejected() {
        let (service, coach_id) = service_with_coach();
        let result = service
            .set_slots(coach_id, "2030-06-01", &json!(["09:00"]))
            .await;
        assert!(matches!(result, Err(AppError::InvalidFormat { .. })));
    }

    #[tokio::test]
    async fn test_reset_replaces_previous_slots() {
        let (service, coach_id) = service_with_coach();
        service
            .set_slots(coach_id, "2030-06-01", &json!({ "09:00": ["zoom"], "10:00": ["zoom"] }))
            .await
            .unwrap();
        service
            .set_slots(coach_id, "2030-06-01", &json!({ "11:00": ["inperson"] }))
            .await
            .unwrap();

        let rows = service.get_slots(coach_id, Some("2030-06-01")).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].time_slots, json!({ "11:00": ["inperson"] }));
    }

    #[tokio::test]
    async fn test_default_window_filters_and_sorts() {
        let (service, coach_id) = service_with_coach();
        let today = Utc::now().date_naive();
        let in_window_late = (today + Days::new(20)).format("%Y-%m-%d").to_string();
        let in_window_early = (today + Days::new(5)).format("%Y-%m-%d").to_string();
        // The window's last day is included, one past it is not.
        let window_edge = (today + Days::new(DEFAULT_WINDOW_DAYS))
            .format("%Y-%m-%d")
            .to_string();
        let past_edge = (today + Days::new(DEFAULT_WINDOW_DAYS + 1))
            .format("%Y-%m-%d")
            .to_string();

        for date in [&in_window_late, &in_window_early, &window_edge, &past_edge] {
            service
                .set_slots(coach_id, date, &json!({ "09:00": ["zoom"] }))
                .await
                .unwrap();
        }

        let rows = service.get_slots(coach_id, None).await.unwrap();
        let dates: Vec<&str> = rows.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(
            dates,
            [
                in_window_early.as_str(),
                in_window_late.as_str(),
                window_edge.as_str()
            ]
        );
    }

    #[tokio::test]
    async fn test_get_unknown_coach_returns_empty() {
        let (service, _) = service_with_coach();
        let rows = service.get_slots(12345, None).await.unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_delete_then_get_is_empty() {
        let (service, coach_id) = service_with_coach();
        service
            .set_slots(coach_id, "2030-06-01", &json!({ "09:00": ["zoom"] }))
            .await
            .unwrap();
        service.delete_slots(coach_id, "2030-06-01").await.unwrap();

        let rows = service.get_slots(coach_id, Some("2030-06-01")).await.unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_date_is_noop() {
        let (service, coach_id) = service_with_coach();
        assert!(service.delete_slots(coach_id, "2030-06-01").await.is_ok());
    }
}
