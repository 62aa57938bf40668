//! Player models for database operations.
//!
//! Every player row carries the owning user's id; all queries against this
//! table must be scoped by that id.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Player query model for SELECT operations
#[derive(Debug, Queryable, Selectable, Serialize, Clone)]
#[diesel(table_name = crate::schema::players)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Player {
    pub id: i32,
    pub user_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub primary_position: Option<String>,
    pub secondary_position: Option<String>,
    pub preferred_foot: Option<String>,
    pub current_team: Option<String>,
    pub team_level: Option<String>,
    pub graduation_year: Option<i32>,
    pub created_at: NaiveDateTime,
}

/// NewPlayer insert model for INSERT operations
#[derive(Debug, Insertable, Deserialize, Clone)]
#[diesel(table_name = crate::schema::players)]
pub struct NewPlayer {
    pub user_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub primary_position: Option<String>,
    pub secondary_position: Option<String>,
    pub preferred_foot: Option<String>,
    pub current_team: Option<String>,
    pub team_level: Option<String>,
    pub graduation_year: Option<i32>,
}

/// UpdatePlayer model for partial UPDATE operations
#[derive(Debug, AsChangeset, Deserialize, Clone, Default)]
#[diesel(table_name = crate::schema::players)]
pub struct UpdatePlayer {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<String>,
    pub primary_position: Option<String>,
    pub secondary_position: Option<String>,
    pub preferred_foot: Option<String>,
    pub current_team: Option<String>,
    pub team_level: Option<String>,
    pub graduation_year: Option<i32>,
}

impl UpdatePlayer {
    /// True when no field is set. Diesel refuses to build an UPDATE
    /// statement from an all-`None` changeset, so callers must not pass one
    /// through.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.date_of_birth.is_none()
            && self.primary_position.is_none()
            && self.secondary_position.is_none()
            && self.preferred_foot.is_none()
            && self.current_team.is_none()
            && self.team_level.is_none()
            && self.graduation_year.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_emptiness() {
        assert!(UpdatePlayer::default().is_empty());
        let update = UpdatePlayer {
            team_level: Some("club".to_string()),
            ..UpdatePlayer::default()
        };
        assert!(!update.is_empty());
    }
}
