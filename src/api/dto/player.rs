//! Player DTOs for API requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{Player, UpdatePlayer};
use crate::services::PlayerDraft;

/// Request body for creating a player profile.
///
/// Field constraints mirror the column widths; required-field enforcement
/// and the date check stay in the service, so everything is optional here.
#[derive(Debug, Default, Deserialize, ToSchema, Validate)]
pub struct CreatePlayerRequest {
    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    pub last_name: Option<String>,
    pub date_of_birth: Option<String>,
    #[validate(length(max = 50, message = "must be at most 50 characters"))]
    pub primary_position: Option<String>,
    #[validate(length(max = 50, message = "must be at most 50 characters"))]
    pub secondary_position: Option<String>,
    #[validate(length(max = 10, message = "must be at most 10 characters"))]
    pub preferred_foot: Option<String>,
    #[validate(length(max = 100, message = "must be at most 100 characters"))]
    pub current_team: Option<String>,
    #[validate(length(max = 50, message = "must be at most 50 characters"))]
    pub team_level: Option<String>,
    #[validate(range(min = 1950, max = 2100, message = "must be a four-digit year"))]
    pub graduation_year: Option<i32>,
}

impl From<CreatePlayerRequest> for PlayerDraft {
    fn from(req: CreatePlayerRequest) -> Self {
        PlayerDraft {
            first_name: req.first_name,
            last_name: req.last_name,
            date_of_birth: req.date_of_birth,
            primary_position: req.primary_position,
            secondary_position: req.secondary_position,
            preferred_foot: req.preferred_foot,
            current_team: req.current_team,
            team_level: req.team_level,
            graduation_year: req.graduation_year,
        }
    }
}

/// Request body for partially updating a player profile.
#[derive(Debug, Default, Deserialize, ToSchema, Validate)]
pub struct UpdatePlayerRequest {
    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    pub last_name: Option<String>,
    pub date_of_birth: Option<String>,
    #[validate(length(max = 50, message = "must be at most 50 characters"))]
    pub primary_position: Option<String>,
    #[validate(length(max = 50, message = "must be at most 50 characters"))]
    pub secondary_position: Option<String>,
    #[validate(length(max = 10, message = "must be at most 10 characters"))]
    pub preferred_foot: Option<String>,
    #[validate(length(max = 100, message = "must be at most 100 characters"))]
    pub current_team: Option<String>,
    #[validate(length(max = 50, message = "must be at most 50 characters"))]
    pub team_level: Option<String>,
    #[validate(range(min = 1950, max = 2100, message = "must be a four-digit year"))]
    pub graduation_year: Option<i32>,
}

impl From<UpdatePlayerRequest> for UpdatePlayer {
    fn from(req: UpdatePlayerRequest) -> Self {
        UpdatePlayer {
            first_name: req.first_name,
            last_name: req.last_name,
            date_of_birth: req.date_of_birth,
            primary_position: req.primary_position,
            secondary_position: req.secondary_position,
            preferred_foot: req.preferred_foot,
            current_team: req.current_team,
            team_level: req.team_level,
            graduation_year: req.graduation_year,
        }
    }
}

/// One player profile in API responses.
#[derive(Debug, Serialize, ToSchema)]
pub struct PlayerResponse {
    pub id: i32,
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

impl From<Player> for PlayerResponse {
    fn from(player: Player) -> Self {
        Self {
            id: player.id,
            first_name: player.first_name,
            last_name: player.last_name,
            date_of_birth: player.date_of_birth,
            primary_position: player.primary_position,
            secondary_position: player.secondary_position,
            preferred_foot: player.preferred_foot,
            current_team: player.current_team,
            team_level: player.team_level,
            graduation_year: player.graduation_year,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_fields_pass_constraints() {
        // Required-field enforcement is the service's job.
        assert!(CreatePlayerRequest::default().validate().is_ok());
        assert!(UpdatePlayerRequest::default().validate().is_ok());
    }

    #[test]
    fn test_blank_first_name_rejected() {
        let req = CreatePlayerRequest {
            first_name: Some(String::new()),
            ..CreatePlayerRequest::default()
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_overlong_team_name_rejected() {
        let req = CreatePlayerRequest {
            current_team: Some("x".repeat(101)),
            ..CreatePlayerRequest::default()
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_implausible_graduation_year_rejected() {
        let req = UpdatePlayerRequest {
            graduation_year: Some(180),
            ..UpdatePlayerRequest::default()
        };
        assert!(req.validate().is_err());
    }
}
