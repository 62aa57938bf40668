//! Player profile business logic.
//!
//! Thin CRUD over the player repository with required-field and date checks;
//! every operation is scoped to the calling user.

use std::sync::Arc;

use crate::error::{AppError, AppResult};
use crate::models::{NewPlayer, Player, UpdatePlayer};
use crate::repositories::PlayerRepository;
use crate::services::validation::validate_date;

/// Unvalidated player fields as supplied by the client.
#[derive(Debug, Clone, Default)]
pub struct PlayerDraft {
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

/// Player service wrapping the repository with ownership-scoped operations.
#[derive(Clone)]
pub struct PlayerService {
    repo: Arc<dyn PlayerRepository>,
}

impl PlayerService {
    pub fn new(repo: Arc<dyn PlayerRepository>) -> Self {
        Self { repo }
    }

    /// Creates a player owned by `user_id`.
    pub async fn create_player(&self, user_id: i32, draft: PlayerDraft) -> AppResult<Player> {
        let (Some(first_name), Some(last_name), Some(date_of_birth)) =
            (draft.first_name, draft.last_name, draft.date_of_birth)
        else {
            return Err(AppError::MissingField {
                message: "first_name, last_name and date_of_birth are required".to_string(),
            });
        };

        validate_date("date_of_birth", &date_of_birth)?;

        self.repo
            .create(NewPlayer {
                user_id,
                first_name,
                last_name,
                date_of_birth,
                primary_position: draft.primary_position,
                secondary_position: draft.secondary_position,
                preferred_foot: draft.preferred_foot,
                current_team: draft.current_team,
                team_level: draft.team_level,
                graduation_year: draft.graduation_year,
            })
            .await
    }

    /// Gets one of the caller's players, or `NotFound`.
    pub async fn get_player(&self, user_id: i32, player_id: i32) -> AppResult<Player> {
        self.repo
            .find_owned(player_id, user_id)
            .await?
            .ok_or_else(|| player_not_found(player_id))
    }

    /// Lists all of the caller's players.
    pub async fn list_players(&self, user_id: i32) -> AppResult<Vec<Player>> {
        self.repo.list_for_user(user_id).await
    }

    /// Updates one of the caller's players; unknown or foreign ids are 404.
    /// An update that sets no fields returns the row unchanged.
    pub async fn update_player(
        &self,
        user_id: i32,
        player_id: i32,
        update: UpdatePlayer,
    ) -> AppResult<Player> {
        // Ownership probe first so foreign ids read as absent.
        let existing = self.get_player(user_id, player_id).await?;

        if let Some(date_of_birth) = update.date_of_birth.as_deref() {
            validate_date("date_of_birth", date_of_birth)?;
        }

        // An all-None changeset is a storage-level error, not a no-op.
        if update.is_empty() {
            return Ok(existing);
        }

        self.repo.update_owned(player_id, user_id, update).await
    }

    /// Deletes one of the caller's players; unknown or foreign ids are 404.
    pub async fn delete_player(&self, user_id: i32, player_id: i32) -> AppResult<()> {
        let affected = self.repo.delete_owned(player_id, user_id).await?;
        if affected == 0 {
            return Err(player_not_found(player_id));
        }
        Ok(())
    }
}

fn player_not_found(player_id: i32) -> AppError {
    AppError::NotFound {
        entity: "player".to_string(),
        field: "id".to_string(),
        value: player_id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MemoryStore;

    fn setup() -> (PlayerService, MemoryStore) {
        let store = MemoryStore::new();
        let service = PlayerService::new(Arc::new(store.clone()));
        (service, store)
    }

    fn draft() -> PlayerDraft {
        PlayerDraft {
            first_name: Some("Sam".to_string()),
            last_name: Some("Lee".to_string()),
            date_of_birth: Some("2010-04-12".to_string()),
            ..PlayerDraft::default()
        }
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let (service, _) = setup();
        let player = service.create_player(1, draft()).await.unwrap();
        let fetched = service.get_player(1, player.id).await.unwrap();
        assert_eq!(fetched.first_name, "Sam");
    }

    #[tokio::test]
    async fn test_create_requires_fields() {
        let (service, _) = setup();
        let result = service.create_player(1, PlayerDraft::default()).await;
        assert!(matches!(result, Err(AppError::MissingField { .. })));
    }

    #[tokio::test]
    async fn test_create_rejects_bad_birth_date() {
        let (service, _) = setup();
        let result = service
            .create_player(
                1,
                PlayerDraft {
                    date_of_birth: Some("12/04/2010".to_string()),
                    ..draft()
                },
            )
            .await;
        assert!(matches!(result, Err(AppError::InvalidFormat { .. })));
    }

    #[tokio::test]
    async fn test_foreign_player_reads_as_not_found() {
        let (service, store) = setup();
        let player = store.seed_player(2, "Sam", "Lee");
        let result = service.get_player(1, player.id).await;
        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete_foreign_player_is_not_found() {
        let (service, store) = setup();
        let player = store.seed_player(2, "Sam", "Lee");
        let result = service.delete_player(1, player.id).await;
        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_empty_update_returns_row_unchanged() {
        let (service, _) = setup();
        let player = service.create_player(1, draft()).await.unwrap();
        let result = service
            .update_player(1, player.id, UpdatePlayer::default())
            .await
            .unwrap();
        assert_eq!(result.id, player.id);
        assert_eq!(result.first_name, "Sam");
        assert_eq!(result.date_of_birth, "2010-04-12");
    }

    #[tokio::test]
    async fn test_update_owned_player() {
        let (service, _) = setup();
        let player = service.create_player(1, draft()).await.unwrap();
        let updated = service
            .update_player(
                1,
                player.id,
                UpdatePlayer {
                    current_team: Some("FC North".to_string()),
                    ..UpdatePlayer::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.current_team.as_deref(), Some("FC North"));
    }
}
