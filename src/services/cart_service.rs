//! Booking-cart business logic.
//!
//! Validates booking drafts, enforces player ownership on the single-add
//! path, and reconciles guest carts into an authenticated user's cart.

use std::sync::Arc;

use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::models::{CartItem, CartItemView, NewCartItem};
use crate::repositories::{CartRepository, PlayerRepository};

/// Whether to verify that a draft's `player_id` belongs to the caller.
///
/// The single-add path enforces ownership; the guest-cart merge path skips
/// it because guest drafts were assembled client-side before login. The
/// asymmetry is deliberate and explicit at each call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnershipCheck {
    Enforce,
    Skip,
}

/// A booking draft as supplied by the client, before validation.
///
/// Also the element shape of a guest cart: all fields optional so missing
/// required fields surface as our own error, not a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CartDraft {
    pub session_type: Option<String>,
    pub coach_id: Option<i32>,
    pub session_date: Option<String>,
    pub session_time: Option<String>,
    pub quantity: Option<i32>,
    pub notes: Option<String>,
    pub player_id: Option<i32>,
}

/// Cart service coordinating draft validation and cart storage.
#[derive(Clone)]
pub struct CartService {
    cart: Arc<dyn CartRepository>,
    players: Arc<dyn PlayerRepository>,
}

impl CartService {
    pub fn new(cart: Arc<dyn CartRepository>, players: Arc<dyn PlayerRepository>) -> Self {
        Self { cart, players }
    }

    /// Validates one draft and maps it onto an insert row for `user_id`.
    ///
    /// Required fields are reported together in one message. When ownership
    /// is enforced and the referenced player is missing or owned by someone
    /// else, the error is `InvalidReference` rather than `NotFound`, so the
    /// response does not reveal whether another user's player id exists.
    ///
    /// No format validation is applied to session_date/session_time here;
    /// the cart accepts dates the coach never declared availability for.
    async fn validate_draft(
        &self,
        user_id: i32,
        draft: CartDraft,
        ownership: OwnershipCheck,
    ) -> AppResult<NewCartItem> {
        let (Some(session_type), Some(coach_id), Some(session_date), Some(session_time)) = (
            draft.session_type,
            draft.coach_id,
            draft.session_date,
            draft.session_time,
        ) else {
            return Err(AppError::MissingField {
                message: "session_type, coach_id, session_date and session_time are required"
                    .to_string(),
            });
        };

        if ownership == OwnershipCheck::Enforce {
            if let Some(player_id) = draft.player_id {
                let owned = self.players.find_owned(player_id, user_id).await?;
                if owned.is_none() {
                    return Err(AppError::InvalidReference {
                        message: "Invalid player_id".to_string(),
                    });
                }
            }
        }

        Ok(NewCartItem {
            user_id,
            coach_id,
            session_type,
            session_date,
            session_time,
            // Zero counts as unset, matching the original falsy-default.
            quantity: draft.quantity.filter(|q| *q != 0).unwrap_or(1),
            notes: draft.notes,
            player_id: draft.player_id,
        })
    }

    /// Adds one validated draft to the caller's cart.
    pub async fn add_item(&self, user_id: i32, draft: CartDraft) -> AppResult<CartItem> {
        let item = self
            .validate_draft(user_id, draft, OwnershipCheck::Enforce)
            .await?;
        self.cart.insert(item).await
    }

    /// Lists the caller's cart as a denormalized view.
    pub async fn list_items(&self, user_id: i32) -> AppResult<Vec<CartItemView>> {
        self.cart.list_view(user_id).await
    }

    /// Deletes by `(id, user_id)`.
    ///
    /// Returns rows affected; zero when the id does not exist or belongs to
    /// another user. Callers treat both the same way.
    pub async fn remove_item(&self, user_id: i32, item_id: i32) -> AppResult<usize> {
        self.cart.delete(item_id, user_id).await
    }

    /// Reconciles a guest cart into the caller's cart.
    ///
    /// Every draft is validated (ownership skipped), `notes` defaults to an
    /// empty string, and the batch is inserted in one statement so either
    /// all drafts land or none do.
    pub async fn merge_guest_cart(
        &self,
        user_id: i32,
        drafts: Vec<CartDraft>,
    ) -> AppResult<Vec<CartItem>> {
        if drafts.is_empty() {
            return Ok(Vec::new());
        }

        let mut items = Vec::with_capacity(drafts.len());
        for draft in drafts {
            let mut item = self
                .validate_draft(user_id, draft, OwnershipCheck::Skip)
                .await?;
            item.notes = Some(item.notes.unwrap_or_default());
            items.push(item);
        }

        self.cart.insert_batch(items).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CoachStatus;
    use crate::repositories::MemoryStore;

    fn draft(coach_id: i32, time: &str) -> CartDraft {
        CartDraft {
            session_type: Some("private".to_string()),
            coach_id: Some(coach_id),
            session_date: Some("2030-06-01".to_string()),
            session_time: Some(time.to_string()),
            ..CartDraft::default()
        }
    }

    fn setup() -> (CartService, MemoryStore, i32) {
        let store = MemoryStore::new();
        let coach = store.seed_coach("Alex", "Rivera", CoachStatus::Approved);
        let service = CartService::new(Arc::new(store.clone()), Arc::new(store.clone()));
        (service, store, coach.id)
    }

    #[tokio::test]
    async fn test_add_defaults_quantity_to_one() {
        let (service, _, coach_id) = setup();
        let item = service.add_item(42, draft(coach_id, "10:00")).await.unwrap();
        assert_eq!(item.user_id, 42);
        assert_eq!(item.quantity, 1);
        assert_eq!(item.notes, None);
    }

    #[tokio::test]
    async fn test_add_zero_quantity_defaults_to_one() {
        let (service, _, coach_id) = setup();
        let item = service
            .add_item(
                42,
                CartDraft {
                    quantity: Some(0),
                    ..draft(coach_id, "10:00")
                },
            )
            .await
            .unwrap();
        assert_eq!(item.quantity, 1);
    }

    #[tokio::test]
    async fn test_missing_required_fields_enumerated() {
        let (service, _, _) = setup();
        let result = service.add_item(42, CartDraft::default()).await;
        match result {
            Err(AppError::MissingField { message }) => {
                for field in ["session_type", "coach_id", "session_date", "session_time"] {
                    assert!(message.contains(field), "message should name {}", field);
                }
            }
            other => panic!("expected MissingField, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_foreign_player_is_invalid_reference() {
        let (service, store, coach_id) = setup();
        let other_users_player = store.seed_player(7, "Sam", "Lee");

        let result = service
            .add_item(
                42,
                CartDraft {
                    player_id: Some(other_users_player.id),
                    ..draft(coach_id, "10:00")
                },
            )
            .await;
        match result {
            Err(AppError::InvalidReference { message }) => {
                assert_eq!(message, "Invalid player_id");
            }
            other => panic!("expected InvalidReference, got {:?}", other),
        }

        // Identical request without the player reference succeeds.
        assert!(service.add_item(42, draft(coach_id, "10:00")).await.is_ok());
    }

    #[tokio::test]
    async fn test_owned_player_accepted() {
        let (service, store, coach_id) = setup();
        let player = store.seed_player(42, "Sam", "Lee");

        let item = service
            .add_item(
                42,
                CartDraft {
                    player_id: Some(player.id),
                    ..draft(coach_id, "10:00")
                },
            )
            .await
            .unwrap();
        assert_eq!(item.player_id, Some(player.id));
    }

    #[tokio::test]
    async fn test_cross_user_delete_is_silent_noop() {
        let (service, store, coach_id) = setup();
        let item = service.add_item(1, draft(coach_id, "10:00")).await.unwrap();

        let affected = service.remove_item(2, item.id).await.unwrap();
        assert_eq!(affected, 0);
        assert_eq!(store.cart_len(), 1);

        let affected = service.remove_item(1, item.id).await.unwrap();
        assert_eq!(affected, 1);
        assert_eq!(store.cart_len(), 0);
    }

    #[tokio::test]
    async fn test_list_is_scoped_to_caller() {
        let (service, _, coach_id) = setup();
        service.add_item(1, draft(coach_id, "10:00")).await.unwrap();
        service.add_item(2, draft(coach_id, "11:00")).await.unwrap();

        let items = service.list_items(1).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].coach_first_name, "Alex");
        assert_eq!(items[0].coach_last_name, "Rivera");
    }

    #[tokio::test]
    async fn test_merge_defaults_and_assigns_owner() {
        let (service, _, coach_id) = setup();
        let drafts = vec![
            CartDraft {
                session_type: Some("private".to_string()),
                coach_id: Some(coach_id),
                session_date: Some("2024-06-01".to_string()),
                session_time: Some("10:00".to_string()),
                ..CartDraft::default()
            },
            CartDraft {
                session_type: Some("group".to_string()),
                coach_id: Some(coach_id),
                session_date: Some("2024-06-01".to_string()),
                session_time: Some("11:00".to_string()),
                ..CartDraft::default()
            },
        ];

        let created = service.merge_guest_cart(42, drafts).await.unwrap();
        assert_eq!(created.len(), 2);
        for item in &created {
            assert_eq!(item.user_id, 42);
            assert_eq!(item.quantity, 1);
            assert_eq!(item.notes.as_deref(), Some(""));
        }
    }

    #[tokio::test]
    async fn test_merge_skips_ownership_check() {
        let (service, store, coach_id) = setup();
        let other_users_player = store.seed_player(7, "Sam", "Lee");

        let drafts = vec![CartDraft {
            player_id: Some(other_users_player.id),
            ..draft(coach_id, "10:00")
        }];
        let created = service.merge_guest_cart(42, drafts).await.unwrap();
        assert_eq!(created[0].player_id, Some(other_users_player.id));
    }

    #[tokio::test]
    async fn test_merge_with_invalid_draft_persists_nothing() {
        let (service, store, coach_id) = setup();
        let drafts = vec![draft(coach_id, "10:00"), CartDraft::default()];

        let result = service.merge_guest_cart(42, drafts).await;
        assert!(matches!(result, Err(AppError::MissingField { .. })));
        assert_eq!(store.cart_len(), 0);
    }

    #[tokio::test]
    async fn test_merge_empty_cart_is_empty() {
        let (service, _, _) = setup();
        let created = service.merge_guest_cart(42, Vec::new()).await.unwrap();
        assert!(created.is_empty());
    }
}
