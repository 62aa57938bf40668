//! Cart DTOs for API requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{CartItem, CartItemView};
use crate::services::CartDraft;

/// Request body for adding one item to the cart.
///
/// Everything is optional at the wire level; required-field enforcement
/// happens in the service so the response names the missing fields instead
/// of failing deserialization.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AddCartItemRequest {
    pub session_type: Option<String>,
    pub coach_id: Option<i32>,
    pub session_date: Option<String>,
    pub session_time: Option<String>,
    pub quantity: Option<i32>,
    pub notes: Option<String>,
    pub player_id: Option<i32>,
}

impl From<AddCartItemRequest> for CartDraft {
    fn from(req: AddCartItemRequest) -> Self {
        CartDraft {
            session_type: req.session_type,
            coach_id: req.coach_id,
            session_date: req.session_date,
            session_time: req.session_time,
            quantity: req.quantity,
            notes: req.notes,
            player_id: req.player_id,
        }
    }
}

/// One cart row in API responses.
#[derive(Debug, Serialize, ToSchema)]
pub struct CartItemResponse {
    pub id: i32,
    pub coach_id: i32,
    pub session_type: String,
    pub session_date: String,
    pub session_time: String,
    pub quantity: i32,
    pub notes: Option<String>,
    pub player_id: Option<i32>,
}

impl From<CartItem> for CartItemResponse {
    fn from(item: CartItem) -> Self {
        Self {
            id: item.id,
            coach_id: item.coach_id,
            session_type: item.session_type,
            session_date: item.session_date,
            session_time: item.session_time,
            quantity: item.quantity,
            notes: item.notes,
            player_id: item.player_id,
        }
    }
}

/// One cart row joined with coach display fields, for the cart listing.
#[derive(Debug, Serialize, ToSchema)]
pub struct CartItemViewResponse {
    pub id: i32,
    pub coach_id: i32,
    pub session_type: String,
    pub session_date: String,
    pub session_time: String,
    pub quantity: i32,
    pub notes: Option<String>,
    pub player_id: Option<i32>,
    pub coach_first_name: String,
    pub coach_last_name: String,
}

/// Cart listing body; `items` is always present, empty when the cart is.
#[derive(Debug, Serialize, ToSchema)]
pub struct CartListResponse {
    pub items: Vec<CartItemViewResponse>,
}

impl From<CartItemView> for CartItemViewResponse {
    fn from(view: CartItemView) -> Self {
        Self {
            id: view.id,
            coach_id: view.coach_id,
            session_type: view.session_type,
            session_date: view.session_date,
            session_time: view.session_time,
            quantity: view.quantity,
            notes: view.notes,
            player_id: view.player_id,
            coach_first_name: view.coach_first_name,
            coach_last_name: view.coach_last_name,
        }
    }
}
