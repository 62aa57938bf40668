//! Cart item models.
//!
//! A cart item is a pending, unpurchased booking request owned by one user.
//! Checkout (conversion to a paid booking) is handled by the payment flow,
//! which removes the rows it consumes.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// CartItem query model for SELECT operations
#[derive(Debug, Queryable, Selectable, Serialize, Clone)]
#[diesel(table_name = crate::schema::cart_items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CartItem {
    pub id: i32,
    pub user_id: i32,
    pub coach_id: i32,
    pub session_type: String,
    pub session_date: String,
    pub session_time: String,
    pub quantity: i32,
    pub notes: Option<String>,
    pub player_id: Option<i32>,
    pub created_at: NaiveDateTime,
}

/// NewCartItem insert model for INSERT operations
#[derive(Debug, Insertable, Deserialize, Clone)]
#[diesel(table_name = crate::schema::cart_items)]
pub struct NewCartItem {
    pub user_id: i32,
    pub coach_id: i32,
    pub session_type: String,
    pub session_date: String,
    pub session_time: String,
    pub quantity: i32,
    pub notes: Option<String>,
    pub player_id: Option<i32>,
}

/// Denormalized cart row joined with coach display fields.
///
/// This is the shape the cart listing returns so clients do not need a
/// second round trip for coach names.
#[derive(Debug, Queryable, Serialize, Clone)]
pub struct CartItemView {
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
