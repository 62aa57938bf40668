//! Data transfer objects for the HTTP API.

pub mod availability;
pub mod cart;
pub mod coach;
pub mod common;
pub mod error;
pub mod player;

pub use availability::{AvailabilityQueryParams, AvailabilityResponse, SetAvailabilityRequest};
pub use cart::{AddCartItemRequest, CartItemResponse, CartItemViewResponse, CartListResponse};
pub use coach::CoachResponse;
pub use common::SuccessResponse;
pub use error::ErrorResponse;
pub use player::{CreatePlayerRequest, PlayerResponse, UpdatePlayerRequest};
