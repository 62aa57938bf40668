//! Service layer for business logic operations.
//!
//! Services encapsulate business logic and coordinate between
//! repositories and handlers.

mod availability_service;
mod cart_service;
mod coach_service;
mod player_service;
pub mod validation;

pub use availability_service::AvailabilityService;
pub use cart_service::{CartDraft, CartService, OwnershipCheck};
pub use coach_service::CoachService;
pub use player_service::{PlayerDraft, PlayerService};

use crate::repositories::Repositories;

/// Aggregates all services for convenient access.
///
/// This struct is designed to be used as Axum application state.
/// Cloning is cheap since every repository is behind an `Arc`.
#[derive(Clone)]
pub struct Services {
    pub coaches: CoachService,
    pub availability: AvailabilityService,
    pub players: PlayerService,
    pub cart: CartService,
}

impl Services {
    /// Creates a new Services instance from Repositories.
    pub fn new(repos: Repositories) -> Self {
        Self {
            coaches: CoachService::new(repos.coaches.clone()),
            availability: AvailabilityService::new(repos.coaches, repos.availability),
            players: PlayerService::new(repos.players.clone()),
            cart: CartService::new(repos.cart, repos.players),
        }
    }
}
