//! Repository layer for data access operations.
//!
//! Repositories are trait objects injected into services, so the Postgres
//! implementations can be swapped for the in-memory store in tests. Every
//! player/cart operation takes the owning user's id and scopes its query by
//! it; that compound predicate is the only authorization mechanism.

pub mod memory;
mod pg;

use std::sync::Arc;

use async_trait::async_trait;

use crate::db::AsyncDbPool;
use crate::error::AppResult;
use crate::models::{
    Availability, CartItem, CartItemView, Coach, NewAvailability, NewCartItem, NewPlayer, Player,
    UpdatePlayer,
};

pub use memory::MemoryStore;
pub use pg::{PgAvailabilityRepository, PgCartRepository, PgCoachRepository, PgPlayerRepository};

/// Coach lookups (read-only in this subsystem)
#[async_trait]
pub trait CoachRepository: Send + Sync {
    async fn find_by_id(&self, coach_id: i32) -> AppResult<Option<Coach>>;
    async fn list_approved(&self) -> AppResult<Vec<Coach>>;
}

/// Per-coach, per-date availability records
#[async_trait]
pub trait AvailabilityRepository: Send + Sync {
    /// Insert-or-replace keyed on `(coach_id, date)`; replaces the whole
    /// slot mapping, never merges
    async fn upsert(&self, record: NewAvailability) -> AppResult<Availability>;

    /// Exact-date lookup; zero or one row
    async fn find_by_date(&self, coach_id: i32, date: &str) -> AppResult<Vec<Availability>>;

    /// Inclusive date-range lookup, ascending by date
    async fn list_range(&self, coach_id: i32, from: &str, to: &str)
    -> AppResult<Vec<Availability>>;

    /// Delete by `(coach_id, date)`; returns rows affected
    async fn delete(&self, coach_id: i32, date: &str) -> AppResult<usize>;
}

/// User-owned player profiles
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    async fn create(&self, new_player: NewPlayer) -> AppResult<Player>;
    async fn find_owned(&self, player_id: i32, user_id: i32) -> AppResult<Option<Player>>;
    async fn list_for_user(&self, user_id: i32) -> AppResult<Vec<Player>>;
    async fn update_owned(
        &self,
        player_id: i32,
        user_id: i32,
        update: UpdatePlayer,
    ) -> AppResult<Player>;
    /// Returns rows affected; zero when the row is absent or not owned
    async fn delete_owned(&self, player_id: i32, user_id: i32) -> AppResult<usize>;
}

/// Pending booking requests
#[async_trait]
pub trait CartRepository: Send + Sync {
    async fn insert(&self, item: NewCartItem) -> AppResult<CartItem>;

    /// Single multi-row insert; the whole batch fails if any row violates a
    /// storage constraint
    async fn insert_batch(&self, items: Vec<NewCartItem>) -> AppResult<Vec<CartItem>>;

    /// Denormalized view joined with coach display fields
    async fn list_view(&self, user_id: i32) -> AppResult<Vec<CartItemView>>;

    /// Delete by `(id, user_id)`; returns rows affected. Deleting another
    /// user's id affects zero rows and is not an error.
    async fn delete(&self, item_id: i32, user_id: i32) -> AppResult<usize>;
}

/// Aggregates all repositories for convenient access.
///
/// This struct is designed to be injected into services. Cloning is cheap
/// since every repository is behind an `Arc`.
#[derive(Clone)]
pub struct Repositories {
    pub coaches: Arc<dyn CoachRepository>,
    pub availability: Arc<dyn AvailabilityRepository>,
    pub players: Arc<dyn PlayerRepository>,
    pub cart: Arc<dyn CartRepository>,
}

impl Repositories {
    /// Creates Postgres-backed repositories sharing one connection pool.
    pub fn postgres(pool: AsyncDbPool) -> Self {
        Self {
            coaches: Arc::new(PgCoachRepository::new(pool.clone())),
            availability: Arc::new(PgAvailabilityRepository::new(pool.clone())),
            players: Arc::new(PgPlayerRepository::new(pool.clone())),
            cart: Arc::new(PgCartRepository::new(pool)),
        }
    }

    /// Creates repositories backed by a shared in-memory store.
    pub fn in_memory(store: MemoryStore) -> Self {
        Self {
            coaches: Arc::new(store.clone()),
            availability: Arc::new(store.clone()),
            players: Arc::new(store.clone()),
            cart: Arc::new(store),
        }
    }
}
