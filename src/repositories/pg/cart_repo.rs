//! Cart repository for async database operations.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppResult;
use crate::models::{CartItem, CartItemView, NewCartItem};
use crate::repositories::CartRepository;

/// Cart repository holding an async connection pool.
#[derive(Clone)]
pub struct PgCartRepository {
    pool: AsyncDbPool,
}

impl PgCartRepository {
    /// Creates a new repository with the given connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CartRepository for PgCartRepository {
    async fn insert(&self, item: NewCartItem) -> AppResult<CartItem> {
        use crate::schema::cart_items::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(cart_items)
            .values(&item)
            .returning(CartItem::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(Into::into)
    }

    async fn insert_batch(&self, items: Vec<NewCartItem>) -> AppResult<Vec<CartItem>> {
        use crate::schema::cart_items::dsl::*;
        let mut conn = self.pool.get().await?;

        // One multi-row INSERT statement: atomic, so a constraint violation
        // on any row persists nothing.
        diesel::insert_into(cart_items)
            .values(&items)
            .returning(CartItem::as_returning())
            .get_results(&mut conn)
            .await
            .map_err(Into::into)
    }

    async fn list_view(&self, owner_id: i32) -> AppResult<Vec<CartItemView>> {
        use crate::schema::{cart_items, coaches};
        let mut conn = self.pool.get().await?;

        cart_items::table
            .inner_join(coaches::table)
            .filter(cart_items::user_id.eq(owner_id))
            .order(cart_items::created_at.desc())
            .select((
                cart_items::id,
                cart_items::coach_id,
                cart_items::session_type,
                cart_items::session_date,
                cart_items::session_time,
                cart_items::quantity,
                cart_items::notes,
                cart_items::player_id,
                coaches::first_name,
                coaches::last_name,
            ))
            .load::<CartItemView>(&mut conn)
            .await
            .map_err(Into::into)
    }

    async fn delete(&self, item_id: i32, owner_id: i32) -> AppResult<usize> {
        use crate::schema::cart_items::dsl::*;
        let mut conn = self.pool.get().await?;

        // Compound predicate is the ownership check; an id owned by someone
        // else matches zero rows.
        diesel::delete(cart_items.filter(id.eq(item_id)).filter(user_id.eq(owner_id)))
            .execute(&mut conn)
            .await
            .map_err(Into::into)
    }
}
