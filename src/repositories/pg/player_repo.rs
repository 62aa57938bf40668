//! Player repository for async database operations.
//!
//! Every query is scoped by the owning user's id.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppResult;
use crate::models::{NewPlayer, Player, UpdatePlayer};
use crate::repositories::PlayerRepository;

/// Player repository holding an async connection pool.
#[derive(Clone)]
pub struct PgPlayerRepository {
    pool: AsyncDbPool,
}

impl PgPlayerRepository {
    /// Creates a new repository with the given connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlayerRepository for PgPlayerRepository {
    async fn create(&self, new_player: NewPlayer) -> AppResult<Player> {
        use crate::schema::players::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(players)
            .values(&new_player)
            .returning(Player::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(Into::into)
    }

    async fn find_owned(&self, player_id: i32, owner_id: i32) -> AppResult<Option<Player>> {
        use crate::schema::players::dsl::*;
        let mut conn = self.pool.get().await?;

        players
            .filter(id.eq(player_id))
            .filter(user_id.eq(owner_id))
            .select(Player::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(Into::into)
    }

    async fn list_for_user(&self, owner_id: i32) -> AppResult<Vec<Player>> {
        use crate::schema::players::dsl::*;
        let mut conn = self.pool.get().await?;

        players
            .filter(user_id.eq(owner_id))
            .order(created_at.desc())
            .select(Player::as_select())
            .load(&mut conn)
            .await
            .map_err(Into::into)
    }

    async fn update_owned(
        &self,
        player_id: i32,
        owner_id: i32,
        update: UpdatePlayer,
    ) -> AppResult<Player> {
        use crate::schema::players::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(players.filter(id.eq(player_id)).filter(user_id.eq(owner_id)))
            .set(&update)
            .returning(Player::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(Into::into)
    }

    async fn delete_owned(&self, player_id: i32, owner_id: i32) -> AppResult<usize> {
        use crate::schema::players::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(players.filter(id.eq(player_id)).filter(user_id.eq(owner_id)))
            .execute(&mut conn)
            .await
            .map_err(Into::into)
    }
}
