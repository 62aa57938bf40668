//! Coach repository for async database operations.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppResult;
use crate::models::{Coach, CoachStatus};
use crate::repositories::CoachRepository;

/// Coach repository holding an async connection pool.
///
/// Since `AsyncDbPool` (bb8::Pool) internally uses `Arc`, cloning is cheap
/// (just reference count increment).
#[derive(Clone)]
pub struct PgCoachRepository {
    pool: AsyncDbPool,
}

impl PgCoachRepository {
    /// Creates a new repository with the given connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CoachRepository for PgCoachRepository {
    async fn find_by_id(&self, coach_id: i32) -> AppResult<Option<Coach>> {
        use crate::schema::coaches::dsl::*;
        let mut conn = self.pool.get().await?;

        coaches
            .filter(id.eq(coach_id))
            .select(Coach::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(Into::into)
    }

    async fn list_approved(&self) -> AppResult<Vec<Coach>> {
        use crate::schema::coaches::dsl::*;
        let mut conn = self.pool.get().await?;

        coaches
            .filter(status.eq(CoachStatus::Approved))
            .order(last_name.asc())
            .select(Coach::as_select())
            .load(&mut conn)
            .await
            .map_err(Into::into)
    }
}
