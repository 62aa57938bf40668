//! Availability repository for async database operations.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::upsert::excluded;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppResult;
use crate::models::{Availability, NewAvailability};
use crate::repositories::AvailabilityRepository;

/// Availability repository holding an async connection pool.
#[derive(Clone)]
pub struct PgAvailabilityRepository {
    pool: AsyncDbPool,
}

impl PgAvailabilityRepository {
    /// Creates a new repository with the given connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AvailabilityRepository for PgAvailabilityRepository {
    async fn upsert(&self, record: NewAvailability) -> AppResult<Availability> {
        use crate::schema::coach_availability::dsl::*;
        let mut conn = self.pool.get().await?;

        // ON CONFLICT replaces the whole slot mapping; concurrent writers
        // for the same (coach_id, date) race at the storage layer and the
        // last write wins.
        diesel::insert_into(coach_availability)
            .values(&record)
            .on_conflict((coach_id, date))
            .do_update()
            .set(time_slots.eq(excluded(time_slots)))
            .returning(Availability::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(Into::into)
    }

    async fn find_by_date(&self, for_coach: i32, on_date: &str) -> AppResult<Vec<Availability>> {
        use crate::schema::coach_availability::dsl::*;
        let mut conn = self.pool.get().await?;

        coach_availability
            .filter(coach_id.eq(for_coach))
            .filter(date.eq(on_date))
            .select(Availability::as_select())
            .load(&mut conn)
            .await
            .map_err(Into::into)
    }

    async fn list_range(&self, for_coach: i32, from: &str, to: &str) -> AppResult<Vec<Availability>> {
        use crate::schema::coach_availability::dsl::*;
        let mut conn = self.pool.get().await?;

        // Dates are YYYY-MM-DD strings, so lexicographic comparison is
        // calendar comparison.
        coach_availability
            .filter(coach_id.eq(for_coach))
            .filter(date.ge(from))
            .filter(date.le(to))
            .order(date.asc())
            .select(Availability::as_select())
            .load(&mut conn)
            .await
            .map_err(Into::into)
    }

    async fn delete(&self, for_coach: i32, on_date: &str) -> AppResult<usize> {
        use crate::schema::coach_availability::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(
            coach_availability
                .filter(coach_id.eq(for_coach))
                .filter(date.eq(on_date)),
        )
        .execute(&mut conn)
        .await
        .map_err(Into::into)
    }
}
