//! Postgres repository implementations using diesel_async.

mod availability_repo;
mod cart_repo;
mod coach_repo;
mod player_repo;

pub use availability_repo::PgAvailabilityRepository;
pub use cart_repo::PgCartRepository;
pub use coach_repo::PgCoachRepository;
pub use player_repo::PgPlayerRepository;
