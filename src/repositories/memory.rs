//! In-memory repository implementations.
//!
//! A single [`MemoryStore`] implements every repository trait against shared
//! vectors, mirroring the Postgres semantics that matter to callers: keyed
//! upsert, inclusive string-date ranges, and compound (id, user_id) delete
//! predicates. Services are tested against this store.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use crate::error::AppResult;
use crate::models::{
    Availability, CartItem, CartItemView, Coach, CoachStatus, NewAvailability, NewCartItem,
    NewPlayer, Player, UpdatePlayer,
};
use crate::repositories::{
    AvailabilityRepository, CartRepository, CoachRepository, PlayerRepository,
};

#[derive(Default)]
struct State {
    coaches: Vec<Coach>,
    availability: Vec<Availability>,
    players: Vec<Player>,
    cart: Vec<CartItem>,
    next_id: i32,
}

impl State {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }
}

/// Shared in-memory store; cloning yields handles to the same data.
#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<State>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a coach row and returns it.
    pub fn seed_coach(&self, first_name: &str, last_name: &str, status: CoachStatus) -> Coach {
        let mut state = self.state.lock().expect("memory store poisoned");
        let id = state.next_id();
        let coach = Coach {
            id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: format!("{}.{}@example.com", first_name, last_name).to_lowercase(),
            status,
            hometown: None,
            position: None,
            created_at: Utc::now().naive_utc(),
        };
        state.coaches.push(coach.clone());
        coach
    }

    /// Seeds a player row owned by `user_id` and returns it.
    pub fn seed_player(&self, user_id: i32, first_name: &str, last_name: &str) -> Player {
        let mut state = self.state.lock().expect("memory store poisoned");
        let id = state.next_id();
        let player = Player {
            id,
            user_id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            date_of_birth: "2010-01-01".to_string(),
            primary_position: None,
            secondary_position: None,
            preferred_foot: None,
            current_team: None,
            team_level: None,
            graduation_year: None,
            created_at: Utc::now().naive_utc(),
        };
        state.players.push(player.clone());
        player
    }

    /// Number of stored cart rows, across all users.
    pub fn cart_len(&self) -> usize {
        self.state.lock().expect("memory store poisoned").cart.len()
    }
}

#[async_trait]
impl CoachRepository for MemoryStore {
    async fn find_by_id(&self, coach_id: i32) -> AppResult<Option<Coach>> {
        let state = self.state.lock().expect("memory store poisoned");
        Ok(state.coaches.iter().find(|c| c.id == coach_id).cloned())
    }

    async fn list_approved(&self) -> AppResult<Vec<Coach>> {
        let state = self.state.lock().expect("memory store poisoned");
        let mut approved: Vec<Coach> = state
            .coaches
            .iter()
            .filter(|c| c.status == CoachStatus::Approved)
            .cloned()
            .collect();
        approved.sort_by(|a, b| a.last_name.cmp(&b.last_name));
        Ok(approved)
    }
}

#[async_trait]
impl AvailabilityRepository for MemoryStore {
    async fn upsert(&self, record: NewAvailability) -> AppResult<Availability> {
        let mut state = self.state.lock().expect("memory store poisoned");
        if let Some(existing) = state
            .availability
            .iter_mut()
            .find(|a| a.coach_id == record.coach_id && a.date == record.date)
        {
            existing.time_slots = record.time_slots;
            return Ok(existing.clone());
        }
        let id = state.next_id();
        let row = Availability {
            id,
            coach_id: record.coach_id,
            date: record.date,
            time_slots: record.time_slots,
            created_at: Utc::now().naive_utc(),
        };
        state.availability.push(row.clone());
        Ok(row)
    }

    async fn find_by_date(&self, coach_id: i32, date: &str) -> AppResult<Vec<Availability>> {
        let state = self.state.lock().expect("memory store poisoned");
        Ok(state
            .availability
            .iter()
            .filter(|a| a.coach_id == coach_id && a.date == date)
            .cloned()
            .collect())
    }

    async fn list_range(&self, coach_id: i32, from: &str, to: &str) -> AppResult<Vec<Availability>> {
        let state = self.state.lock().expect("memory store poisoned");
        let mut rows: Vec<Availability> = state
            .availability
            .iter()
            .filter(|a| a.coach_id == coach_id && a.date.as_str() >= from && a.date.as_str() <= to)
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.date.cmp(&b.date));
        Ok(rows)
    }

    async fn delete(&self, coach_id: i32, date: &str) -> AppResult<usize> {
        let mut state = self.state.lock().expect("memory store poisoned");
        let before = state.availability.len();
        state
            .availability
            .retain(|a| !(a.coach_id == coach_id && a.date == date));
        Ok(before - state.availability.len())
    }
}

#[async_trait]
impl PlayerRepository for MemoryStore {
    async fn create(&self, new_player: NewPlayer) -> AppResult<Player> {
        let mut state = self.state.lock().expect("memory store poisoned");
        let id = state.next_id();
        let player = Player {
            id,
            user_id: new_player.user_id,
            first_name: new_player.first_name,
            last_name: new_player.last_name,
            date_of_birth: new_player.date_of_birth,
            primary_position: new_player.primary_position,
            secondary_position: new_player.secondary_position,
            preferred_foot: new_player.preferred_foot,
            current_team: new_player.current_team,
            team_level: new_player.team_level,
            graduation_year: new_player.graduation_year,
            created_at: Utc::now().naive_utc(),
        };
        state.players.push(player.clone());
        Ok(player)
    }

    async fn find_owned(&self, player_id: i32, user_id: i32) -> AppResult<Option<Player>> {
        let state = self.state.lock().expect("memory store poisoned");
        Ok(state
            .players
            .iter()
            .find(|p| p.id == player_id && p.user_id == user_id)
            .cloned())
    }

    async fn list_for_user(&self, user_id: i32) -> AppResult<Vec<Player>> {
        let state = self.state.lock().expect("memory store poisoned");
        Ok(state
            .players
            .iter()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn update_owned(
        &self,
        player_id: i32,
        user_id: i32,
        update: UpdatePlayer,
    ) -> AppResult<Player> {
        let mut state = self.state.lock().expect("memory store poisoned");
        let player = state
            .players
            .iter_mut()
            .find(|p| p.id == player_id && p.user_id == user_id)
            .ok_or_else(|| diesel::result::Error::NotFound)?;

        if let Some(v) = update.first_name {
            player.first_name = v;
        }
        if let Some(v) = update.last_name {
            player.last_name = v;
        }
        if let Some(v) = update.date_of_birth {
            player.date_of_birth = v;
        }
        if let Some(v) = update.primary_position {
            player.primary_position = Some(v);
        }
        if let Some(v) = update.secondary_position {
            player.secondary_position = Some(v);
        }
        if let Some(v) = update.preferred_foot {
            player.preferred_foot = Some(v);
        }
        if let Some(v) = update.current_team {
            player.current_team = Some(v);
        }
        if let Some(v) = update.team_level {
            player.team_level = Some(v);
        }
        if let Some(v) = update.graduation_year {
            player.graduation_year = Some(v);
        }
        Ok(player.clone())
    }

    async fn delete_owned(&self, player_id: i32, user_id: i32) -> AppResult<usize> {
        let mut state = self.state.lock().expect("memory store poisoned");
        let before = state.players.len();
        state
            .players
            .retain(|p| !(p.id == player_id && p.user_id == user_id));
        Ok(before - state.players.len())
    }
}

#[async_trait]
impl CartRepository for MemoryStore {
    async fn insert(&self, item: NewCartItem) -> AppResult<CartItem> {
        let mut state = self.state.lock().expect("memory store poisoned");
        let id = state.next_id();
        let row = CartItem {
            id,
            user_id: item.user_id,
            coach_id: item.coach_id,
            session_type: item.session_type,
            session_date: item.session_date,
            session_time: item.session_time,
            quantity: item.quantity,
            notes: item.notes,
            player_id: item.player_id,
            created_at: Utc::now().naive_utc(),
        };
        state.cart.push(row.clone());
        Ok(row)
    }

    async fn insert_batch(&self, items: Vec<NewCartItem>) -> AppResult<Vec<CartItem>> {
        // All rows are staged before committing, matching the atomicity of
        // a single multi-row INSERT.
        let mut state = self.state.lock().expect("memory store poisoned");
        let mut created = Vec::with_capacity(items.len());
        for item in items {
            let id = state.next_id();
            created.push(CartItem {
                id,
                user_id: item.user_id,
                coach_id: item.coach_id,
                session_type: item.session_type,
                session_date: item.session_date,
                session_time: item.session_time,
                quantity: item.quantity,
                notes: item.notes,
                player_id: item.player_id,
                created_at: Utc::now().naive_utc(),
            });
        }
        state.cart.extend(created.iter().cloned());
        Ok(created)
    }

    async fn list_view(&self, user_id: i32) -> AppResult<Vec<CartItemView>> {
        let state = self.state.lock().expect("memory store poisoned");
        Ok(state
            .cart
            .iter()
            .filter(|item| item.user_id == user_id)
            .map(|item| {
                let coach = state.coaches.iter().find(|c| c.id == item.coach_id);
                CartItemView {
                    id: item.id,
                    coach_id: item.coach_id,
                    session_type: item.session_type.clone(),
                    session_date: item.session_date.clone(),
                    session_time: item.session_time.clone(),
                    quantity: item.quantity,
                    notes: item.notes.clone(),
                    player_id: item.player_id,
                    coach_first_name: coach.map(|c| c.first_name.clone()).unwrap_or_default(),
                    coach_last_name: coach.map(|c| c.last_name.clone()).unwrap_or_default(),
                }
            })
            .collect())
    }

    async fn delete(&self, item_id: i32, user_id: i32) -> AppResult<usize> {
        let mut state = self.state.lock().expect("memory store poisoned");
        let before = state.cart.len();
        state
            .cart
            .retain(|item| !(item.id == item_id && item.user_id == user_id));
        Ok(before - state.cart.len())
    }
}
