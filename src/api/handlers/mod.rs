//! HTTP request handlers.

pub mod cart;
pub mod coaches;
pub mod health;
pub mod players;
