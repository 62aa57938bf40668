mod availability;
mod cart_item;
mod coach;
mod player;

pub use availability::{
    Availability, Modality, NewAvailability, TimeSlots, time_slots_from_json, time_slots_to_json,
};
pub use cart_item::{CartItem, CartItemView, NewCartItem};
pub use coach::{Coach, CoachStatus, NewCoach};
pub use player::{NewPlayer, Player, UpdatePlayer};
