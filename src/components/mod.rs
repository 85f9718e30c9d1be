//! Reusable UI components.

pub mod game_card;
pub mod nav_bar;
