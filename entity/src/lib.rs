//! SeaORM entities for the Diffen schema.
//!
//! One module per table. The `prelude` re-exports every `Entity` under its
//! table-derived name so callers can write `entity::prelude::Post::find()`.

pub mod prelude;

pub mod chronicle;
pub mod favorite_player;
pub mod formation;
pub mod game;
pub mod invite;
pub mod lineup;
pub mod lineup_player;
pub mod nickname;
pub mod personal_message;
pub mod player;
pub mod player_event;
pub mod player_position;
pub mod poll;
pub mod poll_alternative;
pub mod poll_vote;
pub mod position;
pub mod post;
pub mod post_lineup;
pub mod region;
pub mod role;
pub mod saved_post;
pub mod scissored_post;
pub mod title;
pub mod url_tip;
pub mod user;
pub mod user_filter;
pub mod user_role;
pub mod vote;
