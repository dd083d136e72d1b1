//! Squad repositories. Reads return domain models with positions and lineup
//! players already attached.

pub mod formation;
pub mod game;
pub mod lineup;
pub mod player;
pub mod position;
pub mod title;
