//! Database repository layer.
//!
//! One repository per entity area, each borrowing the shared connection. Writes
//! that touch several tables run in one transaction, and store failures
//! propagate as `DbErr`.

pub mod chronicle;
pub mod favorite_player;
pub mod filter;
pub mod invite;
pub mod nickname;
pub mod personal_message;
pub mod poll;
pub mod post;
pub mod region;
pub mod role;
pub mod squad;
pub mod url_tip;
pub mod user;
pub mod vote;

#[cfg(test)]
mod test;
