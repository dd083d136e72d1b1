//! Data transfer objects exchanged with the SPA over the JSON api.

pub mod api;
pub mod chronicle;
pub mod forum;
pub mod page;
pub mod poll;
pub mod region;
pub mod squad;
pub mod user;
