//! Server-side domain models and parameter types.
//!
//! Repositories hand entity models to these types, services work with them, and
//! controllers turn them into the DTOs the SPA consumes through `into_dto`.

pub mod chronicle;
pub mod filter;
pub mod poll;
pub mod post;
pub mod region;
pub mod result;
pub mod squad;
pub mod user;
