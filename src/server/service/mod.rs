//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the data repositories. They enforce
//! the rules the client does not: duplicate checks, vote eligibility, empty
//! content, paging. Mutations answer with a result list of user-facing
//! messages; lookups return domain models.

pub mod auth;
pub mod chronicle;
pub mod invite;
pub mod personal_message;
pub mod poll;
pub mod post;
pub mod region;
pub mod squad;
pub mod upload;
pub mod user;

#[cfg(test)]
mod test;
