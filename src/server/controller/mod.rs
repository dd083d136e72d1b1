//! HTTP handlers.
//!
//! `/api` controllers authorize through `AuthGuard`, call a service and return
//! DTOs as JSON. `auth` and `page` render askama templates for the browser.

pub mod auth;
pub mod chronicle;
pub mod invite;
pub mod page;
pub mod personal_message;
pub mod poll;
pub mod post;
pub mod region;
pub mod squad;
pub mod user;
