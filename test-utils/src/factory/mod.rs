//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` struct for customization and a `create_*`
//! convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::UserFactory::new(&db)
//!     .nick("Gnaget")
//!     .build()
//!     .await?;
//! let post = factory::post::PostFactory::new(&db, &user.id)
//!     .message("Heja Bajen")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Users together with their first nickname
//! - `role` - Roles and user role memberships
//! - `post` - Forum posts
//! - `player` - Squad players
//! - `squad` - Positions, formations and lineups
//! - `invite` - Account invites
//! - `helpers` - Unique id generation

pub mod helpers;
pub mod invite;
pub mod player;
pub mod post;
pub mod role;
pub mod squad;
pub mod user;

pub use invite::create_invite;
pub use player::create_player;
pub use post::{create_post, create_url_tip};
pub use role::{assign_role, create_role};
pub use squad::{connect_lineup, create_formation, create_lineup, create_position};
pub use user::{create_user, create_user_with_nick};
