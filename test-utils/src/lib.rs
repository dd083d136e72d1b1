//! Diffen Test Utils
//!
//! Shared testing utilities for the Diffen forum server. Provides a builder for
//! creating test contexts backed by in-memory SQLite databases, plus factories
//! for inserting rows with sensible defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring which tables exist
//! - **TestContext**: Test environment holding the database connection and session
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Per-entity factories for inserting test data
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn creates_post() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_forum_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let user = factory::create_user(db).await?;
//!     let post = factory::create_post(db, &user.id).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
