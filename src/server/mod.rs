//! Server-side API backend and business logic.
//!
//! This module contains the complete backend of the Diffen forum: the JSON
//! api consumed by the SPA, the server rendered page shells, the login flow and
//! everything below them. The backend uses Axum as the web framework, SeaORM for
//! database operations and tower-sessions for the login session.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Domain rules, result lists and pagination
//! - **Data Layer** (`data/`) - One query or mutation per method over the entities
//! - **Model Layer** (`model/`) - Domain models, operation parameters and action result messages
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session wrapper and authentication guard
//! - **Util** (`util/`) - Paging, slugs, url tips, formations and relative dates
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - `.env`, settings file and environment variables
//! - **State** (`state`) - Shared application state (DB pool, api url, upload dir)
//! - **Startup** (`startup`) - Database connection, migrations and the session layer
//! - **Router** (`router`) - Api routes with OpenAPI docs, page and login routes
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Middleware** loads the session and resolves the logged in user
//! 3. **Controller** validates access, converts DTOs to params, calls service
//! 4. **Service** applies domain rules, orchestrates data operations
//! 5. **Data** queries database and returns entities
//! 6. **Service** returns domain model to controller
//! 7. **Controller** converts domain model to DTO, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
