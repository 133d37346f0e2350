//! Travily — client-side core for a travel-planning application.
//!
//! This library crate holds the stateful pieces of the client: the bounded
//! search-history cache, session management, the local key-value store,
//! and thin clients for the planner backend's HTTP endpoints.

pub mod app;
pub mod database;
pub mod managers;
pub mod services;
pub mod types;
pub mod utils;
