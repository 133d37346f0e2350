//! Travily database layer.
//!
//! Provides SQLite connection management, schema migrations, and the
//! key-value store used for client-side persistence.

pub mod connection;
pub mod local_store;
pub mod migrations;

pub use connection::Database;
pub use local_store::{LocalStore, LocalStoreTrait};
