//! trivia-server: HTTP API over a two-table trivia dataset
//!
//! Serves paginated question listings, category lookups, substring search,
//! question creation/deletion and random quiz question selection as JSON.

pub mod db;
pub mod http;
pub mod models;

pub use db::{MemoryStore, PgStore, StoreError, TriviaStore};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig};
