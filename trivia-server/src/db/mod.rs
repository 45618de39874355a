//! Record store - trait, implementations, pool and schema bootstrap
//!
//! Handlers only see [`TriviaStore`]. `PgStore` backs it with PostgreSQL;
//! `MemoryStore` keeps both tables in process for tests and embedding.

pub mod memory;
pub mod migrations;
pub mod pool;
pub mod postgres;
pub mod store;

pub use memory::MemoryStore;
pub use pool::{create_pool, create_pool_with_options};
pub use postgres::PgStore;
pub use store::{StoreError, StoreResult, TriviaStore};
