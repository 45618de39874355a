//! HTTP server layer
//!
//! Axum server with:
//! - Open CORS policy for the quiz front end
//! - Request tracing
//! - Graceful shutdown
//! - `{success, error, message}` JSON error envelope on every failure

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
