//! service-core: shared infrastructure for the menu service binaries.
pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;

pub use axum;
pub use tokio;
pub use tower;
pub use tower_http;
pub use tracing;
