// web_app/mod.rs - Root module for the franchise nutrition catalog service
//
// Architecture:
// - model/: Catalog types and the typed search query
// - api/: Filter engine, parameter parsing, repositories and catalog queries
// - favorites.rs: Client-side favorites store keyed by product id
// - config.rs: Environment-driven server configuration
// - error.rs: Error type shared by every layer
// - handlers.rs: actix-web handlers (web feature only)

pub mod model;

pub mod api;

pub mod config;

pub mod error;

pub mod favorites;

// HTTP handlers only exist when the server is compiled in
#[cfg(feature = "web")]
pub mod handlers;

pub use error::{AppError, Result};
