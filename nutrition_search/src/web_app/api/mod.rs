// web_app/api/mod.rs - Catalog query layer
//
// filter.rs is the only place search policy lives. Everything else either
// feeds it (params, repository) or wraps it (queries).

pub mod filter;

pub mod params;

pub mod queries;

pub mod repository;

#[cfg(feature = "db-tools")]
pub mod db;
