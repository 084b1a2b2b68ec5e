// lib.rs - Root module for the nutrition_search library
//
// The web_app module holds the catalog model, the search/filter engine,
// the repositories and the HTTP surface. The fixtures module holds the
// sample franchise catalog used by tests and local development.

/// Sample catalog data shared by unit tests, integration tests and seeding
pub mod fixtures;

pub mod web_app;
