// fixtures/mod.rs - Sample catalog fixture
//
// A small but realistic slice of the franchise catalog. Unit tests,
// integration tests and the Postgres seeding path all build on the same
// records, so assertions written against one hold for the others.
//
// Deliberate gaps: product 6 has no calories or fat, product 9 no carbs,
// product 11 no protein. Null handling in the filter engine is exercised
// through them.

pub mod tables;

use crate::web_app::model::Catalog;

/// The full sample catalog
pub fn sample_catalog() -> Catalog {
    Catalog {
        categories: tables::categories(),
        franchises: tables::franchises(),
        allergens: tables::allergens(),
        products: tables::products(),
    }
}
