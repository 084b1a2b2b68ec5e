// fixtures/tables/mod.rs
//
// One function per catalog table. reference.rs holds the small lookup
// tables, products.rs the product rows.

pub mod products;
pub mod reference;

pub use products::products;
pub use reference::{allergens, categories, franchises};
