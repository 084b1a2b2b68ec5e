// web_app/api/filter.rs - The product search/filter engine
//
// Pure function over a read-only product snapshot. Every caller (HTTP
// search, product listings, both repositories) goes through here, so the
// filter policy exists exactly once.
//
// Null policy: an unknown nutrition value passes an upper bound and fails a
// lower bound. Calories/carbs/fat are searched with upper bounds, protein
// with a lower bound, so products with missing protein never match a
// protein filter while products with missing calories always match a
// calorie filter.

use std::collections::HashMap;

use crate::web_app::model::{Franchise, Nutrient, NutrientFilter, Product, SearchQuery};

/// Return the products matching every active constraint of `query`, in
/// input order.
///
/// `franchises` is only consulted for text matching; products whose
/// franchise is missing from it are matched on their own name alone.
pub fn filter_products(
    products: Vec<Product>,
    franchises: &[Franchise],
    query: &SearchQuery,
) -> Vec<Product> {
    if query.is_unfiltered() {
        return products;
    }

    let franchise_names: HashMap<i32, &str> = if query.text_term().is_some() {
        franchises.iter().map(|f| (f.id, f.name.as_str())).collect()
    } else {
        HashMap::new()
    };

    products
        .into_iter()
        .filter(|product| {
            let franchise_name = franchise_names.get(&product.franchise_id).copied();
            matches(product, franchise_name, query)
        })
        .collect()
}

/// Single-product predicate: all active filters ANDed
pub fn matches(product: &Product, franchise_name: Option<&str>, query: &SearchQuery) -> bool {
    if let Some(category_id) = query.category_id {
        if product.category_id != category_id {
            return false;
        }
    }

    if let Some(franchise_id) = query.franchise_id {
        if product.franchise_id != franchise_id {
            return false;
        }
    }

    if let Some(term) = query.text_term() {
        if !text_matches(term, &product.name, franchise_name) {
            return false;
        }
    }

    Nutrient::ALL
        .iter()
        .all(|nutrient| admits(query.filter(*nutrient), product.nutrient(*nutrient)))
}

/// Whether a bound accepts a possibly-unknown value
pub fn admits(filter: NutrientFilter, value: Option<f64>) -> bool {
    match (filter, value) {
        (NutrientFilter::Unset, _) => true,
        (NutrientFilter::AtMost(_), None) => true,
        (NutrientFilter::AtMost(max), Some(v)) => v <= max,
        (NutrientFilter::AtLeast(_), None) => false,
        (NutrientFilter::AtLeast(min), Some(v)) => v >= min,
        (NutrientFilter::Between { .. }, None) => false,
        (NutrientFilter::Between { min, max }, Some(v)) => v >= min && v <= max,
    }
}

/// Case-insensitive substring match on product or franchise name
fn text_matches(term: &str, product_name: &str, franchise_name: Option<&str>) -> bool {
    let needle = term.to_lowercase();

    product_name.to_lowercase().contains(&needle)
        || franchise_name.is_some_and(|name| name.to_lowercase().contains(&needle))
}
