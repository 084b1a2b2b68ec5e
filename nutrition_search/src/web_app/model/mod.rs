// web_app/model/mod.rs - Shared data models for the catalog
//
// Wire names are camelCase so payloads keep the shape the browser
// pages already consume. Nutrition values are per 100 g.

use serde::{Deserialize, Serialize};

#[cfg(feature = "db-tools")]
use sqlx::FromRow;

/// Grouping of franchises and products ("치킨", "피자", ...)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db-tools", derive(FromRow))]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub name_korean: String,
}

/// A food brand owning several products
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db-tools", derive(FromRow))]
pub struct Franchise {
    pub id: i32,
    pub name: String,
    pub category_id: i32,
    #[serde(default)]
    pub logo_url: Option<String>,
}

/// Substance flagged on a product for allergy warnings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db-tools", derive(FromRow))]
pub struct Allergen {
    pub id: i32,
    pub name: String,
    pub name_korean: String,
}

/// Product record as owned by the repository
///
/// Every nutrition field is independently nullable; a missing value is
/// "unknown", not zero.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db-tools", derive(FromRow))]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub franchise_id: i32,
    pub category_id: i32,
    pub calories: Option<f64>,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fat: Option<f64>,
    #[serde(default)]
    #[cfg_attr(feature = "db-tools", sqlx(default))]
    pub allergens: Vec<i32>,
    /// Serving weight in grams
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub featured_product: bool,
}

impl Product {
    /// Read one nutrient by kind
    pub fn nutrient(&self, nutrient: Nutrient) -> Option<f64> {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Protein => self.protein,
            Nutrient::Carbs => self.carbs,
            Nutrient::Fat => self.fat,
        }
    }
}

/// Per-serving totals derived from the per-100 g values and the weight
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionTotals {
    pub calories: Option<f64>,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fat: Option<f64>,
}

impl NutritionTotals {
    /// Scale a product's per-100 g values to its serving weight.
    ///
    /// Returns `None` when the product has no weight. Totals are rounded to
    /// one decimal place.
    pub fn for_serving(product: &Product) -> Option<Self> {
        let weight = product.weight.filter(|w| *w > 0.0)?;
        let scale = |value: Option<f64>| value.map(|v| (v * weight / 100.0 * 10.0).round() / 10.0);

        Some(Self {
            calories: scale(product.calories),
            protein: scale(product.protein),
            carbs: scale(product.carbs),
            fat: scale(product.fat),
        })
    }
}

/// Product plus the records the detail view needs
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    #[serde(flatten)]
    pub product: Product,
    pub allergen_details: Vec<Allergen>,
    pub total_nutrition: Option<NutritionTotals>,
}

/// Whole catalog snapshot, the layout of the JSON data file
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub franchises: Vec<Franchise>,
    #[serde(default)]
    pub allergens: Vec<Allergen>,
    #[serde(default)]
    pub products: Vec<Product>,
}

/// The four nutrition fields a range filter can target
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Nutrient {
    Calories,
    Protein,
    Carbs,
    Fat,
}

impl Nutrient {
    pub const ALL: [Nutrient; 4] = [
        Nutrient::Calories,
        Nutrient::Protein,
        Nutrient::Carbs,
        Nutrient::Fat,
    ];

    /// Query-string parameter carrying this nutrient's range
    pub fn param_name(self) -> &'static str {
        match self {
            Nutrient::Calories => "calorieRange",
            Nutrient::Protein => "proteinRange",
            Nutrient::Carbs => "carbsRange",
            Nutrient::Fat => "fatRange",
        }
    }

    /// Bound a bare number means for this nutrient: protein is searched
    /// as "at least", everything else as "at most".
    pub fn default_bound(self, value: f64) -> NutrientFilter {
        match self {
            Nutrient::Protein => NutrientFilter::AtLeast(value),
            _ => NutrientFilter::AtMost(value),
        }
    }
}

/// One-sided or two-sided bound on a nutrition field
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum NutrientFilter {
    #[default]
    Unset,
    AtMost(f64),
    AtLeast(f64),
    Between { min: f64, max: f64 },
}

impl NutrientFilter {
    pub fn is_active(&self) -> bool {
        !matches!(self, NutrientFilter::Unset)
    }
}

/// Typed search request
///
/// Every field is optional; `NutrientFilter::Unset` is distinct from a
/// zero bound.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub text: Option<String>,
    pub category_id: Option<i32>,
    pub franchise_id: Option<i32>,
    #[serde(default)]
    pub calories: NutrientFilter,
    #[serde(default)]
    pub protein: NutrientFilter,
    #[serde(default)]
    pub carbs: NutrientFilter,
    #[serde(default)]
    pub fat: NutrientFilter,
}

impl SearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn in_category(mut self, category_id: i32) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn in_franchise(mut self, franchise_id: i32) -> Self {
        self.franchise_id = Some(franchise_id);
        self
    }

    pub fn max_calories(mut self, value: f64) -> Self {
        self.calories = NutrientFilter::AtMost(value);
        self
    }

    pub fn min_protein(mut self, value: f64) -> Self {
        self.protein = NutrientFilter::AtLeast(value);
        self
    }

    pub fn max_carbs(mut self, value: f64) -> Self {
        self.carbs = NutrientFilter::AtMost(value);
        self
    }

    pub fn max_fat(mut self, value: f64) -> Self {
        self.fat = NutrientFilter::AtMost(value);
        self
    }

    pub fn with_filter(mut self, nutrient: Nutrient, filter: NutrientFilter) -> Self {
        *self.filter_mut(nutrient) = filter;
        self
    }

    pub fn filter(&self, nutrient: Nutrient) -> NutrientFilter {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Protein => self.protein,
            Nutrient::Carbs => self.carbs,
            Nutrient::Fat => self.fat,
        }
    }

    fn filter_mut(&mut self, nutrient: Nutrient) -> &mut NutrientFilter {
        match nutrient {
            Nutrient::Calories => &mut self.calories,
            Nutrient::Protein => &mut self.protein,
            Nutrient::Carbs => &mut self.carbs,
            Nutrient::Fat => &mut self.fat,
        }
    }

    /// Trimmed search text, `None` when blank
    pub fn text_term(&self) -> Option<&str> {
        self.text.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }

    /// True when only category/franchise constraints are set
    pub fn is_categorical(&self) -> bool {
        self.text_term().is_none() && Nutrient::ALL.iter().all(|n| !self.filter(*n).is_active())
    }

    /// True when no constraint of any kind is active
    pub fn is_unfiltered(&self) -> bool {
        self.text_term().is_none()
            && self.category_id.is_none()
            && self.franchise_id.is_none()
            && Nutrient::ALL.iter().all(|n| !self.filter(*n).is_active())
    }
}
