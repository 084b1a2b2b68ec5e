// web_app/api/params.rs - Raw transport parameters to typed queries
//
// Browsers send every filter as a string. "0" and "" both mean "no
// filter", which is why they never become a literal zero bound. Anything
// that is neither unset, a positive number nor a known bucket preset
// rejects the whole query.

use serde::Deserialize;

use crate::web_app::error::{AppError, Result};
use crate::web_app::model::{Nutrient, NutrientFilter, SearchQuery};

/// Query-string parameters of `GET /api/search`
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub q: Option<String>,
    /// Older pages send `query` instead of `q`
    pub query: Option<String>,
    pub category_id: Option<String>,
    pub franchise_id: Option<String>,
    pub calorie_range: Option<String>,
    pub protein_range: Option<String>,
    pub carbs_range: Option<String>,
    pub fat_range: Option<String>,
}

impl SearchParams {
    /// Parse into a [`SearchQuery`], failing on the first malformed field
    pub fn parse(&self) -> Result<SearchQuery> {
        let text = self
            .q
            .as_deref()
            .filter(|q| !q.trim().is_empty())
            .or(self.query.as_deref())
            .map(str::to_string);

        let mut query = SearchQuery {
            text,
            category_id: parse_id("categoryId", self.category_id.as_deref())?,
            franchise_id: parse_id("franchiseId", self.franchise_id.as_deref())?,
            ..SearchQuery::default()
        };

        for nutrient in Nutrient::ALL {
            let filter = parse_range(nutrient, self.range(nutrient))?;
            query = query.with_filter(nutrient, filter);
        }

        Ok(query)
    }

    fn range(&self, nutrient: Nutrient) -> Option<&str> {
        match nutrient {
            Nutrient::Calories => self.calorie_range.as_deref(),
            Nutrient::Protein => self.protein_range.as_deref(),
            Nutrient::Carbs => self.carbs_range.as_deref(),
            Nutrient::Fat => self.fat_range.as_deref(),
        }
    }
}

/// Query-string parameters of the franchise listing
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub category_id: Option<String>,
    pub franchise_id: Option<String>,
}

impl ListParams {
    pub fn parse(&self) -> Result<SearchQuery> {
        Ok(SearchQuery {
            category_id: parse_id("categoryId", self.category_id.as_deref())?,
            franchise_id: parse_id("franchiseId", self.franchise_id.as_deref())?,
            ..SearchQuery::default()
        })
    }
}

/// Parse an optional entity id.
///
/// Absent, empty and `0` all mean "no filter".
pub fn parse_id(name: &'static str, raw: Option<&str>) -> Result<Option<i32>> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Ok(None),
        Some(raw) => raw,
    };

    match raw.parse::<i32>() {
        Ok(0) => Ok(None),
        Ok(id) => Ok(Some(id)),
        Err(_) => Err(AppError::invalid(name, raw)),
    }
}

/// Parse a path segment that must be an id
pub fn parse_path_id(name: &'static str, raw: &str) -> Result<i32> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| AppError::invalid(name, raw))
}

/// Parse one nutrient range parameter
pub fn parse_range(nutrient: Nutrient, raw: Option<&str>) -> Result<NutrientFilter> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Ok(NutrientFilter::Unset),
        Some(raw) => raw,
    };

    if let Ok(value) = raw.parse::<f64>() {
        if !value.is_finite() || value < 0.0 {
            return Err(AppError::invalid(nutrient.param_name(), raw));
        }
        if value == 0.0 {
            return Ok(NutrientFilter::Unset);
        }
        return Ok(nutrient.default_bound(value));
    }

    preset(nutrient, raw).ok_or_else(|| AppError::invalid(nutrient.param_name(), raw))
}

/// Bucket presets the first version of the filter bar sent
fn preset(nutrient: Nutrient, raw: &str) -> Option<NutrientFilter> {
    use NutrientFilter::{AtLeast, AtMost, Between};

    let filter = match (nutrient, raw) {
        (Nutrient::Calories, "0-300") => AtMost(300.0),
        (Nutrient::Calories, "300-500") => Between { min: 300.0, max: 500.0 },
        (Nutrient::Calories, "500-800") => Between { min: 500.0, max: 800.0 },
        (Nutrient::Calories, "800+") => AtLeast(800.0),

        (Nutrient::Protein, "0-10") => AtMost(10.0),
        (Nutrient::Protein, "10-20") => Between { min: 10.0, max: 20.0 },
        (Nutrient::Protein, "20-30") => Between { min: 20.0, max: 30.0 },
        (Nutrient::Protein, "30+") => AtLeast(30.0),

        (Nutrient::Carbs, "0-30") => AtMost(30.0),
        (Nutrient::Carbs, "30-60") => Between { min: 30.0, max: 60.0 },
        (Nutrient::Carbs, "60-90") => Between { min: 60.0, max: 90.0 },
        (Nutrient::Carbs, "90+") => AtLeast(90.0),

        (Nutrient::Fat, "0-10") => AtMost(10.0),
        (Nutrient::Fat, "10-20") => Between { min: 10.0, max: 20.0 },
        (Nutrient::Fat, "20-30") => Between { min: 20.0, max: 30.0 },
        (Nutrient::Fat, "30+") => AtLeast(30.0),

        _ => return None,
    };

    Some(filter)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> SearchParams {
        SearchParams::default()
    }

    #[test]
    fn test_empty_params_are_unfiltered() {
        let query = params().parse().unwrap();
        assert!(query.is_unfiltered());
    }

    #[test]
    fn test_zero_and_empty_mean_unset() {
        let query = SearchParams {
            calorie_range: Some("0".to_string()),
            protein_range: Some("".to_string()),
            carbs_range: Some("0.0".to_string()),
            category_id: Some("0".to_string()),
            ..params()
        }
        .parse()
        .unwrap();

        assert!(query.is_unfiltered());
    }

    #[test]
    fn test_numbers_use_default_direction() {
        let query = SearchParams {
            calorie_range: Some("300".to_string()),
            protein_range: Some("15".to_string()),
            carbs_range: Some("45.5".to_string()),
            fat_range: Some("12".to_string()),
            ..params()
        }
        .parse()
        .unwrap();

        assert_eq!(query.calories, NutrientFilter::AtMost(300.0));
        assert_eq!(query.protein, NutrientFilter::AtLeast(15.0));
        assert_eq!(query.carbs, NutrientFilter::AtMost(45.5));
        assert_eq!(query.fat, NutrientFilter::AtMost(12.0));
    }

    #[test]
    fn test_bucket_presets() {
        assert_eq!(
            parse_range(Nutrient::Calories, Some("300-500")).unwrap(),
            NutrientFilter::Between { min: 300.0, max: 500.0 }
        );
        assert_eq!(
            parse_range(Nutrient::Calories, Some("0-300")).unwrap(),
            NutrientFilter::AtMost(300.0)
        );
        assert_eq!(
            parse_range(Nutrient::Protein, Some("0-10")).unwrap(),
            NutrientFilter::AtMost(10.0)
        );
        assert_eq!(
            parse_range(Nutrient::Carbs, Some("90+")).unwrap(),
            NutrientFilter::AtLeast(90.0)
        );
        assert_eq!(
            parse_range(Nutrient::Fat, Some("20-30")).unwrap(),
            NutrientFilter::Between { min: 20.0, max: 30.0 }
        );
    }

    #[test]
    fn test_presets_belong_to_their_nutrient() {
        // "800+" is a calorie bucket, not a fat bucket
        let err = parse_range(Nutrient::Fat, Some("800+")).unwrap_err();
        assert!(matches!(err, AppError::InvalidParameter { name: "fatRange", .. }));
    }

    #[test]
    fn test_malformed_ranges_are_rejected() {
        for raw in ["abc", "-5", "NaN", "inf", "10-"] {
            let err = parse_range(Nutrient::Calories, Some(raw)).unwrap_err();
            assert!(
                matches!(err, AppError::InvalidParameter { name: "calorieRange", .. }),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn test_malformed_category_rejects_query() {
        let err = SearchParams {
            category_id: Some("abc".to_string()),
            calorie_range: Some("300".to_string()),
            ..params()
        }
        .parse()
        .unwrap_err();

        match err {
            AppError::InvalidParameter { name, value } => {
                assert_eq!(name, "categoryId");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_q_takes_precedence_over_query() {
        let query = SearchParams {
            q: Some("치킨".to_string()),
            query: Some("피자".to_string()),
            ..params()
        }
        .parse()
        .unwrap();
        assert_eq!(query.text.as_deref(), Some("치킨"));

        let query = SearchParams {
            query: Some("피자".to_string()),
            ..params()
        }
        .parse()
        .unwrap();
        assert_eq!(query.text.as_deref(), Some("피자"));
    }

    #[test]
    fn test_blank_q_falls_back_to_query() {
        let query = SearchParams {
            q: Some("  ".to_string()),
            query: Some("피자".to_string()),
            ..params()
        }
        .parse()
        .unwrap();
        assert_eq!(query.text_term(), Some("피자"));
    }

    #[test]
    fn test_list_params() {
        let query = ListParams {
            franchise_id: Some("3".to_string()),
            category_id: None,
        }
        .parse()
        .unwrap();
        assert_eq!(query.franchise_id, Some(3));
        assert_eq!(query.category_id, None);

        assert!(ListParams {
            franchise_id: Some("x".to_string()),
            category_id: None,
        }
        .parse()
        .is_err());
    }

    #[test]
    fn test_path_ids() {
        assert_eq!(parse_path_id("id", "12").unwrap(), 12);
        assert!(parse_path_id("id", "twelve").is_err());
    }
}
