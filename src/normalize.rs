//! Ingestion-side cleanup of inconsistently typed source values.
//!
//! Source dumps mix numbers, numbers-as-strings, strings with units
//! appended ("389 kcal"), explicit "NaN" markers, and missing fields.
//! Everything numeric is funneled through [`clean_numeric`] so nothing
//! untyped leaks past [`normalize_record`] into the stored model.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::models::NewRecipe;

static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.?\d*|\.\d+").unwrap());

/// Coerces an arbitrary raw JSON value into an optional float.
///
/// Numbers pass through unchanged, a case-insensitive `"nan"` string and
/// null both become `None`, and strings with an embedded number yield the
/// first numeric substring (`"389 kcal"` -> `389.0`). Anything else is
/// `None`. Total: never errors.
pub fn clean_numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()),
        Value::String(s) => {
            if s.trim().eq_ignore_ascii_case("nan") {
                return None;
            }
            let m = NUMBER_RE.find(s)?;
            m.as_str().parse().ok()
        }
        _ => None,
    }
}

/// Builds a clean [`NewRecipe`] from a raw source object, or `None` if the
/// record has no usable title. The caller tracks skipped records.
pub fn normalize_record(raw: &Value) -> Option<NewRecipe> {
    let title = raw.get("title")?.as_str()?;
    if title.is_empty() {
        return None;
    }

    Some(NewRecipe {
        title: title.to_string(),
        cuisine: string_field(raw, "cuisine"),
        rating: numeric_field(raw, "rating"),
        prep_time: numeric_field(raw, "prep_time"),
        cook_time: numeric_field(raw, "cook_time"),
        total_time: numeric_field(raw, "total_time"),
        description: string_field(raw, "description"),
        serves: string_field(raw, "serves"),
        nutrients: clean_nutrients(raw.get("nutrients")),
    })
}

fn string_field(raw: &Value, key: &str) -> Option<String> {
    raw.get(key).and_then(Value::as_str).map(str::to_string)
}

fn numeric_field(raw: &Value, key: &str) -> Option<f64> {
    raw.get(key).and_then(clean_numeric)
}

// Keys are kept verbatim; each value is normalized independently, so a
// partially dirty nutrient map keeps its clean entries. Absent or
// non-object input yields an empty map, never a missing one.
fn clean_nutrients(raw: Option<&Value>) -> BTreeMap<String, Option<f64>> {
    match raw.and_then(Value::as_object) {
        Some(map) => map
            .iter()
            .map(|(k, v)| (k.clone(), clean_numeric(v)))
            .collect(),
        None => BTreeMap::new(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{clean_numeric, normalize_record};

    #[test]
    fn test_numbers_pass_through() {
        assert_eq!(clean_numeric(&json!(12)), Some(12.0));
        assert_eq!(clean_numeric(&json!(4.5)), Some(4.5));
        assert_eq!(clean_numeric(&json!(0)), Some(0.0));
    }

    #[test]
    fn test_nan_and_null_are_absent() {
        assert_eq!(clean_numeric(&json!("NaN")), None);
        assert_eq!(clean_numeric(&json!("nan")), None);
        assert_eq!(clean_numeric(&json!(null)), None);
    }

    #[test]
    fn test_embedded_number_extracted() {
        assert_eq!(clean_numeric(&json!("389 kcal")), Some(389.0));
        assert_eq!(clean_numeric(&json!("about 12.5 g of fat")), Some(12.5));
        assert_eq!(clean_numeric(&json!("45")), Some(45.0));
        assert_eq!(clean_numeric(&json!(".5 cups")), Some(0.5));
    }

    #[test]
    fn test_first_number_wins() {
        assert_eq!(clean_numeric(&json!("25 to 30 minutes")), Some(25.0));
    }

    #[test]
    fn test_garbage_is_absent() {
        assert_eq!(clean_numeric(&json!("abc")), None);
        assert_eq!(clean_numeric(&json!("")), None);
        assert_eq!(clean_numeric(&json!(true)), None);
        assert_eq!(clean_numeric(&json!(["4"])), None);
    }

    #[test]
    fn test_record_without_title_skipped() {
        assert!(normalize_record(&json!({"cuisine": "Italian"})).is_none());
        assert!(normalize_record(&json!({"title": ""})).is_none());
        assert!(normalize_record(&json!({"title": 42})).is_none());
    }

    #[test]
    fn test_record_fields_normalized() {
        let raw = json!({
            "title": "Soup",
            "cuisine": "French",
            "rating": "4.6",
            "prep_time": "NaN",
            "total_time": 35,
            "serves": "4 servings",
            "nutrients": {"calories": "389 kcal", "fat": 12.5, "sodium": "NaN"}
        });
        let recipe = normalize_record(&raw).unwrap();

        assert_eq!(recipe.title, "Soup");
        assert_eq!(recipe.cuisine.as_deref(), Some("French"));
        assert_eq!(recipe.rating, Some(4.6));
        assert_eq!(recipe.prep_time, None);
        assert_eq!(recipe.cook_time, None);
        assert_eq!(recipe.total_time, Some(35.0));
        assert_eq!(recipe.serves.as_deref(), Some("4 servings"));
        assert_eq!(recipe.nutrients["calories"], Some(389.0));
        assert_eq!(recipe.nutrients["fat"], Some(12.5));
        assert_eq!(recipe.nutrients["sodium"], None);
    }

    #[test]
    fn test_nutrients_default_to_empty_map() {
        let recipe = normalize_record(&json!({"title": "Toast"})).unwrap();
        assert!(recipe.nutrients.is_empty());

        let recipe = normalize_record(&json!({"title": "Toast", "nutrients": "n/a"})).unwrap();
        assert!(recipe.nutrients.is_empty());
    }
}
