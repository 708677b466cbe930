//! Domain model and response envelopes.

use std::collections::BTreeMap;

use serde::Serialize;
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};

/// Nutrient name to optional value. Keys come through from the source
/// verbatim; a null value means the source had one but it was unusable.
pub type Nutrients = BTreeMap<String, Option<f64>>;

/// A stored recipe. Numeric fields are a valid float or absent, never a
/// string or NaN marker; that invariant is established at ingestion.
#[derive(Debug, Clone, Serialize)]
pub struct Recipe {
    pub id: i64,
    pub title: String,
    pub cuisine: Option<String>,
    pub rating: Option<f64>,
    pub prep_time: Option<f64>,
    pub cook_time: Option<f64>,
    pub total_time: Option<f64>,
    pub description: Option<String>,
    pub nutrients: Nutrients,
    pub serves: Option<String>,
}

impl FromRow<'_, SqliteRow> for Recipe {
    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        let nutrients_json: String = row.try_get("nutrients")?;
        let nutrients = serde_json::from_str(&nutrients_json).map_err(|e| {
            sqlx::Error::ColumnDecode {
                index: "nutrients".into(),
                source: Box::new(e),
            }
        })?;

        Ok(Self {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            cuisine: row.try_get("cuisine")?,
            rating: row.try_get("rating")?,
            prep_time: row.try_get("prep_time")?,
            cook_time: row.try_get("cook_time")?,
            total_time: row.try_get("total_time")?,
            description: row.try_get("description")?,
            nutrients,
            serves: row.try_get("serves")?,
        })
    }
}

/// A normalized recipe ready for insertion; the store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRecipe {
    pub title: String,
    pub cuisine: Option<String>,
    pub rating: Option<f64>,
    pub prep_time: Option<f64>,
    pub cook_time: Option<f64>,
    pub total_time: Option<f64>,
    pub description: Option<String>,
    pub serves: Option<String>,
    pub nutrients: Nutrients,
}

/// Envelope for the paginated listing endpoint.
#[derive(Debug, Serialize)]
pub struct RecipePage {
    pub page: u32,
    pub limit: u32,
    pub total: i64,
    pub data: Vec<Recipe>,
}

/// Envelope for search results, which are not paginated.
#[derive(Debug, Serialize)]
pub struct SearchResults {
    pub data: Vec<Recipe>,
}
