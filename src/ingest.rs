//! One-shot ingestion: source JSON file in, clean collection out.

use std::path::Path;

use serde_json::Value;
use sqlx::sqlite::SqlitePool;
use tracing::{info, warn};

use crate::database::replace_all;
use crate::error::AppError;
use crate::models::NewRecipe;
use crate::normalize::normalize_record;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestReport {
    pub stored: usize,
    pub skipped: usize,
}

/// Normalizes every raw record in `source`, counting the ones dropped
/// for lacking a title. The source is either an array of raw recipe
/// objects or a mapping of id to raw recipe object; both dump formats
/// occur in the wild.
pub fn normalize_source(source: &Value) -> Result<(Vec<NewRecipe>, usize), AppError> {
    let raw_records: Vec<&Value> = match source {
        Value::Array(items) => items.iter().collect(),
        Value::Object(map) => map.values().collect(),
        _ => return Err(AppError::SourceShape),
    };

    let mut recipes = Vec::with_capacity(raw_records.len());
    let mut skipped = 0;
    for raw in raw_records {
        match normalize_record(raw) {
            Some(recipe) => recipes.push(recipe),
            None => skipped += 1,
        }
    }

    Ok((recipes, skipped))
}

/// Reads the source file and replaces the stored collection wholesale.
/// A failure mid-batch aborts the run; the transaction in
/// [`replace_all`] keeps the previous contents intact in that case.
pub async fn run(pool: &SqlitePool, path: impl AsRef<Path>) -> Result<IngestReport, AppError> {
    let path = path.as_ref();
    info!("Loading recipes from {}", path.display());

    let text = std::fs::read_to_string(path)?;
    let source: Value = serde_json::from_str(&text)?;

    let (recipes, skipped) = normalize_source(&source)?;
    if skipped > 0 {
        warn!("Skipped {skipped} source records without a title");
    }

    replace_all(pool, &recipes).await?;

    Ok(IngestReport {
        stored: recipes.len(),
        skipped,
    })
}
