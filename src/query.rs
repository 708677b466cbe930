//! Composition of the search and listing queries.
//!
//! Filters combine conjunctively: every present, non-empty filter adds
//! one `AND` clause, absent filters add nothing, and a malformed numeric
//! token adds nothing (see [`crate::filter`]). Values always travel as
//! bound parameters. Composition only builds the query; execution lives
//! in [`crate::database`].

use serde::Deserialize;
use sqlx::{QueryBuilder, Sqlite};

use crate::filter::parse_numeric_filter;

const SELECT_RECIPES: &str = "SELECT id, title, cuisine, rating, prep_time, \
     cook_time, total_time, description, nutrients, serves FROM recipes";

/// Expression projecting the calories value out of the nutrients JSON
/// column. Cast to REAL so `calories=250` matches a stored `250.0`.
const CALORIES_EXPR: &str = "CAST(json_extract(nutrients, '$.calories') AS REAL)";

/// The raw, untyped filter set for one search request, straight from the
/// query string.
#[derive(Debug, Default, Deserialize)]
pub struct SearchFilters {
    pub title: Option<String>,
    pub cuisine: Option<String>,
    pub rating: Option<String>,
    pub total_time: Option<String>,
    pub calories: Option<String>,
}

/// Builds the composite search query from a filter set.
pub fn compose_search(filters: &SearchFilters) -> QueryBuilder<'static, Sqlite> {
    let mut qb = QueryBuilder::new(SELECT_RECIPES);
    qb.push(" WHERE 1=1");

    if let Some(title) = present(&filters.title) {
        // SQLite LIKE is case-insensitive for ASCII.
        qb.push(" AND title LIKE ");
        qb.push_bind(format!("%{title}%"));
    }

    if let Some(cuisine) = present(&filters.cuisine) {
        qb.push(" AND lower(cuisine) = lower(");
        qb.push_bind(cuisine.to_string());
        qb.push(")");
    }

    push_numeric(&mut qb, "rating", filters.rating.as_deref());
    push_numeric(&mut qb, "total_time", filters.total_time.as_deref());
    push_numeric(&mut qb, CALORIES_EXPR, filters.calories.as_deref());

    qb
}

/// Builds the listing query: rating descending with absent ratings after
/// every rated record, then the requested window.
pub fn compose_page(page: u32, limit: u32) -> QueryBuilder<'static, Sqlite> {
    let offset = (i64::from(page) - 1) * i64::from(limit);

    let mut qb = QueryBuilder::new(SELECT_RECIPES);
    qb.push(" ORDER BY rating DESC NULLS LAST LIMIT ");
    qb.push_bind(i64::from(limit));
    qb.push(" OFFSET ");
    qb.push_bind(offset);
    qb
}

pub const COUNT_RECIPES: &str = "SELECT COUNT(*) FROM recipes";

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

fn push_numeric(qb: &mut QueryBuilder<'static, Sqlite>, expr: &str, token: Option<&str>) {
    if let Some(filter) = token.and_then(parse_numeric_filter) {
        qb.push(" AND ");
        qb.push(expr);
        qb.push(" ");
        qb.push(filter.op.sql());
        qb.push(" ");
        qb.push_bind(filter.value);
    }
}
