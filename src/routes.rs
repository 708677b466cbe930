use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::database::{fetch_page, search};
use crate::error::AppError;
use crate::models::{RecipePage, SearchResults};
use crate::query::SearchFilters;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    page: Option<String>,
    limit: Option<String>,
}

/// `GET /api/recipes` — the full collection, paginated and sorted by
/// rating descending with unrated recipes last.
pub async fn recipes_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageParams>,
) -> Result<Json<RecipePage>, AppError> {
    let page = parse_positive(params.page.as_deref(), 1)?;
    let limit = parse_positive(params.limit.as_deref(), state.config.default_limit)?;

    let (data, total) = fetch_page(&state.pool, page, limit).await?;

    Ok(Json(RecipePage {
        page,
        limit,
        total,
        data,
    }))
}

/// `GET /api/recipes/search` — filtered, unpaginated results.
pub async fn search_handler(
    State(state): State<Arc<AppState>>,
    Query(filters): Query<SearchFilters>,
) -> Result<Json<SearchResults>, AppError> {
    let data = search(&state.pool, &filters).await?;

    Ok(Json(SearchResults { data }))
}

// Pagination is strict: anything that is not a positive integer is a
// client error, never clamped to a fallback page.
fn parse_positive(raw: Option<&str>, default: u32) -> Result<u32, AppError> {
    match raw {
        None => Ok(default),
        Some(s) => s
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|&n| n > 0)
            .ok_or(AppError::InvalidPagination),
    }
}
