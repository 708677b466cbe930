//! SQLite store: pool setup, schema, the wholesale-replace write path,
//! and execution of the composed queries.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::info;

use crate::error::AppError;
use crate::models::{NewRecipe, Recipe};
use crate::query::{self, SearchFilters};

const CREATE_RECIPES: &str = "CREATE TABLE IF NOT EXISTS recipes (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        cuisine TEXT,
        rating REAL,
        prep_time REAL,
        cook_time REAL,
        total_time REAL,
        description TEXT,
        serves TEXT,
        nutrients TEXT NOT NULL
    )";

pub async fn init_pool(database_url: &str) -> Result<SqlitePool, AppError> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(options).await?;

    sqlx::query(CREATE_RECIPES).execute(&pool).await?;
    Ok(pool)
}

/// Drops and rebuilds the collection from `recipes`, all in one
/// transaction. There is no incremental merge; every ingestion run
/// replaces the previous contents wholesale.
pub async fn replace_all(pool: &SqlitePool, recipes: &[NewRecipe]) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;

    sqlx::query("DROP TABLE IF EXISTS recipes")
        .execute(&mut *tx)
        .await?;
    sqlx::query(CREATE_RECIPES).execute(&mut *tx).await?;

    for recipe in recipes {
        let nutrients = serde_json::to_string(&recipe.nutrients)?;
        sqlx::query(
            "INSERT INTO recipes (title, cuisine, rating, prep_time, cook_time, \
             total_time, description, serves, nutrients) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&recipe.title)
        .bind(&recipe.cuisine)
        .bind(recipe.rating)
        .bind(recipe.prep_time)
        .bind(recipe.cook_time)
        .bind(recipe.total_time)
        .bind(&recipe.description)
        .bind(&recipe.serves)
        .bind(nutrients)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    info!("Stored {} recipes", recipes.len());
    Ok(())
}

/// One page of the rating-sorted listing, plus the total count
/// independent of the window.
pub async fn fetch_page(
    pool: &SqlitePool,
    page: u32,
    limit: u32,
) -> Result<(Vec<Recipe>, i64), AppError> {
    let total: i64 = sqlx::query_scalar(query::COUNT_RECIPES)
        .fetch_one(pool)
        .await?;

    let recipes = query::compose_page(page, limit)
        .build_query_as::<Recipe>()
        .fetch_all(pool)
        .await?;

    Ok((recipes, total))
}

pub async fn search(
    pool: &SqlitePool,
    filters: &SearchFilters,
) -> Result<Vec<Recipe>, AppError> {
    let recipes = query::compose_search(filters)
        .build_query_as::<Recipe>()
        .fetch_all(pool)
        .await?;

    Ok(recipes)
}
