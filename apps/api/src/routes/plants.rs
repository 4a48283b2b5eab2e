//! # Catalog Routes
//!
//! Read-only catalog endpoints backing the storefront's browse pages:
//!
//! - `GET /api/plants?category=&search=` - filtered listing
//! - `GET /api/plants/{id}` - product detail
//! - `GET /api/categories` - distinct categories for the filter bar

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use verdant_core::Plant;

use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// Query of `GET /api/plants`.
#[derive(Debug, Deserialize)]
pub struct PlantListQuery {
    /// Exact category filter.
    #[serde(default)]
    pub category: Option<String>,

    /// Case-insensitive substring search over name and description.
    #[serde(default)]
    pub search: Option<String>,
}

/// `GET /api/plants`
pub async fn list_plants(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PlantListQuery>,
) -> ApiResult<Json<Vec<Plant>>> {
    let plants = state
        .db
        .plants()
        .list(query.category.as_deref(), query.search.as_deref())
        .await?;

    Ok(Json(plants))
}

/// `GET /api/plants/{id}`
pub async fn get_plant(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Plant>> {
    let plant = state
        .db
        .plants()
        .get_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Plant not found".to_string()))?;

    Ok(Json(plant))
}

/// `GET /api/categories`
pub async fn list_categories(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<String>>> {
    let categories = state.db.plants().categories().await?;
    Ok(Json(categories))
}

// =============================================================================
// Tests
// =============================================================================
