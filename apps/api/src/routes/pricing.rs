//! # Pricing Routes
//!
//! The two endpoints backing checkout:
//!
//! - `POST /api/calculate-total` - full totals breakdown for a cart
//! - `GET /api/validate-discount` - "Apply" button feedback for a code,
//!   without recomputing the whole order
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   POST /api/calculate-total                             │
//! │                                                                         │
//! │  JSON body ──► validate lines/code (verdant-core::validation)          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  batch-fetch catalog rows + discount record (verdant-db)               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  PricingEngine::price_order (pure)                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  { subtotal, tax_amount, shipping_cost, discount_amount, total }       │
//! │  (two-digit decimal strings)                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use verdant_core::validation::{validate_discount_code, validate_lines};
use verdant_core::{check_usable, normalize_code, CartLine, DiscountKind, OrderTotals};
use verdant_core::{PricingError, ShippingDestination, ValidationError};

use crate::error::ApiResult;
use crate::AppState;

// =============================================================================
// Wire Types
// =============================================================================

/// Body of `POST /api/calculate-total`.
#[derive(Debug, Deserialize)]
pub struct OrderRequest {
    /// Cart lines; prices are resolved server-side, never taken from here.
    pub items: Vec<CartLine>,

    /// Shipping destination (region key for tax/shipping lookups).
    pub shipping_info: ShippingDestination,

    /// Optional discount code; empty means "no discount requested".
    #[serde(default)]
    pub discount_code: Option<String>,

    /// Sent by the storefront for order attribution; pricing ignores it.
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Response of `POST /api/calculate-total`.
///
/// Money travels as two-digit decimal strings ("58.32") so clients never
/// parse binary-float artifacts.
#[derive(Debug, Serialize)]
pub struct TotalsResponse {
    pub subtotal: String,
    pub tax_amount: String,
    pub shipping_cost: String,
    pub discount_amount: String,
    pub total: String,
}

impl From<OrderTotals> for TotalsResponse {
    fn from(totals: OrderTotals) -> Self {
        TotalsResponse {
            subtotal: totals.subtotal.format(),
            tax_amount: totals.tax_amount.format(),
            shipping_cost: totals.shipping_cost.format(),
            discount_amount: totals.discount_amount.format(),
            total: totals.total.format(),
        }
    }
}

/// Query of `GET /api/validate-discount`.
#[derive(Debug, Deserialize)]
pub struct ValidateDiscountQuery {
    #[serde(default)]
    pub discount_code: Option<String>,
}

/// Response of `GET /api/validate-discount`.
#[derive(Debug, Serialize)]
pub struct DiscountValidationResponse {
    pub valid: bool,

    /// Benefit description for the UI, e.g. "Save 20%".
    pub description: String,

    /// Face value for fixed-amount codes ("10.00"). Percentage amounts
    /// depend on the cart subtotal, so they are omitted here and computed
    /// by calculate-total.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_amount: Option<String>,
}

// =============================================================================
// Handlers
// =============================================================================

/// `POST /api/calculate-total`
///
/// Prices a cart against the live catalog. Fails with the precise reason
/// (unknown plant, stock, discount rules) instead of silently degrading.
pub async fn calculate_total(
    State(state): State<Arc<AppState>>,
    Json(request): Json<OrderRequest>,
) -> ApiResult<Json<TotalsResponse>> {
    validate_lines(&request.items).map_err(PricingError::Validation)?;

    let requested_code = request.discount_code.as_deref();
    if let Some(code) = requested_code {
        validate_discount_code(code).map_err(PricingError::Validation)?;
    }

    debug!(
        lines = request.items.len(),
        discount = requested_code.unwrap_or(""),
        "Pricing order"
    );

    // Resolve everything the pure engine needs up front: catalog rows for
    // each referenced plant, and the discount record when a code was sent.
    // Store read failures surface as DependencyUnavailable (503), never as
    // a discount or catalog verdict.
    let plant_ids: Vec<String> = request
        .items
        .iter()
        .map(|line| line.plant_id.clone())
        .collect();
    let catalog = state
        .db
        .plants()
        .get_by_ids(&plant_ids)
        .await
        .map_err(|e| PricingError::DependencyUnavailable(e.to_string()))?;

    let discount_record = match requested_code.map(str::trim) {
        Some(code) if !code.is_empty() => state
            .db
            .discount_codes()
            .find(code)
            .await
            .map_err(|e| PricingError::DependencyUnavailable(e.to_string()))?,
        _ => None,
    };

    let totals = state.engine.price_order(
        &request.items,
        &catalog,
        &request.shipping_info,
        requested_code,
        discount_record.as_ref(),
        Utc::now(),
    )?;

    Ok(Json(totals.into()))
}

/// `GET /api/validate-discount?discount_code=X`
///
/// Existence + usability check for the storefront's "Apply" button. The
/// subtotal-dependent rules (minimum order, percentage amount) are only
/// enforceable by calculate-total.
pub async fn validate_discount(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ValidateDiscountQuery>,
) -> ApiResult<Json<DiscountValidationResponse>> {
    let raw = query.discount_code.unwrap_or_default();
    if raw.trim().is_empty() {
        return Err(PricingError::Validation(ValidationError::Required {
            field: "discount_code".to_string(),
        })
        .into());
    }
    validate_discount_code(&raw).map_err(PricingError::Validation)?;

    let record = state
        .db
        .discount_codes()
        .find(&raw)
        .await?
        .ok_or_else(|| PricingError::InvalidCode(normalize_code(&raw)))?;

    check_usable(&record, Utc::now())?;

    let discount_amount = match record.kind {
        DiscountKind::FixedAmount => Some(record.fixed_amount().format()),
        DiscountKind::Percentage => None,
    };

    Ok(Json(DiscountValidationResponse {
        valid: true,
        description: record.describe(),
        discount_amount,
    }))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::router;
    use crate::ApiConfig;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::Router;
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use verdant_db::{Database, DbConfig};

    async fn test_app() -> Router {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        verdant_db::seed::seed_database(&db).await.unwrap();
        router(Arc::new(AppState::new(db, &ApiConfig::default())))
    }

    fn order_body(items: Value, discount_code: Option<&str>) -> Body {
        let body = json!({
            "items": items,
            "shipping_info": {
                "address": "123 Garden Way",
                "city": "Springfield",
                "state": "IL",
                "zip_code": "62704",
                "country": "US"
            },
            "discount_code": discount_code,
            "user_id": null
        });
        Body::from(serde_json::to_vec(&body).unwrap())
    }

    async fn post_totals(app: Router, items: Value, code: Option<&str>) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/calculate-total")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(order_body(items, code))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_calculate_total_without_discount() {
        // 2 × Snake Plant ($19.99) = $39.98, tax 8% = $3.20,
        // shipping $8.99 (under $50) → total $52.17
        let app = test_app().await;
        let (status, body) = post_totals(
            app,
            json!([{ "plant_id": "plant_002", "quantity": 2 }]),
            None,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["subtotal"], "39.98");
        assert_eq!(body["discount_amount"], "0.00");
        assert_eq!(body["tax_amount"], "3.20");
        assert_eq!(body["shipping_cost"], "8.99");
        assert_eq!(body["total"], "52.17");
    }

    #[tokio::test]
    async fn test_calculate_total_with_percentage_code() {
        // 2 × Monstera ($29.99) = $59.98, SPRING20 → $12.00 off,
        // tax 8% on $47.98 = $3.84, free shipping (≥ $50) → $51.82
        let app = test_app().await;
        let (status, body) = post_totals(
            app,
            json!([{ "plant_id": "plant_001", "quantity": 2 }]),
            Some("spring20"), // case-insensitive lookup
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["subtotal"], "59.98");
        assert_eq!(body["discount_amount"], "12.00");
        assert_eq!(body["tax_amount"], "3.84");
        assert_eq!(body["shipping_cost"], "0.00");
        assert_eq!(body["total"], "51.82");
    }

    #[tokio::test]
    async fn test_unknown_plant_is_404_with_detail() {
        let app = test_app().await;
        let (status, body) = post_totals(
            app,
            json!([{ "plant_id": "plant_999", "quantity": 1 }]),
            None,
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Plant not found: plant_999");
    }

    #[tokio::test]
    async fn test_insufficient_stock_is_400() {
        // Fiddle Leaf Fig seeds with 15 in stock
        let app = test_app().await;
        let (status, body) = post_totals(
            app,
            json!([{ "plant_id": "plant_003", "quantity": 20 }]),
            None,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["detail"],
            "Insufficient stock for Fiddle Leaf Fig: available 15, requested 20"
        );
    }

    #[tokio::test]
    async fn test_bad_code_fails_the_request_not_silently() {
        let app = test_app().await;
        let (status, body) = post_totals(
            app,
            json!([{ "plant_id": "plant_002", "quantity": 1 }]),
            Some("BOGUS"),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Invalid discount code");
    }

    #[tokio::test]
    async fn test_minimum_not_met_is_400() {
        // SAVE10 requires a $25.00 subtotal; 1 × Pothos is $15.99
        let app = test_app().await;
        let (status, body) = post_totals(
            app,
            json!([{ "plant_id": "plant_004", "quantity": 1 }]),
            Some("SAVE10"),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["detail"],
            "Discount code SAVE10 requires a minimum order of $25.00 (subtotal $15.99)"
        );
    }

    #[tokio::test]
    async fn test_empty_cart_is_400() {
        let app = test_app().await;
        let (status, body) = post_totals(app, json!([]), None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "Validation error: items is required");
    }

    #[tokio::test]
    async fn test_validate_discount_happy_path() {
        let app = test_app().await;
        let (status, body) =
            get_json(app, "/api/validate-discount?discount_code=SPRING20").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["valid"], true);
        assert_eq!(body["description"], "Save 20%");
        assert!(body.get("discount_amount").is_none());
    }

    #[tokio::test]
    async fn test_validate_discount_fixed_amount_includes_value() {
        let app = test_app().await;
        let (status, body) = get_json(app, "/api/validate-discount?discount_code=save10").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["valid"], true);
        assert_eq!(body["description"], "Save $10.00");
        assert_eq!(body["discount_amount"], "10.00");
    }

    #[tokio::test]
    async fn test_validate_discount_unknown_code_is_404() {
        let app = test_app().await;
        let (status, body) = get_json(app, "/api/validate-discount?discount_code=NOPE").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Invalid discount code");
    }

    #[tokio::test]
    async fn test_validate_discount_inactive_code_is_400() {
        // LEAFY15 seeds deactivated
        let app = test_app().await;
        let (status, body) = get_json(app, "/api/validate-discount?discount_code=LEAFY15").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "Discount code LEAFY15 is no longer active");
    }

    #[tokio::test]
    async fn test_validate_discount_requires_a_code() {
        let app = test_app().await;
        let (status, body) = get_json(app, "/api/validate-discount").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "Validation error: discount_code is required");
    }
}
