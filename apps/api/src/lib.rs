//! # Verdant API
//!
//! REST server for the Verdant Nursery storefront.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Verdant API Routes                              │
//! │                                                                         │
//! │  ┌──────────────────────────┐  ┌───────────────────────────────────┐   │
//! │  │  Pricing                 │  │  Catalog                          │   │
//! │  │                          │  │                                   │   │
//! │  │ • POST /calculate-total  │  │ • GET /plants?category=&search=   │   │
//! │  │ • GET  /validate-discount│  │ • GET /plants/{id}                │   │
//! │  └──────────────────────────┘  │ • GET /categories                 │   │
//! │                                └───────────────────────────────────┘   │
//! │  ┌──────────────────────────┐                                          │
//! │  │  Ops                     │   All failures: { "detail": "..." }      │
//! │  │ • GET /health            │   with a non-2xx status                  │
//! │  └──────────────────────────┘                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `HTTP_PORT` - HTTP listen port (default: 8001)
//! - `DATABASE_PATH` - SQLite file path (default: ./verdant.db)
//! - `TAX_RATE_BPS` - Fallback sales tax in basis points (default: 800)
//! - `FREE_SHIPPING_THRESHOLD_CENTS` - Free shipping threshold (default: 5000)
//! - `FLAT_SHIPPING_RATE_CENTS` - Flat shipping rate (default: 899)

pub mod config;
pub mod error;
pub mod routes;

// Re-exports
pub use config::ApiConfig;
pub use error::ApiError;

use verdant_core::{Money, PricingEngine, ShippingPolicy, TaxRate, TaxTable};
use verdant_db::Database;

/// Shared application state.
pub struct AppState {
    pub db: Database,
    pub engine: PricingEngine,
}

impl AppState {
    /// Builds the state from a connected database and loaded configuration.
    pub fn new(db: Database, config: &ApiConfig) -> Self {
        let tax = TaxTable::new(TaxRate::from_bps(config.tax_rate_bps));
        let shipping = ShippingPolicy::new(
            Money::from_cents(config.free_shipping_threshold_cents),
            Money::from_cents(config.flat_shipping_rate_cents),
        );

        AppState {
            db,
            engine: PricingEngine::new(tax, shipping),
        }
    }
}
