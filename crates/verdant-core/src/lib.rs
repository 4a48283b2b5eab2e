//! # verdant-core: Pure Business Logic for Verdant Nursery
//!
//! This crate is the **heart** of the Verdant Nursery storefront backend.
//! It contains the order-pricing and discount-validation logic as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Verdant Nursery Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Storefront (React)                           │   │
//! │  │    Catalog UI ──► Cart UI ──► Checkout UI ──► Confirmation     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ REST / JSON                            │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    API Handlers (axum)                          │   │
//! │  │    calculate_total, validate_discount, list_plants, ...        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ verdant-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  pricing  │  │ discount  │  │   │
//! │  │   │   Plant   │  │   Money   │  │  Engine   │  │ Evaluator │  │   │
//! │  │   │ CartLine  │  │  TaxCalc  │  │  Totals   │  │   rules   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    verdant-db (Database Layer)                  │   │
//! │  │              SQLite queries, migrations, repositories           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Plant, CartLine, DiscountCode, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Request validation boundary
//! - [`discount`] - Discount code evaluation rules
//! - [`tax`] - Region-keyed tax calculation
//! - [`shipping`] - Flat-rate / free-threshold shipping calculation
//! - [`pricing`] - Order pricing engine orchestrating the above
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//! 5. **Server-side prices**: Unit prices come from the catalog, never the client
//!
//! ## Example Usage
//!
//! ```rust
//! use verdant_core::money::Money;
//! use verdant_core::types::TaxRate;
//!
//! // Create money from cents (never from floats!)
//! let subtotal = Money::from_cents(5400); // $54.00
//!
//! // Calculate tax with round-half-up
//! let tax_rate = TaxRate::from_bps(800); // 8%
//! let tax = subtotal.calculate_tax(tax_rate);
//!
//! // Tax on $54.00 at 8% = $4.32
//! assert_eq!(tax.cents(), 432);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod discount;
pub mod error;
pub mod money;
pub mod pricing;
pub mod shipping;
pub mod tax;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use verdant_core::Money` instead of
// `use verdant_core::money::Money`

pub use discount::{check_usable, evaluate_discount, normalize_code};
pub use error::{PricingError, ValidationError};
pub use money::Money;
pub use pricing::PricingEngine;
pub use shipping::ShippingPolicy;
pub use tax::TaxTable;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum cart lines allowed in a single pricing request
///
/// ## Business Reason
/// Prevents runaway carts and keeps catalog lookups bounded per request.
pub const MAX_CART_LINES: usize = 100;

/// Maximum quantity of a single plant in a cart line
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_LINE_QUANTITY: i64 = 999;

/// Maximum accepted length of a user-entered discount code
pub const MAX_DISCOUNT_CODE_LENGTH: usize = 40;
