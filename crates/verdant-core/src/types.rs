//! # Domain Types
//!
//! Core domain types used throughout the Verdant Nursery backend.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Plant       │   │  DiscountCode   │   │   OrderTotals   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  code (unique)  │   │  subtotal       │       │
//! │  │  price_cents    │   │  kind / value   │   │  discount       │       │
//! │  │  stock_quantity │   │  active/expires │   │  tax / shipping │       │
//! │  └─────────────────┘   └─────────────────┘   │  total          │       │
//! │                                              └─────────────────┘       │
//! │  ┌─────────────────┐   ┌─────────────────────┐   ┌─────────────┐      │
//! │  │    TaxRate      │   │ ShippingDestination │   │  CartLine   │      │
//! │  │  ─────────────  │   │  ─────────────────  │   │ ─────────── │      │
//! │  │  bps (u32)      │   │  country/state/...  │   │  plant_id   │      │
//! │  │  800 = 8%       │   │  (region key only)  │   │  quantity   │      │
//! │  └─────────────────┘   └─────────────────────┘   └─────────────┘      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All entities here are transient per request except [`Plant`] and
//! [`DiscountCode`], which are read-only records owned by the catalog and
//! discount stores. The pricing engine never mutates them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 800 bps = 8% (the storefront's default sales tax)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Plant
// =============================================================================

/// A plant in the nursery catalog.
///
/// Unit prices are resolved from this record at pricing time - a request
/// only carries `plant_id` and `quantity`, so a tampered client cannot
/// invent its own prices.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Plant {
    /// Unique identifier (e.g. "plant_001").
    pub id: String,

    /// Display name shown in the catalog.
    pub name: String,

    /// Marketing description.
    pub description: String,

    /// Care instructions shown on the product page.
    pub care_instructions: String,

    /// Light requirements shown on the product page.
    pub sunlight_requirements: String,

    /// Catalog category ("houseplant", "succulent", "flowering", ...).
    pub category: String,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Units currently available for sale.
    pub stock_quantity: i64,

    /// Catalog image URL.
    pub image_url: String,

    /// Shipping weight in grams.
    pub weight_grams: i64,

    /// When the record was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// When the record was last updated.
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Plant {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Checks whether the requested quantity is in stock.
    pub fn can_fulfill(&self, quantity: i64) -> bool {
        self.stock_quantity >= quantity
    }
}

// =============================================================================
// Cart Line
// =============================================================================

/// One line of a pricing request: a plant reference and a quantity.
///
/// ## Design Note
/// The line deliberately carries NO price. Catalog prices are resolved
/// server-side at computation time so that client-held prices can never
/// reach the totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartLine {
    /// Catalog id of the plant.
    pub plant_id: String,

    /// Requested quantity; must be positive (enforced at the boundary).
    pub quantity: i64,
}

// =============================================================================
// Shipping Destination
// =============================================================================

/// Where the order ships to.
///
/// Used only as a region key for tax and shipping lookups. Postal-format
/// validation is not a pricing concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ShippingDestination {
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

impl ShippingDestination {
    /// Normalized region key used for rate lookups, e.g. `"US-CA"`.
    pub fn region_key(&self) -> String {
        format!(
            "{}-{}",
            self.country.trim().to_uppercase(),
            self.state.trim().to_uppercase()
        )
    }
}

// =============================================================================
// Discount Code
// =============================================================================

/// How a discount code reduces the subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "snake_case"))]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DiscountKind {
    /// A percentage off the subtotal.
    Percentage,
    /// A fixed amount off the subtotal.
    FixedAmount,
}

/// A discount rule record, entered by customers as a code string.
///
/// Created and deactivated by an administrative process; read-only to the
/// pricing engine. A record with `active == false` or `expires_at` in the
/// past is never applied, no matter what the request claims.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct DiscountCode {
    /// The user-entered code, stored case-normalized (uppercase, trimmed).
    pub code: String,

    /// Percentage or fixed amount.
    pub kind: DiscountKind,

    /// Basis points for [`DiscountKind::Percentage`] (2000 = 20%),
    /// cents for [`DiscountKind::FixedAmount`] (1000 = $10.00).
    pub value: i64,

    /// Administrative kill switch.
    pub active: bool,

    /// The code stops working at this instant.
    #[ts(as = "String")]
    pub expires_at: DateTime<Utc>,

    /// Minimum order subtotal (cents) required to use the code, if any.
    pub min_subtotal_cents: Option<i64>,

    /// When the record was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl DiscountCode {
    /// Percentage value in basis points. Only meaningful for percentage codes.
    #[inline]
    pub fn percent_bps(&self) -> u32 {
        self.value.max(0) as u32
    }

    /// Fixed amount as Money. Only meaningful for fixed-amount codes.
    #[inline]
    pub fn fixed_amount(&self) -> Money {
        Money::from_cents(self.value.max(0))
    }

    /// Minimum subtotal as Money, if the code has one.
    pub fn min_subtotal(&self) -> Option<Money> {
        self.min_subtotal_cents.map(Money::from_cents)
    }

    /// Checks whether the code has expired as of `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }

    /// Human-readable description of the benefit, e.g. "Save 20%".
    pub fn describe(&self) -> String {
        match self.kind {
            DiscountKind::Percentage => {
                let bps = self.percent_bps();
                if bps % 100 == 0 {
                    format!("Save {}%", bps / 100)
                } else {
                    format!("Save {:.2}%", bps as f64 / 100.0)
                }
            }
            DiscountKind::FixedAmount => format!("Save ${}", self.fixed_amount().format()),
        }
    }
}

// =============================================================================
// Order Totals
// =============================================================================

/// The full pricing breakdown returned for an order.
///
/// ## Invariants
/// - `total == subtotal - discount_amount + tax_amount + shipping_cost`
/// - `total >= 0` and `discount_amount <= subtotal`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderTotals {
    /// Sum of catalog unit price × quantity across lines.
    pub subtotal: Money,

    /// Amount taken off the subtotal by a discount code.
    pub discount_amount: Money,

    /// Tax on the post-discount subtotal.
    pub tax_amount: Money,

    /// Shipping, derived from the pre-discount subtotal.
    pub shipping_cost: Money,

    /// What the customer pays.
    pub total: Money,
}

// =============================================================================
// Discount Outcome
// =============================================================================

/// Result of evaluating a discount code against a subtotal.
///
/// `applied == false` with a zero amount is the explicit "no discount
/// requested" outcome - it is NOT an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiscountOutcome {
    /// Amount taken off the subtotal. Always `<= subtotal`.
    pub amount: Money,

    /// Whether a code was actually applied.
    pub applied: bool,

    /// Benefit description for the UI ("Save 20%"), when applied.
    pub description: Option<String>,
}

impl DiscountOutcome {
    /// The outcome when no code was requested.
    pub fn none() -> Self {
        DiscountOutcome {
            amount: Money::zero(),
            applied: false,
            description: None,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
