//! # Tax Calculation
//!
//! Derives sales tax from a taxable base and a shipping destination.
//!
//! ## Tax Base Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      What Gets Taxed                                    │
//! │                                                                         │
//! │  subtotal ($60.00)                                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  − discount ($6.00)                                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  taxable base ($54.00)  ◄── TAX IS COMPUTED HERE                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  × 8% = $4.32                                                           │
//! │                                                                         │
//! │  POLICY: tax applies to the POST-discount subtotal - the net amount    │
//! │  the customer is actually charged for goods. Implementations taxing   │
//! │  the pre-discount subtotal must document the deviation; it changes    │
//! │  the total materially.                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rate resolution is a pure function of the destination's region key.
//! An unresolvable region falls back to a configured default rate rather
//! than failing - an unrecognized destination should not block checkout.

use std::collections::HashMap;

use crate::money::Money;
use crate::types::{ShippingDestination, TaxRate};

/// Default tax rate in basis points (8%), applied when the destination's
/// region has no specific entry.
pub const DEFAULT_TAX_RATE_BPS: u32 = 800;

/// Region-keyed tax rate table with a fallback rate.
///
/// ## Example
/// ```rust
/// use verdant_core::tax::TaxTable;
/// use verdant_core::types::TaxRate;
///
/// let table = TaxTable::new(TaxRate::from_bps(800))
///     .with_region("US-OR", TaxRate::zero());
/// ```
#[derive(Debug, Clone)]
pub struct TaxTable {
    /// Specific rates by region key ("US-CA" → 7.25%).
    regional: HashMap<String, TaxRate>,

    /// Rate used when the region key has no entry.
    fallback: TaxRate,
}

impl TaxTable {
    /// Creates a table with the given fallback rate and no regional entries.
    pub fn new(fallback: TaxRate) -> Self {
        TaxTable {
            regional: HashMap::new(),
            fallback,
        }
    }

    /// Adds or replaces the rate for a region key.
    pub fn with_region(mut self, region: impl Into<String>, rate: TaxRate) -> Self {
        self.regional.insert(region.into(), rate);
        self
    }

    /// Resolves the rate for a destination.
    ///
    /// Pure lookup: an unknown region resolves to the fallback rate.
    pub fn rate_for(&self, destination: &ShippingDestination) -> TaxRate {
        self.regional
            .get(&destination.region_key())
            .copied()
            .unwrap_or(self.fallback)
    }

    /// Computes tax on a taxable base for a destination.
    ///
    /// The base is the post-discount subtotal; see the module docs for the
    /// policy. Rounds half-up, once.
    ///
    /// ## Example
    /// ```rust
    /// use verdant_core::money::Money;
    /// use verdant_core::tax::TaxTable;
    ///
    /// let table = TaxTable::default();
    /// # let destination = verdant_core::types::ShippingDestination {
    /// #     address: String::new(), city: String::new(), state: "CA".into(),
    /// #     zip_code: String::new(), country: "US".into(),
    /// # };
    /// let tax = table.compute_tax(Money::from_cents(5400), &destination);
    /// assert_eq!(tax.cents(), 432); // $54.00 at 8%
    /// ```
    pub fn compute_tax(&self, taxable_base: Money, destination: &ShippingDestination) -> Money {
        taxable_base.calculate_tax(self.rate_for(destination))
    }
}

/// The storefront default: 8% everywhere.
impl Default for TaxTable {
    fn default() -> Self {
        TaxTable::new(TaxRate::from_bps(DEFAULT_TAX_RATE_BPS))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
