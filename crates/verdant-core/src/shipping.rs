//! # Shipping Calculation
//!
//! Derives the shipping cost from the order subtotal and destination.
//!
//! ## Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Shipping Cost                                      │
//! │                                                                         │
//! │  subtotal < $50.00   ──►  flat $8.99                                    │
//! │  subtotal ≥ $50.00   ──►  FREE                                          │
//! │                                                                         │
//! │  The threshold compares the PRE-discount subtotal: free shipping is    │
//! │  about order size, not net payment. A $55 order with a $10 code        │
//! │  still ships free.                                                     │
//! │                                                                         │
//! │  Boundary: exactly $50.00 qualifies. Tests pin this down to the cent.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Threshold and flat rate are configuration carried by [`ShippingPolicy`],
//! not constants buried in call sites; the named defaults below exist so
//! tests can assert the boundary exactly.

use crate::money::Money;
use crate::types::ShippingDestination;

/// Default free-shipping threshold: orders of $50.00 or more ship free.
pub const FREE_SHIPPING_THRESHOLD_CENTS: i64 = 5000;

/// Default flat rate charged below the threshold: $8.99.
pub const FLAT_SHIPPING_RATE_CENTS: i64 = 899;

/// Shipping pricing rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShippingPolicy {
    /// Orders at or above this subtotal ship free.
    pub free_threshold: Money,

    /// Flat rate charged below the threshold.
    pub flat_rate: Money,
}

impl ShippingPolicy {
    /// Creates a policy with explicit threshold and rate.
    pub const fn new(free_threshold: Money, flat_rate: Money) -> Self {
        ShippingPolicy {
            free_threshold,
            flat_rate,
        }
    }

    /// Computes the shipping cost for an order.
    ///
    /// The destination participates in the contract for parity with tax
    /// resolution; the flat-rate policy prices every region the same.
    ///
    /// ## Example
    /// ```rust
    /// use verdant_core::money::Money;
    /// use verdant_core::shipping::ShippingPolicy;
    /// # let destination = verdant_core::types::ShippingDestination {
    /// #     address: String::new(), city: String::new(), state: "CA".into(),
    /// #     zip_code: String::new(), country: "US".into(),
    /// # };
    ///
    /// let policy = ShippingPolicy::default();
    /// assert_eq!(
    ///     policy.compute_shipping(Money::from_cents(3000), &destination).cents(),
    ///     899
    /// );
    /// assert!(policy.compute_shipping(Money::from_cents(6000), &destination).is_zero());
    /// ```
    pub fn compute_shipping(&self, subtotal: Money, _destination: &ShippingDestination) -> Money {
        if subtotal >= self.free_threshold {
            Money::zero()
        } else {
            self.flat_rate
        }
    }
}

impl Default for ShippingPolicy {
    fn default() -> Self {
        ShippingPolicy::new(
            Money::from_cents(FREE_SHIPPING_THRESHOLD_CENTS),
            Money::from_cents(FLAT_SHIPPING_RATE_CENTS),
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
