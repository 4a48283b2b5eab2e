//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A storefront total computed in floats drifts a cent at a time:        │
//! │    $29.99 × 3 = $89.97000000000001  → which cent do we charge?         │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    2999 cents × 3 = 8997 cents, exactly                                │
//! │    Percentages round ONCE, at the end of each derivation               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use verdant_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(2999); // $29.99
//!
//! // Arithmetic operations
//! let line = price.multiply_quantity(2);       // $59.98
//! let total = line + Money::from_cents(899);   // $68.97
//!
//! // NEVER do this:
//! // let bad = Money::from_float(29.99); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};
use ts_rs::TS;

use crate::types::TaxRate;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 cents**: Integer arithmetic only, formatted to decimal at the boundary
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Clamped subtraction**: Computed amounts never go negative; use
///   [`Money::saturating_sub`] instead of raw subtraction
///
/// ## Where Money Flows
/// ```text
/// Plant.price_cents ──► line total ──► subtotal ──► discount ──► taxable base
///                                         │                          │
///                                         ▼                          ▼
///                                     shipping                      tax
///                                         └──────────► total ◄───────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use verdant_core::money::Money;
    ///
    /// let price = Money::from_cents(2999); // Represents $29.99
    /// assert_eq!(price.cents(), 2999);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Subtracts another amount, clamping at zero.
    ///
    /// Computed money steps (taxable base, totals) must never go negative,
    /// so plain `Sub` is deliberately not implemented for this type.
    ///
    /// ## Example
    /// ```rust
    /// use verdant_core::money::Money;
    ///
    /// let subtotal = Money::from_cents(500);
    /// let discount = Money::from_cents(800);
    /// assert_eq!(subtotal.saturating_sub(discount), Money::zero());
    /// ```
    #[inline]
    pub const fn saturating_sub(&self, other: Money) -> Money {
        let diff = self.0 - other.0;
        if diff < 0 {
            Money(0)
        } else {
            Money(diff)
        }
    }

    /// Returns the smaller of two amounts.
    #[inline]
    pub const fn min(self, other: Money) -> Money {
        if self.0 <= other.0 {
            self
        } else {
            other
        }
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use verdant_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(1599); // $15.99
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total.cents(), 4797); // $47.97
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Computes a percentage of this amount, rounding half up to the cent.
    ///
    /// ## Arguments
    /// * `bps` - Percentage in basis points (1000 = 10%, 825 = 8.25%)
    ///
    /// ## Rounding
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  ROUND HALF UP, ONCE                                                │
    /// │                                                                     │
    /// │  Formula: (cents × bps + 5000) / 10000                              │
    /// │  The +5000 provides rounding (5000/10000 = 0.5)                     │
    /// │                                                                     │
    /// │  $60.00 × 10%   = 600.0  → 600 cents                                │
    /// │  $10.00 × 8.25% =  82.5  →  83 cents                                │
    /// │                                                                     │
    /// │  Each derivation rounds exactly once - never on intermediate       │
    /// │  values, so repeated percentages cannot accumulate drift.          │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// ## Example
    /// ```rust
    /// use verdant_core::money::Money;
    ///
    /// let subtotal = Money::from_cents(6000); // $60.00
    /// let discount = subtotal.percentage(1000); // 10%
    /// assert_eq!(discount.cents(), 600); // $6.00
    /// ```
    pub fn percentage(&self, bps: u32) -> Money {
        // Use i128 to prevent overflow on large amounts
        let cents = (self.0 as i128 * bps as i128 + 5000) / 10000;
        Money::from_cents(cents as i64)
    }

    /// Calculates tax on this amount using round-half-up.
    ///
    /// ## Example
    /// ```rust
    /// use verdant_core::money::Money;
    /// use verdant_core::types::TaxRate;
    ///
    /// let base = Money::from_cents(5400); // $54.00
    /// let rate = TaxRate::from_bps(800);  // 8%
    ///
    /// let tax = base.calculate_tax(rate);
    /// assert_eq!(tax.cents(), 432); // $4.32
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        self.percentage(rate.bps())
    }

    /// Formats the amount as a plain two-digit decimal string for the wire.
    ///
    /// API responses carry money as `"58.32"`, not a float, so clients never
    /// see binary-float artifacts.
    ///
    /// ## Example
    /// ```rust
    /// use verdant_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(5832).format(), "58.32");
    /// assert_eq!(Money::from_cents(0).format(), "0.00");
    /// ```
    pub fn format(&self) -> String {
        format!("{}.{:02}", self.dollars(), self.cents_part())
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for logs and debugging. Use [`Money::format`] for API payloads.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.dollars(), self.cents_part())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(2999);
        assert_eq!(money.cents(), 2999);
        assert_eq!(money.dollars(), 29);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(2999)), "$29.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_format_for_wire() {
        assert_eq!(Money::from_cents(5832).format(), "58.32");
        assert_eq!(Money::from_cents(899).format(), "8.99");
        assert_eq!(Money::from_cents(0).format(), "0.00");
        assert_eq!(Money::from_cents(100).format(), "1.00");
    }

    #[test]
    fn test_addition() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);
        assert_eq!((a + b).cents(), 1500);

        let mut c = Money::from_cents(100);
        c += Money::from_cents(23);
        assert_eq!(c.cents(), 123);
    }

    #[test]
    fn test_saturating_sub_clamps_at_zero() {
        let a = Money::from_cents(500);
        let b = Money::from_cents(800);

        assert_eq!(a.saturating_sub(b), Money::zero());
        assert_eq!(b.saturating_sub(a).cents(), 300);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_cents(1599);
        let line_total = unit_price.multiply_quantity(3);
        assert_eq!(line_total.cents(), 4797);
    }

    #[test]
    fn test_percentage_rounds_half_up() {
        // $10.00 at 8.25% = $0.825 → $0.83
        assert_eq!(Money::from_cents(1000).percentage(825).cents(), 83);
        // $60.00 at 10% = $6.00 exactly
        assert_eq!(Money::from_cents(6000).percentage(1000).cents(), 600);
        // 1 cent at 50% = 0.5 → rounds up to 1
        assert_eq!(Money::from_cents(1).percentage(5000).cents(), 1);
    }

    #[test]
    fn test_percentage_rounds_once_not_cumulatively() {
        // 15% of $10.00 = $1.50 exactly; derived in a single step
        let subtotal = Money::from_cents(1000);
        assert_eq!(subtotal.percentage(1500).cents(), 150);
    }

    #[test]
    fn test_tax_calculation() {
        // $54.00 at 8% = $4.32
        let base = Money::from_cents(5400);
        let rate = TaxRate::from_bps(800);
        assert_eq!(base.calculate_tax(rate).cents(), 432);

        // $30.00 at 8% = $2.40
        let base = Money::from_cents(3000);
        assert_eq!(base.calculate_tax(rate).cents(), 240);
    }

    #[test]
    fn test_min() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(650);
        assert_eq!(a.min(b), b);
        assert_eq!(b.min(a), b);
        assert_eq!(a.min(a), a);
    }

    #[test]
    fn test_serializes_as_integer_cents() {
        // The wire carries formatted strings; storage and IPC carry cents
        let money = Money::from_cents(5832);
        assert_eq!(serde_json::to_string(&money).unwrap(), "5832");

        let back: Money = serde_json::from_str("5832").unwrap();
        assert_eq!(back, money);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());

        let positive = Money::from_cents(100);
        assert!(!positive.is_zero());
        assert!(positive.is_positive());
    }
}
