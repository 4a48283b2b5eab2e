//! # Order Pricing Engine
//!
//! Orchestrates price resolution, discount evaluation, tax and shipping
//! into a single totals breakdown.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       price_order() Pipeline                            │
//! │                                                                         │
//! │  ReceivingInput                                                         │
//! │       │  validate lines (non-empty, quantities in range)                │
//! │       ▼                                                                 │
//! │  ResolvingPrices                                                        │
//! │       │  catalog lookup per line  ──► UnknownPlant / InsufficientStock  │
//! │       │  subtotal = Σ price × qty                                       │
//! │       ▼                                                                 │
//! │  ApplyingDiscount                                                       │
//! │       │  evaluate code ──► InvalidCode / CodeNotUsable / MinimumNotMet  │
//! │       │  (empty code = explicit no-discount path, NOT a failure)        │
//! │       ▼                                                                 │
//! │  ComputingTax                                                           │
//! │       │  taxable base = subtotal − discount (post-discount policy)      │
//! │       ▼                                                                 │
//! │  ComputingShipping                                                      │
//! │       │  threshold checked against PRE-discount subtotal                │
//! │       ▼                                                                 │
//! │  Composed ──► OrderTotals                                               │
//! │                                                                         │
//! │  Any failure short-circuits; no step retries. The engine never         │
//! │  proceeds with a silent zero discount after a discount failure.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine is pure: the caller resolves catalog rows and the discount
//! record from the store and passes them in, so every run is deterministic
//! given its inputs. Store read failures surface from the caller as
//! [`PricingError::DependencyUnavailable`]; the engine itself performs no
//! I/O and no retries.

use chrono::{DateTime, Utc};

use crate::discount::evaluate_discount;
use crate::error::{PricingError, PricingResult};
use crate::money::Money;
use crate::shipping::ShippingPolicy;
use crate::tax::TaxTable;
use crate::types::{CartLine, DiscountCode, OrderTotals, Plant, ShippingDestination};
use crate::validation::validate_lines;

/// The order pricing engine.
///
/// Holds the tax table and shipping policy; owns no request state, so one
/// engine can price any number of concurrent requests.
///
/// ## Example
/// ```rust,ignore
/// let engine = PricingEngine::default();
/// let totals = engine.price_order(
///     &lines,
///     &catalog_rows,
///     &destination,
///     Some("SPRING20"),
///     discount_record.as_ref(),
///     Utc::now(),
/// )?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    tax: TaxTable,
    shipping: ShippingPolicy,
}

impl PricingEngine {
    /// Creates an engine with explicit tax and shipping configuration.
    pub fn new(tax: TaxTable, shipping: ShippingPolicy) -> Self {
        PricingEngine { tax, shipping }
    }

    /// Returns the shipping policy (for response hints like "free over $50").
    pub fn shipping_policy(&self) -> &ShippingPolicy {
        &self.shipping
    }

    /// Prices an order.
    ///
    /// ## Arguments
    /// * `lines` - Cart lines (plant id + quantity; prices are NOT trusted
    ///   from the client)
    /// * `catalog` - Catalog rows the caller fetched for the referenced ids
    /// * `destination` - Shipping destination (region key for tax/shipping)
    /// * `requested_code` - Raw discount code from the request, if any
    /// * `discount_record` - The rule record looked up for that code, if any
    /// * `now` - Evaluation instant for expiry checks
    ///
    /// ## Returns
    /// The full [`OrderTotals`] breakdown, satisfying
    /// `total == subtotal - discount + tax + shipping` and `total >= 0`.
    pub fn price_order(
        &self,
        lines: &[CartLine],
        catalog: &[Plant],
        destination: &ShippingDestination,
        requested_code: Option<&str>,
        discount_record: Option<&DiscountCode>,
        now: DateTime<Utc>,
    ) -> PricingResult<OrderTotals> {
        validate_lines(lines)?;

        // Resolve every line against the catalog before any math: totals
        // must describe a fulfillable order.
        let mut subtotal = Money::zero();
        for line in lines {
            let plant = catalog
                .iter()
                .find(|p| p.id == line.plant_id)
                .ok_or_else(|| PricingError::UnknownPlant(line.plant_id.clone()))?;

            if !plant.can_fulfill(line.quantity) {
                return Err(PricingError::InsufficientStock {
                    plant: plant.name.clone(),
                    available: plant.stock_quantity,
                    requested: line.quantity,
                });
            }

            subtotal += plant.price().multiply_quantity(line.quantity);
        }

        // Discount failures propagate verbatim; an empty code is the
        // explicit no-discount path inside the evaluator.
        let discount = evaluate_discount(requested_code, discount_record, subtotal, now)?;

        // Tax applies to the post-discount base; shipping thresholds on the
        // pre-discount subtotal. Both policies are deliberate - see the
        // tax and shipping module docs.
        let taxable_base = subtotal.saturating_sub(discount.amount);
        let tax_amount = self.tax.compute_tax(taxable_base, destination);
        let shipping_cost = self.shipping.compute_shipping(subtotal, destination);

        // Normal inputs can never drive this negative (discount ≤ subtotal
        // and tax/shipping are non-negative); the clamp is a final guard.
        let total = taxable_base + tax_amount + shipping_cost;
        let total = if total.cents() < 0 {
            Money::zero()
        } else {
            total
        };

        Ok(OrderTotals {
            subtotal,
            discount_amount: discount.amount,
            tax_amount,
            shipping_cost,
            total,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DiscountKind;
    use chrono::Duration;

    fn plant(id: &str, price_cents: i64, stock: i64) -> Plant {
        Plant {
            id: id.to_string(),
            name: format!("Plant {}", id),
            description: String::new(),
            care_instructions: String::new(),
            sunlight_requirements: String::new(),
            category: "houseplant".to_string(),
            price_cents,
            stock_quantity: stock,
            image_url: String::new(),
            weight_grams: 2000,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn destination() -> ShippingDestination {
        ShippingDestination {
            address: "123 Garden Way".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            zip_code: "62704".to_string(),
            country: "US".to_string(),
        }
    }

    fn percent_code(bps: i64) -> DiscountCode {
        DiscountCode {
            code: "SPRING20".to_string(),
            kind: DiscountKind::Percentage,
            value: bps,
            active: true,
            expires_at: Utc::now() + Duration::days(30),
            min_subtotal_cents: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_sixty_dollar_cart_with_ten_percent_code() {
        // $60.00 subtotal, 10% code → $6.00 off, tax 8% on $54.00 = $4.32,
        // free shipping (≥ $50) → total $58.32
        let engine = PricingEngine::default();
        let catalog = vec![plant("plant_001", 3000, 10)];
        let lines = vec![CartLine {
            plant_id: "plant_001".to_string(),
            quantity: 2,
        }];
        let code = percent_code(1000);

        let totals = engine
            .price_order(
                &lines,
                &catalog,
                &destination(),
                Some("SPRING20"),
                Some(&code),
                Utc::now(),
            )
            .unwrap();

        assert_eq!(totals.subtotal.cents(), 6000);
        assert_eq!(totals.discount_amount.cents(), 600);
        assert_eq!(totals.tax_amount.cents(), 432);
        assert_eq!(totals.shipping_cost.cents(), 0);
        assert_eq!(totals.total.cents(), 5832);
    }

    #[test]
    fn test_thirty_dollar_cart_no_discount() {
        // $30.00 subtotal, no code → tax $2.40, shipping $8.99 → $41.39
        let engine = PricingEngine::default();
        let catalog = vec![plant("plant_002", 1500, 10)];
        let lines = vec![CartLine {
            plant_id: "plant_002".to_string(),
            quantity: 2,
        }];

        let totals = engine
            .price_order(&lines, &catalog, &destination(), None, None, Utc::now())
            .unwrap();

        assert_eq!(totals.subtotal.cents(), 3000);
        assert_eq!(totals.discount_amount.cents(), 0);
        assert_eq!(totals.tax_amount.cents(), 240);
        assert_eq!(totals.shipping_cost.cents(), 899);
        assert_eq!(totals.total.cents(), 4139);
    }

    #[test]
    fn test_totals_identity_holds() {
        let engine = PricingEngine::default();
        let catalog = vec![plant("plant_001", 2999, 25), plant("plant_004", 1599, 35)];
        let lines = vec![
            CartLine {
                plant_id: "plant_001".to_string(),
                quantity: 1,
            },
            CartLine {
                plant_id: "plant_004".to_string(),
                quantity: 3,
            },
        ];
        let code = percent_code(2000);

        let totals = engine
            .price_order(
                &lines,
                &catalog,
                &destination(),
                Some("SPRING20"),
                Some(&code),
                Utc::now(),
            )
            .unwrap();

        assert_eq!(
            totals.total,
            totals.subtotal.saturating_sub(totals.discount_amount)
                + totals.tax_amount
                + totals.shipping_cost
        );
        assert!(totals.total.cents() >= 0);
        assert!(totals.discount_amount <= totals.subtotal);
    }

    #[test]
    fn test_unknown_plant_fails() {
        let engine = PricingEngine::default();
        let lines = vec![CartLine {
            plant_id: "plant_999".to_string(),
            quantity: 1,
        }];

        let err = engine
            .price_order(&lines, &[], &destination(), None, None, Utc::now())
            .unwrap_err();

        assert!(matches!(err, PricingError::UnknownPlant(id) if id == "plant_999"));
    }

    #[test]
    fn test_insufficient_stock_fails() {
        let engine = PricingEngine::default();
        let catalog = vec![plant("plant_003", 4999, 2)];
        let lines = vec![CartLine {
            plant_id: "plant_003".to_string(),
            quantity: 5,
        }];

        let err = engine
            .price_order(&lines, &catalog, &destination(), None, None, Utc::now())
            .unwrap_err();

        assert!(matches!(
            err,
            PricingError::InsufficientStock {
                available: 2,
                requested: 5,
                ..
            }
        ));
    }

    #[test]
    fn test_discount_failure_short_circuits() {
        // A bad code must fail the pipeline, not silently price at zero off
        let engine = PricingEngine::default();
        let catalog = vec![plant("plant_001", 3000, 10)];
        let lines = vec![CartLine {
            plant_id: "plant_001".to_string(),
            quantity: 1,
        }];

        let err = engine
            .price_order(
                &lines,
                &catalog,
                &destination(),
                Some("BOGUS"),
                None,
                Utc::now(),
            )
            .unwrap_err();

        assert!(matches!(err, PricingError::InvalidCode(_)));
    }

    #[test]
    fn test_shipping_threshold_uses_pre_discount_subtotal() {
        // $50.00 order with 20% off still ships free: the threshold is about
        // order size, not the net charge.
        let engine = PricingEngine::default();
        let catalog = vec![plant("plant_005", 2500, 20)];
        let lines = vec![CartLine {
            plant_id: "plant_005".to_string(),
            quantity: 2,
        }];
        let code = percent_code(2000);

        let totals = engine
            .price_order(
                &lines,
                &catalog,
                &destination(),
                Some("SPRING20"),
                Some(&code),
                Utc::now(),
            )
            .unwrap();

        assert_eq!(totals.subtotal.cents(), 5000);
        assert_eq!(totals.discount_amount.cents(), 1000);
        assert!(totals.shipping_cost.is_zero());
        // tax on $40.00 at 8% = $3.20; total = 4000 + 320 = 4320
        assert_eq!(totals.total.cents(), 4320);
    }

    #[test]
    fn test_empty_lines_rejected() {
        let engine = PricingEngine::default();
        let err = engine
            .price_order(&[], &[], &destination(), None, None, Utc::now())
            .unwrap_err();
        assert!(matches!(err, PricingError::Validation(_)));
    }
}
