//! # Discount Evaluation
//!
//! Validates discount codes and computes the discount amount for a subtotal.
//!
//! ## Evaluation Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Discount Evaluation                                  │
//! │                                                                         │
//! │  requested code?                                                        │
//! │       │                                                                 │
//! │       ├── empty/absent ──► DiscountOutcome::none()  (NOT an error)     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  record found?                                                          │
//! │       ├── no ──► InvalidCode                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  expired? ──────► CodeNotUsable (expired)                              │
//! │  inactive? ─────► CodeNotUsable (inactive)                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  subtotal < minimum? ──► MinimumNotMet                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  percentage: percentage(subtotal, bps), clamped ≤ subtotal             │
//! │  fixed:      min(value, subtotal)                                      │
//! │                                                                         │
//! │  INVARIANT: the computed amount never exceeds the subtotal.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The record lookup itself lives in verdant-db. The repository does NOT
//! filter on `active` or `expires_at` - those rules are enforced here so
//! "no such code" and "code no longer works" produce different messages.

use chrono::{DateTime, Utc};

use crate::error::{NotUsableReason, PricingError, PricingResult};
use crate::money::Money;
use crate::types::{DiscountCode, DiscountKind, DiscountOutcome};

/// Normalizes a user-entered code for lookup: trimmed, uppercased.
///
/// ## Example
/// ```rust
/// use verdant_core::discount::normalize_code;
///
/// assert_eq!(normalize_code("  spring20 "), "SPRING20");
/// ```
pub fn normalize_code(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Checks that a code is currently usable (active and unexpired).
///
/// Expiry is checked first: an expired code reports "expired" even if an
/// administrator also deactivated it, since that is the more useful message.
pub fn check_usable(record: &DiscountCode, now: DateTime<Utc>) -> PricingResult<()> {
    if record.is_expired(now) {
        return Err(PricingError::CodeNotUsable {
            code: record.code.clone(),
            reason: NotUsableReason::Expired,
        });
    }

    if !record.active {
        return Err(PricingError::CodeNotUsable {
            code: record.code.clone(),
            reason: NotUsableReason::Inactive,
        });
    }

    Ok(())
}

/// Evaluates a requested discount code against an order subtotal.
///
/// ## Arguments
/// * `requested` - The raw code from the request, if any
/// * `record` - The rule record the repository found for it, if any
/// * `subtotal` - The order's pre-discount subtotal
/// * `now` - Evaluation instant (passed in; the core never reads clocks)
///
/// ## Behavior
/// * Empty or absent `requested` → `DiscountOutcome::none()`; the caller
///   asked for no discount, which is not a failure.
/// * Non-empty `requested` with no `record` → [`PricingError::InvalidCode`].
/// * Inactive or expired record → [`PricingError::CodeNotUsable`].
/// * Subtotal below the record's minimum → [`PricingError::MinimumNotMet`].
/// * Otherwise the discount amount, always clamped to the subtotal.
///
/// ## Example
/// ```rust
/// use chrono::Utc;
/// use verdant_core::discount::evaluate_discount;
/// use verdant_core::money::Money;
///
/// // No code requested: zero discount, no error.
/// let outcome = evaluate_discount(None, None, Money::from_cents(3000), Utc::now()).unwrap();
/// assert!(!outcome.applied);
/// assert_eq!(outcome.amount, Money::zero());
/// ```
pub fn evaluate_discount(
    requested: Option<&str>,
    record: Option<&DiscountCode>,
    subtotal: Money,
    now: DateTime<Utc>,
) -> PricingResult<DiscountOutcome> {
    let requested = match requested.map(str::trim) {
        None | Some("") => return Ok(DiscountOutcome::none()),
        Some(code) => code,
    };

    let record = match record {
        Some(record) => record,
        None => return Err(PricingError::InvalidCode(normalize_code(requested))),
    };

    check_usable(record, now)?;

    if let Some(minimum) = record.min_subtotal() {
        if subtotal < minimum {
            return Err(PricingError::MinimumNotMet {
                code: record.code.clone(),
                minimum,
                subtotal,
            });
        }
    }

    let amount = match record.kind {
        // Clamp: a percentage over 100% must not exceed the subtotal
        DiscountKind::Percentage => subtotal.percentage(record.percent_bps()).min(subtotal),
        // Clamp: a $10 code on a $6 order is worth $6
        DiscountKind::FixedAmount => record.fixed_amount().min(subtotal),
    };

    Ok(DiscountOutcome {
        amount,
        applied: true,
        description: Some(record.describe()),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn code(kind: DiscountKind, value: i64) -> DiscountCode {
        DiscountCode {
            code: "SPRING20".to_string(),
            kind,
            value,
            active: true,
            expires_at: Utc::now() + Duration::days(30),
            min_subtotal_cents: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_normalize_code() {
        assert_eq!(normalize_code("  spring20 "), "SPRING20");
        assert_eq!(normalize_code("SAVE10"), "SAVE10");
        assert_eq!(normalize_code("   "), "");
    }

    #[test]
    fn test_empty_code_is_not_an_error() {
        let subtotal = Money::from_cents(3000);
        let now = Utc::now();

        for requested in [None, Some(""), Some("   ")] {
            let outcome = evaluate_discount(requested, None, subtotal, now).unwrap();
            assert!(!outcome.applied);
            assert_eq!(outcome.amount, Money::zero());
            assert!(outcome.description.is_none());
        }
    }

    #[test]
    fn test_unknown_code_fails_as_invalid() {
        let err =
            evaluate_discount(Some("nope"), None, Money::from_cents(3000), Utc::now()).unwrap_err();
        assert!(matches!(err, PricingError::InvalidCode(c) if c == "NOPE"));
    }

    #[test]
    fn test_inactive_code_not_usable() {
        let mut record = code(DiscountKind::Percentage, 2000);
        record.active = false;

        let err = evaluate_discount(
            Some("SPRING20"),
            Some(&record),
            Money::from_cents(3000),
            Utc::now(),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            PricingError::CodeNotUsable {
                reason: NotUsableReason::Inactive,
                ..
            }
        ));
    }

    #[test]
    fn test_expired_code_fails_even_when_active() {
        let mut record = code(DiscountKind::Percentage, 2000);
        record.active = true;
        record.expires_at = Utc::now() - Duration::days(1);

        let err = evaluate_discount(
            Some("SPRING20"),
            Some(&record),
            Money::from_cents(3000),
            Utc::now(),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            PricingError::CodeNotUsable {
                reason: NotUsableReason::Expired,
                ..
            }
        ));
    }

    #[test]
    fn test_minimum_not_met() {
        let mut record = code(DiscountKind::FixedAmount, 1000);
        record.min_subtotal_cents = Some(2500);

        let err = evaluate_discount(
            Some("SPRING20"),
            Some(&record),
            Money::from_cents(1999),
            Utc::now(),
        )
        .unwrap_err();
        assert!(matches!(err, PricingError::MinimumNotMet { .. }));

        // Exactly at the minimum is allowed
        let outcome = evaluate_discount(
            Some("SPRING20"),
            Some(&record),
            Money::from_cents(2500),
            Utc::now(),
        )
        .unwrap();
        assert!(outcome.applied);
    }

    #[test]
    fn test_percentage_amount_rounds_half_up() {
        let record = code(DiscountKind::Percentage, 1000); // 10%

        let outcome = evaluate_discount(
            Some("SPRING20"),
            Some(&record),
            Money::from_cents(6000),
            Utc::now(),
        )
        .unwrap();

        assert_eq!(outcome.amount.cents(), 600);
        assert_eq!(outcome.description.as_deref(), Some("Save 10%"));
    }

    #[test]
    fn test_percentage_never_exceeds_subtotal() {
        // 150% "discount" clamps to the whole subtotal, not more
        let record = code(DiscountKind::Percentage, 15000);

        let subtotal = Money::from_cents(2000);
        let outcome =
            evaluate_discount(Some("SPRING20"), Some(&record), subtotal, Utc::now()).unwrap();

        assert_eq!(outcome.amount, subtotal);
    }

    #[test]
    fn test_fixed_amount_clamped_to_subtotal() {
        let record = code(DiscountKind::FixedAmount, 1000); // $10.00

        let subtotal = Money::from_cents(650); // $6.50 order
        let outcome =
            evaluate_discount(Some("SPRING20"), Some(&record), subtotal, Utc::now()).unwrap();

        assert_eq!(outcome.amount, subtotal);
    }
}
