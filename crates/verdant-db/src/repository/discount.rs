//! # Discount Code Repository
//!
//! Lookup of discount rule records by their user-entered code.
//!
//! ## Division of Labor
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                Who Decides What About a Code                            │
//! │                                                                         │
//! │  Repository (this file)        Evaluator (verdant-core::discount)      │
//! │  ──────────────────────        ───────────────────────────────────     │
//! │  "does a record exist?"        "is it active?"                         │
//! │  case/whitespace folding       "is it expired?"                        │
//! │                                "is the minimum met?"                   │
//! │                                "how much is it worth here?"            │
//! │                                                                         │
//! │  The lookup deliberately does NOT filter on active/expires_at.         │
//! │  Filtering in SQL would collapse "no such code" and "code exists but   │
//! │  no longer works" into one row-less answer, and the UI needs to say    │
//! │  which one happened.                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use verdant_core::{normalize_code, DiscountCode};

/// Columns selected for every discount query, in [`DiscountCode`] field order.
const DISCOUNT_COLUMNS: &str =
    "code, kind, value, active, expires_at, min_subtotal_cents, created_at";

/// Repository for discount code lookups.
///
/// Read-only from the pricing engine's point of view; inserts exist for
/// seeding and tests. Codes are stored uppercase, so lookups normalize
/// (trim + uppercase) before comparing.
#[derive(Debug, Clone)]
pub struct DiscountCodeRepository {
    pool: SqlitePool,
}

impl DiscountCodeRepository {
    /// Creates a new DiscountCodeRepository.
    pub fn new(pool: SqlitePool) -> Self {
        DiscountCodeRepository { pool }
    }

    /// Finds a discount record by user-entered code.
    ///
    /// ## Arguments
    /// * `code` - Raw user input; trimmed and case-folded before lookup
    ///
    /// ## Returns
    /// * `Ok(Some(DiscountCode))` - Record found (may still be inactive or
    ///   expired - the evaluator decides)
    /// * `Ok(None)` - No such code
    pub async fn find(&self, code: &str) -> DbResult<Option<DiscountCode>> {
        let normalized = normalize_code(code);

        debug!(code = %normalized, "Looking up discount code");

        let record = sqlx::query_as::<_, DiscountCode>(&format!(
            "SELECT {DISCOUNT_COLUMNS} FROM discount_codes WHERE code = ?1"
        ))
        .bind(&normalized)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    /// Inserts a new discount record, normalizing the code.
    ///
    /// ## Returns
    /// * `Err(DbError::UniqueViolation)` - Code already exists
    pub async fn insert(&self, record: &DiscountCode) -> DbResult<()> {
        let normalized = normalize_code(&record.code);

        debug!(code = %normalized, "Inserting discount code");

        sqlx::query(
            r#"
            INSERT INTO discount_codes (
                code, kind, value, active, expires_at, min_subtotal_cents, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
        )
        .bind(&normalized)
        .bind(record.kind)
        .bind(record.value)
        .bind(record.active)
        .bind(record.expires_at)
        .bind(record.min_subtotal_cents)
        .bind(record.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Counts discount records (for seed idempotence and diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM discount_codes")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DbError;
    use crate::pool::{Database, DbConfig};
    use chrono::{Duration, Utc};
    use verdant_core::DiscountKind;

    fn record(code: &str, kind: DiscountKind, value: i64, active: bool) -> DiscountCode {
        DiscountCode {
            code: code.to_string(),
            kind,
            value,
            active,
            expires_at: Utc::now() + Duration::days(30),
            min_subtotal_cents: None,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_find_is_case_insensitive_and_trims() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.discount_codes();

        repo.insert(&record("SPRING20", DiscountKind::Percentage, 2000, true))
            .await
            .unwrap();

        for input in ["SPRING20", "spring20", "  Spring20  "] {
            let found = repo.find(input).await.unwrap();
            assert!(found.is_some(), "lookup failed for {input:?}");
            assert_eq!(found.unwrap().code, "SPRING20");
        }
    }

    #[tokio::test]
    async fn test_find_missing_returns_none() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let found = db.discount_codes().find("NOPE").await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_find_returns_inactive_records() {
        // Inactive records must still be returned - the evaluator needs
        // them to say "deactivated" instead of "invalid"
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.discount_codes();

        repo.insert(&record("LEAFY15", DiscountKind::Percentage, 1500, false))
            .await
            .unwrap();

        let found = repo.find("LEAFY15").await.unwrap().unwrap();
        assert!(!found.active);
    }

    #[tokio::test]
    async fn test_roundtrip_preserves_fields() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.discount_codes();

        let mut original = record("SAVE10", DiscountKind::FixedAmount, 1000, true);
        original.min_subtotal_cents = Some(2500);
        repo.insert(&original).await.unwrap();

        let found = repo.find("save10").await.unwrap().unwrap();
        assert_eq!(found.kind, DiscountKind::FixedAmount);
        assert_eq!(found.value, 1000);
        assert_eq!(found.min_subtotal_cents, Some(2500));
        assert!(found.active);
    }

    #[tokio::test]
    async fn test_duplicate_code_rejected() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.discount_codes();

        repo.insert(&record("SPRING20", DiscountKind::Percentage, 2000, true))
            .await
            .unwrap();

        // Same code in different case is still a duplicate
        let err = repo
            .insert(&record("spring20", DiscountKind::Percentage, 1000, true))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::UniqueViolation { .. }));
    }
}
