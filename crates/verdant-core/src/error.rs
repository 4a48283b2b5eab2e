//! # Error Types
//!
//! Domain-specific error types for verdant-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  verdant-core errors (this file)                                       │
//! │  ├── PricingError     - Pricing/discount failures                      │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  verdant-db errors (separate crate)                                    │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  API errors (in app)                                                   │
//! │  └── ApiError         - What the client sees (status + detail)         │
//! │                                                                         │
//! │  Flow: ValidationError → PricingError → ApiError → { "detail": ... }   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (plant id, code, amounts)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message and HTTP status

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Pricing Error
// =============================================================================

/// Reason a usable-looking discount code cannot be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotUsableReason {
    /// Deactivated by an administrator.
    Inactive,
    /// Past its expiry timestamp.
    Expired,
}

impl NotUsableReason {
    /// The user-facing phrasing for this reason.
    pub fn message(&self) -> &'static str {
        match self {
            NotUsableReason::Inactive => "is no longer active",
            NotUsableReason::Expired => "has expired",
        }
    }
}

/// Pricing and discount-evaluation errors.
///
/// Every failure within the engine is one of these kinds so the API layer
/// can show a precise message ("Invalid discount code" vs. "This plant is
/// out of stock") and pick the right status code. No failure here is fatal
/// to the host process - each request fails independently.
#[derive(Debug, Error)]
pub enum PricingError {
    /// A cart line references a plant the catalog does not have.
    #[error("Plant not found: {0}")]
    UnknownPlant(String),

    /// Requested quantity exceeds available stock.
    ///
    /// Totals must reflect a fulfillable order, so the stock check happens
    /// during price resolution rather than at a later reservation step.
    #[error("Insufficient stock for {plant}: available {available}, requested {requested}")]
    InsufficientStock {
        plant: String,
        available: i64,
        requested: i64,
    },

    /// A non-empty code was submitted but no such record exists.
    #[error("Invalid discount code")]
    InvalidCode(String),

    /// The code exists but is inactive or expired.
    ///
    /// Kept distinct from [`PricingError::InvalidCode`] so the UI can tell
    /// the customer the code was real but no longer works.
    #[error("Discount code {code} {}", .reason.message())]
    CodeNotUsable {
        code: String,
        reason: NotUsableReason,
    },

    /// The order subtotal is below the code's minimum.
    #[error("Discount code {code} requires a minimum order of {minimum} (subtotal {subtotal})")]
    MinimumNotMet {
        code: String,
        minimum: Money,
        subtotal: Money,
    },

    /// The catalog or discount store could not be reached.
    ///
    /// The engine never retries; retry policy belongs to the data-access
    /// layer, if anywhere.
    #[error("Pricing dependency unavailable: {0}")]
    DependencyUnavailable(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when a request body doesn't meet requirements. Used for
/// early validation before the pricing engine runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Collection has too many elements.
    #[error("{field} cannot have more than {max} entries")]
    TooMany { field: String, max: usize },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with PricingError.
pub type PricingResult<T> = Result<T, PricingError>;

// =============================================================================
// Unit Tests
// =============================================================================
