//! # Validation Module
//!
//! Request validation for the pricing boundary.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (TypeScript)                                        │
//! │  ├── Basic format checks (empty cart, quantity steppers)               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: API Handler (Rust)                                           │
//! │  ├── Type validation (serde deserialization)                           │
//! │  └── THIS MODULE: Business rule validation                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  └── UNIQUE constraints                                                │
//! │                                                                         │
//! │  Defense in depth: request bodies arrive as arbitrary JSON and must   │
//! │  become typed, range-checked values before the engine runs.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use verdant_core::validation::{validate_discount_code, validate_quantity};
//!
//! validate_quantity(5).unwrap();
//! validate_discount_code("SPRING20").unwrap();
//! ```

use crate::error::ValidationError;
use crate::types::CartLine;
use crate::{MAX_CART_LINES, MAX_DISCOUNT_CODE_LENGTH, MAX_LINE_QUANTITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a cart line quantity.
///
/// ## Rules
/// - Must be positive
/// - Must not exceed [`MAX_LINE_QUANTITY`]
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if quantity > MAX_LINE_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_LINE_QUANTITY,
        });
    }

    Ok(())
}

/// Validates the cart lines of a pricing request.
///
/// ## Rules
/// - At least one line
/// - At most [`MAX_CART_LINES`] lines
/// - Every quantity passes [`validate_quantity`]
/// - Every plant id is non-empty
pub fn validate_lines(lines: &[CartLine]) -> ValidationResult<()> {
    if lines.is_empty() {
        return Err(ValidationError::Required {
            field: "items".to_string(),
        });
    }

    if lines.len() > MAX_CART_LINES {
        return Err(ValidationError::TooMany {
            field: "items".to_string(),
            max: MAX_CART_LINES,
        });
    }

    for line in lines {
        if line.plant_id.trim().is_empty() {
            return Err(ValidationError::Required {
                field: "plant_id".to_string(),
            });
        }
        validate_quantity(line.quantity)?;
    }

    Ok(())
}

/// Validates a user-entered discount code string.
///
/// Only length is checked here; emptiness is the legitimate "no discount"
/// path and existence is the repository's question.
pub fn validate_discount_code(code: &str) -> ValidationResult<()> {
    if code.trim().len() > MAX_DISCOUNT_CODE_LENGTH {
        return Err(ValidationError::TooLong {
            field: "discount_code".to_string(),
            max: MAX_DISCOUNT_CODE_LENGTH,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn line(plant_id: &str, quantity: i64) -> CartLine {
        CartLine {
            plant_id: plant_id.to_string(),
            quantity,
        }
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(MAX_LINE_QUANTITY).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-3).is_err());
        assert!(validate_quantity(MAX_LINE_QUANTITY + 1).is_err());
    }

    #[test]
    fn test_validate_lines_rejects_empty_cart() {
        assert!(matches!(
            validate_lines(&[]),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_validate_lines_rejects_blank_plant_id() {
        let lines = vec![line("  ", 1)];
        assert!(matches!(
            validate_lines(&lines),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_validate_lines_rejects_oversized_cart() {
        let lines: Vec<CartLine> = (0..=MAX_CART_LINES)
            .map(|i| line(&format!("plant_{i:03}"), 1))
            .collect();
        assert!(matches!(
            validate_lines(&lines),
            Err(ValidationError::TooMany { .. })
        ));
    }

    #[test]
    fn test_validate_lines_accepts_normal_cart() {
        let lines = vec![line("plant_001", 2), line("plant_004", 1)];
        assert!(validate_lines(&lines).is_ok());
    }

    #[test]
    fn test_validate_discount_code_length() {
        assert!(validate_discount_code("SPRING20").is_ok());
        assert!(validate_discount_code("").is_ok()); // empty = no discount
        assert!(validate_discount_code(&"X".repeat(MAX_DISCOUNT_CODE_LENGTH + 1)).is_err());
    }
}
