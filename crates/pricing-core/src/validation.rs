//! # Validation Module
//!
//! Input validation for the pricing rules.
//!
//! Validators run before any arithmetic so that a rejected call computes
//! nothing. They return [`ValidationError`], which converts into
//! [`CoreError::InvalidInput`](crate::error::CoreError::InvalidInput) with `?`.
//!
//! ## Usage
//! ```rust
//! use pricing_core::validation::{parse_price, validate_price};
//!
//! let price = parse_price("12.345").unwrap();
//! assert!(validate_price(price).is_ok());
//! assert!(validate_price(parse_price("-10").unwrap()).is_err());
//! ```

use rust_decimal::Decimal;

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Largest whole-unit price whose discounted result still fits in `Money`.
pub const MAX_PRICE: i64 = i64::MAX / 100;

/// Parses a list price typed by a person, e.g. `"100"`, `"19.99"`, `"12.345"`.
///
/// Any number of fractional digits is kept exactly. Input that would need
/// rounding to fit a `Decimal` is rejected rather than silently changed.
pub fn parse_price(input: &str) -> ValidationResult<Decimal> {
    let input = input.trim();

    if input.is_empty() {
        return Err(ValidationError::Required {
            field: "price".to_string(),
        });
    }

    Decimal::from_str_exact(input).map_err(|e| ValidationError::InvalidFormat {
        field: "price".to_string(),
        reason: e.to_string(),
    })
}

/// Validates a list price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
/// - Must not exceed [`MAX_PRICE`]
pub fn validate_price(price: Decimal) -> ValidationResult<()> {
    if price < Decimal::ZERO || price > Decimal::from(MAX_PRICE) {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_PRICE,
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

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("100").unwrap(), Decimal::from(100));
        assert_eq!(parse_price(" 19.99 ").unwrap(), Decimal::new(1999, 2));
        assert_eq!(parse_price("12.345").unwrap(), Decimal::new(12345, 3));
        assert_eq!(parse_price("-10").unwrap(), Decimal::from(-10));
    }

    #[test]
    fn test_parse_price_rejects_garbage() {
        assert!(matches!(parse_price("   "), Err(ValidationError::Required { .. })));
        for bad in ["abc", "1,00", "--1", "12.3.4"] {
            assert!(
                matches!(parse_price(bad), Err(ValidationError::InvalidFormat { .. })),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Decimal::ZERO).is_ok());
        assert!(validate_price(Decimal::new(1, 3)).is_ok());
        assert!(validate_price(Decimal::from(MAX_PRICE)).is_ok());

        assert!(validate_price(Decimal::from(MAX_PRICE + 1)).is_err());
        assert_eq!(
            validate_price(Decimal::new(-1, 3)),
            Err(ValidationError::OutOfRange {
                field: "price".to_string(),
                min: 0,
                max: MAX_PRICE,
            })
        );
    }

    #[test]
    fn test_negative_zero_is_a_valid_price() {
        assert!(validate_price(parse_price("-0.00").unwrap()).is_ok());
    }
}
