//! # Discount Calculator
//!
//! Turns a price, a customer category and an optional coupon into the price
//! the customer pays.
//!
//! ## Pricing Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  price ──► validate_price ──► ✗ negative → CoreError::InvalidInput     │
//! │                 │                                                       │
//! │                 ▼                                                       │
//! │  category ──► base_discount        regular 5% / vip 10% / employee 20% │
//! │                 │                                                       │
//! │                 ▼                                                       │
//! │  coupon ────► adjust               EXTRA10 +10% / HALFPRICE =50%       │
//! │                 │                                                       │
//! │                 ▼                                                       │
//! │  price × (1 - rate), exact ──► Money::from_decimal (cents, half-even)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every function here is pure: same input, same output, no I/O.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{Coupon, CustomerCategory, DiscountRate};
use crate::validation::{validate_price, MAX_PRICE};

// =============================================================================
// Price Quote
// =============================================================================

/// The outcome of pricing one item, with the numbers that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    /// Price before any discount, exactly as given.
    #[ts(as = "String")]
    pub price: Decimal,
    pub category: CustomerCategory,
    pub coupon: Coupon,
    /// Discount earned by the category alone.
    pub base_discount: DiscountRate,
    /// Discount actually applied after the coupon.
    pub applied_discount: DiscountRate,
    /// Price after discount, rounded to whole cents.
    pub final_price: Money,
    /// Rounded list price minus final price.
    pub savings: Money,
}

// =============================================================================
// Calculator
// =============================================================================

/// Prices an item for a typed category and coupon.
///
/// ## Errors
/// [`CoreError::InvalidInput`](crate::error::CoreError::InvalidInput) if
/// `price` is negative (or beyond [`MAX_PRICE`]). Nothing else fails.
///
/// ## Example
/// ```rust
/// use pricing_core::discount::quote;
/// use pricing_core::types::{Coupon, CustomerCategory};
/// use rust_decimal::Decimal;
///
/// let q = quote(Decimal::from(100), CustomerCategory::Vip, Coupon::Extra10).unwrap();
/// assert_eq!(q.applied_discount.bps(), 2000);
/// assert_eq!(q.final_price.cents(), 8000);
/// assert_eq!(q.savings.cents(), 2000);
/// ```
pub fn quote(price: Decimal, category: CustomerCategory, coupon: Coupon) -> CoreResult<PriceQuote> {
    validate_price(price)?;

    let base_discount = category.base_discount();
    let applied_discount = coupon.adjust(base_discount);

    let discounted = price
        .checked_mul(applied_discount.factor())
        .ok_or_else(price_out_of_range)?;
    let final_price = Money::from_decimal(discounted).ok_or_else(price_out_of_range)?;
    let list_price = Money::from_decimal(price).ok_or_else(price_out_of_range)?;

    Ok(PriceQuote {
        price,
        category,
        coupon,
        base_discount,
        applied_discount,
        final_price,
        savings: list_price - final_price,
    })
}

/// Computes the final price from raw labels.
///
/// `customer_category` and `coupon_code` are matched exactly and
/// case-sensitively. Labels that match nothing are valid and earn no
/// discount; `None` means no coupon was presented.
///
/// ## Example
/// ```rust
/// use pricing_core::discount::compute_final_price;
/// use rust_decimal::Decimal;
///
/// let hundred = Decimal::from(100);
/// assert_eq!(compute_final_price(hundred, "regular", None).unwrap().cents(), 9500);
/// assert_eq!(compute_final_price(hundred, "regular", Some("HALFPRICE")).unwrap().cents(), 5000);
/// assert!(compute_final_price(Decimal::from(-10), "vip", None).is_err());
/// ```
pub fn compute_final_price(
    price: Decimal,
    customer_category: &str,
    coupon_code: Option<&str>,
) -> CoreResult<Money> {
    let q = quote(
        price,
        CustomerCategory::from_label(customer_category),
        Coupon::from_code(coupon_code),
    )?;
    Ok(q.final_price)
}

fn price_out_of_range() -> ValidationError {
    ValidationError::OutOfRange {
        field: "price".to_string(),
        min: 0,
        max: MAX_PRICE,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    fn amount(s: &str) -> Decimal {
        Decimal::from_str_exact(s).unwrap()
    }

    fn final_cents(price: &str, category: &str, coupon: Option<&str>) -> i64 {
        compute_final_price(amount(price), category, coupon).unwrap().cents()
    }

    #[test]
    fn test_regular_customer() {
        assert_eq!(final_cents("100", "regular", None), 9500);
    }

    #[test]
    fn test_vip_customer() {
        assert_eq!(final_cents("100", "vip", None), 9000);
    }

    #[test]
    fn test_employee_customer() {
        assert_eq!(final_cents("100", "employee", None), 8000);
    }

    #[test]
    fn test_coupon_extra10() {
        assert_eq!(final_cents("100", "vip", Some("EXTRA10")), 8000);
    }

    #[test]
    fn test_coupon_halfprice() {
        assert_eq!(final_cents("100", "regular", Some("HALFPRICE")), 5000);
    }

    #[test]
    fn test_negative_price_is_invalid_input() {
        let err = compute_final_price(amount("-10"), "vip", None).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidInput(ValidationError::OutOfRange { ref field, .. }) if field == "price"
        ));
    }

    #[test]
    fn test_unknown_customer_with_extra10() {
        assert_eq!(final_cents("100", "unknown", Some("EXTRA10")), 9000);
    }

    #[test]
    fn test_zero_price_is_free_for_everyone() {
        for category in ["regular", "vip", "employee", "unknown"] {
            for coupon in [None, Some("EXTRA10"), Some("HALFPRICE"), Some("BOGUS")] {
                assert_eq!(final_cents("0", category, coupon), 0);
            }
        }
    }

    #[test]
    fn test_smallest_negative_price_is_rejected() {
        assert!(compute_final_price(amount("-0.01"), "unknown", None).is_err());
        assert!(compute_final_price(amount("-0.0001"), "employee", Some("HALFPRICE")).is_err());
    }

    #[test]
    fn test_sub_cent_prices_are_priced() {
        // 12.345 → 12.34 (half to even)
        assert_eq!(final_cents("12.345", "unknown", None), 1234);
        // 19.999 × 0.90 = 17.9991 → 18.00
        assert_eq!(final_cents("19.999", "vip", None), 1800);
        // 0.004 → 0.00
        assert_eq!(final_cents("0.004", "regular", None), 0);
    }

    #[test]
    fn test_extra10_stacks_on_every_category() {
        assert_eq!(final_cents("100", "regular", Some("EXTRA10")), 8500);
        assert_eq!(final_cents("100", "employee", Some("EXTRA10")), 7000);
    }

    #[test]
    fn test_halfprice_discards_category_discount() {
        assert_eq!(final_cents("100", "vip", Some("HALFPRICE")), 5000);
        assert_eq!(final_cents("100", "employee", Some("HALFPRICE")), 5000);
        assert_eq!(final_cents("100", "unknown", Some("HALFPRICE")), 5000);
    }

    #[test]
    fn test_unrecognized_coupon_leaves_base_discount() {
        assert_eq!(final_cents("100", "vip", Some("SUMMER")), 9000);
        assert_eq!(final_cents("100", "vip", Some("extra10")), 9000);
        assert_eq!(final_cents("100", "unknown", None), 10000);
    }

    #[test]
    fn test_labels_are_case_sensitive() {
        assert_eq!(final_cents("100", "VIP", None), 10000);
        assert_eq!(final_cents("100", "Employee", Some("HalfPrice")), 10000);
    }

    #[test]
    fn test_rounding_to_cents() {
        // 19.99 × 0.95 = 18.9905 → 18.99
        assert_eq!(final_cents("19.99", "regular", None), 1899);
        // 0.10 × 0.95 = 0.095 → 0.10 (half to even)
        assert_eq!(final_cents("0.10", "regular", None), 10);
        // 0.30 × 0.95 = 0.285 → 0.28 (half to even)
        assert_eq!(final_cents("0.30", "regular", None), 28);
        // 0.01 × 0.5 = 0.005 → 0.00 (half to even)
        assert_eq!(final_cents("0.01", "vip", Some("HALFPRICE")), 0);
        // 0.03 × 0.5 = 0.015 → 0.02
        assert_eq!(final_cents("0.03", "vip", Some("HALFPRICE")), 2);
    }

    #[test]
    fn test_largest_price_is_priced() {
        let max = Decimal::from(MAX_PRICE);
        assert_eq!(
            compute_final_price(max, "unknown", None).unwrap().cents(),
            MAX_PRICE * 100
        );
        assert!(compute_final_price(max + Decimal::ONE, "unknown", None).is_err());
    }

    #[test]
    fn test_quote_breakdown() {
        let q = quote(amount("100"), CustomerCategory::Employee, Coupon::HalfPrice).unwrap();
        assert_eq!(q.price, amount("100"));
        assert_eq!(q.base_discount.bps(), 2000);
        assert_eq!(q.applied_discount.bps(), 5000);
        assert_eq!(q.final_price.cents(), 5000);
        assert_eq!(q.savings.cents(), 5000);
    }

    #[test]
    fn test_savings_never_negative_on_sub_cent_price() {
        // 0.015 rounds up to 0.02 on its own; savings compare rounded amounts
        let q = quote(amount("0.015"), CustomerCategory::Unrecognized, Coupon::Absent).unwrap();
        assert_eq!(q.final_price.cents(), 2);
        assert_eq!(q.savings.cents(), 0);
    }

    #[test]
    fn test_quote_serializes_camel_case() {
        let q = quote(amount("100"), CustomerCategory::Vip, Coupon::Extra10).unwrap();
        let json = serde_json::to_value(q).unwrap();
        assert_eq!(json["price"], "100");
        assert_eq!(json["category"], "vip");
        assert_eq!(json["coupon"], "EXTRA10");
        assert_eq!(json["baseDiscount"], 1000);
        assert_eq!(json["appliedDiscount"], 2000);
        assert_eq!(json["finalPrice"], 8000);
        assert_eq!(json["savings"], 2000);
    }

    #[test]
    fn test_same_input_same_output() {
        let first = compute_final_price(amount("43.21"), "vip", Some("EXTRA10")).unwrap();
        let second = compute_final_price(amount("43.21"), "vip", Some("EXTRA10")).unwrap();
        assert_eq!(first, second);
    }
}
