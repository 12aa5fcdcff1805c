//! Property tests for the discount calculator.

use pricing_core::{compute_final_price, quote, Coupon, CoreError, CustomerCategory, Decimal, Money};
use proptest::prelude::*;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::RoundingStrategy;

const KNOWN_CATEGORIES: [&str; 3] = ["regular", "vip", "employee"];
const KNOWN_COUPONS: [&str; 2] = ["EXTRA10", "HALFPRICE"];

/// Non-negative prices with up to six fractional digits.
fn price() -> impl Strategy<Value = Decimal> {
    (0i64..=100_000_000_000_000, 0u32..=6).prop_map(|(units, scale)| Decimal::new(units, scale))
}

fn unknown_category() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{0,12}".prop_filter("must not be a known category", |s| {
        !KNOWN_CATEGORIES.contains(&s.as_str())
    })
}

fn unknown_coupon() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[A-Z0-9a-z]{0,12}".prop_filter("must not be a known coupon", |s| {
        !KNOWN_COUPONS.contains(&s.as_str())
    }))
}

fn any_category() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(KNOWN_CATEGORIES.to_vec()).prop_map(str::to_string),
        unknown_category(),
    ]
}

fn any_coupon() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        prop::sample::select(KNOWN_COUPONS.to_vec()).prop_map(|c| Some(c.to_string())),
        unknown_coupon(),
    ]
}

/// `amount` rounded to cents, half to even, computed independently of `Money`.
fn rounded_cents(amount: Decimal) -> i64 {
    let cents = (amount * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven);
    cents.to_i64().unwrap()
}

proptest! {
    #[test]
    fn unknown_labels_only_round_the_price(
        price in price(),
        category in unknown_category(),
        coupon in unknown_coupon(),
    ) {
        let paid = compute_final_price(price, &category, coupon.as_deref()).unwrap();
        prop_assert_eq!(paid.cents(), rounded_cents(price));
    }

    #[test]
    fn negative_price_always_fails(
        units in i64::MIN + 1..0,
        scale in 0u32..=6,
        category in any_category(),
        coupon in any_coupon(),
    ) {
        let result = compute_final_price(Decimal::new(units, scale), &category, coupon.as_deref());
        prop_assert!(matches!(result, Err(CoreError::InvalidInput(_))));
    }

    #[test]
    fn pricing_is_deterministic(
        price in price(),
        category in any_category(),
        coupon in any_coupon(),
    ) {
        let first = compute_final_price(price, &category, coupon.as_deref()).unwrap();
        let second = compute_final_price(price, &category, coupon.as_deref()).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn final_price_never_decreases_with_price(
        a in price(),
        b in price(),
        category in any_category(),
        coupon in any_coupon(),
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let low_paid = compute_final_price(low, &category, coupon.as_deref()).unwrap();
        let high_paid = compute_final_price(high, &category, coupon.as_deref()).unwrap();
        prop_assert!(low_paid <= high_paid);
    }

    #[test]
    fn final_price_stays_within_bounds(
        price in price(),
        category in any_category(),
        coupon in any_coupon(),
    ) {
        let paid = compute_final_price(price, &category, coupon.as_deref()).unwrap();
        prop_assert!(paid >= Money::from_cents(0));
        prop_assert!(paid.cents() <= rounded_cents(price));
    }

    #[test]
    fn halfprice_ignores_category(price in price(), category in any_category()) {
        let paid = compute_final_price(price, &category, Some("HALFPRICE")).unwrap();
        prop_assert_eq!(paid.cents(), rounded_cents(price / Decimal::TWO));
    }

    #[test]
    fn extra10_adds_ten_points_to_base(price in price(), category in any_category()) {
        let category = CustomerCategory::from_label(&category);
        let with_coupon = quote(price, category, Coupon::Extra10).unwrap();
        let without = quote(price, category, Coupon::Absent).unwrap();

        prop_assert_eq!(with_coupon.base_discount, without.applied_discount);
        prop_assert_eq!(
            with_coupon.applied_discount.bps(),
            without.applied_discount.bps() + 1000
        );
        prop_assert!(with_coupon.final_price <= without.final_price);
    }
}
