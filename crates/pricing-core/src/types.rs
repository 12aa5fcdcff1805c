//! # Domain Types
//!
//! Core domain types used by the discount calculator.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌──────────────────┐   ┌──────────────────┐   ┌──────────────────┐    │
//! │  │ CustomerCategory │   │      Coupon      │   │   DiscountRate   │    │
//! │  │ ──────────────── │   │ ──────────────── │   │ ──────────────── │    │
//! │  │ Regular   (5%)   │   │ Absent           │   │ bps (u32)        │    │
//! │  │ Vip      (10%)   │   │ Extra10  (+10%)  │   │ 500 = 5%         │    │
//! │  │ Employee (20%)   │   │ HalfPrice (=50%) │   │ 10000 = 100%     │    │
//! │  │ Unrecognized (0) │   │ Unrecognized     │   │                  │    │
//! │  └──────────────────┘   └──────────────────┘   └──────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Labels arrive as free-form strings. Matching is exact and case-sensitive:
//! `"VIP"` is not `"vip"`. A label that matches nothing is still valid input;
//! it just earns no discount.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::BPS_SCALE;

// =============================================================================
// Discount Rate
// =============================================================================

/// Discount fraction represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 500 bps = 5%, so `0.05 + 0.10` is `500 + 1000` with no float drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// Creates a discount rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        DiscountRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero discount.
    #[inline]
    pub const fn zero() -> Self {
        DiscountRate(0)
    }

    /// Adds another rate, capped at 100%.
    #[inline]
    pub const fn plus(&self, other: DiscountRate) -> Self {
        let sum = self.0.saturating_add(other.0);
        if sum > BPS_SCALE {
            DiscountRate(BPS_SCALE)
        } else {
            DiscountRate(sum)
        }
    }

    /// The share of the price the customer still pays (`1 - discount`), in bps.
    #[inline]
    pub const fn complement(&self) -> u32 {
        BPS_SCALE.saturating_sub(self.0)
    }

    /// The complement as an exact decimal multiplier, e.g. 0.9500 for 5% off.
    #[inline]
    pub fn factor(&self) -> Decimal {
        Decimal::new(self.complement() as i64, 4)
    }
}

// =============================================================================
// Customer Category
// =============================================================================

/// The kind of customer being priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum CustomerCategory {
    /// Walk-in customer, 5% off.
    Regular,
    /// Loyalty member, 10% off.
    Vip,
    /// Staff purchase, 20% off.
    Employee,
    /// Any other label. Valid, but no category discount.
    Unrecognized,
}

impl CustomerCategory {
    /// Maps a label onto a category by exact, case-sensitive match.
    ///
    /// ## Example
    /// ```rust
    /// use pricing_core::types::CustomerCategory;
    ///
    /// assert_eq!(CustomerCategory::from_label("vip"), CustomerCategory::Vip);
    /// assert_eq!(CustomerCategory::from_label("VIP"), CustomerCategory::Unrecognized);
    /// ```
    pub fn from_label(label: &str) -> Self {
        match label {
            "regular" => CustomerCategory::Regular,
            "vip" => CustomerCategory::Vip,
            "employee" => CustomerCategory::Employee,
            _ => CustomerCategory::Unrecognized,
        }
    }

    /// The canonical label, `None` for unrecognized input.
    pub const fn label(&self) -> Option<&'static str> {
        match self {
            CustomerCategory::Regular => Some("regular"),
            CustomerCategory::Vip => Some("vip"),
            CustomerCategory::Employee => Some("employee"),
            CustomerCategory::Unrecognized => None,
        }
    }

    /// The discount this category earns before any coupon.
    pub const fn base_discount(&self) -> DiscountRate {
        match self {
            CustomerCategory::Regular => DiscountRate::from_bps(500),
            CustomerCategory::Vip => DiscountRate::from_bps(1000),
            CustomerCategory::Employee => DiscountRate::from_bps(2000),
            CustomerCategory::Unrecognized => DiscountRate::zero(),
        }
    }
}

impl From<&str> for CustomerCategory {
    fn from(label: &str) -> Self {
        CustomerCategory::from_label(label)
    }
}

// =============================================================================
// Coupon
// =============================================================================

/// A coupon presented at checkout.
///
/// `Absent` and `Unrecognized` behave the same when pricing; they are kept
/// apart so a quote can show whether a code was typed at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Coupon {
    /// No code was presented.
    Absent,
    /// Adds ten points on top of the category discount.
    #[serde(rename = "EXTRA10")]
    Extra10,
    /// Replaces any other discount with exactly 50%.
    #[serde(rename = "HALFPRICE")]
    HalfPrice,
    /// A code was presented but matches no promotion.
    Unrecognized,
}

impl Coupon {
    /// Maps an optional code onto a coupon by exact, case-sensitive match.
    ///
    /// ## Example
    /// ```rust
    /// use pricing_core::types::Coupon;
    ///
    /// assert_eq!(Coupon::from_code(None), Coupon::Absent);
    /// assert_eq!(Coupon::from_code(Some("HALFPRICE")), Coupon::HalfPrice);
    /// assert_eq!(Coupon::from_code(Some("extra10")), Coupon::Unrecognized);
    /// ```
    pub fn from_code(code: Option<&str>) -> Self {
        match code {
            None => Coupon::Absent,
            Some("EXTRA10") => Coupon::Extra10,
            Some("HALFPRICE") => Coupon::HalfPrice,
            Some(_) => Coupon::Unrecognized,
        }
    }

    /// The canonical code for recognized coupons.
    pub const fn code(&self) -> Option<&'static str> {
        match self {
            Coupon::Extra10 => Some("EXTRA10"),
            Coupon::HalfPrice => Some("HALFPRICE"),
            Coupon::Absent | Coupon::Unrecognized => None,
        }
    }

    /// Applies this coupon to a base discount.
    ///
    /// ## Rules (first match wins)
    /// ```text
    /// EXTRA10    → base + 10%
    /// HALFPRICE  → 50%, base discarded
    /// otherwise  → base
    /// ```
    pub const fn adjust(&self, base: DiscountRate) -> DiscountRate {
        match self {
            Coupon::Extra10 => base.plus(DiscountRate::from_bps(1000)),
            Coupon::HalfPrice => DiscountRate::from_bps(5000),
            Coupon::Absent | Coupon::Unrecognized => base,
        }
    }
}

impl From<Option<&str>> for Coupon {
    fn from(code: Option<&str>) -> Self {
        Coupon::from_code(code)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
