//! # Money Module
//!
//! Provides the `Money` type for handling rounded monetary values safely.
//!
//! ## Two Kinds of Amount
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  LIST PRICE (input)              FINAL PRICE (output)                   │
//! │  rust_decimal::Decimal           Money (integer cents)                  │
//! │                                                                         │
//! │  "12.345" kept exactly  ──►  12.345 × 1.00 = 12.345  ──►  Money(1234)   │
//! │                                                 round half to even      │
//! │                                                                         │
//! │  Binary floats never touch either side:                                 │
//! │    0.10 * 0.95 = 0.09499999999999999 (f64)  → $0.09  ❌                 │
//! │    0.10 * 0.95 = 0.095 (Decimal)            → $0.10  ✅                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pricing_core::money::Money;
//! use rust_decimal::Decimal;
//!
//! let price = Money::from_cents(1099); // $10.99
//! let rounded = Money::from_decimal(Decimal::new(10985, 3)).unwrap(); // 10.985
//! assert_eq!(rounded, Money::from_cents(1098)); // half to even
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Sub;
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Differences between two amounts stay representable
/// - **Single field tuple struct**: Zero-cost abstraction over i64
///
/// ## Where Money Flows
/// ```text
/// Decimal list price ──discount──► exact product ──from_decimal──► Money
///                                                                    │
///                                                                    ▼
///                                                         displayed as "$90.00"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use pricing_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Rounds an exact decimal amount to whole cents with Bankers Rounding
    /// (round half to even).
    ///
    /// Returns `None` when the rounded amount does not fit in i64 cents.
    ///
    /// ## Bankers Rounding Explained
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  BANKERS ROUNDING (Round Half to Even)                              │
    /// │                                                                     │
    /// │  Half-up always rounds 0.5 UP, causing systematic bias:            │
    /// │    0.5 → 1, 1.5 → 2, 2.5 → 3, 3.5 → 4 (always up = +bias)          │
    /// │                                                                     │
    /// │  Half-to-even rounds 0.5 to the nearest EVEN number:               │
    /// │    0.5 → 0, 1.5 → 2, 2.5 → 2, 3.5 → 4 (alternates = no bias)       │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// ## Example
    /// ```rust
    /// use pricing_core::money::Money;
    /// use rust_decimal::Decimal;
    ///
    /// // 9.5 cents → 10 cents, 28.5 cents → 28 cents
    /// assert_eq!(Money::from_decimal(Decimal::new(95, 3)).unwrap().cents(), 10);
    /// assert_eq!(Money::from_decimal(Decimal::new(285, 3)).unwrap().cents(), 28);
    /// ```
    pub fn from_decimal(amount: Decimal) -> Option<Money> {
        let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
        rounded.rescale(2);
        if rounded.scale() != 2 {
            return None;
        }
        i64::try_from(rounded.mantissa()).ok().map(Money)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    ///
    /// ## Example
    /// ```rust
    /// use pricing_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).dollars(), 10);
    /// assert_eq!(Money::from_cents(-550).dollars(), -5);
    /// ```
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Subtraction of two Money values (used for savings).
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
