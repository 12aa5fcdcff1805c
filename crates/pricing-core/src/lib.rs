//! # pricing-core: Pure Discount Logic
//!
//! This crate decides what a customer pays. It contains the discount rules
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Pricing Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    pricing-cli                                  │   │
//! │  │    args ──► env config ──► calculator ──► text / JSON          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ pricing-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │ discount  │  │ validation│  │   │
//! │  │   │ Category  │  │   Money   │  │   quote   │  │   rules   │  │   │
//! │  │   │  Coupon   │  │ rounding  │  │ final     │  │  parsing  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • NO GLOBAL STATE • PURE FUNCTIONS       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`discount`] - The calculator (`compute_final_price`, `quote`)
//! - [`types`] - Customer categories, coupons, discount rates
//! - [`money`] - Money type in integer cents, half-even rounding from `Decimal`
//! - [`error`] - Domain error types
//! - [`validation`] - Price parsing and validation
//!
//! ## Example Usage
//!
//! ```rust
//! use pricing_core::{compute_final_price, parse_price};
//!
//! let price = parse_price("100").unwrap();
//! let paid = compute_final_price(price, "vip", Some("EXTRA10")).unwrap();
//! assert_eq!(paid.to_string(), "$80.00");
//!
//! // List prices keep every digit; only the result is rounded
//! let paid = compute_final_price(parse_price("12.345").unwrap(), "guest", None).unwrap();
//! assert_eq!(paid.to_string(), "$12.34");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod discount;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use discount::{compute_final_price, quote, PriceQuote};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;
pub use validation::parse_price;

pub use rust_decimal::Decimal;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Basis points in a whole (100%).
pub const BPS_SCALE: u32 = 10_000;
