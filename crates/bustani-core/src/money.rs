//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Riyals?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer SAR                                              │
//! │    Every catalog price is a whole riyal, and every observed             │
//! │    computation (outlet multipliers, group discounts) rounds back to a   │
//! │    whole riyal. So the smallest unit the domain ever handles IS the     │
//! │    riyal, and i64 riyals are exact.                                     │
//! │                                                                         │
//! │  Fractional factors (1.05x outlet markup, 15% group discount) are      │
//! │  basis points, applied with integer round-half-up arithmetic.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bustani_core::money::{Money, Multiplier};
//!
//! let subtotal = Money::from_sar(7);
//!
//! // Outlet markup of 1.05x: round(7 * 1.05) = round(7.35) = 7
//! let marked_up = subtotal.scale(Multiplier::from_bps(10_500));
//! assert_eq!(marked_up.sar(), 7);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Multiplier
// =============================================================================

/// A price scaling factor in basis points (10000 = 1.00x).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000. The outlet markups observed in the
/// catalog (1.00x, 1.05x, 1.10x) become 10000, 10500, 11000: exact integers
/// instead of lossy floats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Multiplier(u32);

impl Multiplier {
    /// Creates a multiplier from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Multiplier(bps)
    }

    /// The identity multiplier (1.00x), used when no outlet is selected.
    #[inline]
    pub const fn identity() -> Self {
        Multiplier(10_000)
    }

    /// Returns the factor in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the factor as a float (for display only).
    #[inline]
    pub fn factor(&self) -> f64 {
        self.0 as f64 / 10_000.0
    }

    /// Checks whether scaling by this multiplier is a no-op.
    #[inline]
    pub const fn is_identity(&self) -> bool {
        self.0 == 10_000
    }
}

impl Default for Multiplier {
    fn default() -> Self {
        Multiplier::identity()
    }
}

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in whole Saudi riyals (SAR).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for refunds and adjustments
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## Where Money is Used
/// ```text
/// Ingredient.unit_price ──► SelectionSet ──► OrderQuote.subtotal
///                                                 │
///                              outlet multiplier  ▼
///                                          OrderQuote.final_price
///
/// GroupPricing.adult_price / child_price ──► BookingQuote.total ──► Ticket
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole riyals.
    ///
    /// ## Example
    /// ```rust
    /// use bustani_core::money::Money;
    ///
    /// let price = Money::from_sar(4);
    /// assert_eq!(price.sar(), 4);
    /// ```
    #[inline]
    pub const fn from_sar(sar: i64) -> Self {
        Money(sar)
    }

    /// Returns the value in riyals.
    #[inline]
    pub const fn sar(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Scales by a multiplier with round-half-up to the whole riyal.
    ///
    /// ## Implementation
    /// Integer math: `(sar * bps + 5000) / 10000`. The +5000 provides the
    /// half-up rounding (5000/10000 = 0.5). i128 intermediates prevent
    /// overflow on large amounts.
    ///
    /// ## Example
    /// ```rust
    /// use bustani_core::money::{Money, Multiplier};
    ///
    /// // round(7 * 1.05)  = round(7.35) = 7
    /// assert_eq!(Money::from_sar(7).scale(Multiplier::from_bps(10_500)).sar(), 7);
    /// // round(10 * 1.05) = round(10.5) = 11 (half rounds up)
    /// assert_eq!(Money::from_sar(10).scale(Multiplier::from_bps(10_500)).sar(), 11);
    /// ```
    pub fn scale(&self, multiplier: Multiplier) -> Money {
        let scaled = (self.0 as i128 * multiplier.bps() as i128 + 5_000) / 10_000;
        Money(scaled as i64)
    }

    /// Multiplies money by a quantity (participant counts, item counts).
    ///
    /// ## Example
    /// ```rust
    /// use bustani_core::money::Money;
    ///
    /// let adult_price = Money::from_sar(50);
    /// assert_eq!(adult_price.multiply_quantity(2).sar(), 100);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Applies a percentage discount and returns the discounted amount,
    /// rounded half-up to the whole riyal.
    ///
    /// ## Arguments
    /// * `discount_bps` - Discount in basis points (1500 = 15%)
    ///
    /// ## Example
    /// ```rust
    /// use bustani_core::money::Money;
    ///
    /// // Group discount: round(150 * 0.85) = round(127.5) = 128
    /// let subtotal = Money::from_sar(150);
    /// assert_eq!(subtotal.apply_percentage_discount(1_500).sar(), 128);
    /// ```
    pub fn apply_percentage_discount(&self, discount_bps: u32) -> Money {
        self.scale(Multiplier::from_bps(10_000 - discount_bps))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging. Use frontend formatting for actual UI display
/// to handle localization properly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} SAR", self.0)
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_sar() {
        let money = Money::from_sar(7);
        assert_eq!(money.sar(), 7);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_sar(7)), "7 SAR");
        assert_eq!(format!("{}", Money::from_sar(0)), "0 SAR");
        assert_eq!(format!("{}", Money::from_sar(-5)), "-5 SAR");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_sar(50);
        let b = Money::from_sar(25);

        assert_eq!((a + b).sar(), 75);
        assert_eq!((a - b).sar(), 25);
        assert_eq!((a * 2).sar(), 100);

        let mut acc = Money::zero();
        acc += a;
        acc += b;
        assert_eq!(acc.sar(), 75);
    }

    #[test]
    fn test_scale_identity() {
        let subtotal = Money::from_sar(7);
        assert_eq!(subtotal.scale(Multiplier::identity()), subtotal);
    }

    #[test]
    fn test_scale_rounds_half_up() {
        // 7 * 1.05 = 7.35 → 7
        assert_eq!(Money::from_sar(7).scale(Multiplier::from_bps(10_500)).sar(), 7);
        // 10 * 1.05 = 10.5 → 11
        assert_eq!(Money::from_sar(10).scale(Multiplier::from_bps(10_500)).sar(), 11);
        // 7 * 1.10 = 7.7 → 8
        assert_eq!(Money::from_sar(7).scale(Multiplier::from_bps(11_000)).sar(), 8);
    }

    #[test]
    fn test_percentage_discount() {
        // 150 * 0.85 = 127.5 → 128
        assert_eq!(Money::from_sar(150).apply_percentage_discount(1_500).sar(), 128);
        // 100 * 0.85 = 85, exact
        assert_eq!(Money::from_sar(100).apply_percentage_discount(1_500).sar(), 85);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        assert!(Money::from_sar(4).is_positive());
        assert!(Money::from_sar(-4).is_negative());
    }

    #[test]
    fn test_multiplier_defaults_to_identity() {
        assert!(Multiplier::default().is_identity());
        assert!((Multiplier::from_bps(10_500).factor() - 1.05).abs() < 1e-9);
    }
}
