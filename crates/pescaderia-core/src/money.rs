//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! Floating point drifts: `0.1 + 0.2 != 0.3`. Every price, subtotal and
//! lifetime total in this system is stored as integer cents. The only place
//! fractions appear is quantities (a customer can buy 1.5 kg of salmon), and
//! the resulting line total rounds to the nearest cent exactly once.
//!
//! ## Usage
//! ```rust
//! use pescaderia_core::money::Money;
//!
//! let kilo_price = Money::from_cents(1850); // €18.50/kg
//!
//! // Whole-unit lines use integer multiplication
//! let two_trays = kilo_price * 2;
//! assert_eq!(two_trays.cents(), 3700);
//!
//! // Weight-based lines round once, to the nearest cent
//! let line = kilo_price.multiply_quantity(1.5);
//! assert_eq!(line.cents(), 2775); // €27.75
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (euro cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: arithmetic intermediates may dip negative
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Serializes as a bare integer**: the JSON collections store cents
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use pescaderia_core::money::Money;
    ///
    /// let price = Money::from_cents(1850); // €18.50
    /// assert_eq!(price.cents(), 1850);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (euros) portion.
    #[inline]
    pub const fn euros(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies a unit price by a possibly fractional quantity, rounding
    /// to the nearest cent.
    ///
    /// Fish is sold by weight: 1.5 kg at €18.50/kg is €27.75. Rounding
    /// happens exactly once per line item, so a sale total is always the
    /// exact sum of its (already rounded) line subtotals.
    ///
    /// ```rust
    /// use pescaderia_core::money::Money;
    ///
    /// let price = Money::from_cents(1280); // €12.80/kg
    /// assert_eq!(price.multiply_quantity(0.25).cents(), 320);
    /// ```
    #[inline]
    pub fn multiply_quantity(&self, qty: f64) -> Self {
        Money((self.0 as f64 * qty).round() as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-friendly display. UI-facing formatting (es-AR locale) is the
/// frontend's job.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}€{}.{:02}", sign, self.euros().abs(), self.cents_part())
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by an integer quantity (whole units, trays).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summing an iterator of Money values (report revenue folds).
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
