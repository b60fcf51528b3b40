//! # Money Module
//!
//! Rupee amounts for display.
//!
//! ## Where Floats Stop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Line items are typed text ("2", "74.75"), multiplied as f64 to build  │
//! │  the subtotal exactly the way the UPI amount string is produced.       │
//! │                                                                         │
//! │  Anything shown to a person goes through Money first:                  │
//! │    74.75 × 2 = 149.5  ──► Money(14950 paise) ──► "₹149.50"             │
//! │                                                                         │
//! │  Money itself is integer paise, so grouping and the two decimal        │
//! │  places never drift.                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use upi_core::money::{format_inr, Money};
//!
//! let price = Money::from_paise(12345650);
//! assert_eq!(price.to_string(), "₹1,23,456.50");
//!
//! assert_eq!(format_inr(149.5), "₹149.50");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A rupee amount in paise (1/100 of a rupee).
///
/// ## Design Decisions
/// - **i64 (signed)**: Display of negative values must still work even
///   though a well-formed invoice never produces one
/// - **Single field tuple struct**: Zero-cost abstraction over i64
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from paise.
    #[inline]
    pub const fn from_paise(paise: i64) -> Self {
        Money(paise)
    }

    /// Converts a rupee amount to the nearest paisa.
    ///
    /// Returns `None` for `NaN`, infinities, and values outside the
    /// representable range.
    ///
    /// ## Example
    /// ```rust
    /// use upi_core::money::Money;
    ///
    /// assert_eq!(Money::from_rupees(149.5), Some(Money::from_paise(14950)));
    /// assert_eq!(Money::from_rupees(f64::NAN), None);
    /// ```
    pub fn from_rupees(rupees: f64) -> Option<Self> {
        let paise = (rupees * 100.0).round();
        if !paise.is_finite() || paise.abs() >= i64::MAX as f64 {
            return None;
        }
        Some(Money(paise as i64))
    }

    /// Returns the value in paise.
    #[inline]
    pub const fn paise(&self) -> i64 {
        self.0
    }

    /// Returns the whole-rupee portion.
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the paise portion (always 0-99).
    #[inline]
    pub const fn paise_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Plain two-decimal form without symbol or grouping: `1234.50`.
    ///
    /// Uses the same paise rounding as [`Display`](fmt::Display), so the
    /// number a payer sees and the number sent on the wire never differ.
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.rupees().unsigned_abs(), self.paise_part())
    }
}

/// Groups digits the en-IN way: last three, then pairs.
///
/// `1234567` → `12,34,567`
fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Formats as Indian Rupees: `₹1,23,456.50`, negative as `-₹5.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}₹{}.{:02}",
            sign,
            group_indian(self.rupees().unsigned_abs()),
            self.paise_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money(0)
    }
}

/// Formats a raw subtotal for display.
///
/// `NaN` shows as zero, infinities as `₹∞`. Amounts too large for
/// [`Money`] fall back to plain two-decimal formatting.
pub fn format_inr(amount: f64) -> String {
    if amount.is_nan() {
        return Money::default().to_string();
    }
    if amount.is_infinite() {
        return if amount < 0.0 { "-₹∞" } else { "₹∞" }.to_string();
    }

    match Money::from_rupees(amount) {
        Some(money) => money.to_string(),
        None => format!("₹{:.2}", amount),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
