//! # Pricing Module
//!
//! Pure arithmetic over already-validated in-memory data. No error states
//! exist here: an empty selection prices to zero and is simply not orderable.
//!
//! ## Pricing Paths
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Two Pricing Paths                                │
//! │                                                                         │
//! │  Drink order:                                                           │
//! │    SelectionSet ──► subtotal = Σ unit_price                            │
//! │                 ──► nutrition = Σ attributes                            │
//! │    Outlet?      ──► final = round(subtotal × multiplier)                │
//! │                                                                         │
//! │  Experience booking:                                                    │
//! │    adults, children ──► subtotal = a×adult_price + c×child_price        │
//! │    people >= 4      ──► total = round(subtotal × 0.85)                  │
//! │    people <  4      ──► total = subtotal                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Discount tiers and thresholds are policy constants exposed as
//! configuration ([`GroupPricing`]), not computed.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::selection::SelectionSet;
use crate::types::{Nutrition, Outlet};

// =============================================================================
// Order Quote
// =============================================================================

/// Derived totals for a drink order, consumed by the view layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderQuote {
    /// Sum of selected unit prices, before any outlet multiplier.
    pub subtotal: Money,

    /// Subtotal scaled by the outlet multiplier, rounded to the whole riyal.
    /// Equals `subtotal` when no outlet is selected.
    pub final_price: Money,

    /// Aggregate nutrition across the selection.
    pub nutrition: Nutrition,

    /// Number of selected items.
    pub item_count: usize,
}

impl OrderQuote {
    /// Whether the order action should be enabled.
    ///
    /// An empty selection is a disabled-button state, not an error.
    pub fn is_orderable(&self) -> bool {
        self.item_count > 0
    }
}

/// Computes the quote for a selection at an optional pickup outlet.
///
/// ## Example
/// ```rust
/// use bustani_core::catalog::Catalog;
/// use bustani_core::pricing::quote;
/// use bustani_core::selection::SelectionSet;
///
/// let catalog = Catalog::demo();
/// let mut selection = SelectionSet::new();
/// selection.toggle(catalog.ingredient("orange").unwrap()).unwrap();
/// selection.toggle(catalog.ingredient("apple").unwrap()).unwrap();
///
/// let q = quote(&selection, None);
/// assert_eq!(q.subtotal.sar(), 7);
/// assert_eq!(q.final_price.sar(), 7);
/// ```
pub fn quote(selection: &SelectionSet, outlet: Option<&Outlet>) -> OrderQuote {
    let mut subtotal = Money::zero();
    let mut nutrition = Nutrition::default();

    for item in selection.items() {
        subtotal += item.unit_price;
        nutrition = nutrition.add(&item.nutrition);
    }

    let final_price = match outlet {
        Some(o) => subtotal.scale(o.price_multiplier),
        None => subtotal,
    };

    OrderQuote {
        subtotal,
        final_price,
        nutrition,
        item_count: selection.len(),
    }
}

// =============================================================================
// Group Pricing
// =============================================================================

/// Pricing policy for experience bookings.
///
/// Thresholds and rates are configuration, not derived values. The defaults
/// mirror the marketplace policy: 50/25 SAR per adult/child with a flat 15%
/// discount for groups of four or more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct GroupPricing {
    /// Price per adult in whole SAR.
    pub adult_price: Money,

    /// Price per child in whole SAR.
    pub child_price: Money,

    /// Minimum participant count (adults + children) for the group discount.
    pub group_threshold: u32,

    /// Group discount in basis points (1500 = 15%).
    pub group_discount_bps: u32,
}

impl Default for GroupPricing {
    fn default() -> Self {
        GroupPricing {
            adult_price: Money::from_sar(50),
            child_price: Money::from_sar(25),
            group_threshold: 4,
            group_discount_bps: 1_500,
        }
    }
}

/// Derived totals for a booking, consumed by the view layer and the ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BookingQuote {
    pub subtotal: Money,

    /// Subtotal after the group discount (equal to subtotal below the
    /// threshold), rounded to the whole riyal.
    pub total: Money,

    /// Whether the group discount applied.
    pub discounted: bool,

    /// adults + children.
    pub participant_count: u32,
}

impl GroupPricing {
    /// Prices a booking for the given participant counts.
    ///
    /// ## Example
    /// ```rust
    /// use bustani_core::pricing::GroupPricing;
    ///
    /// let pricing = GroupPricing::default();
    ///
    /// // 2 adults + 2 children = 150 SAR, group of 4 → round(150 × 0.85) = 128
    /// let q = pricing.price(2, 2);
    /// assert_eq!(q.subtotal.sar(), 150);
    /// assert_eq!(q.total.sar(), 128);
    /// assert!(q.discounted);
    /// ```
    pub fn price(&self, adults: u32, children: u32) -> BookingQuote {
        let subtotal = self.adult_price.multiply_quantity(adults as i64)
            + self.child_price.multiply_quantity(children as i64);

        let participant_count = adults + children;
        let discounted = participant_count >= self.group_threshold;

        let total = if discounted {
            subtotal.apply_percentage_discount(self.group_discount_bps)
        } else {
            subtotal
        };

        BookingQuote {
            subtotal,
            total,
            discounted,
            participant_count,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
