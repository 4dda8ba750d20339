//! # Domain Types
//!
//! Core domain types used throughout Bustani.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   Ingredient    │   │     Outlet      │   │      Farm       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  id             │       │
//! │  │  unit_price     │   │  multiplier     │   │  produce[]      │       │
//! │  │  nutrition      │   │  rating/eta     │   │  weather_tag    │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Role       │   │  OrderStatus    │   │ PaymentMethod   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Visitor        │   │  Pending        │   │  ApplePay       │       │
//! │  │  Producer       │   │  Processing     │   │  Mada           │       │
//! │  │  Farmer         │   │  Ready          │   │  StcPay         │       │
//! │  └─────────────────┘   │  Delivered      │   └─────────────────┘       │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Catalog records (`Ingredient`, `Outlet`, `Farm`, `TimeSlot`) are immutable
//! reference data: a fixed in-memory catalog, not user state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::money::{Money, Multiplier};

// =============================================================================
// Role
// =============================================================================

/// The persona selected at app entry.
///
/// Set once per session; determines the active navigation root. There is no
/// persistence across app restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Farm visitor: booking, passport, kids zone, AR tour.
    Visitor,
    /// Producer: wholesale orders, processing, insights.
    Producer,
    /// Farmer: store orders, tree batches, irrigation, disease scan.
    Farmer,
}

impl Role {
    /// All defined roles, in presentation order.
    pub const ALL: [Role; 3] = [Role::Visitor, Role::Producer, Role::Farmer];

    /// Stable identifier used by the navigation host.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::Visitor => "visitor",
            Role::Producer => "producer",
            Role::Farmer => "farmer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    /// Parses a role identifier. Unknown values fail explicitly with
    /// [`CoreError::InvalidRole`], never a silent default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "visitor" => Ok(Role::Visitor),
            "producer" => Ok(Role::Producer),
            "farmer" => Ok(Role::Farmer),
            other => Err(CoreError::InvalidRole(other.to_string())),
        }
    }
}

// =============================================================================
// Nutrition
// =============================================================================

/// Per-ingredient nutrition attributes.
///
/// Summed per key across a selection by the pricing engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Nutrition {
    /// Kilocalories.
    pub calories: u32,
    /// Grams of sugar.
    pub sugar: u32,
    /// Grams of fiber.
    pub fiber: u32,
}

impl Nutrition {
    pub const fn new(calories: u32, sugar: u32, fiber: u32) -> Self {
        Nutrition {
            calories,
            sugar,
            fiber,
        }
    }

    /// Component-wise sum, used when aggregating a selection.
    pub const fn add(&self, other: &Nutrition) -> Nutrition {
        Nutrition {
            calories: self.calories + other.calories,
            sugar: self.sugar + other.sugar,
            fiber: self.fiber + other.fiber,
        }
    }
}

// =============================================================================
// Ingredient
// =============================================================================

/// A juice ingredient the visitor can select.
///
/// Immutable once defined; part of the catalog, not user data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    /// Catalog identifier (unique within the ingredient catalog).
    pub id: String,

    /// Display name shown on the selection chip.
    pub name: String,

    /// Price in whole SAR.
    pub unit_price: Money,

    /// Nutrition attributes, summed across a selection.
    pub nutrition: Nutrition,
}

impl Ingredient {
    pub fn new(id: &str, name: &str, price_sar: i64, nutrition: Nutrition) -> Self {
        Ingredient {
            id: id.to_string(),
            name: name.to_string(),
            unit_price: Money::from_sar(price_sar),
            nutrition,
        }
    }
}

// =============================================================================
// Outlet
// =============================================================================

/// A pickup location with its own price multiplier and rating.
///
/// Read-only reference data supplied by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Outlet {
    /// Catalog identifier.
    pub id: String,

    /// Display name ("Bustani Fresh Bar").
    pub name: String,

    /// Human-readable location within the farm.
    pub location: String,

    /// Pickup ETA range in minutes (inclusive bounds).
    pub pickup_eta_minutes: (u32, u32),

    /// Rating in tenths of a star (49 = 4.9) to avoid floats in the domain.
    pub rating_tenths: u32,

    /// Price multiplier applied to the order subtotal.
    pub price_multiplier: Multiplier,
}

impl Outlet {
    /// Rating as a float, for display only.
    #[inline]
    pub fn rating(&self) -> f64 {
        self.rating_tenths as f64 / 10.0
    }
}

// =============================================================================
// Experience / Time Slot / Payment Method
// =============================================================================

/// A bookable farm experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceType {
    /// Citrus picking.
    Citrus,
    /// Hands-on workshop.
    Workshop,
    /// Guided farm tour.
    Tour,
    /// Kids zone activities.
    Kids,
}

impl Default for ExperienceType {
    fn default() -> Self {
        ExperienceType::Citrus
    }
}

impl ExperienceType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ExperienceType::Citrus => "Citrus",
            ExperienceType::Workshop => "Workshop",
            ExperienceType::Tour => "Tour",
            ExperienceType::Kids => "Kids",
        }
    }
}

/// A bookable time of day, as an `HH:MM` label.
///
/// The catalog marks one slot per day as the recommended "best time".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    /// `HH:MM` display label, also the slot's identity.
    pub label: String,

    /// Whether the catalog recommends this slot.
    pub recommended: bool,
}

impl TimeSlot {
    pub fn new(label: &str, recommended: bool) -> Self {
        TimeSlot {
            label: label.to_string(),
            recommended,
        }
    }
}

/// Payment methods accepted by the booking flow.
///
/// No payment processing happens here; the method is recorded on the draft
/// and echoed on the ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    ApplePay,
    Mada,
    StcPay,
}

impl Default for PaymentMethod {
    fn default() -> Self {
        PaymentMethod::ApplePay
    }
}

// =============================================================================
// Farm Catalog
// =============================================================================

/// A produce item sold by a farm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Produce {
    pub id: String,
    pub name: String,
    pub unit_price: Money,
    pub description: String,
}

/// A farm visible on the visitor map, with its produce list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Farm {
    pub id: String,
    pub name: String,
    pub category: String,
    /// Display-only weather suitability tag ("Best Today").
    pub weather_tag: String,
    pub latitude: f64,
    pub longitude: f64,
    pub produce: Vec<Produce>,
    pub description: String,
}

// =============================================================================
// Order Status
// =============================================================================

/// The fulfillment status of a marketplace order.
///
/// Orders move strictly forward: Pending → Processing → Ready → Delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Placed, awaiting acceptance.
    Pending,
    /// Accepted, being prepared.
    Processing,
    /// Prepared, awaiting pickup/delivery.
    Ready,
    /// Terminal: handed over.
    Delivered,
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Ready => "Ready",
            OrderStatus::Delivered => "Delivered",
        };
        f.write_str(s)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trips_through_str() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn test_unknown_role_fails_explicitly() {
        let err = "admin".parse::<Role>().unwrap_err();
        assert!(matches!(err, CoreError::InvalidRole(r) if r == "admin"));
    }

    #[test]
    fn test_nutrition_add() {
        let orange = Nutrition::new(62, 12, 3);
        let apple = Nutrition::new(52, 10, 2);
        let sum = orange.add(&apple);
        assert_eq!(sum, Nutrition::new(114, 22, 5));
    }

    #[test]
    fn test_outlet_rating_display() {
        let outlet = Outlet {
            id: "1".to_string(),
            name: "Bustani Fresh Bar".to_string(),
            location: "Main Farm Entrance".to_string(),
            pickup_eta_minutes: (5, 10),
            rating_tenths: 49,
            price_multiplier: Multiplier::identity(),
        };
        assert!((outlet.rating() - 4.9).abs() < 1e-9);
    }

    #[test]
    fn test_defaults_match_booking_screen() {
        assert_eq!(ExperienceType::default(), ExperienceType::Citrus);
        assert_eq!(PaymentMethod::default(), PaymentMethod::ApplePay);
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
    }
}
