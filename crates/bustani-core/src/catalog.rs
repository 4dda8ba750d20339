//! # Catalog Module
//!
//! The immutable, pre-loaded in-memory reference data the rest of the core
//! consumes: ingredients, pickup outlets, farms, time slots, and the seed
//! orders for the fulfillment boards.
//!
//! ## Contract
//! The catalog is supplied whole at construction. No lazy loading, no
//! pagination, no mutation after creation. `Catalog::demo()` carries the
//! marketplace's built-in dataset; product deployments construct their own.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::money::{Money, Multiplier};
use crate::orders::Order;
use crate::types::{ExperienceType, Farm, Ingredient, Nutrition, Outlet, OrderStatus, Produce, TimeSlot};

/// Drink customization option lists (display strings, no pricing effect).
pub const ICE_LEVELS: [&str; 3] = ["No Ice", "Normal Ice", "Extra Ice"];
pub const SWEETNESS_LEVELS: [&str; 3] = ["No Sugar", "Medium", "Sweet"];

/// The full reference dataset for one marketplace deployment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    ingredients: Vec<Ingredient>,
    outlets: Vec<Outlet>,
    farms: Vec<Farm>,
    time_slots: Vec<TimeSlot>,
}

impl Catalog {
    pub fn new(
        ingredients: Vec<Ingredient>,
        outlets: Vec<Outlet>,
        farms: Vec<Farm>,
        time_slots: Vec<TimeSlot>,
    ) -> Self {
        Catalog {
            ingredients,
            outlets,
            farms,
            time_slots,
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn ingredient(&self, id: &str) -> Option<&Ingredient> {
        self.ingredients.iter().find(|i| i.id == id)
    }

    pub fn outlets(&self) -> &[Outlet] {
        &self.outlets
    }

    pub fn outlet(&self, id: &str) -> Option<&Outlet> {
        self.outlets.iter().find(|o| o.id == id)
    }

    pub fn farms(&self) -> &[Farm] {
        &self.farms
    }

    pub fn farm(&self, id: &str) -> Option<&Farm> {
        self.farms.iter().find(|f| f.id == id)
    }

    pub fn time_slots(&self) -> &[TimeSlot] {
        &self.time_slots
    }

    /// The catalog's recommended slot, if any ("Best time today").
    pub fn recommended_slot(&self) -> Option<&TimeSlot> {
        self.time_slots.iter().find(|s| s.recommended)
    }

    /// All bookable experiences, in presentation order.
    pub fn experiences(&self) -> [ExperienceType; 4] {
        [
            ExperienceType::Citrus,
            ExperienceType::Workshop,
            ExperienceType::Tour,
            ExperienceType::Kids,
        ]
    }

    // -------------------------------------------------------------------------
    // Built-in dataset
    // -------------------------------------------------------------------------

    /// The marketplace's built-in demo dataset.
    pub fn demo() -> Self {
        let ingredients = vec![
            Ingredient::new("orange", "Orange", 4, Nutrition::new(62, 12, 3)),
            Ingredient::new("apple", "Apple", 3, Nutrition::new(52, 10, 2)),
            Ingredient::new("banana", "Banana", 3, Nutrition::new(89, 12, 3)),
            Ingredient::new("strawberry", "Strawberry", 5, Nutrition::new(32, 4, 2)),
            Ingredient::new("mango", "Mango", 6, Nutrition::new(60, 14, 2)),
            Ingredient::new("pineapple", "Pineapple", 5, Nutrition::new(50, 10, 1)),
            Ingredient::new("watermelon", "Watermelon", 4, Nutrition::new(30, 6, 1)),
            Ingredient::new("blueberry", "Blueberry", 6, Nutrition::new(57, 10, 2)),
            Ingredient::new("carrot", "Carrot", 2, Nutrition::new(41, 5, 3)),
            Ingredient::new("spinach", "Spinach", 2, Nutrition::new(23, 0, 2)),
            Ingredient::new("cucumber", "Cucumber", 2, Nutrition::new(16, 2, 1)),
            Ingredient::new("beetroot", "Beetroot", 3, Nutrition::new(43, 7, 2)),
            Ingredient::new("mint", "Mint", 1, Nutrition::new(5, 0, 1)),
        ];

        let outlets = vec![
            Outlet {
                id: "1".to_string(),
                name: "Bustani Fresh Bar".to_string(),
                location: "Main Farm Entrance".to_string(),
                pickup_eta_minutes: (5, 10),
                rating_tenths: 49,
                price_multiplier: Multiplier::identity(),
            },
            Outlet {
                id: "2".to_string(),
                name: "Green Oasis Juice".to_string(),
                location: "Visitor Center".to_string(),
                pickup_eta_minutes: (10, 15),
                rating_tenths: 47,
                price_multiplier: Multiplier::from_bps(10_500),
            },
            Outlet {
                id: "3".to_string(),
                name: "Organic Blend Station".to_string(),
                location: "Kids Zone".to_string(),
                pickup_eta_minutes: (7, 12),
                rating_tenths: 48,
                price_multiplier: Multiplier::from_bps(11_000),
            },
        ];

        let farms = vec![
            Farm {
                id: "1".to_string(),
                name: "Orange Farm".to_string(),
                category: "Citrus".to_string(),
                weather_tag: "Best Today".to_string(),
                latitude: 24.719,
                longitude: 46.68,
                description: "Home to the sweetest Valencia and Blood oranges in Riyadh."
                    .to_string(),
                produce: vec![
                    Produce {
                        id: "c1".to_string(),
                        name: "Valencia Orange".to_string(),
                        unit_price: Money::from_sar(15),
                        description: "Sweet and juicy".to_string(),
                    },
                    Produce {
                        id: "c2".to_string(),
                        name: "Blood Orange".to_string(),
                        unit_price: Money::from_sar(18),
                        description: "Rich and tart".to_string(),
                    },
                    Produce {
                        id: "c3".to_string(),
                        name: "Mandarin".to_string(),
                        unit_price: Money::from_sar(12),
                        description: "Easy to peel snack".to_string(),
                    },
                ],
            },
            Farm {
                id: "2".to_string(),
                name: "Organic Garden".to_string(),
                category: "Organic".to_string(),
                weather_tag: "Good for Heat".to_string(),
                latitude: 24.705,
                longitude: 46.665,
                description: "Certified organic vegetables and sun-ripened lemons.".to_string(),
                produce: vec![
                    Produce {
                        id: "c4".to_string(),
                        name: "Organic Lemon".to_string(),
                        unit_price: Money::from_sar(10),
                        description: "Zesty and fresh".to_string(),
                    },
                    Produce {
                        id: "c5".to_string(),
                        name: "Lime".to_string(),
                        unit_price: Money::from_sar(12),
                        description: "Perfect for drinks".to_string(),
                    },
                ],
            },
            Farm {
                id: "3".to_string(),
                name: "Heritage Farm".to_string(),
                category: "Heritage".to_string(),
                weather_tag: "Indoor Friendly".to_string(),
                latitude: 24.73,
                longitude: 46.69,
                description: "Traditional farming methods preserving the taste of the past."
                    .to_string(),
                produce: vec![
                    Produce {
                        id: "c6".to_string(),
                        name: "Grapefruit".to_string(),
                        unit_price: Money::from_sar(14),
                        description: "Bitter-sweet balance".to_string(),
                    },
                    Produce {
                        id: "c7".to_string(),
                        name: "Pomelo".to_string(),
                        unit_price: Money::from_sar(20),
                        description: "Giant citrus fruit".to_string(),
                    },
                ],
            },
        ];

        let time_slots = vec![
            TimeSlot::new("09:00", false),
            TimeSlot::new("11:30", false),
            TimeSlot::new("16:30", true),
        ];

        Catalog::new(ingredients, outlets, farms, time_slots)
    }
}

// =============================================================================
// Seed Orders
// =============================================================================

/// Seed orders for the farmer store board.
pub fn demo_store_orders() -> Vec<Order> {
    let now = Utc::now();
    vec![
        Order {
            id: "ORD-2451".to_string(),
            customer: "Sarah M.".to_string(),
            items: vec![
                "2x Fresh Orange Juice (1L)".to_string(),
                "1x Citrus Shea Soap".to_string(),
            ],
            total: Money::from_sar(55),
            status: OrderStatus::Pending,
            placed_at: now - Duration::minutes(10),
        },
        Order {
            id: "ORD-2450".to_string(),
            customer: "Hotel Grand Estate".to_string(),
            items: vec![
                "50x Lemon & Mint Splash (500ml)".to_string(),
                "10x Honey Soap".to_string(),
            ],
            total: Money::from_sar(705),
            status: OrderStatus::Pending,
            placed_at: now - Duration::minutes(35),
        },
        Order {
            id: "ORD-2449".to_string(),
            customer: "Ahmed K.".to_string(),
            items: vec!["1x Grapefruit Glow (750ml)".to_string()],
            total: Money::from_sar(18),
            status: OrderStatus::Processing,
            placed_at: now - Duration::hours(1),
        },
        Order {
            id: "ORD-2445".to_string(),
            customer: "Organic Cafe".to_string(),
            items: vec!["20x Pure Orange Zest".to_string()],
            total: Money::from_sar(300),
            status: OrderStatus::Ready,
            placed_at: now - Duration::hours(3),
        },
    ]
}

/// Seed orders for the producer wholesale board.
pub fn demo_wholesale_orders() -> Vec<Order> {
    let now = Utc::now();
    vec![
        Order {
            id: "PO-8821".to_string(),
            customer: "FreshMarket Chains".to_string(),
            items: vec!["2.5 Tons - Citrus (Oranges)".to_string()],
            total: Money::from_sar(4_200),
            status: OrderStatus::Pending,
            placed_at: now - Duration::hours(2),
        },
        Order {
            id: "PO-8820".to_string(),
            customer: "Global Exports Ltd".to_string(),
            items: vec!["10 Tons - Dates (Ajwa)".to_string()],
            total: Money::from_sar(45_000),
            status: OrderStatus::Processing,
            placed_at: now - Duration::days(1),
        },
        Order {
            id: "PO-8819".to_string(),
            customer: "Local Juicery Hub".to_string(),
            items: vec!["500 kg - Lemons".to_string()],
            total: Money::from_sar(850),
            status: OrderStatus::Ready,
            placed_at: now - Duration::days(3),
        },
        Order {
            id: "PO-8815".to_string(),
            customer: "GreenGrocer Co.".to_string(),
            items: vec!["1.2 Tons - Olives".to_string()],
            total: Money::from_sar(3_100),
            status: OrderStatus::Delivered,
            placed_at: now - Duration::days(5),
        },
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog_shape() {
        let catalog = Catalog::demo();
        assert_eq!(catalog.ingredients().len(), 13);
        assert_eq!(catalog.outlets().len(), 3);
        assert_eq!(catalog.farms().len(), 3);
        assert_eq!(catalog.time_slots().len(), 3);
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = Catalog::demo();

        let orange = catalog.ingredient("orange").unwrap();
        assert_eq!(orange.unit_price.sar(), 4);

        let fresh_bar = catalog.outlet("1").unwrap();
        assert!(fresh_bar.price_multiplier.is_identity());

        assert!(catalog.ingredient("durian").is_none());
    }

    #[test]
    fn test_outlet_multipliers() {
        let catalog = Catalog::demo();
        let bps: Vec<u32> = catalog
            .outlets()
            .iter()
            .map(|o| o.price_multiplier.bps())
            .collect();
        assert_eq!(bps, vec![10_000, 10_500, 11_000]);
    }

    #[test]
    fn test_recommended_slot() {
        let catalog = Catalog::demo();
        assert_eq!(catalog.recommended_slot().unwrap().label, "16:30");
    }

    #[test]
    fn test_seed_orders() {
        let store = demo_store_orders();
        assert_eq!(store.len(), 4);
        assert_eq!(store[0].status, OrderStatus::Pending);

        let wholesale = demo_wholesale_orders();
        assert!(wholesale.iter().any(|o| o.status == OrderStatus::Delivered));
    }
}
