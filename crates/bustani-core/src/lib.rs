//! # bustani-core: Pure Business Logic for Bustani
//!
//! This crate is the **heart** of the Bustani agritourism marketplace. It
//! contains all business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Bustani Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Mobile Frontend (TypeScript)                    │   │
//! │  │   Role chooser ──► Drink builder ──► Booking ──► Order boards  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ renders derived values only            │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  bustani-session (state layer)                  │   │
//! │  │   SelectionStore, BookingStore, SessionState, scheduler         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ bustani-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐  │   │
//! │  │   │  money  │ │ pricing │ │selection│ │ booking │ │ routing │  │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └─────────┘ └─────────┘  │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌──────────┐            │   │
//! │  │   │ catalog │ │ orders  │ │passport │ │validation│            │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └──────────┘            │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Role, Ingredient, Outlet, Farm, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - Immutable in-memory reference data
//! - [`selection`] - Toggle-based selection sets
//! - [`pricing`] - Order quotes, outlet multipliers, group discounts
//! - [`booking`] - The experience booking flow and tickets
//! - [`routing`] - Role → navigation-root lookup and screen gating
//! - [`orders`] - The fulfillment pipeline and order boards
//! - [`passport`] - The visitor stamp book
//! - [`error`] - Domain error types
//! - [`validation`] - Field validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are whole SAR (i64); fractional
//!    factors are basis points with round-half-up arithmetic
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use bustani_core::catalog::Catalog;
//! use bustani_core::pricing::quote;
//! use bustani_core::selection::SelectionSet;
//!
//! let catalog = Catalog::demo();
//! let mut selection = SelectionSet::new();
//! selection.toggle(catalog.ingredient("orange").unwrap()).unwrap();
//! selection.toggle(catalog.ingredient("apple").unwrap()).unwrap();
//!
//! // Pick up at Green Oasis Juice (1.05x): round(7 * 1.05) = 7
//! let q = quote(&selection, catalog.outlet("2"));
//! assert_eq!(q.final_price.sar(), 7);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod booking;
pub mod catalog;
pub mod error;
pub mod money;
pub mod orders;
pub mod passport;
pub mod pricing;
pub mod routing;
pub mod selection;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use bustani_core::Money` instead of
// `use bustani_core::money::Money`

pub use booking::{BookingDraft, Ticket, ValidationPolicy};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{Money, Multiplier};
pub use pricing::{BookingQuote, GroupPricing, OrderQuote};
pub use routing::{NavigationRoot, RoleRouter};
pub use selection::SelectionSet;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum items allowed in a single selection.
///
/// ## Business Reason
/// A sanity cap well above the catalog size; prevents unbounded growth if a
/// caller loops a toggle.
pub const MAX_SELECTION_ITEMS: usize = 50;

/// Maximum value of a single participant counter (adults or children).
///
/// ## Business Reason
/// Prevents accidental over-booking (e.g. typing 100 instead of 10).
/// Configurable per-deployment in future versions.
pub const MAX_PARTICIPANTS: u32 = 20;

/// Number of stamp pages in a visitor passport.
pub const PASSPORT_CAPACITY: usize = 10;
