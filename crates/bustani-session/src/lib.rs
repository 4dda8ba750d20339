//! # bustani-session: Session State Layer for Bustani
//!
//! The mutable, per-session side of the marketplace: explicit state
//! containers the view layer drives, a cancellable scheduler for the mock
//! processing delays, and the classification provider seam.
//!
//! Everything here is scoped to one app session. Nothing persists, nothing
//! touches the network; [`bustani_core`] supplies every business rule.
//!
//! ## Modules
//!
//! - [`stores`] - [`Session`](stores::Session) and the per-role stores
//! - [`scheduler`] - scheduled callbacks that cannot outlive their owner
//! - [`classify`] - the [`ClassificationProvider`](classify::ClassificationProvider) seam
//! - [`error`] - session-layer errors
//!
//! ## Example
//!
//! ```rust
//! use bustani_core::catalog::Catalog;
//! use bustani_session::stores::Session;
//!
//! let catalog = Catalog::demo();
//! let session = Session::new();
//!
//! session.choose_role_str("visitor").unwrap();
//! session.selection.toggle(catalog.ingredient("orange").unwrap()).unwrap();
//! session.selection.toggle(catalog.ingredient("apple").unwrap()).unwrap();
//!
//! let quote = session.selection.quote(catalog.outlet("2"));
//! assert_eq!(quote.final_price.sar(), 7);
//! ```

pub mod classify;
pub mod error;
pub mod scheduler;
pub mod stores;

pub use classify::{Classification, ClassificationProvider, MockClassifier, ScanInput, Severity};
pub use error::{SessionError, SessionResult};
pub use scheduler::{DelayedTask, TaskHandle};
pub use stores::{BookingStore, SelectionStore, Session};
