//! # Session Stores
//!
//! Explicit, injectable state containers for the view layer.
//!
//! ## Why Stores Instead of View-Local State?
//! The original screens kept role, selection, and booking draft in
//! component-local variables, which made the business rules untestable
//! without a rendering environment. Here each piece of per-session state is
//! an explicit container passed by reference to the view layer.
//!
//! ## Thread Safety
//! Each store wraps its state in `Arc<Mutex<T>>`:
//! 1. Multiple view callbacks may access/modify the state
//! 2. Only one callback should modify it at a time
//! 3. The UI host may dispatch from more than one thread
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session State Operations                             │
//! │                                                                         │
//! │  View Action              Store Call               State Change         │
//! │  ───────────              ──────────               ────────────         │
//! │  Tap ingredient chip ───► selection.toggle() ────► add/remove item      │
//! │  Tap "Confirm & Pay" ───► booking.confirm() ─────► draft → Ticket       │
//! │  Pick a role ───────────► session.choose_role() ─► nav root switches    │
//! │  Confirm logout ────────► session.logout() ──────► back to role select, │
//! │                                                    per-role state clear │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use tracing::{debug, info};
use uuid::Uuid;

use bustani_core::booking::{BookingDraft, Ticket, ValidationPolicy};
use bustani_core::passport::{Passport, Stamp};
use bustani_core::pricing::{quote, BookingQuote, GroupPricing, OrderQuote};
use bustani_core::routing::{NavigationRoot, RoleRouter};
use bustani_core::selection::SelectionSet;
use bustani_core::types::{Ingredient, Outlet, Role};

use crate::error::{SessionError, SessionResult};

// =============================================================================
// Selection Store
// =============================================================================

/// Shared handle to the drink builder's selection.
#[derive(Debug, Clone, Default)]
pub struct SelectionStore {
    inner: Arc<Mutex<SelectionSet>>,
}

impl SelectionStore {
    pub fn new() -> Self {
        SelectionStore {
            inner: Arc::new(Mutex::new(SelectionSet::new())),
        }
    }

    /// Executes a function with read access to the selection.
    pub fn with_selection<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&SelectionSet) -> R,
    {
        let selection = self.inner.lock().expect("Selection mutex poisoned");
        f(&selection)
    }

    /// Executes a function with write access to the selection.
    pub fn with_selection_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut SelectionSet) -> R,
    {
        let mut selection = self.inner.lock().expect("Selection mutex poisoned");
        f(&mut selection)
    }

    /// Toggles an ingredient and returns whether it is now selected.
    pub fn toggle(&self, item: &Ingredient) -> SessionResult<bool> {
        let selected = self.with_selection_mut(|s| s.toggle(item))?;
        debug!(item = %item.id, selected, "selection toggled");
        Ok(selected)
    }

    /// Empties the selection (screen unmount / order completed).
    pub fn clear(&self) {
        self.with_selection_mut(|s| s.clear());
    }

    /// Current quote at an optional pickup outlet.
    pub fn quote(&self, outlet: Option<&Outlet>) -> OrderQuote {
        self.with_selection(|s| quote(s, outlet))
    }
}

// =============================================================================
// Booking Store
// =============================================================================

/// Shared handle to the experience booking draft, with its pricing policy.
#[derive(Debug, Clone)]
pub struct BookingStore {
    inner: Arc<Mutex<BookingDraft>>,
    pricing: GroupPricing,
    policy: ValidationPolicy,
}

impl BookingStore {
    pub fn new(pricing: GroupPricing, policy: ValidationPolicy) -> Self {
        BookingStore {
            inner: Arc::new(Mutex::new(BookingDraft::new())),
            pricing,
            policy,
        }
    }

    pub fn pricing(&self) -> &GroupPricing {
        &self.pricing
    }

    /// Executes a function with read access to the draft.
    pub fn with_draft<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&BookingDraft) -> R,
    {
        let draft = self.inner.lock().expect("Booking mutex poisoned");
        f(&draft)
    }

    /// Executes a function with write access to the draft.
    pub fn with_draft_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut BookingDraft) -> R,
    {
        let mut draft = self.inner.lock().expect("Booking mutex poisoned");
        f(&mut draft)
    }

    /// Live totals for the summary card.
    pub fn quote(&self) -> BookingQuote {
        self.with_draft(|d| self.pricing.price(d.adults(), d.children()))
    }

    /// Confirms the draft under the store's policy. Idempotent.
    pub fn confirm(&self) -> SessionResult<Ticket> {
        let ticket = self.with_draft_mut(|d| d.confirm(&self.pricing, &self.policy))?;
        info!(reference = %ticket.reference, total = %ticket.total, "booking confirmed");
        Ok(ticket)
    }

    /// Discards the draft and starts a fresh one.
    pub fn reset(&self) {
        self.with_draft_mut(|d| *d = BookingDraft::new());
    }
}

impl Default for BookingStore {
    fn default() -> Self {
        BookingStore::new(GroupPricing::default(), ValidationPolicy::default())
    }
}

// =============================================================================
// Session
// =============================================================================

/// One app session: identity, chosen role, active navigation root, and the
/// per-role stores.
///
/// Created when the app starts, discarded when it exits; nothing here
/// survives a restart.
#[derive(Debug)]
pub struct Session {
    id: Uuid,
    router: RoleRouter,
    role: Mutex<Option<Role>>,
    root: Mutex<NavigationRoot>,
    passport: Mutex<Passport>,

    /// The drink builder's selection.
    pub selection: SelectionStore,

    /// The experience booking draft.
    pub booking: BookingStore,
}

impl Session {
    pub fn new() -> Self {
        Session {
            id: Uuid::new_v4(),
            router: RoleRouter,
            role: Mutex::new(None),
            root: Mutex::new(NavigationRoot::RoleSelect),
            passport: Mutex::new(Passport::new()),
            selection: SelectionStore::new(),
            booking: BookingStore::default(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The currently chosen role, if any.
    pub fn role(&self) -> Option<Role> {
        *self.role.lock().expect("Role mutex poisoned")
    }

    /// The chosen role, for operations that only make sense after entry.
    ///
    /// ## Errors
    /// [`SessionError::RoleNotSelected`] while the role chooser is still up.
    pub fn require_role(&self) -> SessionResult<Role> {
        self.role().ok_or(SessionError::RoleNotSelected)
    }

    /// The active navigation root (role-select until a role is chosen).
    pub fn current_root(&self) -> NavigationRoot {
        *self.root.lock().expect("Root mutex poisoned")
    }

    /// Chooses a role and switches to its navigation root.
    pub fn choose_role(&self, role: Role) -> NavigationRoot {
        let root = RoleRouter::root_for(role);
        *self.role.lock().expect("Role mutex poisoned") = Some(role);
        *self.root.lock().expect("Root mutex poisoned") = root;
        info!(session = %self.id, role = %role, root = root.as_str(), "role selected");
        root
    }

    /// Resolves a raw role identifier and switches to its root.
    ///
    /// ## Errors
    /// [`CoreError::InvalidRole`](bustani_core::CoreError::InvalidRole) on
    /// unknown input; the session is left unchanged.
    pub fn choose_role_str(&self, role: &str) -> SessionResult<NavigationRoot> {
        let parsed: Role = role.parse().map_err(SessionError::Core)?;
        Ok(self.choose_role(parsed))
    }

    /// Whether a screen is reachable under the current root.
    pub fn allows_screen(&self, screen: &str) -> bool {
        self.router.allows(self.current_root(), screen)
    }

    /// Executes a function with read access to the passport.
    pub fn with_passport<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Passport) -> R,
    {
        let passport = self.passport.lock().expect("Passport mutex poisoned");
        f(&passport)
    }

    /// Records a farm visit stamp.
    pub fn collect_stamp(&self, stamp: Stamp) -> SessionResult<bool> {
        let mut passport = self.passport.lock().expect("Passport mutex poisoned");
        Ok(passport.add_stamp(stamp)?)
    }

    /// Resets navigation to the role-selection root and clears per-role
    /// state.
    ///
    /// There is no server session to clear; logout is purely local.
    pub fn logout(&self) -> NavigationRoot {
        *self.role.lock().expect("Role mutex poisoned") = None;
        let root = self.router.logout();
        *self.root.lock().expect("Root mutex poisoned") = root;
        self.selection.clear();
        self.booking.reset();
        info!(session = %self.id, "logged out");
        root
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use bustani_core::catalog::Catalog;
    use chrono::Utc;

    #[test]
    fn test_selection_store_quote() {
        let catalog = Catalog::demo();
        let store = SelectionStore::new();

        store.toggle(catalog.ingredient("orange").unwrap()).unwrap();
        store.toggle(catalog.ingredient("apple").unwrap()).unwrap();

        let q = store.quote(catalog.outlet("2"));
        assert_eq!(q.subtotal.sar(), 7);
        assert_eq!(q.final_price.sar(), 7);

        store.clear();
        assert!(!store.quote(None).is_orderable());
    }

    #[test]
    fn test_booking_store_confirm_is_idempotent() {
        let store = BookingStore::default();
        store.with_draft_mut(|d| d.set_participants(2, 2)).unwrap();

        let first = store.confirm().unwrap();
        let second = store.confirm().unwrap();
        assert_eq!(first, second);
        assert_eq!(first.total.sar(), 128);
    }

    #[test]
    fn test_session_role_flow() {
        let session = Session::new();
        assert_eq!(session.current_root(), NavigationRoot::RoleSelect);
        assert_eq!(session.role(), None);

        let root = session.choose_role_str("farmer").unwrap();
        assert_eq!(root, NavigationRoot::FarmerTabs);
        assert_eq!(session.role(), Some(Role::Farmer));
        assert!(session.allows_screen("disease-scan"));
        assert!(!session.allows_screen("passport"));
    }

    #[test]
    fn test_invalid_role_leaves_session_unchanged() {
        let session = Session::new();
        assert!(session.choose_role_str("admin").is_err());
        assert_eq!(session.role(), None);
        assert_eq!(session.current_root(), NavigationRoot::RoleSelect);
    }

    #[test]
    fn test_require_role_before_and_after_entry() {
        let session = Session::new();
        assert!(matches!(
            session.require_role(),
            Err(SessionError::RoleNotSelected)
        ));

        session.choose_role(Role::Producer);
        assert_eq!(session.require_role().unwrap(), Role::Producer);
    }

    #[test]
    fn test_logout_clears_per_role_state() {
        let catalog = Catalog::demo();
        let session = Session::new();
        session.choose_role(Role::Visitor);

        session
            .selection
            .toggle(catalog.ingredient("mango").unwrap())
            .unwrap();
        session
            .booking
            .with_draft_mut(|d| d.set_participants(3, 1))
            .unwrap();

        let root = session.logout();
        assert_eq!(root, NavigationRoot::RoleSelect);
        assert_eq!(session.role(), None);
        assert!(session.selection.with_selection(|s| s.is_empty()));
        assert_eq!(session.booking.with_draft(|d| d.adults()), 1);
    }

    #[test]
    fn test_passport_through_session() {
        let session = Session::new();
        let stamp = Stamp {
            farm: "Orange Farm".to_string(),
            reference: "QR-OF-2030-01".to_string(),
            collected_at: Utc::now(),
        };

        assert!(session.collect_stamp(stamp.clone()).unwrap());
        assert!(!session.collect_stamp(stamp).unwrap());
        assert_eq!(session.with_passport(|p| p.stamp_count()), 1);
    }
}
