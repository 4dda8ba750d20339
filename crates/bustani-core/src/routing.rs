//! # Routing Module
//!
//! Maps the chosen role to its navigation root and gates role-specific
//! screens. A pure lookup table: no authentication, no permission store, no
//! persistence of the chosen role beyond the current session.
//!
//! ## Route Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Role      Navigation Root      Screen Set                              │
//! │  ────      ───────────────      ──────────                              │
//! │  Visitor → visitor-tab-root  →  home, map, book, passport, kids,        │
//! │                                 ar-tour, order-drink                    │
//! │  Producer→ producer-tab-root →  home, orders, products, insights,       │
//! │                                 process-juice, process-oil              │
//! │  Farmer  → farmer-tab-root   →  home, store, tree-batches, irrigation,  │
//! │                                 disease-scan, add-farm                  │
//! │                                                                         │
//! │  logout  → role-select-root  (no server session to clear)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::types::Role;

// =============================================================================
// Navigation Root
// =============================================================================

/// The root of a navigation stack, handed to the external navigation host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum NavigationRoot {
    /// The role chooser shown at app entry and after logout.
    RoleSelect,
    VisitorTabs,
    ProducerTabs,
    FarmerTabs,
}

impl NavigationRoot {
    /// Stable identifier understood by the navigation host.
    pub const fn as_str(&self) -> &'static str {
        match self {
            NavigationRoot::RoleSelect => "role-select-root",
            NavigationRoot::VisitorTabs => "visitor-tab-root",
            NavigationRoot::ProducerTabs => "producer-tab-root",
            NavigationRoot::FarmerTabs => "farmer-tab-root",
        }
    }

    /// The screens reachable under this root.
    pub const fn screens(&self) -> &'static [&'static str] {
        match self {
            NavigationRoot::RoleSelect => &["choose-role", "login", "onboarding"],
            NavigationRoot::VisitorTabs => &[
                "home",
                "map",
                "book",
                "passport",
                "kids",
                "ar-tour",
                "order-drink",
            ],
            NavigationRoot::ProducerTabs => &[
                "home",
                "orders",
                "products",
                "insights",
                "process-juice",
                "process-oil",
            ],
            NavigationRoot::FarmerTabs => &[
                "home",
                "store",
                "tree-batches",
                "irrigation",
                "disease-scan",
                "add-farm",
            ],
        }
    }
}

// =============================================================================
// Role Router
// =============================================================================

/// The role → navigation-root lookup.
///
/// Stateless: per-session bookkeeping (which root is active) lives in the
/// session crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoleRouter;

impl RoleRouter {
    /// Maps a role to its navigation root. Total on the three defined roles.
    pub const fn root_for(role: Role) -> NavigationRoot {
        match role {
            Role::Visitor => NavigationRoot::VisitorTabs,
            Role::Producer => NavigationRoot::ProducerTabs,
            Role::Farmer => NavigationRoot::FarmerTabs,
        }
    }

    /// Resolves a raw role identifier to a navigation root.
    ///
    /// ## Errors
    /// [`CoreError::InvalidRole`] on anything outside the three defined
    /// roles. Navigation aborts; nothing defaults.
    pub fn resolve(&self, role: &str) -> CoreResult<NavigationRoot> {
        let role: Role = role.parse()?;
        Ok(Self::root_for(role))
    }

    /// Whether a screen is reachable under a root. Used to gate role-specific
    /// screens against cross-role navigation.
    pub fn allows(&self, root: NavigationRoot, screen: &str) -> bool {
        root.screens().contains(&screen)
    }

    /// The root to reset to on logout.
    ///
    /// Logout only resets navigation; there is no server session to clear.
    pub const fn logout(&self) -> NavigationRoot {
        NavigationRoot::RoleSelect
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_router_is_total_on_defined_roles() {
        let router = RoleRouter;
        assert_eq!(
            router.resolve("visitor").unwrap(),
            NavigationRoot::VisitorTabs
        );
        assert_eq!(
            router.resolve("producer").unwrap(),
            NavigationRoot::ProducerTabs
        );
        assert_eq!(
            router.resolve("farmer").unwrap(),
            NavigationRoot::FarmerTabs
        );
    }

    #[test]
    fn test_unknown_role_aborts_navigation() {
        let router = RoleRouter;
        for bad in ["admin", "", "Visitor", "guest"] {
            assert!(matches!(
                router.resolve(bad),
                Err(CoreError::InvalidRole(_))
            ));
        }
    }

    #[test]
    fn test_root_identifiers() {
        assert_eq!(
            RoleRouter::root_for(Role::Visitor).as_str(),
            "visitor-tab-root"
        );
        assert_eq!(
            RoleRouter::root_for(Role::Producer).as_str(),
            "producer-tab-root"
        );
        assert_eq!(
            RoleRouter::root_for(Role::Farmer).as_str(),
            "farmer-tab-root"
        );
    }

    #[test]
    fn test_screen_gating() {
        let router = RoleRouter;

        assert!(router.allows(NavigationRoot::VisitorTabs, "passport"));
        assert!(router.allows(NavigationRoot::FarmerTabs, "disease-scan"));

        // Cross-role access is denied.
        assert!(!router.allows(NavigationRoot::VisitorTabs, "disease-scan"));
        assert!(!router.allows(NavigationRoot::ProducerTabs, "passport"));
    }

    #[test]
    fn test_logout_resets_to_role_select() {
        assert_eq!(RoleRouter.logout(), NavigationRoot::RoleSelect);
    }
}
