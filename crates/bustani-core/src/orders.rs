//! # Orders Module
//!
//! The in-memory order board used by the farmer store and producer wholesale
//! screens: a strictly-forward fulfillment pipeline plus tab/search
//! filtering.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │   Pending ──► Processing ──► Ready ──► Delivered (terminal)             │
//! │   "Accept     "Mark          "Complete"                                 │
//! │    Order"      Ready"                                                   │
//! │                                                                         │
//! │   Tabs: All | Pending | Processing | Ready | History(=Delivered)        │
//! │   Search: case-insensitive on order id or customer name                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::OrderStatus;

// =============================================================================
// Status Transitions
// =============================================================================

impl OrderStatus {
    /// The next status in the pipeline, or `None` at the terminal state.
    pub const fn next(&self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::Processing),
            OrderStatus::Processing => Some(OrderStatus::Ready),
            OrderStatus::Ready => Some(OrderStatus::Delivered),
            OrderStatus::Delivered => None,
        }
    }

    /// The action button label for the current status, or `None` when no
    /// action remains.
    pub const fn action_label(&self) -> Option<&'static str> {
        match self {
            OrderStatus::Pending => Some("Accept Order"),
            OrderStatus::Processing => Some("Mark Ready"),
            OrderStatus::Ready => Some("Complete"),
            OrderStatus::Delivered => None,
        }
    }
}

// =============================================================================
// Order
// =============================================================================

/// A marketplace order as shown on the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Business identifier ("ORD-2451", "PO-8821").
    pub id: String,

    /// Customer or client display name.
    pub customer: String,

    /// Line descriptions as shown on the card.
    pub items: Vec<String>,

    pub total: Money,

    pub status: OrderStatus,

    #[ts(as = "String")]
    pub placed_at: DateTime<Utc>,
}

// =============================================================================
// Order Tabs
// =============================================================================

/// The filter tabs above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderTab {
    All,
    Pending,
    Processing,
    Ready,
    /// Shows delivered orders.
    History,
}

impl OrderTab {
    fn matches(&self, status: OrderStatus) -> bool {
        match self {
            OrderTab::All => true,
            OrderTab::Pending => status == OrderStatus::Pending,
            OrderTab::Processing => status == OrderStatus::Processing,
            OrderTab::Ready => status == OrderStatus::Ready,
            OrderTab::History => status == OrderStatus::Delivered,
        }
    }
}

// =============================================================================
// Order Board
// =============================================================================

/// The mutable set of orders behind the store/orders screens.
///
/// Purely in-memory; seeded from the catalog's mock orders and discarded
/// with the session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderBoard {
    orders: Vec<Order>,
}

impl OrderBoard {
    pub fn new(orders: Vec<Order>) -> Self {
        OrderBoard { orders }
    }

    /// All orders, unfiltered, in placement order.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Looks up an order by id.
    pub fn get(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    /// Advances an order one step along the pipeline.
    ///
    /// ## Errors
    /// - [`CoreError::UnknownOrder`] if the id is not on the board
    /// - [`CoreError::InvalidStatusTransition`] if the order is already
    ///   delivered
    pub fn advance(&mut self, id: &str) -> CoreResult<OrderStatus> {
        let order = self
            .orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| CoreError::UnknownOrder(id.to_string()))?;

        match order.status.next() {
            Some(next) => {
                order.status = next;
                Ok(next)
            }
            None => Err(CoreError::InvalidStatusTransition {
                order_id: order.id.clone(),
                status: order.status.to_string(),
            }),
        }
    }

    /// Orders matching a tab and an optional search query.
    ///
    /// The query matches case-insensitively against the order id or the
    /// customer name; an empty query matches everything.
    pub fn filter(&self, tab: OrderTab, query: &str) -> Vec<&Order> {
        let query = query.trim().to_lowercase();
        self.orders
            .iter()
            .filter(|o| tab.matches(o.status))
            .filter(|o| {
                query.is_empty()
                    || o.id.to_lowercase().contains(&query)
                    || o.customer.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Count of orders under a tab (for tab badges).
    pub fn count(&self, tab: OrderTab) -> usize {
        self.orders.iter().filter(|o| tab.matches(o.status)).count()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: &str, customer: &str, status: OrderStatus) -> Order {
        Order {
            id: id.to_string(),
            customer: customer.to_string(),
            items: vec!["2x Fresh Orange Juice (1L)".to_string()],
            total: Money::from_sar(55),
            status,
            placed_at: Utc::now(),
        }
    }

    fn board() -> OrderBoard {
        OrderBoard::new(vec![
            order("ORD-2451", "Sarah M.", OrderStatus::Pending),
            order("ORD-2450", "Hotel Grand Estate", OrderStatus::Pending),
            order("ORD-2449", "Ahmed K.", OrderStatus::Processing),
            order("ORD-2445", "Organic Cafe", OrderStatus::Delivered),
        ])
    }

    #[test]
    fn test_pipeline_is_strictly_forward() {
        assert_eq!(OrderStatus::Pending.next(), Some(OrderStatus::Processing));
        assert_eq!(OrderStatus::Processing.next(), Some(OrderStatus::Ready));
        assert_eq!(OrderStatus::Ready.next(), Some(OrderStatus::Delivered));
        assert_eq!(OrderStatus::Delivered.next(), None);
    }

    #[test]
    fn test_action_labels() {
        assert_eq!(OrderStatus::Pending.action_label(), Some("Accept Order"));
        assert_eq!(OrderStatus::Processing.action_label(), Some("Mark Ready"));
        assert_eq!(OrderStatus::Ready.action_label(), Some("Complete"));
        assert_eq!(OrderStatus::Delivered.action_label(), None);
    }

    #[test]
    fn test_advance_moves_one_step() {
        let mut board = board();
        assert_eq!(board.advance("ORD-2451").unwrap(), OrderStatus::Processing);
        assert_eq!(board.get("ORD-2451").unwrap().status, OrderStatus::Processing);
    }

    #[test]
    fn test_advance_on_terminal_status_fails() {
        let mut board = board();
        assert!(matches!(
            board.advance("ORD-2445"),
            Err(CoreError::InvalidStatusTransition { .. })
        ));
    }

    #[test]
    fn test_advance_unknown_order_fails() {
        let mut board = board();
        assert!(matches!(
            board.advance("ORD-9999"),
            Err(CoreError::UnknownOrder(_))
        ));
    }

    #[test]
    fn test_tab_filtering() {
        let board = board();
        assert_eq!(board.filter(OrderTab::All, "").len(), 4);
        assert_eq!(board.filter(OrderTab::Pending, "").len(), 2);
        assert_eq!(board.filter(OrderTab::Processing, "").len(), 1);
        // History shows delivered orders only.
        let history = board.filter(OrderTab::History, "");
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].id, "ORD-2445");
    }

    #[test]
    fn test_search_matches_id_or_customer() {
        let board = board();
        assert_eq!(board.filter(OrderTab::All, "sarah").len(), 1);
        assert_eq!(board.filter(OrderTab::All, "ord-245").len(), 4);
        assert_eq!(board.filter(OrderTab::Pending, "hotel").len(), 1);
        assert!(board.filter(OrderTab::All, "no such").is_empty());
    }

    #[test]
    fn test_tab_counts() {
        let board = board();
        assert_eq!(board.count(OrderTab::Pending), 2);
        assert_eq!(board.count(OrderTab::History), 1);
    }
}
