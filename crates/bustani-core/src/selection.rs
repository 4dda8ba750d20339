//! # Selection Module
//!
//! The visitor's current choice of catalog items, with toggle semantics.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Per item: two states, flipped on every toggle                          │
//! │                                                                         │
//! │               toggle(item)                                              │
//! │   unselected ─────────────► selected                                    │
//! │       ▲                        │                                        │
//! │       └────────────────────────┘                                        │
//! │               toggle(item)                                              │
//! │                                                                         │
//! │  Invariants:                                                            │
//! │  • No duplicate identifiers                                             │
//! │  • Insertion order preserved (chips render in pick order)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A selection is created empty when its screen mounts and discarded on
//! navigation away; there is no persistence.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::Ingredient;
use crate::MAX_SELECTION_ITEMS;

/// An ordered, duplicate-free set of selected catalog ingredients.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionSet {
    items: Vec<Ingredient>,

    /// When the selection was created/last cleared.
    pub created_at: DateTime<Utc>,
}

impl SelectionSet {
    /// Creates a new empty selection.
    pub fn new() -> Self {
        SelectionSet {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Toggles an ingredient: removes it if present, appends it otherwise.
    ///
    /// Toggle is self-inverse: toggling the same item twice restores the
    /// selection it started from.
    ///
    /// ## Returns
    /// `true` if the item is selected after the call, `false` if it was
    /// removed.
    pub fn toggle(&mut self, item: &Ingredient) -> CoreResult<bool> {
        if self.contains(&item.id) {
            self.items.retain(|i| i.id != item.id);
            return Ok(false);
        }

        // Sanity cap only; the catalog is far smaller than this.
        if self.items.len() >= MAX_SELECTION_ITEMS {
            return Err(CoreError::Validation(
                crate::error::ValidationError::OutOfRange {
                    field: "selection items".to_string(),
                    min: 0,
                    max: MAX_SELECTION_ITEMS as i64,
                },
            ));
        }

        self.items.push(item.clone());
        Ok(true)
    }

    /// Checks whether an ingredient id is currently selected.
    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|i| i.id == id)
    }

    /// Empties the selection.
    pub fn clear(&mut self) {
        self.items.clear();
        self.created_at = Utc::now();
    }

    /// The selected items, in insertion order, for rendering.
    pub fn items(&self) -> &[Ingredient] {
        &self.items
    }

    /// Number of selected items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for SelectionSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Nutrition;

    fn orange() -> Ingredient {
        Ingredient::new("orange", "Orange", 4, Nutrition::new(62, 12, 3))
    }

    fn apple() -> Ingredient {
        Ingredient::new("apple", "Apple", 3, Nutrition::new(52, 10, 2))
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut selection = SelectionSet::new();

        assert!(selection.toggle(&orange()).unwrap());
        assert!(selection.contains("orange"));
        assert_eq!(selection.len(), 1);

        assert!(!selection.toggle(&orange()).unwrap());
        assert!(!selection.contains("orange"));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_toggle_is_self_inverse() {
        let mut selection = SelectionSet::new();
        selection.toggle(&orange()).unwrap();

        let before: Vec<String> = selection.items().iter().map(|i| i.id.clone()).collect();
        selection.toggle(&apple()).unwrap();
        selection.toggle(&apple()).unwrap();
        let after: Vec<String> = selection.items().iter().map(|i| i.id.clone()).collect();

        assert_eq!(before, after);
    }

    #[test]
    fn test_no_duplicates() {
        let mut selection = SelectionSet::new();
        selection.toggle(&orange()).unwrap();
        selection.toggle(&apple()).unwrap();
        // Toggling orange again removes it rather than duplicating it.
        selection.toggle(&orange()).unwrap();

        assert_eq!(selection.len(), 1);
        assert!(selection.contains("apple"));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut selection = SelectionSet::new();
        selection.toggle(&apple()).unwrap();
        selection.toggle(&orange()).unwrap();

        let ids: Vec<&str> = selection.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["apple", "orange"]);
    }

    #[test]
    fn test_clear() {
        let mut selection = SelectionSet::new();
        selection.toggle(&orange()).unwrap();
        selection.clear();
        assert!(selection.is_empty());
    }
}
