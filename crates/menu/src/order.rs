//! Append-only customer order.

use common::Money;
use serde::{Deserialize, Serialize};

use crate::item::{MenuItem, Priced};

/// A customer order.
///
/// Holds finalized items in the order they were added. Items are moved in by
/// value and there is no way to reach them mutably afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    items: Vec<MenuItem>,
}

impl Order {
    /// Creates an empty order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a finalized item.
    pub fn add(&mut self, item: impl Into<MenuItem>) {
        let item = item.into();
        tracing::debug!(
            kind = %item.kind(),
            position = self.items.len(),
            "item appended"
        );
        self.items.push(item);
    }

    /// Returns the items in insertion order.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of every item's current price.
    pub fn total(&self) -> Money {
        self.items.iter().map(MenuItem::price).sum()
    }
}
