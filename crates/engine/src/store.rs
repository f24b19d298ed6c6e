//! The store: an ordered collection of items advanced one day at a time.

use gildedrose_core::Item;

use crate::rules;

/// Holds the shop's stock and applies the nightly update.
///
/// The store exclusively owns its items; a [`Store::tick`] classifies and
/// updates every item in place, in the order the caller supplied them.
/// Calling `tick` repeatedly simulates successive days — there is no batch
/// scheduler here, callers loop as many days as they need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Store {
    items: Vec<Item>,
    day: u64,
}

impl Store {
    /// Create a store over an existing stock, in caller order.
    pub fn new(items: Vec<Item>) -> Self {
        Self { items, day: 0 }
    }

    /// Advance every item by one day.
    ///
    /// Each item is classified by name and updated by its category's rule,
    /// exactly once. Cannot fail: unrecognized names fall back to normal
    /// behavior and all quality arithmetic saturates.
    pub fn tick(&mut self) {
        self.day += 1;
        for item in &mut self.items {
            rules::advance(item.category(), item);
        }
        tracing::debug!(day = self.day, items = self.items.len(), "stock updated");
    }

    /// Number of ticks applied so far.
    pub fn day(&self) -> u64 {
        self.day
    }

    /// Current stock, in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Mutable access to the stock (the engine itself never adds or removes
    /// items; that is the caller's business).
    pub fn items_mut(&mut self) -> &mut [Item] {
        &mut self.items
    }

    /// Consume the store and take the stock back.
    pub fn into_items(self) -> Vec<Item> {
        self.items
    }
}
