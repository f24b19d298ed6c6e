//! Category resolution: item name → update behavior.

use serde::{Deserialize, Serialize};

/// Exact name of the legendary item.
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";

/// Exact name of the item that improves with age.
pub const AGED_BRIE: &str = "Aged Brie";

/// Exact name of the backstage pass.
pub const BACKSTAGE_PASS: &str = "Backstage passes to a TAFKAL80ETC concert";

/// Substring marking conjured items.
pub const CONJURED_MARKER: &str = "Conjured";

/// Behavioral category of a stock item.
///
/// The set is closed: the nightly update dispatches on it with an exhaustive
/// match, so adding a category is a compile-time-checked change rather than
/// another branch buried in a name-matching chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Never ages, never changes quality ("Sulfuras, Hand of Ragnaros").
    Legendary,
    /// Improves with age ("Aged Brie").
    Aged,
    /// Appreciates toward the concert, worthless after it.
    Backstage,
    /// Degrades twice as fast as normal stock.
    Conjured,
    /// Default behavior for everything else.
    Normal,
}

impl Category {
    /// Resolve the category for an item name.
    ///
    /// Pure and total: any name resolves to exactly one category, falling
    /// back to [`Category::Normal`]. Exact (case-sensitive) matches are
    /// checked before the "Conjured" substring, so the three named specials
    /// always win if a name were ever to satisfy both.
    pub fn of(name: &str) -> Self {
        match name {
            SULFURAS => Category::Legendary,
            AGED_BRIE => Category::Aged,
            BACKSTAGE_PASS => Category::Backstage,
            _ if name.contains(CONJURED_MARKER) => Category::Conjured,
            _ => Category::Normal,
        }
    }
}
