use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::error::{DomainError, DomainResult};

/// A single stock item.
///
/// The name is the item's identity and is only ever read to resolve its
/// [`Category`]; the engine mutates `sell_in` and `quality` in place, once
/// per tick, and never creates or removes items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Identity, used only for classification. Never mutated by the engine.
    pub name: String,
    /// Days remaining before the listed expiry; goes negative once past it.
    /// Frozen for legendary items.
    pub sell_in: i32,
    /// Desirability score, kept in [0, 50] by every rule except legendary.
    pub quality: i32,
}

impl Item {
    /// Create an item with the given starting values.
    ///
    /// No validation: callers own the initial values, and a legendary item
    /// constructed with any quality (conventionally 80) must survive every
    /// tick untouched.
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }

    /// Checked constructor: rejects a blank name.
    pub fn try_new(name: impl Into<String>, sell_in: i32, quality: i32) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        Ok(Self {
            name,
            sell_in,
            quality,
        })
    }

    /// Resolve this item's behavioral category from its name.
    pub fn category(&self) -> Category {
        Category::of(&self.name)
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_new_rejects_blank_name() {
        let err = Item::try_new("   ", 10, 20).unwrap_err();
        match err {
            DomainError::Validation(_) => {}
        }
    }

    #[test]
    fn try_new_accepts_any_numeric_values() {
        let item = Item::try_new("Sulfuras, Hand of Ragnaros", -5, 999).unwrap();
        assert_eq!(item.sell_in, -5);
        assert_eq!(item.quality, 999);
    }

    #[test]
    fn category_resolves_from_name() {
        assert_eq!(Item::new("Aged Brie", 2, 0).category(), Category::Aged);
        assert_eq!(Item::new("Elixir of the Mongoose", 5, 7).category(), Category::Normal);
    }

    #[test]
    fn display_matches_name_sellin_quality() {
        let item = Item::new("Normal Item", 10, 20);
        assert_eq!(item.to_string(), "Normal Item, 10, 20");
    }

    #[test]
    fn serializes_as_flat_record() {
        let item = Item::new("Aged Brie", 2, 0);
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"name":"Aged Brie","sell_in":2,"quality":0}"#);
    }
}
