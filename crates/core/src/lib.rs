//! `gildedrose-core` — inventory domain building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the [`Item`] stock record, the [`Category`] resolver that maps item names to
//! update behavior, and the quality bounds shared by the update rules.

pub mod category;
pub mod error;
pub mod item;
pub mod quality;

pub use category::Category;
pub use error::{DomainError, DomainResult};
pub use item::Item;
