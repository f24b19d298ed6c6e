//! Nightly inventory update engine.
//!
//! This crate contains the per-category update rules and the [`Store`] that
//! applies them, implemented purely as deterministic domain logic (no IO, no
//! HTTP, no storage). One [`Store::tick`] call advances every held item by
//! one simulated day.

pub mod rules;
pub mod store;

pub use rules::advance;
pub use store::Store;
