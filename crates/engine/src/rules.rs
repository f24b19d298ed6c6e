//! Per-category daily update rules.
//!
//! Every rule follows the same ordering contract: decrement `sell_in` first
//! (legendary excepted), then compute the quality delta from the **new**
//! `sell_in`. Expiry acceleration — doubled degradation/improvement, or a
//! backstage pass collapsing to zero — keys off whether the item is already
//! expired after today's decrement, not before it.

use gildedrose_core::{Category, Item, quality};

/// Advance one item by one day according to its category.
///
/// Mutates `sell_in` and `quality` in place; total over all integer values,
/// never fails. Arithmetic saturates into `[0, 50]` for every category
/// except legendary, which is left entirely untouched.
pub fn advance(category: Category, item: &mut Item) {
    match category {
        Category::Legendary => {}
        Category::Aged => advance_aged(item),
        Category::Backstage => advance_backstage(item),
        Category::Conjured => advance_conjured(item),
        Category::Normal => advance_normal(item),
    }
}

fn advance_normal(item: &mut Item) {
    item.sell_in -= 1;
    let degradation = if item.sell_in < 0 { 2 } else { 1 };
    item.quality = quality::lower(item.quality, degradation);
}

fn advance_aged(item: &mut Item) {
    item.sell_in -= 1;
    let improvement = if item.sell_in < 0 { 2 } else { 1 };
    item.quality = quality::raise(item.quality, improvement);
}

fn advance_backstage(item: &mut Item) {
    item.sell_in -= 1;
    item.quality = if item.sell_in < 0 {
        // Concert is over; the pass is worthless.
        0
    } else if item.sell_in < 5 {
        quality::raise(item.quality, 3)
    } else if item.sell_in < 10 {
        quality::raise(item.quality, 2)
    } else {
        quality::raise(item.quality, 1)
    };
}

fn advance_conjured(item: &mut Item) {
    item.sell_in -= 1;
    let degradation = if item.sell_in < 0 { 4 } else { 2 };
    item.quality = quality::lower(item.quality, degradation);
}
