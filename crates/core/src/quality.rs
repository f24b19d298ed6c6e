//! Quality bounds and saturating arithmetic.
//!
//! Every category except legendary keeps quality inside `[MIN, MAX]`. The
//! helpers here clamp instead of erroring so the update rules stay total.

/// Lower bound for quality (all non-legendary categories).
pub const MIN: i32 = 0;

/// Upper bound for quality (all non-legendary categories).
pub const MAX: i32 = 50;

/// Conventional quality of legendary items. Not enforced anywhere: legendary
/// items are exempt from the bounds and the engine never rewrites their
/// quality, whatever the caller constructed.
pub const LEGENDARY: i32 = 80;

/// Increase `quality` by `amount`, saturating at [`MAX`].
pub fn raise(quality: i32, amount: i32) -> i32 {
    (quality + amount).min(MAX)
}

/// Decrease `quality` by `amount`, saturating at [`MIN`].
pub fn lower(quality: i32, amount: i32) -> i32 {
    (quality - amount).max(MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raise_clamps_at_ceiling() {
        assert_eq!(raise(49, 3), 50);
        assert_eq!(raise(50, 1), 50);
        assert_eq!(raise(0, 1), 1);
    }

    #[test]
    fn lower_clamps_at_floor() {
        assert_eq!(lower(1, 4), 0);
        assert_eq!(lower(0, 2), 0);
        assert_eq!(lower(20, 1), 19);
    }
}
