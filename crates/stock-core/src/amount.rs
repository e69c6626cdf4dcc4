//! Amount editing rules.
//!
//! Amounts move in whole-unit steps. Lowering an amount that is already zero
//! is a no-op; raising has no business cap (it saturates at `u32::MAX`).

/// Raise an amount by one.
#[must_use]
pub const fn increment(amount: u32) -> u32 {
    amount.saturating_add(1)
}

/// Lower an amount by one, floored at zero.
#[must_use]
pub const fn decrement(amount: u32) -> u32 {
    amount.saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decrement_at_zero_is_noop() {
        assert_eq!(decrement(0), 0);
    }

    #[test]
    fn increment_saturates() {
        assert_eq!(increment(u32::MAX), u32::MAX);
    }

    #[test]
    fn steps_are_single_units() {
        assert_eq!(increment(3), 4);
        assert_eq!(decrement(3), 2);
    }
}
