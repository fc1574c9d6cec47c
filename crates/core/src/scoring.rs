//! Scoring module - row multiplier chain and gravity speed-up
//!
//! Each row collapsed from one placement is worth the current multiplier,
//! which then climbs 40 → 60 → 200 → 900 and stays at 900. Promoting the next
//! piece puts it back to 40. Gravity gets two ticks faster per cleared row,
//! down to one tick.

use crate::types::{BASE_STEP_TICKS, MIN_STEP_TICKS, MULTIPLIER_CHAIN, STEP_TICKS_PER_ROW};

/// Multiplier at the start of every placement.
pub const BASE_MULTIPLIER: u32 = MULTIPLIER_CHAIN[0];

/// The multiplier that follows `current` in the chain.
///
/// Values not in the chain are treated as saturated.
pub fn next_multiplier(current: u32) -> u32 {
    let last = MULTIPLIER_CHAIN[MULTIPLIER_CHAIN.len() - 1];
    MULTIPLIER_CHAIN
        .iter()
        .position(|&m| m == current)
        .and_then(|i| MULTIPLIER_CHAIN.get(i + 1).copied())
        .unwrap_or(last)
}

/// Ticks between gravity steps once `rows_cleared` rows are gone.
pub fn step_interval(rows_cleared: u32) -> u32 {
    BASE_STEP_TICKS
        .saturating_sub(rows_cleared.saturating_mul(STEP_TICKS_PER_ROW))
        .max(MIN_STEP_TICKS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiplier_chain() {
        let mut m = BASE_MULTIPLIER;
        let mut awarded = Vec::new();
        for _ in 0..6 {
            awarded.push(m);
            m = next_multiplier(m);
        }
        assert_eq!(awarded, [40, 60, 200, 900, 900, 900]);
    }

    #[test]
    fn test_step_interval_speeds_up() {
        assert_eq!(step_interval(0), 60);
        assert_eq!(step_interval(1), 58);
        assert_eq!(step_interval(10), 40);
        assert_eq!(step_interval(29), 2);
    }

    #[test]
    fn test_step_interval_floor() {
        assert_eq!(step_interval(30), 1);
        assert_eq!(step_interval(31), 1);
        assert_eq!(step_interval(u32::MAX), 1);
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn step_interval_is_monotone(rows in any::<u32>()) {
                let now = step_interval(rows);
                prop_assert!(now >= MIN_STEP_TICKS);
                prop_assert!(step_interval(rows.saturating_add(1)) <= now);
            }

            #[test]
            fn multiplier_never_leaves_chain(start in any::<u32>(), hops in 0usize..10) {
                let m = (0..hops).fold(next_multiplier(start), |m, _| next_multiplier(m));
                prop_assert!(MULTIPLIER_CHAIN.contains(&m));
            }
        }
    }
}
