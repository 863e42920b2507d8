//! Reward accounting engine.
//!
//! Pure, stateless arithmetic consulted by the stake/claim/unstake handlers.
//! Accrual is computed lazily at settlement time (claim or unstake) rather
//! than by any background process: points = elapsed seconds * rate, floor
//! integer arithmetic, with overflow rejected rather than wrapped.

use anchor_lang::prelude::*;

use crate::error::StakingError;

/// Points accrued since the last settlement.
///
/// The clock source is trusted to be monotonically non-decreasing; negative
/// elapsed time is saturated to zero so a skewed timestamp can never mint or
/// burn points.
///
/// # Arguments
/// * `points_per_period` - Reward rate in points per second per staked NFT
/// * `last_claimed_at` - Unix timestamp of the previous settlement
/// * `now` - Current Unix timestamp
///
/// # Errors
/// Returns `Overflow` if the product exceeds `u64::MAX`.
pub fn accrued_points(points_per_period: u64, last_claimed_at: i64, now: i64) -> Result<u64> {
    let elapsed = now.saturating_sub(last_claimed_at).max(0) as u64;

    elapsed
        .checked_mul(points_per_period)
        .ok_or_else(|| error!(StakingError::Overflow))
}

/// Seconds remaining before the freeze period allows an unstake.
///
/// Returns `0` once `freeze_duration` has fully elapsed since `staked_at`;
/// an unstake exactly at the boundary is permitted.
pub fn freeze_remaining(staked_at: i64, freeze_duration: u32, now: i64) -> u32 {
    let elapsed = now.saturating_sub(staked_at).max(0);

    if elapsed >= i64::from(freeze_duration) {
        0
    } else {
        // elapsed < freeze_duration <= u32::MAX, so the cast is lossless
        (i64::from(freeze_duration) - elapsed) as u32
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::state::HolderAccount;

    #[test]
    fn zero_elapsed_accrues_zero() {
        assert_eq!(accrued_points(10, 43_200, 43_200).unwrap(), 0);
    }

    #[test]
    fn accrual_is_rate_times_elapsed_seconds() {
        // Half a day at 10 points/sec
        assert_eq!(accrued_points(10, 0, 43_200).unwrap(), 432_000);
        // Second settlement window of the same length accrues the same amount
        assert_eq!(accrued_points(10, 43_200, 86_400).unwrap(), 432_000);
    }

    #[test]
    fn zero_rate_accrues_nothing() {
        assert_eq!(accrued_points(0, 0, 1_000_000).unwrap(), 0);
    }

    #[test]
    fn negative_elapsed_saturates_to_zero() {
        assert_eq!(accrued_points(10, 100, 50).unwrap(), 0);
    }

    #[test]
    fn accrual_overflow_is_rejected() {
        assert!(accrued_points(u64::MAX, 0, 2).is_err());
    }

    #[test]
    fn freeze_remaining_counts_down_to_boundary() {
        assert_eq!(freeze_remaining(0, 86_400, 0), 86_400);
        assert_eq!(freeze_remaining(0, 86_400, 43_200), 43_200);
        assert_eq!(freeze_remaining(0, 86_400, 86_399), 1);
        // Exactly at the boundary the unstake is permitted
        assert_eq!(freeze_remaining(0, 86_400, 86_400), 0);
        assert_eq!(freeze_remaining(0, 86_400, 200_000), 0);
    }

    #[test]
    fn zero_freeze_duration_never_blocks() {
        assert_eq!(freeze_remaining(500, 0, 500), 0);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        /// Accrual over a split window equals accrual over the whole window,
        /// so claiming early never changes the total settled.
        #[test]
        fn split_settlement_preserves_total(
            rate in 0..=1_000_000u64,
            start in 0..=1_000_000_000i64,
            mid_offset in 0..=1_000_000i64,
            end_offset in 0..=1_000_000i64,
        ) {
            let mid = start + mid_offset;
            let end = mid + end_offset;

            let split = accrued_points(rate, start, mid).unwrap()
                + accrued_points(rate, mid, end).unwrap();
            let whole = accrued_points(rate, start, end).unwrap();

            prop_assert_eq!(split, whole);
        }

        /// Unstake is permitted exactly when the freeze window has elapsed.
        #[test]
        fn freeze_gate_matches_elapsed_time(
            staked_at in 0..=1_000_000_000i64,
            freeze in 0..=31_536_000u32,
            elapsed in 0..=63_072_000i64,
        ) {
            let now = staked_at + elapsed;
            let remaining = freeze_remaining(staked_at, freeze, now);

            if elapsed >= i64::from(freeze) {
                prop_assert_eq!(remaining, 0);
            } else {
                prop_assert_eq!(i64::from(remaining), i64::from(freeze) - elapsed);
            }
        }

        /// Random interleavings of stake/unstake never push a holder past the
        /// capacity cap, and never drive the active count negative.
        #[test]
        fn capacity_cap_holds_under_interleaving(
            max_stake in 1..=20u8,
            ops in prop::collection::vec(prop::bool::ANY, 0..200),
        ) {
            let mut holder = HolderAccount {
                owner: Pubkey::new_unique(),
                points_balance: 0,
                active_stakes: 0,
                bump: 255,
            };

            for stake_op in ops {
                if stake_op {
                    let before = holder.active_stakes;
                    let res = holder.register_stake(max_stake);
                    if before == max_stake {
                        prop_assert!(res.is_err());
                    } else {
                        prop_assert!(res.is_ok());
                    }
                } else if holder.active_stakes > 0 {
                    holder.release_stake().unwrap();
                }

                prop_assert!(holder.active_stakes <= max_stake);
            }
        }
    }
}
