use anchor_lang::prelude::*;

use crate::error::StakingError;

/// Per-holder staking aggregate.
///
/// Created lazily on the holder's first stake and kept alive after the last
/// unstake so the residual points balance survives.
#[account]
pub struct HolderAccount {
    /// The holder identity.
    pub owner: Pubkey,

    /// Accumulated, settled reward points.
    pub points_balance: u64,

    /// Number of live stake records owned by this holder.
    /// Invariant: never exceeds `StakeConfig::max_stake_per_holder`.
    pub active_stakes: u8,

    pub bump: u8,
}

impl HolderAccount {
    pub const LEN: usize = 8 + 32 + 8 + 1 + 1;

    /// Credit settled points, rejecting overflow.
    pub fn credit_points(&mut self, delta: u64) -> Result<()> {
        self.points_balance = self
            .points_balance
            .checked_add(delta)
            .ok_or(StakingError::Overflow)?;
        Ok(())
    }

    /// Register a new stake against the capacity cap.
    pub fn register_stake(&mut self, max_stake_per_holder: u8) -> Result<()> {
        require!(
            self.active_stakes < max_stake_per_holder,
            StakingError::CapacityExceeded
        );
        self.active_stakes = self
            .active_stakes
            .checked_add(1)
            .ok_or(StakingError::Overflow)?;
        Ok(())
    }

    /// Release a stake, rejecting impossible states.
    pub fn release_stake(&mut self) -> Result<()> {
        self.active_stakes = self
            .active_stakes
            .checked_sub(1)
            .ok_or(StakingError::Underflow)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holder() -> HolderAccount {
        HolderAccount {
            owner: Pubkey::new_unique(),
            points_balance: 0,
            active_stakes: 0,
            bump: 255,
        }
    }

    #[test]
    fn register_stake_respects_capacity_cap() {
        let mut h = holder();
        for _ in 0..5 {
            h.register_stake(5).unwrap();
        }
        assert_eq!(h.active_stakes, 5);
        assert!(h.register_stake(5).is_err());
        assert_eq!(h.active_stakes, 5);
    }

    #[test]
    fn release_then_register_frees_a_slot() {
        let mut h = holder();
        for _ in 0..5 {
            h.register_stake(5).unwrap();
        }
        h.release_stake().unwrap();
        assert_eq!(h.active_stakes, 4);
        h.register_stake(5).unwrap();
        assert_eq!(h.active_stakes, 5);
    }

    #[test]
    fn release_on_empty_holder_fails() {
        let mut h = holder();
        assert!(h.release_stake().is_err());
    }

    #[test]
    fn credit_points_rejects_overflow() {
        let mut h = holder();
        h.credit_points(u64::MAX - 1).unwrap();
        assert!(h.credit_points(2).is_err());
        // Balance untouched on rejection
        assert_eq!(h.points_balance, u64::MAX - 1);
    }
}
