/// Update config instruction handler.
///
/// Admin-only mutation of the staking parameters.
///
/// ## Security Guarantees
/// - Signer must match the admin stored at initialization (has_one).
/// - Same parameter bounds as initialization.
/// - Changes affect only accrual settled after the update; already-settled
///   points are untouched.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::StakingError;
use crate::state::StakeConfig;

/// Accounts required for config updates.
#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    /// The admin authority.
    #[account(
        constraint = admin.key() == config.admin @ StakingError::Unauthorized
    )]
    pub admin: Signer<'info>,

    /// The config to modify.
    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump,
        has_one = admin @ StakingError::Unauthorized
    )]
    pub config: Account<'info, StakeConfig>,
}

/// Update the staking parameters.
///
/// # Arguments
/// * `ctx` - UpdateConfig accounts context
/// * `points_per_period` - New reward rate (points per second per NFT)
/// * `max_stake_per_holder` - New capacity cap
/// * `freeze_duration` - New freeze period in seconds
///
/// # Errors
/// Returns an error if:
/// - Caller is not the admin
/// - `max_stake_per_holder` is zero
pub fn handler(
    ctx: Context<UpdateConfig>,
    points_per_period: u64,
    max_stake_per_holder: u8,
    freeze_duration: u32,
) -> Result<()> {
    require!(max_stake_per_holder > 0, StakingError::InvalidParameter);

    let config = &mut ctx.accounts.config;

    msg!(
        "Updating config - old rate: {}, cap: {}, freeze: {}s",
        config.points_per_period,
        config.max_stake_per_holder,
        config.freeze_duration
    );

    config.points_per_period = points_per_period;
    config.max_stake_per_holder = max_stake_per_holder;
    config.freeze_duration = freeze_duration;

    msg!(
        "New rate: {} points/sec, cap: {} NFTs/holder, freeze: {}s",
        points_per_period,
        max_stake_per_holder,
        freeze_duration
    );
    msg!("Admin: {}", ctx.accounts.admin.key());

    Ok(())
}
