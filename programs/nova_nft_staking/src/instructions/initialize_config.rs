/// Initialize config instruction handler.
///
/// Creates the singleton staking configuration.
///
/// ## Security Guarantees
/// - Config PDA seed makes the config unique per deployment; a second
///   initialization fails at account creation.
/// - The signing authority becomes the permanent admin stored in config state.
/// - Parameters validated before storage.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::StakingError;
use crate::state::StakeConfig;

/// Accounts required for config initialization.
#[derive(Accounts)]
pub struct InitializeConfig<'info> {
    /// The authority creating the config; becomes the stored admin.
    #[account(mut)]
    pub admin: Signer<'info>,

    /// The singleton config account to be created.
    /// A repeat call fails here: the PDA already exists.
    #[account(
        init,
        payer = admin,
        space = StakeConfig::LEN,
        seeds = [CONFIG_SEED],
        bump
    )]
    pub config: Account<'info, StakeConfig>,

    /// System program for account creation.
    pub system_program: Program<'info, System>,
}

/// Initialize the staking configuration.
///
/// # Arguments
/// * `ctx` - InitializeConfig accounts context
/// * `points_per_period` - Points accrued per second per staked NFT
/// * `max_stake_per_holder` - Capacity cap on simultaneous stakes per holder
/// * `freeze_duration` - Minimum staking time in seconds before unstake
///
/// # Errors
/// Returns `InvalidParameter` if `max_stake_per_holder` is zero.
pub fn handler(
    ctx: Context<InitializeConfig>,
    points_per_period: u64,
    max_stake_per_holder: u8,
    freeze_duration: u32,
) -> Result<()> {
    require!(max_stake_per_holder > 0, StakingError::InvalidParameter);

    let config = &mut ctx.accounts.config;

    config.admin = ctx.accounts.admin.key();
    config.points_per_period = points_per_period;
    config.max_stake_per_holder = max_stake_per_holder;
    config.freeze_duration = freeze_duration;
    config.bump = ctx.bumps.config;

    msg!("Staking config initialized");
    msg!("Admin: {}", config.admin);
    msg!(
        "Rate: {} points/sec, cap: {} NFTs/holder, freeze: {}s",
        points_per_period,
        max_stake_per_holder,
        freeze_duration
    );

    Ok(())
}
