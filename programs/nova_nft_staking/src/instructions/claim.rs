//! Claim instruction handler.
//!
//! Settles accrued points without releasing custody.

use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

use crate::constants::*;
use crate::error::StakingError;
use crate::rewards::accrued_points;
use crate::state::{HolderAccount, StakeConfig, StakeRecord};

/// Accounts required for claiming points.
#[derive(Accounts)]
pub struct Claim<'info> {
    /// The holder claiming points.
    #[account(mut)]
    pub holder: Signer<'info>,

    /// Global staking config.
    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, StakeConfig>,

    /// Holder's aggregate account receiving the points.
    #[account(
        mut,
        seeds = [HOLDER_SEED, holder.key().as_ref()],
        bump = holder_account.bump,
        constraint = holder_account.owner == holder.key() @ StakingError::Unauthorized
    )]
    pub holder_account: Account<'info, HolderAccount>,

    /// The mint of the staked NFT.
    pub asset_mint: Account<'info, Mint>,

    /// Stake record being settled.
    #[account(
        mut,
        seeds = [STAKE_RECORD_SEED, asset_mint.key().as_ref()],
        bump = stake_record.bump,
        has_one = asset_mint @ StakingError::NotFound,
        constraint = stake_record.owner == holder.key() @ StakingError::Unauthorized
    )]
    pub stake_record: Account<'info, StakeRecord>,
}

/// Settle accrued points for one staked NFT.
///
/// Accrual is floor integer arithmetic over elapsed seconds: claiming twice
/// with no elapsed time credits nothing the second time. The stake itself
/// stays in place.
///
/// # Arguments
/// * `ctx` - Claim accounts context
///
/// # Errors
/// Returns an error if:
/// - The record does not exist or belongs to another holder
/// - The points balance would overflow
pub fn handler(ctx: Context<Claim>) -> Result<()> {
    let config = &ctx.accounts.config;
    let stake_record = &mut ctx.accounts.stake_record;
    let holder_account = &mut ctx.accounts.holder_account;
    let clock = Clock::get()?;

    let delta = accrued_points(
        config.points_per_period,
        stake_record.last_claimed_at,
        clock.unix_timestamp,
    )?;

    holder_account.credit_points(delta)?;
    stake_record.last_claimed_at = clock.unix_timestamp;

    msg!("Claimed {} points for NFT {}", delta, stake_record.asset_mint);
    msg!("Points balance: {}", holder_account.points_balance);

    Ok(())
}
