//! Unstake instruction handler.
//!
//! Settles outstanding points, releases the NFT from custody, and closes the
//! stake record and vault.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{self, CloseAccount, Mint, Token, TokenAccount, Transfer},
};

use crate::constants::*;
use crate::error::StakingError;
use crate::rewards::{accrued_points, freeze_remaining};
use crate::state::{HolderAccount, StakeConfig, StakeRecord};

/// Accounts required for unstaking an NFT.
#[derive(Accounts)]
pub struct Unstake<'info> {
    /// The holder unstaking the NFT; receives the NFT and the rent of the
    /// closed record and vault.
    #[account(mut)]
    pub holder: Signer<'info>,

    /// Global staking config; signs the vault release as authority.
    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, StakeConfig>,

    /// Holder's aggregate account.
    #[account(
        mut,
        seeds = [HOLDER_SEED, holder.key().as_ref()],
        bump = holder_account.bump,
        constraint = holder_account.owner == holder.key() @ StakingError::Unauthorized
    )]
    pub holder_account: Account<'info, HolderAccount>,

    /// The mint of the staked NFT.
    pub asset_mint: Account<'info, Mint>,

    /// Stake record for this NFT, closed after unstaking.
    #[account(
        mut,
        seeds = [STAKE_RECORD_SEED, asset_mint.key().as_ref()],
        bump = stake_record.bump,
        has_one = asset_mint @ StakingError::NotFound,
        constraint = stake_record.owner == holder.key() @ StakingError::Unauthorized,
        close = holder
    )]
    pub stake_record: Account<'info, StakeRecord>,

    /// Custody vault holding the staked NFT.
    #[account(
        mut,
        seeds = [VAULT_SEED, asset_mint.key().as_ref()],
        bump,
        constraint = vault.amount == 1 @ StakingError::NotInCustody
    )]
    pub vault: Account<'info, TokenAccount>,

    /// Holder's token account receiving the NFT back.
    #[account(
        init_if_needed,
        payer = holder,
        associated_token::mint = asset_mint,
        associated_token::authority = holder
    )]
    pub holder_asset_ata: Account<'info, TokenAccount>,

    /// System program.
    pub system_program: Program<'info, System>,

    /// Token program.
    pub token_program: Program<'info, Token>,

    /// Associated token program.
    pub associated_token_program: Program<'info, AssociatedToken>,
}

/// Unstake an NFT after the freeze period.
///
/// Outstanding points are settled exactly as in `claim` before custody is
/// released, so accrual is never lost on exit.
///
/// # Arguments
/// * `ctx` - Unstake accounts context
///
/// # Errors
/// Returns an error if:
/// - The record does not exist or belongs to another holder
/// - The freeze period has not elapsed (remaining seconds are logged)
/// - The points balance would overflow
pub fn handler(ctx: Context<Unstake>) -> Result<()> {
    let config = &ctx.accounts.config;
    let stake_record = &ctx.accounts.stake_record;
    let clock = Clock::get()?;

    // Freeze gate: unstake is permitted exactly at the boundary
    let remaining = freeze_remaining(
        stake_record.staked_at,
        config.freeze_duration,
        clock.unix_timestamp,
    );
    if remaining > 0 {
        msg!("Freeze period active: {}s remaining", remaining);
        return err!(StakingError::FreezePeriodActive);
    }

    // Settle outstanding points before releasing custody
    let delta = accrued_points(
        config.points_per_period,
        stake_record.last_claimed_at,
        clock.unix_timestamp,
    )?;
    ctx.accounts.holder_account.credit_points(delta)?;

    // Release the NFT from the vault with the config PDA as signer
    let seeds = &[CONFIG_SEED, &[config.bump]];
    let signer_seeds = &[&seeds[..]];

    let cpi_accounts = Transfer {
        from: ctx.accounts.vault.to_account_info(),
        to: ctx.accounts.holder_asset_ata.to_account_info(),
        authority: ctx.accounts.config.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);
    token::transfer(cpi_ctx, 1)?;

    // Close the emptied vault, returning rent to the holder
    let cpi_accounts = CloseAccount {
        account: ctx.accounts.vault.to_account_info(),
        destination: ctx.accounts.holder.to_account_info(),
        authority: ctx.accounts.config.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);
    token::close_account(cpi_ctx)?;

    let holder_account = &mut ctx.accounts.holder_account;
    holder_account.release_stake()?;

    msg!("Unstaked NFT {}", ctx.accounts.asset_mint.key());
    msg!("Settled {} points on exit", delta);
    msg!("Active stakes for holder: {}", holder_account.active_stakes);
    msg!("Points balance: {}", holder_account.points_balance);

    Ok(())
}
