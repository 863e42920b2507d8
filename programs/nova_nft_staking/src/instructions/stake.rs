//! Stake instruction handler.
//!
//! Moves an NFT into program custody and opens its stake record.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    metadata::{Metadata, MetadataAccount},
    token::{self, Mint, Token, TokenAccount, Transfer},
};

use crate::constants::*;
use crate::error::StakingError;
use crate::state::{HolderAccount, StakeConfig, StakeRecord};

/// Accounts required for staking an NFT.
///
/// ## Security Notes
/// - The stake record PDA is keyed by the mint alone, so a second stake of
///   the same NFT fails at account creation regardless of who attempts it.
/// - The vault is a token account PDA with the config as authority; only the
///   program can release it.
/// - Metadata constraints require a verified collection membership.
#[derive(Accounts)]
pub struct Stake<'info> {
    /// The holder staking the NFT.
    #[account(mut)]
    pub holder: Signer<'info>,

    /// Global staking config.
    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, StakeConfig>,

    /// Holder's aggregate account (created on first stake).
    #[account(
        init_if_needed,
        payer = holder,
        space = HolderAccount::LEN,
        seeds = [HOLDER_SEED, holder.key().as_ref()],
        bump
    )]
    pub holder_account: Account<'info, HolderAccount>,

    /// The mint of the NFT being staked.
    pub asset_mint: Account<'info, Mint>,

    /// The collection mint the NFT must belong to.
    pub collection_mint: Account<'info, Mint>,

    /// NFT metadata; must carry a verified membership of `collection_mint`.
    #[account(
        seeds = [
            b"metadata",
            metadata_program.key().as_ref(),
            asset_mint.key().as_ref()
        ],
        seeds::program = metadata_program.key(),
        bump,
        constraint = metadata
            .collection
            .as_ref()
            .map_or(false, |c| c.verified && c.key == collection_mint.key())
            @ StakingError::CollectionNotVerified
    )]
    pub metadata: Account<'info, MetadataAccount>,

    /// Holder's token account for the NFT.
    #[account(
        mut,
        associated_token::mint = asset_mint,
        associated_token::authority = holder,
        constraint = holder_asset_ata.amount == 1 @ StakingError::AssetNotOwned
    )]
    pub holder_asset_ata: Account<'info, TokenAccount>,

    /// Stake record for this NFT.
    /// Creation fails if a live record already exists (asset already staked).
    #[account(
        init,
        payer = holder,
        space = StakeRecord::LEN,
        seeds = [STAKE_RECORD_SEED, asset_mint.key().as_ref()],
        bump
    )]
    pub stake_record: Account<'info, StakeRecord>,

    /// Custody vault for this NFT, owned by the config PDA.
    #[account(
        init,
        payer = holder,
        seeds = [VAULT_SEED, asset_mint.key().as_ref()],
        bump,
        token::mint = asset_mint,
        token::authority = config
    )]
    pub vault: Account<'info, TokenAccount>,

    /// System program.
    pub system_program: Program<'info, System>,

    /// Token program.
    pub token_program: Program<'info, Token>,

    /// Associated token program.
    pub associated_token_program: Program<'info, AssociatedToken>,

    /// Token metadata program.
    pub metadata_program: Program<'info, Metadata>,

    /// Rent sysvar.
    pub rent: Sysvar<'info, Rent>,
}

/// Stake an NFT into program custody.
///
/// # Arguments
/// * `ctx` - Stake accounts context
///
/// # Errors
/// Returns an error if:
/// - The holder is at the capacity cap
/// - The holder does not own the NFT
/// - The NFT is not part of a verified collection
/// - The NFT is already staked
pub fn handler(ctx: Context<Stake>) -> Result<()> {
    let config = &ctx.accounts.config;
    let holder_account = &ctx.accounts.holder_account;

    // Validate capacity before any mutation
    require!(
        holder_account.active_stakes < config.max_stake_per_holder,
        StakingError::CapacityExceeded
    );

    let clock = Clock::get()?;

    // Transfer the NFT from the holder into the custody vault
    let cpi_accounts = Transfer {
        from: ctx.accounts.holder_asset_ata.to_account_info(),
        to: ctx.accounts.vault.to_account_info(),
        authority: ctx.accounts.holder.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);
    token::transfer(cpi_ctx, 1)?;

    // Open the stake record
    let stake_record = &mut ctx.accounts.stake_record;
    stake_record.owner = ctx.accounts.holder.key();
    stake_record.asset_mint = ctx.accounts.asset_mint.key();
    stake_record.staked_at = clock.unix_timestamp;
    stake_record.last_claimed_at = clock.unix_timestamp;
    stake_record.bump = ctx.bumps.stake_record;

    // Set up the holder account on first stake
    let holder_account = &mut ctx.accounts.holder_account;
    if holder_account.owner == Pubkey::default() {
        holder_account.owner = ctx.accounts.holder.key();
        holder_account.points_balance = 0;
        holder_account.active_stakes = 0;
        holder_account.bump = ctx.bumps.holder_account;
    }

    holder_account.register_stake(config.max_stake_per_holder)?;

    msg!("Staked NFT {}", ctx.accounts.asset_mint.key());
    msg!("Active stakes for holder: {}", holder_account.active_stakes);

    Ok(())
}
