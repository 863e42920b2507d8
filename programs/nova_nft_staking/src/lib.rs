//! # Nova NFT Staking Program
//!
//! An NFT custody staking program: holders lock NFTs from a verified
//! collection into program-controlled vaults and accrue reward points over
//! time, subject to a per-holder capacity cap and a mandatory freeze period
//! before withdrawal.
//!
//! ## Features
//! - Lazy point accrual computed at claim/unstake time (no background timer)
//! - Claim points without unstaking
//! - Per-holder capacity cap on simultaneous stakes
//! - Freeze period gating withdrawals, with remaining time reported
//! - Admin-updatable parameters
//! - Safe math with overflow protection
//!
//! ## Devnet Only
//! This program is configured for Solana devnet deployment only.

#![allow(unexpected_cfgs)]
#![allow(deprecated)]

use anchor_lang::prelude::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

pub mod constants;
pub mod error;
pub mod instructions;
pub mod rewards;
pub mod state;

use instructions::*;

#[program]
pub mod nova_nft_staking {
    use super::*;

    /// Initializes the singleton staking configuration.
    ///
    /// # Arguments
    /// * `ctx` - The context containing all accounts needed for initialization
    /// * `points_per_period` - Reward points accrued per second per staked NFT
    /// * `max_stake_per_holder` - Maximum NFTs a holder can stake at once
    /// * `freeze_duration` - Minimum staking time in seconds before unstake
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config already exists
    /// - `max_stake_per_holder` is zero
    pub fn initialize_config(
        ctx: Context<InitializeConfig>,
        points_per_period: u64,
        max_stake_per_holder: u8,
        freeze_duration: u32,
    ) -> Result<()> {
        instructions::initialize_config::handler(
            ctx,
            points_per_period,
            max_stake_per_holder,
            freeze_duration,
        )
    }

    /// Admin function to update the staking parameters.
    ///
    /// # Arguments
    /// * `ctx` - The context containing admin accounts
    /// * `points_per_period` - New reward rate
    /// * `max_stake_per_holder` - New capacity cap
    /// * `freeze_duration` - New freeze period in seconds
    ///
    /// # Errors
    /// Returns an error if:
    /// - Caller is not the admin
    /// - `max_stake_per_holder` is zero
    pub fn update_config(
        ctx: Context<UpdateConfig>,
        points_per_period: u64,
        max_stake_per_holder: u8,
        freeze_duration: u32,
    ) -> Result<()> {
        instructions::update_config::handler(
            ctx,
            points_per_period,
            max_stake_per_holder,
            freeze_duration,
        )
    }

    /// Stakes an NFT into program custody.
    ///
    /// # Arguments
    /// * `ctx` - The context containing all accounts needed for staking
    ///
    /// # Errors
    /// Returns an error if:
    /// - The holder is at the capacity cap
    /// - The holder does not own the NFT
    /// - The NFT is not part of a verified collection
    /// - The NFT is already staked
    pub fn stake(ctx: Context<Stake>) -> Result<()> {
        instructions::stake::handler(ctx)
    }

    /// Settles accrued points for one staked NFT without unstaking.
    ///
    /// # Arguments
    /// * `ctx` - The context containing all accounts needed for claiming
    ///
    /// # Errors
    /// Returns an error if:
    /// - No stake record exists for the NFT
    /// - The caller is not the staker
    /// - The points balance would overflow
    pub fn claim(ctx: Context<Claim>) -> Result<()> {
        instructions::claim::handler(ctx)
    }

    /// Unstakes an NFT after the freeze period, settling outstanding points.
    ///
    /// # Arguments
    /// * `ctx` - The context containing all accounts needed for unstaking
    ///
    /// # Errors
    /// Returns an error if:
    /// - No stake record exists for the NFT
    /// - The caller is not the staker
    /// - The freeze period has not elapsed
    pub fn unstake(ctx: Context<Unstake>) -> Result<()> {
        instructions::unstake::handler(ctx)
    }
}
