use anchor_lang::prelude::*;

/// Per-NFT stake record.
///
/// Keyed by the NFT mint alone, so at most one live record can exist for a
/// given asset across all holders. Created on stake, mutated on claim, and
/// closed (rent returned to the holder) on unstake. A record never exists
/// without the NFT sitting in its custody vault.
#[account]
pub struct StakeRecord {
    /// Holder who staked the NFT.
    pub owner: Pubkey,

    /// Mint of the staked NFT.
    pub asset_mint: Pubkey,

    /// Unix timestamp when the NFT was staked.
    pub staked_at: i64,

    /// Unix timestamp of the last point settlement.
    /// Initialized to `staked_at`.
    pub last_claimed_at: i64,

    pub bump: u8,
}

impl StakeRecord {
    pub const LEN: usize = 8 + 32 + 32 + 8 + 8 + 1;
}
