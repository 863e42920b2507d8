use anchor_lang::prelude::*;

/// Global staking configuration, stored as a singleton PDA.
///
/// Created once by `initialize_config`; parameters are mutable only through
/// the admin-gated `update_config` instruction. The config PDA also acts as
/// the signing authority for every custody vault.
#[account]
pub struct StakeConfig {
    /// The admin authority allowed to update parameters.
    pub admin: Pubkey,

    /// Reward points accrued per elapsed second per staked NFT.
    pub points_per_period: u64,

    /// Maximum number of NFTs a single holder can have staked at once.
    pub max_stake_per_holder: u8,

    /// Minimum time in seconds an NFT must remain staked before unstaking.
    pub freeze_duration: u32,

    pub bump: u8,
}

impl StakeConfig {
    pub const LEN: usize = 8 // discriminator
        + 32 // admin
        + 8  // points_per_period
        + 1  // max_stake_per_holder
        + 4  // freeze_duration
        + 1; // bump
}
