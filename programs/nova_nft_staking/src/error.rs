//! Error types for the Nova NFT Staking program.
//!
//! This module defines all custom error codes that can be returned by the program.
//! Each error has a unique code and descriptive message.
//!
//! ## Error Code Ranges
//! - 6000-6009: Initialization/parameter errors
//! - 6010-6019: Custody/ownership errors
//! - 6020-6029: Capacity/state errors
//! - 6030-6039: Time/freeze errors
//! - 6040-6049: Math errors

use anchor_lang::prelude::*;

/// Custom error codes for the Nova NFT Staking program.
///
/// Error codes start at 6000 (Anchor's custom error offset).
#[error_code]
pub enum StakingError {
    // ========== Initialization/Parameter Errors (6000-6009) ==========

    /// [6000] The config singleton has already been created.
    #[msg("Config has already been initialized")]
    AlreadyInitialized,

    /// [6001] A configuration parameter is out of range.
    #[msg("Invalid parameter: max stake per holder must be greater than zero")]
    InvalidParameter,

    /// [6002] Caller is not authorized for this operation.
    #[msg("Unauthorized: signer does not match the required authority")]
    Unauthorized,

    // ========== Custody/Ownership Errors (6010-6019) ==========

    /// [6010] The depositor does not currently own the NFT.
    #[msg("Asset not owned: depositor's token account does not hold the NFT")]
    AssetNotOwned,

    /// [6011] No custody record exists for this NFT.
    #[msg("Asset is not in vault custody")]
    NotInCustody,

    /// [6012] The NFT's metadata does not carry a verified collection.
    #[msg("NFT does not belong to a verified collection")]
    CollectionNotVerified,

    // ========== Capacity/State Errors (6020-6029) ==========

    /// [6020] Staking this NFT would exceed the holder's capacity cap.
    #[msg("Maximum stake per holder reached")]
    CapacityExceeded,

    /// [6021] A live stake record already exists for this NFT.
    #[msg("Asset is already staked")]
    AlreadyStaked,

    /// [6022] No stake record exists for this NFT.
    #[msg("No stake record found for this asset")]
    NotFound,

    // ========== Time/Freeze Errors (6030-6039) ==========

    /// [6030] The freeze period has not yet elapsed for this stake.
    #[msg("Freeze period still active - cannot unstake yet")]
    FreezePeriodActive,

    // ========== Math Errors (6040-6049) ==========

    /// [6040] Arithmetic overflow occurred during calculation.
    #[msg("Arithmetic overflow occurred during calculation")]
    Overflow,

    /// [6041] Arithmetic underflow occurred during calculation.
    #[msg("Arithmetic underflow occurred during calculation")]
    Underflow,
}
