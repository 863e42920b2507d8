//! Program constants for the Nova NFT Staking program.
//!
//! Defines the PDA seeds used to derive every protocol account, plus the
//! time constants used by freeze-period math.

use anchor_lang::prelude::*;

/// Seed for deriving the singleton stake config PDA
pub const CONFIG_SEED: &[u8] = b"config";

/// Seed for deriving per-holder account PDAs
pub const HOLDER_SEED: &[u8] = b"holder";

/// Seed for deriving per-NFT stake record PDAs
pub const STAKE_RECORD_SEED: &[u8] = b"stake";

/// Seed for deriving per-NFT custody vault PDAs
pub const VAULT_SEED: &[u8] = b"vault";

/// Number of seconds in a day
pub const SECONDS_PER_DAY: i64 = 86_400;
