//! State structures for the Nova NFT Staking program.
//!
//! This module defines all account structures used to store program state.

pub mod holder_account;
pub mod stake_config;
pub mod stake_record;

pub use holder_account::*;
pub use stake_config::*;
pub use stake_record::*;
