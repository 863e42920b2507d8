//! Instruction handlers for the Nova NFT Staking program.
//!
//! This module contains all instruction implementations.

pub mod claim;
pub mod initialize_config;
pub mod stake;
pub mod unstake;
pub mod update_config;

pub use claim::*;
pub use initialize_config::*;
pub use stake::*;
pub use unstake::*;
pub use update_config::*;
