use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};
use solana_program::pubkey::Pubkey;

use super::impl_account_deserialize;

/// StakePool holds the configuration of one staking pool.
#[derive(Clone, Debug, PartialEq, BorshDeserialize, BorshSerialize, Deserialize, Serialize)]
pub struct StakePool {
    pub bump: u8,

    /// The pool's index, assigned from the identifier counter at creation.
    pub identifier: u64,

    /// The authority allowed to update this pool.
    pub authority: Pubkey,

    /// Creators whose mints are allowed to stake in this pool.
    pub requires_creators: Vec<Pubkey>,

    /// Collections whose mints are allowed to stake in this pool.
    pub requires_collections: Vec<Pubkey>,

    /// Whether staking requires a stake authorization record.
    pub requires_authorization: bool,

    pub overlay_text: String,

    pub image_uri: String,

    /// Whether total stake seconds reset when restaking.
    pub reset_on_stake: bool,

    /// The number of entries currently staked in this pool.
    pub total_staked: u32,

    pub cooldown_seconds: Option<u32>,

    pub min_stake_seconds: Option<u32>,

    pub end_date: Option<i64>,
}

impl_account_deserialize!(StakePool, [121, 34, 206, 21, 79, 127, 255, 28]);
