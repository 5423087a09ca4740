use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};
use solana_program::pubkey::Pubkey;

use super::impl_account_deserialize;

/// StakeEntry records one mint's stake position within a pool.
///
/// The byte offsets of `pool` and `last_staker` are relied on by memcmp
/// scans; see `consts::POOL_OFFSET` and `consts::STAKER_OFFSET`.
#[derive(Clone, Debug, PartialEq, BorshDeserialize, BorshSerialize, Deserialize, Serialize)]
pub struct StakeEntry {
    pub bump: u8,

    /// The pool this entry belongs to.
    pub pool: Pubkey,

    /// The amount of the original mint staked.
    pub amount: u64,

    /// The mint staked through this entry.
    pub original_mint: Pubkey,

    pub original_mint_claimed: bool,

    /// The wallet that last staked this entry. The default pubkey means the
    /// entry is uninitialized or closed.
    pub last_staker: Pubkey,

    pub last_staked_at: i64,

    /// Cumulative seconds this entry has been staked.
    pub total_stake_seconds: u128,

    pub stake_mint_claimed: bool,

    /// Whether the stake is locked or escrowed.
    pub kind: u8,

    pub stake_mint: Option<Pubkey>,

    pub cooldown_start_seconds: Option<i64>,
}

impl StakeEntry {
    /// An entry only represents an active stake while `last_staker` is set.
    pub fn is_initialized(&self) -> bool {
        self.last_staker != Pubkey::default()
    }
}

impl_account_deserialize!(StakeEntry, [187, 127, 9, 35, 155, 68, 86, 40]);
