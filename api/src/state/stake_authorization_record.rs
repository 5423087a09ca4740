use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};
use solana_program::pubkey::Pubkey;

use super::impl_account_deserialize;

/// StakeAuthorizationRecord grants one mint permission to stake in a pool
/// that requires authorization.
#[derive(Clone, Copy, Debug, PartialEq, BorshDeserialize, BorshSerialize, Deserialize, Serialize)]
pub struct StakeAuthorizationRecord {
    pub bump: u8,
    pub pool: Pubkey,
    pub mint: Pubkey,
}

impl_account_deserialize!(
    StakeAuthorizationRecord,
    [36, 54, 48, 7, 224, 193, 207, 76]
);
