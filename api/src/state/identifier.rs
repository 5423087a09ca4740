use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use super::impl_account_deserialize;

/// Identifier is the singleton counter that assigns pool indices.
#[derive(Clone, Copy, Debug, PartialEq, BorshDeserialize, BorshSerialize, Deserialize, Serialize)]
pub struct Identifier {
    pub bump: u8,
    pub count: u64,
}

impl_account_deserialize!(Identifier, [204, 189, 217, 160, 27, 67, 108, 181]);
