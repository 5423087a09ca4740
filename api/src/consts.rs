/// The seed of the identifier account PDA.
pub const IDENTIFIER: &[u8] = b"identifier";

/// The seed of the stake pool account PDA.
pub const STAKE_POOL: &[u8] = b"stake-pool";

/// The seed of the stake entry account PDA.
pub const STAKE_ENTRY: &[u8] = b"stake-entry";

/// The seed of the stake authorization record PDA.
pub const STAKE_AUTHORIZATION: &[u8] = b"stake-authorization";

/// Byte offset of the `pool` field in a serialized stake entry account
/// (8 discriminator + 1 bump). Valid for the v1 layout only.
pub const POOL_OFFSET: usize = 9;

/// Byte offset of the `last_staker` field in a serialized stake entry account
/// (9 + 32 pool + 8 amount + 32 original_mint + 1 original_mint_claimed).
/// Valid for the v1 layout only.
pub const STAKER_OFFSET: usize = 82;
