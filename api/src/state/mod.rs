mod identifier;
mod stake_authorization_record;
mod stake_entry;
mod stake_pool;

pub use identifier::*;
pub use stake_authorization_record::*;
pub use stake_entry::*;
pub use stake_pool::*;

use solana_program::pubkey::Pubkey;

use crate::consts::*;
use crate::error::DecodeError;

/// Decodes an account of a known schema from raw account data.
pub trait AccountDeserialize: Sized {
    /// Anchor account discriminator, `sha256("account:<Name>")[..8]`.
    const DISCRIMINATOR: [u8; 8];

    fn try_from_bytes(data: &[u8]) -> Result<Self, DecodeError>;
}

macro_rules! impl_account_deserialize {
    ($ty:ty, $disc:expr) => {
        impl $crate::state::AccountDeserialize for $ty {
            const DISCRIMINATOR: [u8; 8] = $disc;

            fn try_from_bytes(data: &[u8]) -> Result<Self, $crate::error::DecodeError> {
                if data.len() < 8 {
                    return Err($crate::error::DecodeError::DataTooShort(data.len()));
                }
                if data[..8] != Self::DISCRIMINATOR {
                    return Err($crate::error::DecodeError::DiscriminatorMismatch);
                }
                // Accounts are allocated at a fixed size; trailing padding
                // after the borsh payload is ignored.
                let parsed = <$ty as borsh::BorshDeserialize>::deserialize(&mut &data[8..])?;
                Ok(parsed)
            }
        }
    };
}
pub(crate) use impl_account_deserialize;

pub fn identifier_pda() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[IDENTIFIER], &crate::id())
}

pub fn stake_pool_pda(identifier: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[STAKE_POOL, &identifier.to_le_bytes()], &crate::id())
}

pub fn stake_entry_pda(pool: Pubkey, original_mint: Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[STAKE_ENTRY, pool.as_ref(), original_mint.as_ref()],
        &crate::id(),
    )
}

pub fn stake_authorization_pda(pool: Pubkey, mint: Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[STAKE_AUTHORIZATION, pool.as_ref(), mint.as_ref()],
        &crate::id(),
    )
}
