use solana_sdk::pubkey::Pubkey;

/// A decoded account paired with the address it was read from.
#[derive(Clone, Debug, PartialEq)]
pub struct AccountData<T> {
    pub pubkey: Pubkey,
    pub parsed: T,
}
