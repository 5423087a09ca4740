use solana_sdk::pubkey::Pubkey;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("solana client")]
    SolanaClient(#[from] solana_client::client_error::ClientError),
    #[error("account not found: {0}")]
    AccountNotFound(Pubkey),
    #[error("account decode")]
    Decode(#[from] stake_pool_api::error::DecodeError),
}
