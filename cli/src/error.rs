#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("std env")]
    StdEnv(#[from] std::env::VarError),
    #[error("solana pubkey")]
    SolanaPubkey(#[from] solana_sdk::pubkey::ParsePubkeyError),
    #[error("serde json")]
    SerdeJson(#[from] serde_json::Error),
    #[error("client")]
    Client(#[from] stake_pool_client::Error),
    #[error("usage: stake-pool-cli <pool|entry|entries|identifier|authorization> [args]")]
    Usage,
}
