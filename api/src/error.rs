use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("account data too short: {0} bytes")]
    DataTooShort(usize),
    #[error("account discriminator mismatch")]
    DiscriminatorMismatch,
    #[error("borsh")]
    Borsh(#[from] borsh::io::Error),
}
