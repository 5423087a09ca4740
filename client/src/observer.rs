use solana_sdk::pubkey::Pubkey;
use stake_pool_api::error::DecodeError;

/// Receives the accounts a scan skips because they failed to decode.
pub trait ScanObserver: Send + Sync {
    fn decode_skipped(&self, pubkey: &Pubkey, err: &DecodeError);
}

/// Reports skipped accounts at debug level.
pub struct LogScanObserver;

impl ScanObserver for LogScanObserver {
    fn decode_skipped(&self, pubkey: &Pubkey, err: &DecodeError) {
        log::debug!("failed to decode stake entry {}: {}", pubkey, err);
    }
}
