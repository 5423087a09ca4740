use async_trait::async_trait;
use solana_account_decoder::UiAccountEncoding;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_client::rpc_config::{RpcAccountInfoConfig, RpcProgramAccountsConfig};
use solana_client::rpc_filter::{Memcmp, RpcFilterType};
use solana_sdk::account::Account;
use solana_sdk::pubkey::Pubkey;
use stake_pool_api::consts::{POOL_OFFSET, STAKER_OFFSET};
use stake_pool_api::state::{
    identifier_pda, AccountDeserialize, Identifier, StakeAuthorizationRecord, StakeEntry,
    StakePool,
};

use crate::{AccountData, Error, LogScanObserver, ScanObserver};

/// Read operations over the stake pool program's accounts.
///
/// Every method is a single request/decode round trip; retries, timeouts and
/// caching are left to the caller.
#[async_trait]
pub trait StakePoolReader {
    async fn get_stake_pool(&self, stake_pool: &Pubkey) -> Result<AccountData<StakePool>, Error>;

    async fn get_stake_pools(
        &self,
        stake_pools: &[Pubkey],
    ) -> Result<Vec<Option<AccountData<StakePool>>>, Error>;

    async fn get_stake_entry(&self, stake_entry: &Pubkey)
        -> Result<AccountData<StakeEntry>, Error>;

    async fn get_stake_entries(
        &self,
        stake_entries: &[Pubkey],
    ) -> Result<Vec<Option<AccountData<StakeEntry>>>, Error>;

    async fn get_stake_entries_for_pool(
        &self,
        stake_pool: &Pubkey,
    ) -> Result<Vec<AccountData<StakeEntry>>, Error>;

    async fn get_stake_entries_for_pool_and_user(
        &self,
        stake_pool: &Pubkey,
        user: &Pubkey,
    ) -> Result<Vec<AccountData<StakeEntry>>, Error>;

    async fn get_pool_identifier(&self) -> Result<AccountData<Identifier>, Error>;

    async fn get_stake_authorization(
        &self,
        record: &Pubkey,
    ) -> Result<AccountData<StakeAuthorizationRecord>, Error>;
}

#[async_trait]
impl StakePoolReader for RpcClient {
    async fn get_stake_pool(&self, stake_pool: &Pubkey) -> Result<AccountData<StakePool>, Error> {
        fetch_account(self, stake_pool).await
    }

    async fn get_stake_pools(
        &self,
        stake_pools: &[Pubkey],
    ) -> Result<Vec<Option<AccountData<StakePool>>>, Error> {
        fetch_accounts(self, stake_pools).await
    }

    async fn get_stake_entry(
        &self,
        stake_entry: &Pubkey,
    ) -> Result<AccountData<StakeEntry>, Error> {
        fetch_account(self, stake_entry).await
    }

    async fn get_stake_entries(
        &self,
        stake_entries: &[Pubkey],
    ) -> Result<Vec<Option<AccountData<StakeEntry>>>, Error> {
        fetch_accounts(self, stake_entries).await
    }

    async fn get_stake_entries_for_pool(
        &self,
        stake_pool: &Pubkey,
    ) -> Result<Vec<AccountData<StakeEntry>>, Error> {
        scan_stake_entries(self, stake_pool, None, &LogScanObserver).await
    }

    async fn get_stake_entries_for_pool_and_user(
        &self,
        stake_pool: &Pubkey,
        user: &Pubkey,
    ) -> Result<Vec<AccountData<StakeEntry>>, Error> {
        scan_stake_entries(self, stake_pool, Some(user), &LogScanObserver).await
    }

    async fn get_pool_identifier(&self) -> Result<AccountData<Identifier>, Error> {
        let (identifier, _) = identifier_pda();
        fetch_account(self, &identifier).await
    }

    async fn get_stake_authorization(
        &self,
        record: &Pubkey,
    ) -> Result<AccountData<StakeAuthorizationRecord>, Error> {
        fetch_account(self, record).await
    }
}

/// Fetches and decodes a single account. Absence and decode failures are
/// both errors here; the caller asked for this exact record.
pub async fn fetch_account<T: AccountDeserialize>(
    rpc: &RpcClient,
    pubkey: &Pubkey,
) -> Result<AccountData<T>, Error> {
    let account = rpc
        .get_account_with_commitment(pubkey, rpc.commitment())
        .await?
        .value
        .ok_or(Error::AccountNotFound(*pubkey))?;
    let parsed = T::try_from_bytes(&account.data)?;
    Ok(AccountData {
        pubkey: *pubkey,
        parsed,
    })
}

/// Batch analog of `fetch_account`. Slot i corresponds to `pubkeys[i]`;
/// missing accounts yield `None` rather than failing the batch.
pub async fn fetch_accounts<T: AccountDeserialize>(
    rpc: &RpcClient,
    pubkeys: &[Pubkey],
) -> Result<Vec<Option<AccountData<T>>>, Error> {
    let accounts = rpc.get_multiple_accounts(pubkeys).await?;
    collect_accounts(pubkeys, accounts)
}

/// Pairs batch results with the pubkeys they were requested for. A present
/// but undecodable account fails the batch; only absence maps to `None`.
fn collect_accounts<T: AccountDeserialize>(
    pubkeys: &[Pubkey],
    accounts: Vec<Option<Account>>,
) -> Result<Vec<Option<AccountData<T>>>, Error> {
    let mut out = Vec::with_capacity(pubkeys.len());
    for (pubkey, account) in pubkeys.iter().zip(accounts) {
        match account {
            Some(account) => {
                let parsed = T::try_from_bytes(&account.data)?;
                out.push(Some(AccountData {
                    pubkey: *pubkey,
                    parsed,
                }));
            }
            None => out.push(None),
        }
    }
    Ok(out)
}

/// Scans the program for stake entries in `stake_pool`, optionally narrowed
/// to one staker. Accounts that fail to decode are reported to `observer`
/// and skipped; the server-side filters are coarse byte matches that can
/// admit other account types.
pub async fn scan_stake_entries(
    rpc: &RpcClient,
    stake_pool: &Pubkey,
    staker: Option<&Pubkey>,
    observer: &dyn ScanObserver,
) -> Result<Vec<AccountData<StakeEntry>>, Error> {
    let mut filters = vec![RpcFilterType::Memcmp(Memcmp::new_raw_bytes(
        POOL_OFFSET,
        stake_pool.to_bytes().to_vec(),
    ))];
    if let Some(staker) = staker {
        filters.push(RpcFilterType::Memcmp(Memcmp::new_raw_bytes(
            STAKER_OFFSET,
            staker.to_bytes().to_vec(),
        )));
    }
    let accounts = rpc
        .get_program_accounts_with_config(
            &stake_pool_api::id(),
            RpcProgramAccountsConfig {
                filters: Some(filters),
                account_config: RpcAccountInfoConfig {
                    encoding: Some(UiAccountEncoding::Base64),
                    ..Default::default()
                },
                ..Default::default()
            },
        )
        .await?;
    Ok(collect_stake_entries(accounts, observer))
}

/// Decodes, validates and orders raw scan output. Entries whose
/// `last_staker` is the default pubkey are closed or uninitialized slots and
/// are dropped. Output is sorted by base58 pubkey so repeated scans over an
/// unchanged account set return the same sequence regardless of node return
/// order.
fn collect_stake_entries(
    accounts: Vec<(Pubkey, Account)>,
    observer: &dyn ScanObserver,
) -> Vec<AccountData<StakeEntry>> {
    let mut entries: Vec<AccountData<StakeEntry>> = accounts
        .into_iter()
        .filter_map(
            |(pubkey, account)| match StakeEntry::try_from_bytes(&account.data) {
                Ok(parsed) => Some(AccountData { pubkey, parsed }),
                Err(err) => {
                    observer.decode_skipped(&pubkey, &err);
                    None
                }
            },
        )
        .filter(|entry| entry.parsed.is_initialized())
        .collect();
    entries.sort_by_key(|entry| entry.pubkey.to_string());
    entries
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use borsh::BorshSerialize;

    use super::*;

    #[derive(Default)]
    struct RecordingObserver {
        skipped: Mutex<Vec<Pubkey>>,
    }

    impl ScanObserver for RecordingObserver {
        fn decode_skipped(&self, pubkey: &Pubkey, _err: &stake_pool_api::error::DecodeError) {
            self.skipped.lock().unwrap().push(*pubkey);
        }
    }

    fn stake_entry(pool: Pubkey, last_staker: Pubkey) -> StakeEntry {
        StakeEntry {
            bump: 254,
            pool,
            amount: 1,
            original_mint: Pubkey::new_unique(),
            original_mint_claimed: false,
            last_staker,
            last_staked_at: 1_700_000_000,
            total_stake_seconds: 3600,
            stake_mint_claimed: false,
            kind: 0,
            stake_mint: None,
            cooldown_start_seconds: None,
        }
    }

    fn account_for(entry: &StakeEntry) -> Account {
        let mut data = StakeEntry::DISCRIMINATOR.to_vec();
        entry.serialize(&mut data).unwrap();
        Account {
            lamports: 1_000_000,
            data,
            owner: stake_pool_api::id(),
            executable: false,
            rent_epoch: 0,
        }
    }

    #[test]
    fn collect_drops_default_staker_entries() {
        let pool = Pubkey::new_unique();
        let mut accounts = vec![];
        for _ in 0..3 {
            let entry = stake_entry(pool, Pubkey::default());
            accounts.push((Pubkey::new_unique(), account_for(&entry)));
        }
        let mut staked = vec![];
        for _ in 0..2 {
            let entry = stake_entry(pool, Pubkey::new_unique());
            let pubkey = Pubkey::new_unique();
            staked.push(pubkey);
            accounts.push((pubkey, account_for(&entry)));
        }

        let entries = collect_stake_entries(accounts, &RecordingObserver::default());
        assert_eq!(entries.len(), 2);
        for entry in &entries {
            assert!(staked.contains(&entry.pubkey));
            assert!(entry.parsed.is_initialized());
        }
    }

    #[test]
    fn collect_skips_undecodable_accounts() {
        let pool = Pubkey::new_unique();
        let good_pubkey = Pubkey::new_unique();
        let junk_pubkey = Pubkey::new_unique();
        let junk = Account {
            lamports: 1,
            data: vec![0xff; 40],
            owner: stake_pool_api::id(),
            executable: false,
            rent_epoch: 0,
        };
        let accounts = vec![
            (junk_pubkey, junk),
            (
                good_pubkey,
                account_for(&stake_entry(pool, Pubkey::new_unique())),
            ),
        ];

        let observer = RecordingObserver::default();
        let entries = collect_stake_entries(accounts, &observer);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].pubkey, good_pubkey);
        assert_eq!(*observer.skipped.lock().unwrap(), vec![junk_pubkey]);
    }

    #[test]
    fn collect_accounts_preserves_order_and_positions() {
        let pool = Pubkey::new_unique();
        let pubkeys = [
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
        ];
        let first = stake_entry(pool, Pubkey::new_unique());
        let third = stake_entry(pool, Pubkey::new_unique());
        let accounts = vec![Some(account_for(&first)), None, Some(account_for(&third))];

        let out = collect_accounts::<StakeEntry>(&pubkeys, accounts).unwrap();
        assert_eq!(out.len(), 3);
        assert_eq!(
            out[0],
            Some(AccountData {
                pubkey: pubkeys[0],
                parsed: first,
            })
        );
        assert_eq!(out[1], None);
        assert_eq!(
            out[2],
            Some(AccountData {
                pubkey: pubkeys[2],
                parsed: third,
            })
        );
    }

    #[test]
    fn collect_accounts_fails_on_undecodable_slot() {
        let pubkeys = [Pubkey::new_unique()];
        let junk = Account {
            lamports: 1,
            data: vec![0xff; 40],
            owner: stake_pool_api::id(),
            executable: false,
            rent_epoch: 0,
        };
        let err = collect_accounts::<StakeEntry>(&pubkeys, vec![Some(junk)]).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn collect_orders_by_base58_pubkey_regardless_of_input_order() {
        let pool = Pubkey::new_unique();
        let accounts: Vec<(Pubkey, Account)> = (0..5)
            .map(|_| {
                let entry = stake_entry(pool, Pubkey::new_unique());
                (Pubkey::new_unique(), account_for(&entry))
            })
            .collect();
        let mut reversed = accounts.clone();
        reversed.reverse();

        let observer = RecordingObserver::default();
        let first = collect_stake_entries(accounts, &observer);
        let second = collect_stake_entries(reversed, &observer);
        assert_eq!(first, second);

        let keys: Vec<String> = first.iter().map(|e| e.pubkey.to_string()).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }
}
