mod error;

use std::str::FromStr;

use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;
use stake_pool_client::StakePoolReader;

use crate::error::Error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    let rpc_client = rpc_client()?;
    let args: Vec<String> = std::env::args().collect();
    match args.get(1).map(String::as_str) {
        Some("pool") => {
            let pool = rpc_client.get_stake_pool(&pubkey_arg(&args, 2)?).await?;
            print_json(&pool.parsed)?;
        }
        Some("entry") => {
            let entry = rpc_client.get_stake_entry(&pubkey_arg(&args, 2)?).await?;
            print_json(&entry.parsed)?;
        }
        Some("entries") => {
            let pool = pubkey_arg(&args, 2)?;
            let entries = match args.get(3) {
                Some(user) => {
                    let user = Pubkey::from_str(user)?;
                    rpc_client
                        .get_stake_entries_for_pool_and_user(&pool, &user)
                        .await?
                }
                None => rpc_client.get_stake_entries_for_pool(&pool).await?,
            };
            for entry in entries {
                println!("{}", entry.pubkey);
                print_json(&entry.parsed)?;
            }
        }
        Some("identifier") => {
            let identifier = rpc_client.get_pool_identifier().await?;
            println!("{}", identifier.pubkey);
            print_json(&identifier.parsed)?;
        }
        Some("authorization") => {
            let record = rpc_client
                .get_stake_authorization(&pubkey_arg(&args, 2)?)
                .await?;
            print_json(&record.parsed)?;
        }
        _ => return Err(Error::Usage),
    }
    Ok(())
}

fn pubkey_arg(args: &[String], index: usize) -> Result<Pubkey, Error> {
    let arg = args.get(index).ok_or(Error::Usage)?;
    Ok(Pubkey::from_str(arg)?)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn rpc_url() -> Result<String, Error> {
    std::env::var("RPC_URL").map_err(From::from)
}

fn rpc_client() -> Result<RpcClient, Error> {
    let rpc_url = rpc_url()?;
    Ok(RpcClient::new_with_commitment(
        rpc_url,
        CommitmentConfig::confirmed(),
    ))
}
