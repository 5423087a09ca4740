pub mod consts;
pub mod error;
pub mod state;

use solana_program::declare_id;

declare_id!("stkBL96RZkjY5ine4TvPihGqW8UHJfch2cokjAPzV8i");
