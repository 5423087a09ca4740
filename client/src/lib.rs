mod account;
mod client;
mod error;
mod observer;

pub use account::*;
pub use client::*;
pub use error::*;
pub use observer::*;
