//! erc-rs: client for the ERC billing portal private office.
//!
//! The portal has no API. [`ErcClient`] logs in through the HTML form once,
//! keeps the session cookie, and scrapes balance and account data out of the
//! Windows-1251 pages it serves.

pub mod accounts;
pub mod balance;
pub mod core;
pub mod receipt;
pub mod settings;

pub use crate::accounts::Account;
pub use crate::balance::{BalanceInfo, Details};
pub use crate::core::{Credentials, ErcClient, ErcClientBuilder, ErcError};
pub use crate::settings::Settings;
