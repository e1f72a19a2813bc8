//! Core components of the `erc-rs` client.
//!
//! - The main [`ErcClient`], its builder and the login/session cache.
//! - The primary [`ErcError`] type.
//! - Authenticated page fetching and Windows-1251 decoding.

/// The main client (`ErcClient`), builder, and transport policy.
pub mod client;
/// The primary error type (`ErcError`) for the crate.
pub mod error;

pub(crate) mod net;

pub use client::{Credentials, ErcClient, ErcClientBuilder};
pub use error::ErcError;
