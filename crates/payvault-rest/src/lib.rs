//! Payvault REST API client.
//!
//! This crate provides a typed client for the Payvault payment service:
//!
//! - **Addresses**: create, list, label, balance-check, archive
//! - **Transactions**: send, sweep, prime UTXOs, fee estimates
//! - **Multisig**: shared addresses and co-signer signatures
//! - **Accounts**: grouping and aggregate balances
//! - **Error handling**: typed errors carrying the HTTP status and the
//!   service's machine-readable error names
//!
//! Every call passes through the same pipeline: build the request, sign it
//! with HMAC-SHA256, dispatch it once, and classify the response.
//!
//! # Example
//!
//! ```rust,ignore
//! use auth::ApiCredentials;
//! use payvault_rest::PayvaultClient;
//! use rust_decimal_macros::dec;
//!
//! // Load credentials from environment
//! let client = PayvaultClient::from_env()?;
//!
//! // Create an address and send to it
//! let address = client.create_address("hot wallet", None).await?;
//! let sent = client
//!     .transfer_funds(&address.address, "BTC", dec!(0.25), None)
//!     .await?;
//!
//! if !sent {
//!     println!("insufficient funds");
//! }
//! ```

mod client;
mod error;
mod responses;

pub use client::PayvaultClient;
pub use error::{
    PayvaultError, ERR_ACCOUNT_NOT_FOUND, ERR_ADDRESS_NOT_FOUND, ERR_INSUFFICIENT_FUNDS,
    ERR_INVALID_ASSET, ERR_INVALID_SIGNATURE,
};
pub use responses::{
    AccountListResponse, AccountResponse, AddressListResponse, AddressResponse, AssetBalance,
    BalanceResponse, FeeEstimateResponse, MultisigAddressResponse, PrimedUtxoResponse,
    TransactionListResponse, TransactionResponse,
};
