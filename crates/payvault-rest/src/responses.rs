//! Payvault API response types.
//!
//! Quantities arrive as decimal strings on the wire and parse into
//! `Decimal`; the service never sends floating-point amounts.

use rust_decimal::Decimal;
use serde::Deserialize;

/// An address under management.
#[derive(Debug, Clone, Deserialize)]
pub struct AddressResponse {
    #[serde(rename = "addressId")]
    pub address_id: String,
    /// The on-chain address string.
    pub address: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(rename = "accountId", default)]
    pub account_id: Option<String>,
    pub network: String,
    #[serde(rename = "createdAt")]
    pub created_at: i64,
}

/// Response from GET /addresses.
#[derive(Debug, Clone, Deserialize)]
pub struct AddressListResponse {
    pub addresses: Vec<AddressResponse>,
}

/// Balance of one asset on an address or account.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetBalance {
    pub asset: String,
    #[serde(deserialize_with = "deserialize_decimal_from_str")]
    pub available: Decimal,
    #[serde(deserialize_with = "deserialize_decimal_from_str")]
    pub pending: Decimal,
}

impl AssetBalance {
    /// Available balance in integer base units for an asset with the
    /// given number of decimal places.
    pub fn available_base_units(&self, decimals: u32) -> Option<i64> {
        common::units::to_base_units(self.available, decimals)
    }
}

/// Response from the balance endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct BalanceResponse {
    pub balances: Vec<AssetBalance>,
}

/// A transaction created or queried through the service.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionResponse {
    #[serde(rename = "transactionId")]
    pub transaction_id: String,
    /// On-chain transaction id, once broadcast.
    #[serde(default)]
    pub txid: Option<String>,
    pub status: String,
    pub asset: String,
    #[serde(deserialize_with = "deserialize_decimal_from_str")]
    pub quantity: Decimal,
    #[serde(
        rename = "networkFee",
        deserialize_with = "deserialize_decimal_from_str"
    )]
    pub network_fee: Decimal,
    #[serde(rename = "toAddress", default)]
    pub to_address: Option<String>,
    #[serde(rename = "fromAddressId", default)]
    pub from_address_id: Option<String>,
    #[serde(default)]
    pub confirmations: u32,
}

/// Response from GET /transactions.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionListResponse {
    pub transactions: Vec<TransactionResponse>,
}

/// A multisig address and its signing policy.
#[derive(Debug, Clone, Deserialize)]
pub struct MultisigAddressResponse {
    #[serde(rename = "addressId")]
    pub address_id: String,
    pub address: String,
    #[serde(rename = "requiredSignatures")]
    pub required_signatures: u32,
    #[serde(rename = "publicKeys")]
    pub public_keys: Vec<String>,
    #[serde(default)]
    pub label: Option<String>,
}

/// An account grouping addresses.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountResponse {
    #[serde(rename = "accountId")]
    pub account_id: String,
    pub name: String,
    #[serde(rename = "createdAt")]
    pub created_at: i64,
}

/// Response from GET /accounts.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountListResponse {
    pub accounts: Vec<AccountResponse>,
}

/// Response from priming an address with pre-split UTXOs.
#[derive(Debug, Clone, Deserialize)]
pub struct PrimedUtxoResponse {
    #[serde(rename = "addressId")]
    pub address_id: String,
    pub asset: String,
    #[serde(
        rename = "outputQuantity",
        deserialize_with = "deserialize_decimal_from_str"
    )]
    pub output_quantity: Decimal,
    #[serde(rename = "outputsCreated")]
    pub outputs_created: u32,
    #[serde(rename = "transactionId")]
    pub transaction_id: String,
}

/// Response from GET /fees.
#[derive(Debug, Clone, Deserialize)]
pub struct FeeEstimateResponse {
    pub asset: String,
    pub priority: String,
    #[serde(
        rename = "estimatedFee",
        deserialize_with = "deserialize_decimal_from_str"
    )]
    pub estimated_fee: Decimal,
}

/// Deserialize a Decimal from a string.
///
/// Deserializes through an owned `String` so it works both from raw JSON
/// text and from an already-parsed `serde_json::Value`.
fn deserialize_decimal_from_str<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    s.parse::<Decimal>().map_err(serde::de::Error::custom)
}
