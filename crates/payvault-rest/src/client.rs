//! Payvault REST API client.

use crate::error::PayvaultError;
use crate::responses::{
    AccountListResponse, AccountResponse, AddressListResponse, AddressResponse, BalanceResponse,
    FeeEstimateResponse, MultisigAddressResponse, PrimedUtxoResponse, TransactionListResponse,
    TransactionResponse,
};
use auth::{ApiCredentials, RequestSigner};
use common::ServiceEnvironment;
use reqwest::Method;
use rest_client::{build_request, interpret, ApiOutcome, RequestData, RestClient};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::time::Duration;

/// Request timeout for Payvault API calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Payvault REST API client with request signing.
///
/// Stateless across calls: every call builds, signs, dispatches, and
/// interprets its own request, so independent tasks can share one client
/// without coordination.
pub struct PayvaultClient {
    rest: RestClient,
    credentials: ApiCredentials,
}

impl PayvaultClient {
    /// Create a new client for the production environment.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(credentials: ApiCredentials) -> Result<Self, PayvaultError> {
        Self::with_environment(credentials, ServiceEnvironment::Production)
    }

    /// Create a new client for a specific environment.
    pub fn with_environment(
        credentials: ApiCredentials,
        environment: ServiceEnvironment,
    ) -> Result<Self, PayvaultError> {
        Self::with_base_url(credentials, environment.rest_base_url())
    }

    /// Create a new client against an explicit base URL.
    ///
    /// Useful for proxies and local test servers.
    pub fn with_base_url(
        credentials: ApiCredentials,
        base_url: &str,
    ) -> Result<Self, PayvaultError> {
        let rest = RestClient::new(base_url, REQUEST_TIMEOUT).map_err(PayvaultError::Api)?;

        Ok(Self { rest, credentials })
    }

    /// Create a client from `PAYVAULT_*` environment variables.
    ///
    /// Reads credentials from `PAYVAULT_API_TOKEN` / `PAYVAULT_SECRET_KEY`
    /// and the environment from `PAYVAULT_ENVIRONMENT`.
    pub fn from_env() -> Result<Self, PayvaultError> {
        let credentials = ApiCredentials::from_env()?;
        Self::with_environment(credentials, ServiceEnvironment::from_env())
    }

    /// Get the base URL this client targets.
    pub fn base_url(&self) -> &str {
        self.rest.base_url()
    }

    /// Get the API token (for logging/debugging).
    pub fn api_token(&self) -> &str {
        self.credentials.api_token()
    }

    // ========================================================================
    // Pipeline
    // ========================================================================

    /// Execute one call through the request pipeline.
    ///
    /// Builds the request, signs it (signing is the last step before
    /// dispatch), sends it once, and classifies the response.
    async fn call(&self, method: Method, path: &str, data: &RequestData) -> ApiOutcome {
        let mut request = build_request(self.rest.base_url(), method, path, data);

        let signer = RequestSigner::new(&self.credentials);
        let timestamp = current_timestamp_ms();
        let signature_headers = signer.signature_headers(
            request.method.as_str(),
            &request.url,
            request.body.as_deref().unwrap_or_default(),
            timestamp,
        );
        request
            .headers
            .extend(signature_headers.into_iter().map(|(key, value)| (key.to_string(), value)));

        interpret(self.rest.dispatch(request).await)
    }

    /// Call an endpoint that returns a JSON body.
    async fn call_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        data: &RequestData,
    ) -> Result<T, PayvaultError> {
        match self.call(method, path, data).await.into_result()? {
            Some(value) => {
                serde_json::from_value(value).map_err(|e| PayvaultError::Decode(e.to_string()))
            }
            None => Err(PayvaultError::Decode(
                "expected a JSON body, got an empty response".to_string(),
            )),
        }
    }

    /// Call an endpoint whose success carries no payload of interest.
    async fn call_empty(
        &self,
        method: Method,
        path: &str,
        data: &RequestData,
    ) -> Result<(), PayvaultError> {
        self.call(method, path, data).await.into_result()?;
        Ok(())
    }

    // ========================================================================
    // Addresses
    // ========================================================================

    /// Create a new receive address.
    ///
    /// POST /addresses
    pub async fn create_address(
        &self,
        label: &str,
        account_id: Option<&str>,
    ) -> Result<AddressResponse, PayvaultError> {
        let mut data = data([("label", json!(label))]);
        if let Some(account_id) = account_id {
            data.insert("accountId".to_string(), json!(account_id));
        }

        tracing::info!(label = %label, "Creating address");

        let response: AddressResponse = self.call_json(Method::POST, "/addresses", &data).await?;

        tracing::info!(address_id = %response.address_id, "Address created");

        Ok(response)
    }

    /// Fetch a single address.
    ///
    /// GET /addresses/{id}
    pub async fn get_address(&self, address_id: &str) -> Result<AddressResponse, PayvaultError> {
        self.call_json(
            Method::GET,
            &format!("/addresses/{}", address_id),
            &RequestData::new(),
        )
        .await
    }

    /// List addresses, optionally restricted to one account.
    ///
    /// GET /addresses
    pub async fn list_addresses(
        &self,
        account_id: Option<&str>,
    ) -> Result<AddressListResponse, PayvaultError> {
        let mut data = RequestData::new();
        if let Some(account_id) = account_id {
            data.insert("accountId".to_string(), json!(account_id));
        }

        self.call_json(Method::GET, "/addresses", &data).await
    }

    /// Fetch an address balance for the given assets.
    ///
    /// GET /addresses/{id}/balance
    ///
    /// Passing no assets returns every asset the address holds.
    pub async fn get_address_balance(
        &self,
        address_id: &str,
        assets: &[&str],
    ) -> Result<BalanceResponse, PayvaultError> {
        let mut data = RequestData::new();
        if !assets.is_empty() {
            data.insert("assets".to_string(), json!(assets));
        }

        self.call_json(
            Method::GET,
            &format!("/addresses/{}/balance", address_id),
            &data,
        )
        .await
    }

    /// Change an address label.
    ///
    /// PATCH /addresses/{id}
    pub async fn update_address_label(
        &self,
        address_id: &str,
        label: &str,
    ) -> Result<AddressResponse, PayvaultError> {
        let data = data([("label", json!(label))]);

        self.call_json(Method::PATCH, &format!("/addresses/{}", address_id), &data)
            .await
    }

    /// Archive an address so it stops appearing in listings.
    ///
    /// DELETE /addresses/{id}, answered with 204.
    pub async fn archive_address(&self, address_id: &str) -> Result<(), PayvaultError> {
        tracing::info!(address_id = %address_id, "Archiving address");

        self.call_empty(
            Method::DELETE,
            &format!("/addresses/{}", address_id),
            &RequestData::new(),
        )
        .await
    }

    // ========================================================================
    // Transactions
    // ========================================================================

    /// Send funds to an address.
    ///
    /// POST /transactions
    pub async fn send_funds(
        &self,
        to_address: &str,
        asset: &str,
        quantity: Decimal,
        from_account_id: Option<&str>,
    ) -> Result<TransactionResponse, PayvaultError> {
        let mut data = data([
            ("toAddress", json!(to_address)),
            ("asset", json!(asset)),
            ("quantity", json!(quantity.to_string())),
        ]);
        if let Some(from_account_id) = from_account_id {
            data.insert("fromAccountId".to_string(), json!(from_account_id));
        }

        tracing::info!(
            to_address = %to_address,
            asset = %asset,
            quantity = %quantity,
            "Sending funds"
        );

        let response: TransactionResponse =
            self.call_json(Method::POST, "/transactions", &data).await?;

        tracing::info!(
            transaction_id = %response.transaction_id,
            status = %response.status,
            "Transaction created"
        );

        Ok(response)
    }

    /// Send funds, treating insufficient funds as an ordinary outcome.
    ///
    /// Returns `Ok(true)` when the transaction was created and `Ok(false)`
    /// when the service declined it for insufficient funds; every other
    /// error propagates unchanged.
    pub async fn transfer_funds(
        &self,
        to_address: &str,
        asset: &str,
        quantity: Decimal,
        from_account_id: Option<&str>,
    ) -> Result<bool, PayvaultError> {
        match self
            .send_funds(to_address, asset, quantity, from_account_id)
            .await
        {
            Ok(_) => Ok(true),
            Err(err) if err.is_insufficient_funds() => {
                tracing::info!(
                    to_address = %to_address,
                    asset = %asset,
                    quantity = %quantity,
                    "Transfer declined: insufficient funds"
                );
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }

    /// Move the full balance of an address to another address.
    ///
    /// POST /transactions/sweep
    pub async fn sweep_address(
        &self,
        from_address_id: &str,
        to_address: &str,
        asset: &str,
    ) -> Result<TransactionResponse, PayvaultError> {
        let data = data([
            ("fromAddressId", json!(from_address_id)),
            ("toAddress", json!(to_address)),
            ("asset", json!(asset)),
        ]);

        tracing::info!(
            from_address_id = %from_address_id,
            to_address = %to_address,
            asset = %asset,
            "Sweeping address"
        );

        self.call_json(Method::POST, "/transactions/sweep", &data)
            .await
    }

    /// Fetch a single transaction.
    ///
    /// GET /transactions/{id}
    pub async fn get_transaction(
        &self,
        transaction_id: &str,
    ) -> Result<TransactionResponse, PayvaultError> {
        self.call_json(
            Method::GET,
            &format!("/transactions/{}", transaction_id),
            &RequestData::new(),
        )
        .await
    }

    /// List transactions, optionally filtered by address.
    ///
    /// GET /transactions
    pub async fn list_transactions(
        &self,
        address_id: Option<&str>,
        limit: Option<u32>,
    ) -> Result<TransactionListResponse, PayvaultError> {
        let mut data = RequestData::new();
        if let Some(address_id) = address_id {
            data.insert("addressId".to_string(), json!(address_id));
        }
        if let Some(limit) = limit {
            data.insert("limit".to_string(), json!(limit));
        }

        self.call_json(Method::GET, "/transactions", &data).await
    }

    /// Pre-split an address's balance into UTXOs of a target size.
    ///
    /// POST /addresses/{id}/prime
    ///
    /// Primed outputs let later sends skip the change-splitting step.
    pub async fn prime_address(
        &self,
        address_id: &str,
        asset: &str,
        output_quantity: Decimal,
        output_count: u32,
    ) -> Result<PrimedUtxoResponse, PayvaultError> {
        let data = data([
            ("asset", json!(asset)),
            ("outputQuantity", json!(output_quantity.to_string())),
            ("outputCount", json!(output_count)),
        ]);

        tracing::info!(
            address_id = %address_id,
            asset = %asset,
            output_quantity = %output_quantity,
            output_count = output_count,
            "Priming address"
        );

        self.call_json(
            Method::POST,
            &format!("/addresses/{}/prime", address_id),
            &data,
        )
        .await
    }

    /// Estimate the network fee for a send.
    ///
    /// GET /fees
    ///
    /// `priority` is one of `low`, `medium`, or `high`.
    pub async fn estimate_fee(
        &self,
        asset: &str,
        priority: &str,
    ) -> Result<FeeEstimateResponse, PayvaultError> {
        let data = data([("asset", json!(asset)), ("priority", json!(priority))]);

        self.call_json(Method::GET, "/fees", &data).await
    }

    // ========================================================================
    // Multisig
    // ========================================================================

    /// Create a multisig address requiring `required_signatures` of the
    /// given public keys.
    ///
    /// POST /multisig/addresses
    pub async fn create_multisig_address(
        &self,
        public_keys: &[&str],
        required_signatures: u32,
        label: Option<&str>,
    ) -> Result<MultisigAddressResponse, PayvaultError> {
        let mut data = data([
            ("publicKeys", json!(public_keys)),
            ("requiredSignatures", json!(required_signatures)),
        ]);
        if let Some(label) = label {
            data.insert("label".to_string(), json!(label));
        }

        tracing::info!(
            required_signatures = required_signatures,
            key_count = public_keys.len(),
            "Creating multisig address"
        );

        self.call_json(Method::POST, "/multisig/addresses", &data)
            .await
    }

    /// Fetch a multisig address and its signing policy.
    ///
    /// GET /multisig/addresses/{id}
    pub async fn get_multisig_address(
        &self,
        address_id: &str,
    ) -> Result<MultisigAddressResponse, PayvaultError> {
        self.call_json(
            Method::GET,
            &format!("/multisig/addresses/{}", address_id),
            &RequestData::new(),
        )
        .await
    }

    /// Submit one co-signer signature for a pending multisig transaction.
    ///
    /// POST /transactions/{id}/signatures
    pub async fn submit_signature(
        &self,
        transaction_id: &str,
        public_key: &str,
        signature: &str,
    ) -> Result<TransactionResponse, PayvaultError> {
        let data = data([
            ("publicKey", json!(public_key)),
            ("signature", json!(signature)),
        ]);

        tracing::info!(transaction_id = %transaction_id, "Submitting signature");

        self.call_json(
            Method::POST,
            &format!("/transactions/{}/signatures", transaction_id),
            &data,
        )
        .await
    }

    // ========================================================================
    // Accounts
    // ========================================================================

    /// Create an account to group addresses under.
    ///
    /// POST /accounts
    pub async fn create_account(&self, name: &str) -> Result<AccountResponse, PayvaultError> {
        let data = data([("name", json!(name))]);

        tracing::info!(name = %name, "Creating account");

        self.call_json(Method::POST, "/accounts", &data).await
    }

    /// Fetch a single account.
    ///
    /// GET /accounts/{id}
    pub async fn get_account(&self, account_id: &str) -> Result<AccountResponse, PayvaultError> {
        self.call_json(
            Method::GET,
            &format!("/accounts/{}", account_id),
            &RequestData::new(),
        )
        .await
    }

    /// List all accounts.
    ///
    /// GET /accounts
    pub async fn list_accounts(&self) -> Result<AccountListResponse, PayvaultError> {
        self.call_json(Method::GET, "/accounts", &RequestData::new())
            .await
    }

    /// Fetch the aggregate balance of an account.
    ///
    /// GET /accounts/{id}/balance
    pub async fn get_account_balance(
        &self,
        account_id: &str,
    ) -> Result<BalanceResponse, PayvaultError> {
        self.call_json(
            Method::GET,
            &format!("/accounts/{}/balance", account_id),
            &RequestData::new(),
        )
        .await
    }
}

impl std::fmt::Debug for PayvaultClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PayvaultClient")
            .field("base_url", &self.rest.base_url())
            .field("api_token", &self.credentials.api_token())
            .finish()
    }
}

/// Milliseconds since the unix epoch, for signing timestamps.
fn current_timestamp_ms() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_millis() as i64
}

/// Build an ordered data mapping from literal pairs.
fn data<const N: usize>(pairs: [(&str, Value); N]) -> RequestData {
    pairs
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}
