//! HTTP client for the Cosmos SDK LCD gateway.

use std::time::Duration;

use async_trait::async_trait;
use huahua_types::{Direction, Page, RawTransaction};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::url::{self, DEFAULT_NODE};
use crate::{FetchError, TxApi};

/// Configuration for the LCD client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the LCD node.
    pub node: String,
    /// Request timeout.
    pub timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            node: DEFAULT_NODE.to_string(),
            timeout: Duration::from_secs(60),
            user_agent: format!("huahua-tax/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// `GET /cosmos/tx/v1beta1/txs` response.
#[derive(Debug, Deserialize)]
struct TxsResponse {
    #[serde(default)]
    tx_responses: Vec<RawTransaction>,
    #[serde(default)]
    pagination: Option<Pagination>,
}

#[derive(Debug, Deserialize)]
struct Pagination {
    /// Encoded as a decimal string by the gateway.
    #[serde(default)]
    total: Option<String>,
}

impl TxsResponse {
    fn total(&self) -> Option<u64> {
        self.pagination
            .as_ref()
            .and_then(|p| p.total.as_deref())
            .and_then(|t| t.parse().ok())
    }
}

/// `GET /cosmos/tx/v1beta1/txs/{hash}` response.
#[derive(Debug, Deserialize)]
struct TxResponse {
    tx_response: RawTransaction,
}

/// `GET /ibc/apps/transfer/v1/denom_traces/{hash}` response.
#[derive(Debug, Deserialize)]
struct DenomTraceResponse {
    denom_trace: DenomTrace,
}

#[derive(Debug, Deserialize)]
struct DenomTrace {
    base_denom: String,
}

/// Computes the offset of the page after one that returned `received`
/// records, or `None` when the stream is exhausted.
pub(crate) fn next_offset(offset: u64, received: usize, limit: u64, total: Option<u64>) -> Option<u64> {
    let received = received as u64;
    if received == 0 || received < limit {
        return None;
    }
    let next = offset + received;
    match total {
        Some(total) if next >= total => None,
        _ => Some(next),
    }
}

/// LCD client implementing [`TxApi`].
#[derive(Debug, Clone)]
pub struct LcdClient {
    client: Client,
    config: ClientConfig,
}

impl LcdClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self { client, config })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(ClientConfig::default())
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Issues a GET and decodes the JSON body.
    ///
    /// Returns `Ok(None)` on 404.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Option<T>, FetchError> {
        let endpoint = url::endpoint(&self.config.node, path);
        tracing::debug!(%endpoint, ?query, "LCD request");

        let response = self.client.get(&endpoint).query(query).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let body = response.text().await?;
        if !status.is_success() {
            if status == StatusCode::BAD_REQUEST && body.contains("bech32") {
                return Err(FetchError::InvalidAddress(body));
            }
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(Some(serde_json::from_str(&body)?))
    }
}

#[async_trait]
impl TxApi for LcdClient {
    async fn get_txs(
        &self,
        address: &str,
        direction: Direction,
        offset: u64,
        limit: u64,
    ) -> Result<Page, FetchError> {
        let query = url::txs_query(address, direction, offset, limit);
        let Some(response) = self.get_json::<TxsResponse>(url::TXS_PATH, &query).await? else {
            return Ok(Page::default());
        };

        let next = next_offset(offset, response.tx_responses.len(), limit, response.total());
        Ok(Page::new(response.tx_responses, next))
    }

    async fn get_tx(&self, txhash: &str) -> Result<RawTransaction, FetchError> {
        self.get_json::<TxResponse>(&url::tx_path(txhash), &[])
            .await?
            .map(|r| r.tx_response)
            .ok_or_else(|| FetchError::TxNotFound(txhash.to_string()))
    }

    async fn count_txs(&self, address: &str, direction: Direction) -> Result<u64, FetchError> {
        let query = url::txs_query(address, direction, 0, 1);
        let response = self.get_json::<TxsResponse>(url::TXS_PATH, &query).await?;
        Ok(response.and_then(|r| r.total()).unwrap_or(0))
    }

    async fn account_exists(&self, address: &str) -> Result<bool, FetchError> {
        match self
            .get_json::<serde_json::Value>(&url::account_path(address), &[])
            .await
        {
            Ok(found) => Ok(found.is_some()),
            // Some gateways report unknown accounts as gRPC code 5 behind a 500.
            Err(FetchError::Status { body, .. }) if body.contains("not found") => Ok(false),
            Err(e) => Err(e),
        }
    }

    async fn denom_trace(&self, hash: &str) -> Result<Option<String>, FetchError> {
        let response = self
            .get_json::<DenomTraceResponse>(&url::denom_trace_path(hash), &[])
            .await?;
        Ok(response.map(|r| r.denom_trace.base_denom))
    }
}
