use crate::{
    config::ClientConfig,
    error::{CoinRailzError, Result},
    x402::PAYMENT_HEADER,
};
use reqwest::{blocking::Client, header::CONTENT_TYPE};
use serde::Serialize;
use serde_json::Value;

/// Blocking POST transport for x402 endpoints.
///
/// One call is one round trip. Nothing is retried and nothing is cached.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    client: Client,
    config: ClientConfig,
}

impl Dispatcher {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    pub fn post<B>(&self, endpoint: &str, body: &B, payment: &str) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        let url = self.config.endpoint_url(endpoint);
        let payload = serde_json::to_vec(body)?;

        tracing::debug!(%url, bytes = payload.len(), "Sending paid request");

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(PAYMENT_HEADER, payment)
            .body(payload)
            .send()?;

        let status = response.status();

        if !status.is_success() {
            // The status is authoritative even if the body is cut short
            let body = response.text().unwrap_or_else(|e| {
                tracing::debug!(error = %e, "Failed to read error body");
                String::new()
            });
            tracing::warn!(endpoint, %status, "Coin Railz rejected request");
            return Err(CoinRailzError::Http {
                endpoint: endpoint.to_string(),
                status,
                body,
            });
        }

        let text = response.text()?;
        tracing::debug!(endpoint, %status, "Request succeeded");

        // 204 and friends
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&text).map_err(|source| CoinRailzError::InvalidResponse {
            endpoint: endpoint.to_string(),
            source,
        })
    }
}
