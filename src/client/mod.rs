#[cfg(feature = "onchain")]
pub mod payment;

use crate::{
    config::ClientConfig,
    error::Result,
    models::{GasPriceOracleRequest, WalletRiskRequest},
    services::Dispatcher,
    x402::encode_payment,
};
use serde_json::Value;

pub const WALLET_RISK_ENDPOINT: &str = "/wallet-risk";
pub const GAS_PRICE_ORACLE_ENDPOINT: &str = "/gas-price-oracle";

/// Client for the Coin Railz x402 services.
///
/// Holds only read-only configuration, so one instance can be shared
/// between threads.
///
/// ```no_run
/// use coinrailz_x402::{ClientConfig, CoinRailzClient};
///
/// # fn main() -> Result<(), coinrailz_x402::CoinRailzError> {
/// let client = CoinRailzClient::new(ClientConfig::default())?;
/// let risk = client.wallet_risk(
///     "0x742d35Cc6634C0532925a3b844Bc9e7595f0bEb",
///     "base",
///     "0x123abc",
/// )?;
/// println!("Wallet risk: {}", risk);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CoinRailzClient {
    config: ClientConfig,
    dispatcher: Dispatcher,
}

impl CoinRailzClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let dispatcher = Dispatcher::new(&config)?;
        Ok(Self { config, dispatcher })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn platform_wallet(&self) -> &str {
        &self.config.platform_wallet
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Score a wallet, paying with the proof for `tx_hash`.
    pub fn wallet_risk(&self, wallet_address: &str, chain: &str, tx_hash: &str) -> Result<Value> {
        self.wallet_risk_request(&WalletRiskRequest::new(wallet_address, chain), tx_hash)
    }

    pub fn wallet_risk_request(&self, request: &WalletRiskRequest, tx_hash: &str) -> Result<Value> {
        let payment = encode_payment(tx_hash)?;
        self.dispatcher.post(WALLET_RISK_ENDPOINT, request, &payment)
    }

    pub fn gas_price_oracle<I, S>(&self, chains: I, tx_hash: &str) -> Result<Value>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let payment = encode_payment(tx_hash)?;
        self.dispatcher.post(
            GAS_PRICE_ORACLE_ENDPOINT,
            &GasPriceOracleRequest::new(chains),
            &payment,
        )
    }
}

/// One-shot wallet risk call against the default Coin Railz deployment.
pub fn wallet_risk(wallet_address: &str, chain: &str, tx_hash: &str) -> Result<Value> {
    CoinRailzClient::new(ClientConfig::default())?.wallet_risk(wallet_address, chain, tx_hash)
}

/// One-shot gas price oracle call against the default Coin Railz deployment.
pub fn gas_price_oracle<I, S>(chains: I, tx_hash: &str) -> Result<Value>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    CoinRailzClient::new(ClientConfig::default())?.gas_price_oracle(chains, tx_hash)
}
