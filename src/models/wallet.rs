use crate::config::DEFAULT_CHAIN;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletRiskRequest {
    pub wallet_address: String,
    pub chain: String,
}

impl WalletRiskRequest {
    pub fn new(wallet_address: impl Into<String>, chain: impl Into<String>) -> Self {
        Self {
            wallet_address: wallet_address.into(),
            chain: chain.into(),
        }
    }

    pub fn on_base(wallet_address: impl Into<String>) -> Self {
        Self::new(wallet_address, DEFAULT_CHAIN)
    }
}
