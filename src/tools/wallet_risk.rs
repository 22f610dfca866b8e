use super::{PropertySchema, ToolDefinition, ToolInputSchema};
use crate::{
    client::CoinRailzClient,
    config::DEFAULT_CHAIN,
    error::{CoinRailzError, Result},
    models::WalletRiskRequest,
};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// Wallet risk scoring packaged as an agent tool.
pub struct WalletRiskTool {
    definition: ToolDefinition,
    client: CoinRailzClient,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WalletRiskParams {
    wallet_address: String,
    #[serde(default = "default_chain")]
    chain: String,
    tx_hash: String,
}

fn default_chain() -> String {
    DEFAULT_CHAIN.to_string()
}

impl WalletRiskTool {
    pub fn new(client: CoinRailzClient) -> Self {
        let mut properties = HashMap::new();

        properties.insert(
            "walletAddress".to_string(),
            PropertySchema::string(Some("Wallet address to check")),
        );
        properties.insert(
            "chain".to_string(),
            PropertySchema {
                default: Some(Value::String(DEFAULT_CHAIN.to_string())),
                enum_values: Some(vec![DEFAULT_CHAIN.to_string()]),
                ..PropertySchema::string(None)
            },
        );
        properties.insert(
            "txHash".to_string(),
            PropertySchema::string(Some(
                "Base USDC payment txHash to Coin Railz platform wallet",
            )),
        );

        Self {
            definition: ToolDefinition {
                name: "wallet_risk".to_string(),
                description: "Check wallet risk score via Coin Railz x402 service".to_string(),
                input_schema: ToolInputSchema {
                    schema_type: "object".to_string(),
                    properties,
                    required: vec!["walletAddress".to_string(), "txHash".to_string()],
                },
            },
            client,
        }
    }

    pub fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    pub fn execute(&self, params: Value) -> Result<Value> {
        let params: WalletRiskParams = serde_json::from_value(params)
            .map_err(|e| CoinRailzError::InvalidInput(format!("Invalid parameters: {}", e)))?;

        tracing::debug!(
            wallet = %params.wallet_address,
            chain = %params.chain,
            "Executing wallet_risk tool"
        );

        self.client.wallet_risk_request(
            &WalletRiskRequest::new(params.wallet_address, params.chain),
            &params.tx_hash,
        )
    }
}
