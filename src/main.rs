use anyhow::{Context, Result};
use coinrailz_x402::{CoinRailzClient, DEFAULT_CHAIN};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let client = CoinRailzClient::from_env()?;

    let wallet_address = std::env::var("WALLET_ADDRESS").context("WALLET_ADDRESS required")?;
    let chain = std::env::var("CHAIN").unwrap_or_else(|_| DEFAULT_CHAIN.to_string());
    let tx_hash = std::env::var("TX_HASH").context("TX_HASH required")?;

    tracing::info!("Coin Railz client v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Server: {}", client.base_url());

    let risk = client.wallet_risk(&wallet_address, &chain, &tx_hash)?;
    println!("Wallet risk: {}", serde_json::to_string_pretty(&risk)?);

    if let Ok(chains) = std::env::var("GAS_CHAINS") {
        let chains: Vec<&str> = chains
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .collect();

        // A payment may only be redeemable once
        let gas_tx_hash = std::env::var("GAS_TX_HASH").unwrap_or_else(|_| tx_hash.clone());
        let gas = client.gas_price_oracle(chains, &gas_tx_hash)?;
        println!("Gas prices: {}", serde_json::to_string_pretty(&gas)?);
    }

    Ok(())
}
