use anyhow::{Context, Result};
use coinrailz_x402::{client::payment::PaymentClient, ClientConfig, CoinRailzClient, DEFAULT_CHAIN};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    // Load configuration (also reads .env)
    let config = ClientConfig::from_env()?;
    let private_key = std::env::var("PAYER_PRIVATE_KEY").context("PAYER_PRIVATE_KEY required")?;
    let rpc_url = std::env::var("BASE_RPC_URL")
        .unwrap_or_else(|_| "https://mainnet.base.org".to_string());
    let amount = std::env::var("PAYMENT_AMOUNT_USDC").context("PAYMENT_AMOUNT_USDC required")?;
    let wallet_address = std::env::var("WALLET_ADDRESS").context("WALLET_ADDRESS required")?;
    let chain = std::env::var("CHAIN").unwrap_or_else(|_| DEFAULT_CHAIN.to_string());

    println!("Coin Railz Pay Agent");
    println!("====================");
    println!("Server: {}", config.base_url);
    println!("Platform wallet: {}", config.platform_wallet);
    println!();

    let payment_client = PaymentClient::new(&rpc_url, &private_key)?;
    let runtime = tokio::runtime::Runtime::new()?;

    let balance = runtime.block_on(payment_client.usdc_balance())?;
    println!("Payer: {:?}", payment_client.payer());
    println!("USDC balance (base units): {}", balance);
    println!();

    println!("Step 1: Sending {} USDC on Base...", amount);
    let tx_hash = runtime.block_on(payment_client.send_usdc_payment(&amount))?;
    println!("   [OK] Payment sent: {}", tx_hash);
    println!("   View on BaseScan: https://basescan.org/tx/{}", tx_hash);
    println!();

    // The blocking client must not run inside the async runtime
    drop(runtime);

    println!("Step 2: Requesting wallet risk with payment proof...");
    let client = CoinRailzClient::new(config)?;
    match client.wallet_risk(&wallet_address, &chain, &tx_hash) {
        Ok(data) => {
            println!("[SUCCESS] Wallet risk:");
            println!("{}", serde_json::to_string_pretty(&data)?);
        }
        Err(e) => {
            println!("[FAILED] {}", e);
        }
    }

    Ok(())
}
