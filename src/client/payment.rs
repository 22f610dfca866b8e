use crate::{
    config::{BASE_CHAIN_ID, PLATFORM_WALLET, USDC_BASE},
    error::{CoinRailzError, Result},
};
use ethers::{
    prelude::*,
    providers::{Http, Provider},
    types::{Address, U256},
    utils::{format_units, parse_units},
};
use std::str::FromStr;
use std::sync::Arc;

const USDC_DECIMALS: u32 = 6;

// USDC contract ABI for transfer function
abigen!(
    IERC20,
    r#"[
        function transfer(address to, uint256 amount) external returns (bool)
        function balanceOf(address account) external view returns (uint256)
    ]"#
);

/// Pays for x402 calls with a USDC transfer on Base.
///
/// The returned transaction hash is what [`encode_payment`](crate::encode_payment)
/// expects.
pub struct PaymentClient {
    provider: Arc<SignerMiddleware<Provider<Http>, LocalWallet>>,
    usdc_address: Address,
    recipient: Address,
}

impl PaymentClient {
    /// Payer on Base mainnet sending to the Coin Railz platform wallet.
    pub fn new(rpc_url: &str, private_key: &str) -> Result<Self> {
        Self::with_chain(
            rpc_url,
            private_key,
            BASE_CHAIN_ID,
            parse_address(USDC_BASE)?,
            parse_address(PLATFORM_WALLET)?,
        )
    }

    pub fn with_chain(
        rpc_url: &str,
        private_key: &str,
        chain_id: u64,
        usdc_address: Address,
        recipient: Address,
    ) -> Result<Self> {
        let provider = Provider::<Http>::try_from(rpc_url)
            .map_err(|e| CoinRailzError::Config(format!("Invalid RPC URL {}: {}", rpc_url, e)))?;

        let wallet = private_key
            .parse::<LocalWallet>()
            .map_err(|e| CoinRailzError::Config(format!("Invalid private key: {}", e)))?
            .with_chain_id(chain_id);

        let provider = Arc::new(SignerMiddleware::new(provider, wallet));

        Ok(Self {
            provider,
            usdc_address,
            recipient,
        })
    }

    pub fn payer(&self) -> Address {
        self.provider.address()
    }

    pub fn recipient(&self) -> Address {
        self.recipient
    }

    /// Transfer `amount_usdc` (decimal, e.g. `"0.01"`) and wait for the receipt.
    pub async fn send_usdc_payment(&self, amount_usdc: &str) -> Result<String> {
        let amount = parse_usdc_amount(amount_usdc)?;

        tracing::info!(
            "Sending {} USDC to {:?}",
            amount_usdc,
            self.recipient
        );

        // Check balance first
        let balance = self.usdc_balance().await?;
        if balance < amount {
            return Err(CoinRailzError::Payment(format!(
                "Insufficient USDC balance: {} < {}",
                display_usdc(balance),
                display_usdc(amount)
            )));
        }

        let usdc = IERC20::new(self.usdc_address, self.provider.clone());
        let tx = usdc.transfer(self.recipient, amount);
        let pending_tx = tx
            .send()
            .await
            .map_err(|e| CoinRailzError::Payment(format!("Failed to send USDC transfer: {}", e)))?;

        tracing::info!("Transaction sent, waiting for confirmation...");

        let receipt = pending_tx
            .await
            .map_err(|e| CoinRailzError::Payment(format!("Failed to get transaction receipt: {}", e)))?
            .ok_or_else(|| CoinRailzError::Payment("Transaction dropped".to_string()))?;

        if receipt.status != Some(1.into()) {
            return Err(CoinRailzError::Payment("Transaction failed onchain".to_string()));
        }

        let tx_hash = format!("{:?}", receipt.transaction_hash);
        tracing::info!("Payment confirmed: {}", tx_hash);

        Ok(tx_hash)
    }

    pub async fn usdc_balance(&self) -> Result<U256> {
        let usdc = IERC20::new(self.usdc_address, self.provider.clone());
        usdc.balance_of(self.provider.address())
            .call()
            .await
            .map_err(|e| CoinRailzError::Payment(format!("Failed to read USDC balance: {}", e)))
    }
}

/// Convert a decimal USDC amount to 6-decimal base units.
pub fn parse_usdc_amount(amount: &str) -> Result<U256> {
    let cleaned = amount.trim().trim_start_matches('$').replace(',', "");
    let units = parse_units(&cleaned, USDC_DECIMALS)
        .map_err(|e| CoinRailzError::InvalidInput(format!("Invalid USDC amount {}: {}", amount, e)))?;
    let units: U256 = units.into();

    if units.is_zero() {
        return Err(CoinRailzError::InvalidInput(format!(
            "USDC amount must be positive: {}",
            amount
        )));
    }

    Ok(units)
}

fn display_usdc(units: U256) -> String {
    format_units(units, USDC_DECIMALS).unwrap_or_else(|_| units.to_string())
}

fn parse_address(address: &str) -> Result<Address> {
    Address::from_str(address)
        .map_err(|e| CoinRailzError::Config(format!("Invalid address {}: {}", address, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_usdc() {
        assert_eq!(parse_usdc_amount("0.01").unwrap(), U256::from(10_000u64));
        assert_eq!(parse_usdc_amount("$1,000").unwrap(), U256::from(1_000_000_000u64));
        assert_eq!(parse_usdc_amount(" 2.5 ").unwrap(), U256::from(2_500_000u64));
    }

    #[test]
    fn rejects_bad_amounts() {
        assert!(parse_usdc_amount("0").is_err());
        assert!(parse_usdc_amount("abc").is_err());
        // more precision than USDC carries
        assert!(parse_usdc_amount("0.0000001").is_err());
    }

    #[test]
    fn defaults_pay_the_platform_wallet() {
        let key = "0x4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318";
        let client = PaymentClient::new("https://mainnet.base.org", key).unwrap();
        assert_eq!(client.recipient(), parse_address(PLATFORM_WALLET).unwrap());
    }
}
