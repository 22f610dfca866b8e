use crate::error::{CoinRailzError, Result};
use std::time::Duration;

pub const COINRAILZ_BASE_URL: &str = "https://coinrailz.com/api/x402";
pub const PLATFORM_WALLET: &str = "0xa4bbe37f9a6ae2dc36a607b91eb148c0ae163c91";

// USDC settlement on Base mainnet
pub const USDC_BASE: &str = "0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913";
pub const BASE_CHAIN_ID: u64 = 8453;

pub const DEFAULT_CHAIN: &str = "base";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    /// Recipient of x402 payments. Never sent to the API itself.
    pub platform_wallet: String,
    /// `None` lets a request block until the server answers.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: COINRAILZ_BASE_URL.to_string(),
            platform_wallet: PLATFORM_WALLET.to_string(),
            timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.into()),
            ..Self::default()
        }
    }

    pub fn with_platform_wallet(mut self, wallet: impl Into<String>) -> Self {
        self.platform_wallet = wallet.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let timeout_secs: u64 = std::env::var("COINRAILZ_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
            .parse()
            .map_err(|_| CoinRailzError::Config("Invalid COINRAILZ_TIMEOUT_SECS".to_string()))?;

        let config = Self {
            base_url: normalize_base_url(
                std::env::var("COINRAILZ_BASE_URL")
                    .unwrap_or_else(|_| COINRAILZ_BASE_URL.to_string()),
            ),
            platform_wallet: std::env::var("COINRAILZ_PLATFORM_WALLET")
                .unwrap_or_else(|_| PLATFORM_WALLET.to_string()),
            // 0 disables the timeout
            timeout: (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs)),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(CoinRailzError::Config(format!(
                "base URL must be HTTP(S) URL, got {}",
                self.base_url
            )));
        }

        tracing::debug!(
            base_url = %self.base_url,
            timeout = ?self.timeout,
            "Client configuration validated"
        );

        Ok(())
    }

    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

fn normalize_base_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Captured;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn default_points_at_coinrailz() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, COINRAILZ_BASE_URL);
        assert_eq!(config.platform_wallet, PLATFORM_WALLET);
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn endpoint_url_joins_without_double_slash() {
        let config = ClientConfig::new("http://127.0.0.1:8080/api/x402/");
        assert_eq!(config.base_url, "http://127.0.0.1:8080/api/x402");
        assert_eq!(
            config.endpoint_url("/wallet-risk"),
            "http://127.0.0.1:8080/api/x402/wallet-risk"
        );
    }

    #[test]
    fn rejects_non_http_base_url() {
        let err = ClientConfig::new("ftp://coinrailz.com").validate().unwrap_err();
        assert!(matches!(err, CoinRailzError::Config(_)));
    }

    #[test]
    fn builder_overrides_keep_other_fields() {
        let config = ClientConfig::new("http://localhost:1234")
            .with_timeout(None)
            .with_platform_wallet("0xdead");
        assert_eq!(config.timeout, None);
        assert_eq!(config.platform_wallet, "0xdead");
        assert_eq!(config.base_url, "http://localhost:1234");
    }

    #[test]
    fn validation_is_quiet_at_info_level() {
        let captured = Captured::default();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_writer(captured.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            ClientConfig::default().validate().unwrap();
        });

        assert!(captured.0.lock().unwrap().is_empty());
    }
}
