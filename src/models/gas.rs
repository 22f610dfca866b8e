use serde::{Deserialize, Serialize};

/// Chains are sent in caller order. An empty list is passed through
/// and left for the server to reject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GasPriceOracleRequest {
    pub chains: Vec<String>,
}

impl GasPriceOracleRequest {
    pub fn new<I, S>(chains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            chains: chains.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_chain_order() {
        let request = GasPriceOracleRequest::new(["base", "ethereum", "arbitrum"]);
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"chains":["base","ethereum","arbitrum"]}"#
        );
    }
}
