use serde::{Deserialize, Serialize};

/// Evidence of payment carried in the `X-PAYMENT` header.
///
/// The hash is opaque to the client and is never validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentProof {
    pub tx_hash: String,
}

impl PaymentProof {
    pub fn new(tx_hash: impl Into<String>) -> Self {
        Self {
            tx_hash: tx_hash.into(),
        }
    }
}
