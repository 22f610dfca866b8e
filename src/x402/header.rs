use crate::{
    error::{CoinRailzError, Result},
    models::PaymentProof,
};
use base64::{engine::general_purpose::STANDARD, Engine};

pub const PAYMENT_HEADER: &str = "X-PAYMENT";

/// Encode a transaction hash as an x402 payment proof.
///
/// The proof is the compact JSON object `{"txHash": ...}` encoded with the
/// standard padded base64 alphabet. The same hash always yields the same
/// header value.
pub fn encode_payment(tx_hash: &str) -> Result<String> {
    let json = serde_json::to_vec(&PaymentProof::new(tx_hash))?;
    Ok(STANDARD.encode(json))
}

/// Decode an `X-PAYMENT` header value back into its proof.
pub fn decode_payment(encoded: &str) -> Result<PaymentProof> {
    let bytes = STANDARD
        .decode(encoded.trim())
        .map_err(|e| CoinRailzError::InvalidPaymentProof(format!("invalid base64: {}", e)))?;
    serde_json::from_slice(&bytes)
        .map_err(|e| CoinRailzError::InvalidPaymentProof(format!("invalid JSON: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn encodes_compact_json() {
        assert_eq!(
            encode_payment("0x123abc").unwrap(),
            "eyJ0eEhhc2giOiIweDEyM2FiYyJ9"
        );
    }

    #[test]
    fn decoded_header_is_single_key_object() {
        let hashes = [
            "0x123abc",
            "",
            "0xa4bbe37f9a6ae2dc36a607b91eb148c0ae163c91a4bbe37f9a6ae2dc36a607b9",
            "quote\"and\\backslash",
            "ünïcødé ✓",
        ];

        for hash in hashes {
            let encoded = encode_payment(hash).unwrap();
            let bytes = STANDARD.decode(&encoded).unwrap();
            let value: Value = serde_json::from_slice(&bytes).unwrap();
            assert_eq!(value, json!({ "txHash": hash }));
            assert_eq!(decode_payment(&encoded).unwrap().tx_hash, hash);
        }
    }

    #[test]
    fn distinct_hashes_give_distinct_headers() {
        let a = encode_payment("0xabc").unwrap();
        let b = encode_payment("0xabd").unwrap();
        assert_ne!(a, b);
        assert_eq!(a, encode_payment("0xabc").unwrap());
    }

    #[test]
    fn rejects_garbage_header() {
        assert!(matches!(
            decode_payment("not base64!"),
            Err(CoinRailzError::InvalidPaymentProof(_))
        ));
        // valid base64, not a proof
        assert!(matches!(
            decode_payment(&STANDARD.encode(r#"{"hash":"0x1"}"#)),
            Err(CoinRailzError::InvalidPaymentProof(_))
        ));
    }
}
