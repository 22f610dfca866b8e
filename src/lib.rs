//! Client for the Coin Railz x402 pay-per-call API.
//!
//! Every request carries an `X-PAYMENT` header holding the base64 encoding
//! of `{"txHash": "..."}` for a USDC payment already made on Base.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod tools;
pub mod x402;

pub use client::{gas_price_oracle, wallet_risk, CoinRailzClient};
pub use config::{
    ClientConfig, BASE_CHAIN_ID, COINRAILZ_BASE_URL, DEFAULT_CHAIN, PLATFORM_WALLET, USDC_BASE,
};
pub use error::{CoinRailzError, Result};
pub use x402::{decode_payment, encode_payment, PAYMENT_HEADER};
