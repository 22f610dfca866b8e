pub mod header;

pub use header::{decode_payment, encode_payment, PAYMENT_HEADER};
