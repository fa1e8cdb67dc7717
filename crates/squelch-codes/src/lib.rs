//! Operational string utilities shared by the squelch services:
//! identifier generation, redemption code parsing, timestamp formatting,
//! payment signing and token accounting.

pub mod clock;
pub mod ident;
pub mod redeem;
pub mod sign;
pub mod tokens;

pub use clock::{format_timestamp, format_timestamp_utc};
pub use ident::{gen_uuid, order_no, random_string};
pub use redeem::{check_code_format, get_code, get_trial_code};
pub use sign::{pay_signature, read_cert_key_file, sign_with_key};
pub use tokens::count_tokens;

#[cfg(test)]
mod tests;
