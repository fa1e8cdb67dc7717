//! Payment request signing.
//!
//! Provider keys arrive as PKCS#1 PEM files. Signatures are
//! RSASSA-PKCS1-v1_5 over a SHA-256 digest of the request body, encoded as
//! standard base64.

use std::fs;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::{Pkcs1v15Sign, RsaPrivateKey};
use sha2::{Digest, Sha256};
use squelch_core::config::SigningConfig;
use squelch_core::{Result, SquelchError};
use tracing::debug;

/// Loads an RSA private key from a PKCS#1 PEM file.
pub fn read_cert_key_file(path: &str) -> Result<RsaPrivateKey> {
    let pem = fs::read_to_string(path)
        .map_err(|err| SquelchError::KeyFile(format!("{path}: {err}")))?;
    RsaPrivateKey::from_pkcs1_pem(&pem)
        .map_err(|err| SquelchError::KeyFile(format!("{path}: {err}")))
}

/// Signs `data` with the key stored at `key_path` and returns the base64
/// signature.
pub fn pay_signature(data: &str, key_path: &str) -> Result<String> {
    let key = read_cert_key_file(key_path)?;
    sign_with_key(data, &key)
}

/// [`pay_signature`] with the key path taken from the signing config.
pub fn pay_signature_with_config(data: &str, config: &SigningConfig) -> Result<String> {
    pay_signature(data, &config.key_path)
}

/// Signs `data` with an already loaded key. PKCS#1 v1.5 signing is
/// deterministic, so equal inputs always produce equal signatures.
pub fn sign_with_key(data: &str, key: &RsaPrivateKey) -> Result<String> {
    let digest = Sha256::digest(data.as_bytes());
    let raw = key
        .sign(Pkcs1v15Sign::new::<Sha256>(), &digest)
        .map_err(|err| SquelchError::Signing(err.to_string()))?;
    let encoded = STANDARD.encode(raw);
    debug!(signature = %encoded, "generated pay signature");
    Ok(encoded)
}
