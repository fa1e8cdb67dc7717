use crate::clock::{format_timestamp, format_timestamp_utc};
use crate::ident::{gen_uuid, order_no, random_string, random_string_with};
use crate::redeem::{check_code_format, get_code, get_code_with_config, get_trial_code};
use crate::sign::{pay_signature, pay_signature_with_config, read_cert_key_file, sign_with_key};
use crate::tokens::count_tokens;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::{Pkcs1v15Sign, RsaPrivateKey};
use sha2::{Digest, Sha256};
use squelch_core::config::{CodesConfig, SigningConfig};
use squelch_core::SquelchError;
use tempfile::TempDir;

const TEST_KEY_PEM: &str = include_str!("../testdata/pay_key.pem");

fn test_key() -> RsaPrivateKey {
    RsaPrivateKey::from_pkcs1_pem(TEST_KEY_PEM).unwrap()
}

// ========== Identifiers ==========

#[test]
fn test_order_no_shape() {
    let order = order_no();
    assert_eq!(order.len(), 32);
    assert!(order.chars().all(|c| c.is_ascii_hexdigit()));
    assert!(!order.contains('-'));
}

#[test]
fn test_order_no_unique() {
    assert_ne!(order_no(), order_no());
}

#[test]
fn test_gen_uuid_shape() {
    let id = gen_uuid();
    assert_eq!(id.len(), 36);
    let bytes = id.as_bytes();
    for idx in [8, 13, 18, 23] {
        assert_eq!(bytes[idx], b'-');
    }
    assert!(id.chars().filter(|c| *c != '-').all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn test_random_string_length_and_charset() {
    let s = random_string(16);
    assert_eq!(s.len(), 16);
    assert!(s.chars().all(|c| c.is_ascii_alphanumeric()));
}

#[test]
fn test_random_string_zero_length() {
    assert_eq!(random_string(0), "");
}

#[test]
fn test_random_string_seeded_reproducible() {
    let a = random_string_with(&mut StdRng::seed_from_u64(7), 12);
    let b = random_string_with(&mut StdRng::seed_from_u64(7), 12);
    assert_eq!(a, b);
}

// ========== Redemption codes ==========

#[test]
fn test_get_code_extracts_payload() {
    assert_eq!(get_code("#aSNLRz2e#", 8), Some("aSNLRz2e".to_string()));
}

#[test]
fn test_get_code_wrong_length() {
    assert_eq!(get_code("#aSNLRz2e#", 7), None);
}

#[test]
fn test_get_code_trims_spaces() {
    assert_eq!(get_code("  #aSNLRz2e#  ", 8), Some("aSNLRz2e".to_string()));
}

#[test]
fn test_get_code_rejects_symbols() {
    assert_eq!(get_code("#aSNLRz2*#", 8), None);
}

#[test]
fn test_get_code_requires_envelope() {
    assert_eq!(get_code("aSNLRz2e", 8), None);
}

#[test]
fn test_check_code_format_accepts_any_envelope() {
    assert!(check_code_format("#aSNLR2*/###z2e#"));
    assert!(check_code_format(" #x# "));
    assert!(check_code_format("##"));
}

#[test]
fn test_check_code_format_rejects_non_envelopes() {
    assert!(!check_code_format("nope"));
    assert!(!check_code_format("#"));
    assert!(!check_code_format("#unterminated"));
}

#[test]
fn test_get_code_with_config_uses_configured_length() {
    let config = CodesConfig { redeem_length: 6 };
    assert_eq!(
        get_code_with_config("#abc123#", &config),
        Some("abc123".to_string())
    );
    assert_eq!(get_code_with_config("#aSNLRz2e#", &config), None);
}

#[test]
fn test_get_trial_code_extracts_payload() {
    assert_eq!(
        get_trial_code("#TRIAL-jil23Cie#"),
        Some("jil23Cie".to_string())
    );
}

#[test]
fn test_get_trial_code_trims_spaces() {
    assert_eq!(get_trial_code(" #TRIAL-abc123# "), Some("abc123".to_string()));
}

#[test]
fn test_get_trial_code_requires_prefix() {
    assert_eq!(get_trial_code("#jil23Cie#"), None);
}

#[test]
fn test_get_trial_code_rejects_empty_payload() {
    assert_eq!(get_trial_code("#TRIAL-#"), None);
}

// ========== Timestamps ==========

#[test]
fn test_format_timestamp_utc_epoch() {
    assert_eq!(format_timestamp_utc(0), "1970-01-01 00:00:00");
}

#[test]
fn test_format_timestamp_utc_known_instant() {
    assert_eq!(format_timestamp_utc(1_700_000_000), "2023-11-14 22:13:20");
}

#[test]
fn test_format_timestamp_local_shape() {
    let s = format_timestamp(1_700_000_000);
    assert_eq!(s.len(), 19);
    let bytes = s.as_bytes();
    assert_eq!(bytes[4], b'-');
    assert_eq!(bytes[7], b'-');
    assert_eq!(bytes[10], b' ');
    assert_eq!(bytes[13], b':');
    assert_eq!(bytes[16], b':');
}

#[test]
fn test_format_timestamp_out_of_range_falls_back() {
    assert_eq!(format_timestamp_utc(i64::MAX), "1970-01-01 00:00:00");
}

// ========== Pay signing ==========

#[test]
fn test_sign_deterministic() {
    let key = test_key();
    let first = sign_with_key("order=42&total=9900", &key).unwrap();
    let second = sign_with_key("order=42&total=9900", &key).unwrap();
    assert_eq!(first, second);
    let raw = STANDARD.decode(&first).unwrap();
    assert_eq!(raw.len(), 256);
}

#[test]
fn test_signature_verifies_with_public_key() {
    let key = test_key();
    let encoded = sign_with_key("hello", &key).unwrap();
    let raw = STANDARD.decode(encoded).unwrap();
    let digest = Sha256::digest("hello".as_bytes());
    key.to_public_key()
        .verify(Pkcs1v15Sign::new::<Sha256>(), &digest, &raw)
        .unwrap();
}

#[test]
fn test_pay_signature_reads_key_from_disk() {
    let dir = TempDir::new().unwrap();
    let key_path = dir.path().join("pay_key.pem");
    std::fs::write(&key_path, TEST_KEY_PEM).unwrap();
    let from_disk = pay_signature("order=42", key_path.to_str().unwrap()).unwrap();
    let direct = sign_with_key("order=42", &test_key()).unwrap();
    assert_eq!(from_disk, direct);
}

#[test]
fn test_pay_signature_with_config() {
    let dir = TempDir::new().unwrap();
    let key_path = dir.path().join("pay_key.pem");
    std::fs::write(&key_path, TEST_KEY_PEM).unwrap();
    let config = SigningConfig {
        key_path: key_path.to_str().unwrap().to_string(),
    };
    let from_config = pay_signature_with_config("order=42", &config).unwrap();
    let direct = sign_with_key("order=42", &test_key()).unwrap();
    assert_eq!(from_config, direct);
}

#[test]
fn test_pay_signature_missing_key_file() {
    let err = pay_signature("data", "/no/such/key.pem").unwrap_err();
    assert!(matches!(err, SquelchError::KeyFile(_)));
}

#[test]
fn test_read_cert_key_file_rejects_garbage() {
    let dir = TempDir::new().unwrap();
    let key_path = dir.path().join("bad.pem");
    std::fs::write(&key_path, "not a pem at all").unwrap();
    let err = read_cert_key_file(key_path.to_str().unwrap()).unwrap_err();
    assert!(matches!(err, SquelchError::KeyFile(_)));
}

// ========== Token counting ==========

#[test]
fn test_count_tokens_ascii() {
    assert_eq!(count_tokens("hello world"), 10);
}

#[test]
fn test_count_tokens_cjk() {
    assert_eq!(count_tokens("魑魅魍魉"), 12);
}

#[test]
fn test_count_tokens_empty() {
    assert_eq!(count_tokens(""), 0);
}

#[test]
fn test_count_tokens_skips_punctuation() {
    assert_eq!(count_tokens("one, two."), 6);
}

#[test]
fn test_count_tokens_mixed_scripts() {
    assert_eq!(count_tokens("我是谁？"), 9);
}
