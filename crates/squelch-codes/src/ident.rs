//! Identifier generation for orders and sessions.

use rand::distributions::Alphanumeric;
use rand::Rng;
use uuid::Uuid;

/// Returns a 32 character order number, a v4 UUID with the dashes removed.
pub fn order_no() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Returns a standard hyphenated v4 UUID.
pub fn gen_uuid() -> String {
    Uuid::new_v4().to_string()
}

/// Returns `len` random alphanumeric characters from the thread-local RNG.
pub fn random_string(len: usize) -> String {
    random_string_with(&mut rand::thread_rng(), len)
}

/// Like [`random_string`], drawing from the caller's RNG instead.
pub fn random_string_with<R: Rng>(rng: &mut R, len: usize) -> String {
    rng.sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}
