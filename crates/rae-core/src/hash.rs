use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::errors::RaeError;
use crate::serde::to_canonical_json_bytes;

/// Computes a stable SHA256 hash for the provided serializable value.
pub fn stable_hash_string<T: Serialize>(value: &T) -> Result<String, RaeError> {
    let bytes = to_canonical_json_bytes(value)?;
    Ok(hash_bytes(&bytes))
}

/// Hex-encoded SHA256 digest of raw bytes.
pub fn hash_bytes(bytes: &[u8]) -> String {
    format!("{:x}", Sha256::digest(bytes))
}
