//! # BLS Key Derivation
//!
//! Derives the validator's BLS12-381 public key (min-pk: 48-byte compressed
//! G1 point) from a stored secret key and hex-encodes it.

use blst::min_pk::SecretKey;

use super::{decode_key_material, encode_hex};
use crate::error::KeyDerivationError;

/// Derive the hex-encoded BLS public key from stored key material.
///
/// The secret key is a 32-byte big-endian scalar; zero and out-of-range
/// scalars are rejected by the underlying library.
pub fn bls_public_key_hex(raw: &[u8]) -> Result<String, KeyDerivationError> {
    let key_bytes = decode_key_material(raw)?;

    let secret_key = SecretKey::from_bytes(&key_bytes)
        .map_err(|e| KeyDerivationError::InvalidBlsKey(format!("{e:?}")))?;

    let public_key = secret_key.sk_to_pk();

    Ok(encode_hex(&public_key.compress()))
}
