//! # Key Derivation
//!
//! Pure transforms from stored key material to derived node identities.
//!
//! - `ecdsa`: secp256k1 private key -> EIP-55 checksummed validator address
//! - `bls`: BLS12-381 secret key -> hex-encoded public key
//! - `network`: libp2p private key -> peer ID string
//!
//! Key material is stored hex-encoded (optionally `0x`-prefixed); decoding
//! goes through a zeroized buffer so private bytes are wiped on return.

mod bls;
mod ecdsa;
mod network;

pub use bls::bls_public_key_hex;
pub use ecdsa::validator_address;
pub use network::network_peer_id;

use zeroize::Zeroizing;

use crate::error::KeyDerivationError;

/// Decode stored key material into raw private-key bytes.
///
/// Accepts the formats the node writes to the store: a hex string with or
/// without a `0x` prefix, with surrounding whitespace tolerated.
fn decode_key_material(raw: &[u8]) -> Result<Zeroizing<Vec<u8>>, KeyDerivationError> {
    let text = String::from_utf8_lossy(raw);
    let mut hex_str = text.trim();
    if let Some(stripped) = hex_str.strip_prefix("0x") {
        hex_str = stripped;
    }
    Ok(Zeroizing::new(hex::decode(hex_str)?))
}

/// Hex-encode derived (public) bytes with a `0x` prefix.
fn encode_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}
