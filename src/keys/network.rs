//! # Network Key Derivation
//!
//! Parses a stored libp2p private key and derives the node's peer ID.
//!
//! The stored value is the hex encoding of a protobuf-encoded libp2p private
//! key. Peer-ID derivation from a successfully parsed keypair cannot fail;
//! every malformed input is caught at the parsing step.

use libp2p_identity::Keypair;

use super::decode_key_material;
use crate::error::KeyDerivationError;

/// Derive the peer ID string from stored libp2p key material.
pub fn network_peer_id(raw: &[u8]) -> Result<String, KeyDerivationError> {
    let key_bytes = decode_key_material(raw)?;

    let keypair = Keypair::from_protobuf_encoding(&key_bytes)
        .map_err(|e| KeyDerivationError::InvalidNetworkKey(e.to_string()))?;

    Ok(keypair.public().to_peer_id().to_string())
}
