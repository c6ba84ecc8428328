//! # Secrets Adapter
//!
//! Composes the parameter store with the key derivation functions and exposes
//! the three node-identity lookups.
//!
//! Each operation is one linear sequence: fetch, decode, derive, format. The
//! adapter holds no mutable state, so concurrent calls are independent. The
//! fetched secret value lives only for the duration of the call and is wiped
//! when it returns.

use tracing::debug;
use zeroize::Zeroizing;

use crate::error::SecretsError;
use crate::keys;
use crate::provider::{ParameterStore, SsmParameterStore};

/// Fetches node key material by name and derives the node's identities.
#[derive(Debug)]
pub struct SecretsAdapter<S = SsmParameterStore> {
    store: S,
}

impl SecretsAdapter<SsmParameterStore> {
    /// Create an adapter backed by AWS SSM Parameter Store in `region`.
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            store: SsmParameterStore::new(region),
        }
    }
}

impl<S: ParameterStore> SecretsAdapter<S> {
    /// Create an adapter over any parameter store implementation.
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    /// Fetch the validator's secp256k1 private key stored under `name` and
    /// return the EIP-55 checksummed validator address.
    pub async fn get_validator_key(&self, name: &str) -> Result<String, SecretsError> {
        let value = Zeroizing::new(self.store.fetch(name).await?);

        let address = keys::validator_address(value.as_bytes()).map_err(|source| {
            SecretsError::KeyDerivation {
                operation: "validator key",
                name: name.to_string(),
                source,
            }
        })?;

        debug!(%name, %address, "derived validator address");
        Ok(address)
    }

    /// Fetch the validator's BLS secret key stored under `name` and return
    /// the hex-encoded BLS public key.
    pub async fn get_validator_bls_key(&self, name: &str) -> Result<String, SecretsError> {
        let value = Zeroizing::new(self.store.fetch(name).await?);

        let public_key = keys::bls_public_key_hex(value.as_bytes()).map_err(|source| {
            SecretsError::KeyDerivation {
                operation: "validator BLS key",
                name: name.to_string(),
                source,
            }
        })?;

        debug!(%name, %public_key, "derived validator BLS public key");
        Ok(public_key)
    }

    /// Fetch the node's libp2p private key stored under `name` and return
    /// the derived peer ID string.
    pub async fn get_network_key(&self, name: &str) -> Result<String, SecretsError> {
        let value = Zeroizing::new(self.store.fetch(name).await?);

        let peer_id = keys::network_peer_id(value.as_bytes()).map_err(|source| {
            SecretsError::KeyDerivation {
                operation: "network key",
                name: name.to_string(),
                source,
            }
        })?;

        debug!(%name, %peer_id, "derived network peer ID");
        Ok(peer_id)
    }
}
