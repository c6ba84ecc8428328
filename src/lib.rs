//! # node-secrets
//!
//! Fetches validator and network key material from AWS SSM Parameter Store
//! and derives node identities from it:
//!
//! - validator address (EIP-55 checksummed) from a secp256k1 private key
//! - BLS public key (hex, min-pk) from a BLS12-381 secret key
//! - peer ID from a libp2p private key
//!
//! Each lookup is a single fetch followed by a pure derivation; no secret
//! value is retained, cached, or logged, and no retries are performed.
//!
//! ```no_run
//! use node_secrets::SecretsAdapter;
//!
//! # async fn run() -> Result<(), node_secrets::SecretsError> {
//! let adapter = SecretsAdapter::new("eu-west-1");
//! let address = adapter.get_validator_key("/node/validator-key").await?;
//! let bls_key = adapter.get_validator_bls_key("/node/validator-bls-key").await?;
//! let peer_id = adapter.get_network_key("/node/network-key").await?;
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod error;
pub mod keys;
pub mod provider;

// Re-export the public surface for convenience
pub use adapter::SecretsAdapter;
pub use error::{KeyDerivationError, SecretsError};
pub use provider::{ParameterStore, SsmParameterStore};
