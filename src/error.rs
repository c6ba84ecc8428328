//! # Error Types
//!
//! Error taxonomy for secret retrieval and key derivation.
//!
//! Every error carries enough context to identify which operation and which
//! secret name failed. Nothing is retried or swallowed here; the caller
//! decides whether a failure is fatal.

use thiserror::Error;

/// Top-level error returned by the adapter and the parameter store.
#[derive(Debug, Error)]
pub enum SecretsError {
    /// The regional client configuration could not be established.
    #[error("could not establish AWS client configuration: {reason}")]
    Configuration { reason: String },

    /// The remote fetch failed (network error, not-found, access-denied).
    /// The underlying cause is wrapped and surfaced, not interpreted.
    #[error("could not retrieve secret {name:?} from the parameter store")]
    Retrieval {
        name: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The fetched bytes could not be converted into the expected key type.
    #[error("could not derive {operation} from secret {name:?}")]
    KeyDerivation {
        operation: &'static str,
        name: String,
        #[source]
        source: KeyDerivationError,
    },
}

impl SecretsError {
    /// Stable label for the error class, usable in logs and metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            SecretsError::Configuration { .. } => "configuration",
            SecretsError::Retrieval { .. } => "retrieval",
            SecretsError::KeyDerivation { .. } => "key_derivation",
        }
    }
}

/// Why key material could not be turned into a derived identity.
#[derive(Debug, Error)]
pub enum KeyDerivationError {
    /// The stored value is not a hex string.
    #[error("key material is not valid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// The decoded bytes are not a valid secp256k1 private key.
    #[error("invalid ECDSA private key: {0}")]
    InvalidEcdsaKey(String),

    /// The decoded bytes are not a valid BLS12-381 secret key, or the
    /// public key could not be extracted.
    #[error("invalid BLS secret key: {0}")]
    InvalidBlsKey(String),

    /// The decoded bytes are not a parseable libp2p private key.
    #[error("invalid libp2p private key: {0}")]
    InvalidNetworkKey(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_labels() {
        let err = SecretsError::Configuration {
            reason: "region is empty".to_string(),
        };
        assert_eq!(err.as_str(), "configuration");

        let err = SecretsError::Retrieval {
            name: "validator-key".to_string(),
            source: "parameter not found".into(),
        };
        assert_eq!(err.as_str(), "retrieval");
    }

    #[test]
    fn test_error_messages_name_the_secret() {
        let err = SecretsError::Retrieval {
            name: "network-key".to_string(),
            source: "access denied".into(),
        };
        assert!(err.to_string().contains("network-key"));

        let err = SecretsError::KeyDerivation {
            operation: "validator key",
            name: "validator-key".to_string(),
            source: KeyDerivationError::InvalidEcdsaKey("bad scalar".to_string()),
        };
        let msg = err.to_string();
        assert!(msg.contains("validator key"));
        assert!(msg.contains("validator-key"));
    }
}
