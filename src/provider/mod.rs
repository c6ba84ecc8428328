//! # Parameter Store Providers
//!
//! The fetch seam between the adapter and a remote secret store.
//!
//! One production implementation exists, backed by AWS SSM Parameter Store;
//! tests supply in-memory implementations through the same trait.

pub mod aws;

// Re-export for convenience
pub use aws::SsmParameterStore;

use async_trait::async_trait;

use crate::error::SecretsError;

/// A remote key-value store that returns decrypted secret values by name.
///
/// Must be `Send + Sync` so one store can serve concurrent lookups.
#[async_trait]
pub trait ParameterStore: Send + Sync {
    /// Fetch the decrypted value stored under `name`.
    ///
    /// A single attempt; a failed fetch is a final failure.
    async fn fetch(&self, name: &str) -> Result<String, SecretsError>;
}
