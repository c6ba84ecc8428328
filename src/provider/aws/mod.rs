//! # AWS Providers
//!
//! AWS provider modules for secret stores.
//!
//! - `parameter_store`: AWS Systems Manager Parameter Store for key material

pub mod parameter_store;

// Re-export for convenience
pub use parameter_store::SsmParameterStore;
