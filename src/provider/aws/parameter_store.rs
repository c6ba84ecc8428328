//! # AWS SSM Parameter Store Client
//!
//! Fetches decrypted parameter values from AWS Systems Manager Parameter
//! Store.
//!
//! Credentials come from the AWS SDK's default credential chain (environment,
//! profile, or instance role). The SDK config is loaded per call for the
//! configured region; no connection state is held between calls.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_ssm::Client as SsmClient;
use tracing::debug;

use crate::error::SecretsError;
use crate::provider::ParameterStore;

/// AWS SSM Parameter Store provider implementation.
#[derive(Debug, Clone)]
pub struct SsmParameterStore {
    region: String,
    endpoint: Option<String>,
}

impl SsmParameterStore {
    /// Create a store for the given region. No I/O happens here.
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            endpoint: None,
        }
    }

    /// Route requests to a custom endpoint (local stack or mock server)
    /// instead of the regional AWS endpoint.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Load the SDK config for the configured region using the default
    /// credential chain.
    async fn sdk_config(&self) -> Result<SdkConfig, SecretsError> {
        if self.region.trim().is_empty() {
            return Err(SecretsError::Configuration {
                reason: "region must not be empty".to_string(),
            });
        }

        let mut builder = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(self.region.clone()));

        if let Some(endpoint) = &self.endpoint {
            debug!("routing SSM requests to custom endpoint {}", endpoint);
            builder = builder.endpoint_url(endpoint);
        }

        Ok(builder.load().await)
    }
}

#[async_trait]
impl ParameterStore for SsmParameterStore {
    async fn fetch(&self, name: &str) -> Result<String, SecretsError> {
        if name.is_empty() {
            return Err(SecretsError::Retrieval {
                name: name.to_string(),
                source: "secret name must not be empty".into(),
            });
        }

        let sdk_config = self.sdk_config().await?;
        let client = SsmClient::new(&sdk_config);

        debug!(%name, region = %self.region, "fetching parameter with decryption");

        let output = client
            .get_parameter()
            .name(name)
            .with_decryption(true)
            .send()
            .await
            .map_err(|e| SecretsError::Retrieval {
                name: name.to_string(),
                source: Box::new(e),
            })?;

        output
            .parameter()
            .and_then(|parameter| parameter.value())
            .map(str::to_owned)
            .ok_or_else(|| SecretsError::Retrieval {
                name: name.to_string(),
                source: "parameter response carried no value".into(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_region_is_a_configuration_error() {
        let store = SsmParameterStore::new("");
        let err = store.fetch("validator-key").await.unwrap_err();
        assert!(matches!(err, SecretsError::Configuration { .. }));
    }

    #[tokio::test]
    async fn test_blank_region_is_a_configuration_error() {
        let store = SsmParameterStore::new("   ");
        let err = store.fetch("validator-key").await.unwrap_err();
        assert!(matches!(err, SecretsError::Configuration { .. }));
    }

    #[tokio::test]
    async fn test_empty_name_fails_before_any_io() {
        let store = SsmParameterStore::new("eu-west-1");
        let err = store.fetch("").await.unwrap_err();
        assert!(matches!(err, SecretsError::Retrieval { .. }));
    }

    #[test]
    fn test_endpoint_override_is_recorded() {
        let store = SsmParameterStore::new("eu-west-1").with_endpoint("http://localhost:4566");
        assert_eq!(store.endpoint.as_deref(), Some("http://localhost:4566"));
    }
}
