// gRPC implementation of the WorkflowDialer port.
//
// The workflow service frontend speaks gRPC. Dialing opens a tonic channel to the
// resolved address, then asks the standard gRPC health service whether the
// workflow service is SERVING. A listener that accepts TCP but is not the
// workflow service fails the dial.
//
// Not configured here: TLS, credentials, retries.

use crate::core::ports::{DialError, WorkflowDialer};
use crate::core::settings::{ConnectionSettings, DEFAULT_NAMESPACE};
use async_trait::async_trait;
use std::time::Duration;
use tonic::transport::{Channel, Endpoint};
use tonic_health::pb::HealthCheckRequest;
use tonic_health::pb::health_check_response::ServingStatus;
use tonic_health::pb::health_client::HealthClient;

/// Service name the health check asks about.
pub const WORKFLOW_SERVICE: &str = "temporal.api.workflowservice.v1.WorkflowService";

pub const DEFAULT_HEALTH_CHECK_TIMEOUT: Duration = Duration::from_secs(10);

/// Connected handle to the workflow service. Dropping it closes the connection.
#[derive(Debug, Clone)]
pub struct TemporalClient {
    address: String,
    namespace: String,
    channel: Channel,
}

impl TemporalClient {
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Namespace sent with every workflow request made through this client.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The underlying channel, for building generated service stubs.
    pub fn channel(&self) -> Channel {
        self.channel.clone()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GrpcDialer {
    health_check_timeout: Duration,
}

impl Default for GrpcDialer {
    fn default() -> Self {
        Self::new()
    }
}

impl GrpcDialer {
    pub fn new() -> Self {
        Self {
            health_check_timeout: DEFAULT_HEALTH_CHECK_TIMEOUT,
        }
    }

    pub fn with_health_check_timeout(mut self, timeout: Duration) -> Self {
        self.health_check_timeout = timeout;
        self
    }

    async fn check_health(&self, channel: Channel) -> Result<(), DialError> {
        let mut health = HealthClient::new(channel);
        let request = HealthCheckRequest {
            service: WORKFLOW_SERVICE.to_string(),
        };

        let response = tokio::time::timeout(self.health_check_timeout, health.check(request))
            .await
            .map_err(|_| {
                DialError::new(format!(
                    "health check timed out after {:?}",
                    self.health_check_timeout
                ))
            })?
            .map_err(DialError::from_source)?;

        match response.into_inner().status() {
            ServingStatus::Serving => Ok(()),
            status => Err(DialError::new(format!(
                "health check failed: {WORKFLOW_SERVICE} is {}",
                status.as_str_name()
            ))),
        }
    }
}

/// `host:port` addresses get an `http://` scheme; full URIs pass through.
pub fn endpoint_uri(address: &str) -> String {
    if address.contains("://") {
        address.to_string()
    } else {
        format!("http://{address}")
    }
}

/// The workflow service treats an empty namespace as `default`.
pub fn effective_namespace(namespace: &str) -> &str {
    if namespace.is_empty() {
        DEFAULT_NAMESPACE
    } else {
        namespace
    }
}

#[async_trait]
impl WorkflowDialer for GrpcDialer {
    type Client = TemporalClient;

    async fn dial(&self, settings: &ConnectionSettings) -> Result<TemporalClient, DialError> {
        let endpoint =
            Endpoint::from_shared(endpoint_uri(&settings.address)).map_err(DialError::from_source)?;
        let channel = endpoint.connect().await.map_err(DialError::from_source)?;
        self.check_health(channel.clone()).await?;

        Ok(TemporalClient {
            address: settings.address.clone(),
            namespace: effective_namespace(&settings.namespace).to_string(),
            channel,
        })
    }
}

#[cfg(test)]
mod grpc_dialer_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("localhost:7233", "http://localhost:7233")]
    #[case("10.0.0.4:7233", "http://10.0.0.4:7233")]
    #[case("http://localhost:7233", "http://localhost:7233")]
    #[case("https://temporal.example.com:443", "https://temporal.example.com:443")]
    fn endpoint_uri_adds_a_scheme_only_when_missing(#[case] address: &str, #[case] expected: &str) {
        assert_eq!(endpoint_uri(address), expected);
    }

    #[rstest]
    #[case("", "default")]
    #[case("prod", "prod")]
    #[case("default", "default")]
    fn effective_namespace_defaults_only_when_empty(#[case] namespace: &str, #[case] expected: &str) {
        assert_eq!(effective_namespace(namespace), expected);
    }

    #[rstest]
    #[tokio::test]
    async fn dial_fails_for_an_address_that_is_not_a_uri() {
        let dialer = GrpcDialer::new();
        let settings = ConnectionSettings::new("not a valid address", "default");
        let err = dialer.dial(&settings).await.unwrap_err();
        assert!(err.cause().is_some());
    }
}
