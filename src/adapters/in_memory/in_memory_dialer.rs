// In memory implementation of the WorkflowDialer port.
//
// Purpose
// - Support factory tests and local development without a running workflow service.
//
// Responsibilities
// - Record every dial request in order.
// - Fail with "connection refused" while offline.

use crate::core::ports::{DialError, WorkflowDialer};
use crate::core::settings::ConnectionSettings;
use async_trait::async_trait;
use tokio::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InMemoryClient {
    pub address: String,
    pub namespace: String,
}

#[derive(Default)]
pub struct InMemoryDialer {
    requests: Mutex<Vec<ConnectionSettings>>,
    offline: bool,
}

impl InMemoryDialer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    pub async fn requests(&self) -> Vec<ConnectionSettings> {
        self.requests.lock().await.clone()
    }
}

#[async_trait]
impl WorkflowDialer for InMemoryDialer {
    type Client = InMemoryClient;

    async fn dial(&self, settings: &ConnectionSettings) -> Result<InMemoryClient, DialError> {
        self.requests.lock().await.push(settings.clone());
        if self.offline {
            return Err(DialError::new("connection refused"));
        }
        Ok(InMemoryClient {
            address: settings.address.clone(),
            namespace: settings.namespace.clone(),
        })
    }
}

#[cfg(test)]
mod in_memory_dialer_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_dial_and_record_the_request() {
        let dialer = InMemoryDialer::new();
        let settings = ConnectionSettings::new("localhost:7233", "default");
        let client = dialer.dial(&settings).await.expect("expected to dial");
        assert_eq!(client.address, "localhost:7233");
        assert_eq!(client.namespace, "default");
        assert_eq!(dialer.requests().await, vec![settings]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_to_dial_while_offline() {
        let mut dialer = InMemoryDialer::new();
        dialer.toggle_offline();
        let settings = ConnectionSettings::new("localhost:7233", "default");
        let err = dialer.dial(&settings).await.unwrap_err();
        assert_eq!(err.message(), "connection refused");
        assert_eq!(dialer.requests().await.len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_dial_again_once_back_online() {
        let mut dialer = InMemoryDialer::new();
        dialer.toggle_offline();
        dialer.toggle_offline();
        let settings = ConnectionSettings::new("localhost:7233", "prod");
        assert!(dialer.dial(&settings).await.is_ok());
    }
}
