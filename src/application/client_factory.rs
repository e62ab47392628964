use crate::adapters::grpc::grpc_dialer::{GrpcDialer, TemporalClient};
use crate::application::errors::ClientError;
use crate::core::ports::WorkflowDialer;
use crate::core::settings::ConnectionSettings;
use crate::shared::env;
use std::sync::Arc;

pub type EnvLookup = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Builds connected workflow clients.
///
/// Every call resolves the settings again and dials a fresh connection; nothing
/// is cached between calls.
pub struct TemporalClientFactory<TDialer>
where
    TDialer: WorkflowDialer + 'static,
{
    dialer: Arc<TDialer>,
    lookup: EnvLookup,
}

impl<TDialer> TemporalClientFactory<TDialer>
where
    TDialer: WorkflowDialer + 'static,
{
    /// Factory reading configuration from the process environment.
    pub fn new(dialer: Arc<TDialer>) -> Self {
        Self::with_lookup(dialer, env::lookup)
    }

    pub fn with_lookup<L>(dialer: Arc<TDialer>, lookup: L) -> Self
    where
        L: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            dialer,
            lookup: Arc::new(lookup),
        }
    }

    /// Connect to the default namespace.
    pub async fn connect(&self) -> Result<TDialer::Client, ClientError> {
        self.dial(None).await
    }

    pub async fn connect_with_namespace(
        &self,
        namespace: &str,
    ) -> Result<TDialer::Client, ClientError> {
        self.dial(Some(namespace)).await
    }

    async fn dial(&self, namespace: Option<&str>) -> Result<TDialer::Client, ClientError> {
        let settings = ConnectionSettings::resolve(&*self.lookup, namespace);
        tracing::debug!(
            address = %settings.address,
            namespace = %settings.namespace,
            "dialing workflow service"
        );

        match self.dialer.dial(&settings).await {
            Ok(client) => {
                tracing::info!(
                    address = %settings.address,
                    namespace = %settings.namespace,
                    "connected to workflow service"
                );
                Ok(client)
            }
            Err(err) => {
                tracing::warn!(
                    address = %settings.address,
                    namespace = %settings.namespace,
                    error = %err,
                    "failed to connect to workflow service"
                );
                Err(ClientError::Connect(err))
            }
        }
    }
}

/// Connect to the `default` namespace at `TEMPORAL_ADDRESS`.
pub async fn get_temporal_client() -> Result<TemporalClient, ClientError> {
    TemporalClientFactory::new(Arc::new(GrpcDialer::new()))
        .connect()
        .await
}

/// Connect to `namespace` at `TEMPORAL_ADDRESS`.
pub async fn get_temporal_client_with_namespace(
    namespace: &str,
) -> Result<TemporalClient, ClientError> {
    TemporalClientFactory::new(Arc::new(GrpcDialer::new()))
        .connect_with_namespace(namespace)
        .await
}
