// Ports define what the factory needs from the outside world, without implementing it.
//
// Purpose
// - Describe the "dial" capability of the workflow client library as a trait.
//
// Boundaries
// - No transport code here. Adapters implement WorkflowDialer in the adapters layer.
//
// Testing guidance
// - Use the in memory dialer to observe what the factory asks for.

use crate::core::settings::ConnectionSettings;
use async_trait::async_trait;
use std::error::Error as StdError;
use thiserror::Error;

type BoxedCause = Box<dyn StdError + Send + Sync + 'static>;

/// Dial failure. The message already contains the flattened cause chain, so the
/// original error is kept as a plain field rather than an error source.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct DialError {
    message: String,
    cause: Option<BoxedCause>,
}

impl DialError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    pub fn from_source<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self {
            message: flatten(&err),
            cause: Some(Box::new(err)),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The transport error this failure was built from, for downcasting.
    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }
}

/// Join an error and its sources into one message, outermost first.
fn flatten(err: &(dyn StdError + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

#[async_trait]
pub trait WorkflowDialer: Send + Sync {
    type Client: Send;

    async fn dial(&self, settings: &ConnectionSettings) -> Result<Self::Client, DialError>;
}
