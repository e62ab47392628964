use crate::core::ports::DialError;
use thiserror::Error;

// The dial error is rendered into the message and not chained as a source, so
// report printers such as anyhow show the cause once.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("unable to create client: {0}")]
    Connect(DialError),
}

impl ClientError {
    pub fn dial_error(&self) -> &DialError {
        match self {
            ClientError::Connect(err) => err,
        }
    }
}

impl From<DialError> for ClientError {
    fn from(err: DialError) -> Self {
        ClientError::Connect(err)
    }
}
