use thiserror::Error;

/// Failures surfaced to the client shell.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The store answered but rejected the operation
    #[error("{0}")]
    Store(String),

    /// The request never produced a store answer
    #[error("Connection error: {0}")]
    Transport(String),

    #[error("Another action is still in progress")]
    Busy,

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<tonic::Status> for ClientError {
    fn from(status: tonic::Status) -> Self {
        ClientError::Transport(format!("{}: {}", status.code(), status.message()))
    }
}

impl From<tonic::transport::Error> for ClientError {
    fn from(err: tonic::transport::Error) -> Self {
        ClientError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_maps_to_transport() {
        let err = ClientError::from(tonic::Status::unavailable("daemon down"));
        match err {
            ClientError::Transport(msg) => assert!(msg.contains("daemon down")),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_store_error_displays_message_only() {
        assert_eq!(
            ClientError::Store("Item not found: 2".to_string()).to_string(),
            "Item not found: 2"
        );
    }
}
