use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(
        "Storage credentials are missing: set access_key_id/secret_access_key in the \
         [storage] section or the AWS_ACCESS_KEY_ID/AWS_SECRET_ACCESS_KEY environment variables"
    )]
    MissingCredentials,
    #[error("Error: config file not found: '{path}'")]
    FileNotFound { path: String },
    #[error("Config parse error: {message}")]
    ParseError { message: String },
}

/// Failures talking to the object store, split by the two kinds callers
/// need to tell apart: bad credentials versus everything else.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Storage credentials are missing or invalid: {0}")]
    Credentials(String),
    #[error("Error accessing object storage: {0}")]
    Access(String),
}

impl From<object_store::Error> for StoreError {
    fn from(err: object_store::Error) -> Self {
        match err {
            object_store::Error::Unauthenticated { .. }
            | object_store::Error::PermissionDenied { .. } => {
                StoreError::Credentials(err.to_string())
            }
            other => StoreError::Access(other.to_string()),
        }
    }
}
