use thiserror::Error;

#[derive(Error, Debug)]
pub enum ValidateError {
    /// The raw bytes could not be decoded into a dataset
    #[error("Failed to decode CSV content: {0}")]
    Decode(String),

    /// The Arrow kernel produced an error (e.g., unsupported cast)
    #[error("Arrow computation error: {0}")]
    ArrowError(#[from] arrow::error::ArrowError),
}
