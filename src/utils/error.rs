use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {status} from {url}")]
    TransportStatus { status: u16, url: String },

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Malformed data: {message}")]
    Format { message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Endpoint rejected write: {message}")]
    Remote { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SyncError>;
