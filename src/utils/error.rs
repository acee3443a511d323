use thiserror::Error;

#[derive(Error, Debug)]
pub enum AcError {
    #[error("Logger initialisation failed: {message}")]
    LoggerInit { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AcError>;
