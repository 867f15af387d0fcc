#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("{0} is not one of the offered step sizes")]
    InvalidStepSize(f64),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
