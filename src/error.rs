use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShuffleError {
    #[error("buffer too short for ROM sprite regions: {len} bytes, need at least {need}")]
    Format { len: usize, need: usize },

    #[error("unsupported container version {0}, only version 1 is supported")]
    UnsupportedVersion(u8),

    #[error("corrupt container: {0}")]
    CorruptContainer(String),

    #[error("no usable source sprites: {0}")]
    NoSourceSprites(String),

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ShuffleError>;
