use thiserror::Error;

/// Main error type for llama-fetch
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Unsupported model {0}")]
    UnsupportedModel(String),

    #[error("Config error: {0}\n\nTroubleshooting:\n- Check config file: ~/.config/llama-fetch/config.toml\n- Run with RUST_LOG=debug for more details")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, FetchError>;
