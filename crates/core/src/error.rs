use thiserror::Error;

/// Top-level error type used across the entire application.
#[derive(Debug, Error)]
pub enum BarError {
    #[error("config error: {0}")]
    Config(String),

    #[error("system error: {0}")]
    System(String),

    #[error("component error: {0}")]
    Component(String),

    #[error("unknown component kind '{0}'")]
    UnknownComponent(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = BarError> = std::result::Result<T, E>;
