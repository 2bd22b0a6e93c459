use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Terminal too small (minimum {min_width}x{min_height})")]
    TerminalTooSmall { min_width: u16, min_height: u16 },

    #[error("Config directory creation failed: {0}")]
    ConfigDirError(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
