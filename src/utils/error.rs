use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZapperError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Scenario file parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Command '{command}' is not supported by the {remote} remote")]
    UnsupportedCommand { command: String, remote: String },
}

pub type Result<T> = std::result::Result<T, ZapperError>;
