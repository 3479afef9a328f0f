use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{key}: '{value}' is not a number")]
    InvalidNumber { key: String, value: String },
    #[error("{key}: {value} is outside {min}..={max}")]
    OutOfRange {
        key: String,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("unknown log level '{0}'")]
    UnknownLogLevel(String),
    #[error("unknown config key '{0}'")]
    UnknownKey(String),
}

#[derive(Debug, Error, PartialEq)]
pub enum EmbedError {
    #[error("invalid embed source '{src}': {reason}")]
    InvalidSource { src: String, reason: String },
}
