use thiserror::Error;

/// Errors raised while applying tuning overrides read from the page.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("override `{key}` is not a number: {value:?}")]
    NotANumber { key: &'static str, value: String },

    #[error("override `{key}` must be positive and finite, got {value}")]
    OutOfRange { key: &'static str, value: f64 },
}
