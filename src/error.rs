use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("replacement character must be a single character")]
    InvalidReplacement,
    #[error("not a valid {provider} URL: {url}")]
    InvalidUrl { provider: &'static str, url: String },
    #[error("no provider found for URL: {0}")]
    NoProviderFound(String),
    #[error("missing template fields: {0}")]
    MissingFields(String),
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
