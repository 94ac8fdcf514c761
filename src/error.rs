//! Simplepedia error types

use thiserror::Error;

/// Errors raised by the article store, index, seed loader and session
#[derive(Error, Debug)]
pub enum SimplepediaError {
    /// Article rejected at the store boundary (e.g. empty title)
    #[error("Invalid article: {0}")]
    InvalidArticle(String),

    /// Another article already uses this title
    #[error("Duplicate title: {0}")]
    DuplicateTitle(String),

    /// No article with the given title
    #[error("No such article: {0}")]
    NoSuchArticle(String),

    /// Edited timestamp could not be parsed
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// Session event not allowed in the current state
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    /// Seed data is not valid JSON or does not match the article schema
    #[error("Seed error: {0}")]
    Seed(#[from] serde_json::Error),

    /// IO error while reading a seed file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using SimplepediaError
pub type Result<T> = std::result::Result<T, SimplepediaError>;
