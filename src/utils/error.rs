// src/utils/error.rs
use thiserror::Error;

// Define specific error types for different parts of the application
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Industry name must not be empty")]
    MissingIndustry,
}

#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("No API key configured (set GROQ_API_KEY)")]
    MissingApiKey,

    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error), // Automatically convert reqwest errors

    #[error("Completion service rejected the credential (HTTP {0})")]
    Unauthorized(reqwest::StatusCode),

    #[error("Completion service rate limit exceeded")]
    RateLimited,

    #[error("Completion service returned HTTP {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Completion service returned no content")]
    EmptyResponse,
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("Invalid analysis request: {0}")]
    Prompt(#[from] PromptError),

    #[error("AI processing failed: {0}")]
    Completion(#[from] CompletionError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::groq::client::{CompletionClient, CompletionConfig};

    #[test]
    fn test_absent_api_key_is_typed_completion_error() {
        // An unset key reaches the client as an empty string.
        let api_key: Option<String> = None;
        let err: AppError = CompletionClient::new(CompletionConfig::new(api_key.unwrap_or_default()))
            .err()
            .expect("empty key must be rejected")
            .into();
        assert!(matches!(err, AppError::Completion(CompletionError::MissingApiKey)));
        assert_eq!(err.to_string(), "AI processing failed: No API key configured (set GROQ_API_KEY)");
    }
}
