//! Error types for CraftStash
//!
//! All errors use thiserror for structured error handling.
//! These errors can be serialized to the frontend.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// A form field failed validation. The message is user-facing.
    #[error("{0}")]
    Validation(String),

    /// An operation referenced a supply id that is not in the live set.
    #[error("Supply not found: {0}")]
    NotFound(u64),

    #[error("{0}")]
    Generic(String),
}

impl serde::Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
