use thiserror::Error;

/// Errors from transformation helpers that are not per-record rejections.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// Text is not a `[-]MM:SS` duration.
    #[error("invalid duration '{value}' (expected [-]MM:SS)")]
    InvalidDuration { value: String },
}
