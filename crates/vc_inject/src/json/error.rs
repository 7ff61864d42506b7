use thiserror::Error;

/// Failure of a [`JsonSerializer`](super::JsonSerializer) entry point.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum JsonError {
    /// The document is malformed, does not fit the type, or a converter
    /// failed while reading or writing it.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("type `{type_path}` is not registered")]
    Unregistered { type_path: &'static str },

    #[error("expected a value of type `{expected}`, found `{actual}`")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },
}
