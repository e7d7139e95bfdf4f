use thiserror::Error;

/// Errors that can occur while setting up the release parser.
///
/// Parsing a release name never fails; these only surface while compiling
/// the pattern catalog or converting strings into typed values.
#[derive(Debug, Error)]
pub enum RelparseError {
    /// A catalog pattern failed to compile (should not happen with static patterns).
    #[error("regex compilation error: {0}")]
    Regex(#[from] regex::Error),

    /// A release type name did not match any known type.
    #[error("unknown release type: {0:?}")]
    UnknownReleaseType(String),
}

/// Result type alias for relparse operations.
pub type Result<T> = std::result::Result<T, RelparseError>;
