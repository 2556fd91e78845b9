/// Errors raised while building a checker or talking to the restriction service.
///
/// Structural rule violations are never errors; they are reported as issue
/// strings on the verdict.
#[derive(Debug, thiserror::Error)]
pub enum LegalityError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-2xx status. `body` keeps the raw
    /// response text for diagnostics.
    #[error("server returned HTTP {status}")]
    Status { status: u16, body: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand for results carrying a [`LegalityError`].
pub type Result<T> = std::result::Result<T, LegalityError>;
