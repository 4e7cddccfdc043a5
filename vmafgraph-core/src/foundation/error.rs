/// Convenience result type used across vmafgraph.
pub type VmafgraphResult<T> = Result<T, VmafgraphError>;

/// Top-level error taxonomy used by report APIs.
#[derive(thiserror::Error, Debug)]
pub enum VmafgraphError {
    /// The report source path did not resolve.
    #[error("report not found: {0}")]
    NotFound(String),

    /// The document is not well-formed markup, or a required element or
    /// attribute is absent.
    #[error("malformed document: {0}")]
    MalformedDocument(String),

    /// A present attribute's text could not be coerced to its declared
    /// numeric type.
    #[error("format error: {0}")]
    Format(String),

    /// A caller-supplied argument is out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VmafgraphError {
    /// Build a [`VmafgraphError::NotFound`] value.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Build a [`VmafgraphError::MalformedDocument`] value.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedDocument(msg.into())
    }

    /// Build a [`VmafgraphError::Format`] value.
    pub fn format(msg: impl Into<String>) -> Self {
        Self::Format(msg.into())
    }

    /// Build a [`VmafgraphError::InvalidArgument`] value.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
