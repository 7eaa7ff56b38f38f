use std::path::{Path, PathBuf};

/// Convenience result type used across figurine.
pub type FigurineResult<T> = Result<T, FigurineError>;

/// Top-level error taxonomy used by the animation pipeline.
#[derive(thiserror::Error, Debug)]
pub enum FigurineError {
    /// A vector component index other than 0, 1 or 2.
    #[error("index out of range: vector component {0} (expected 0, 1 or 2)")]
    IndexOutOfRange(usize),

    /// Division or normalisation by zero.
    #[error("undefined result: {0}")]
    UndefinedResult(String),

    /// Reading or writing a file failed.
    #[error("i/o error at '{}': {message}", path.display())]
    Io {
        /// File or directory the operation touched.
        path: PathBuf,
        /// Underlying failure.
        message: String,
    },

    /// Assembling or encoding the output media failed.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// Invalid configuration or input data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Raster surface misuse or a rasterizer failure.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other failure, with its source chain preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FigurineError {
    /// Build an [`FigurineError::UndefinedResult`].
    pub fn undefined(msg: impl Into<String>) -> Self {
        Self::UndefinedResult(msg.into())
    }

    /// Build an [`FigurineError::Io`] for `path`.
    pub fn io(path: impl AsRef<Path>, err: impl std::fmt::Display) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            message: err.to_string(),
        }
    }

    /// Build an [`FigurineError::Encoding`].
    pub fn encoding(msg: impl Into<String>) -> Self {
        Self::Encoding(msg.into())
    }

    /// Build an [`FigurineError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`FigurineError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build an [`FigurineError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
