//! Error types for fold configuration.

use thiserror::Error;

/// Errors raised while reading fold options.
#[derive(Debug, Error)]
pub enum OptionsError {
	/// The option document is not valid JSON or has the wrong shape.
	#[error("invalid fold options: {0}")]
	Json(#[from] serde_json::Error),
}

/// Result type for option parsing.
pub type Result<T> = std::result::Result<T, OptionsError>;
