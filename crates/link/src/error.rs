//! Error types for link resolution.

use thiserror::Error;

/// Errors raised while configuring link resolution.
#[derive(Debug, Error)]
pub enum LinkError {
	/// The base URL used to resolve relative links could not be parsed.
	#[error("invalid base URL {base:?}: {source}")]
	InvalidBase {
		/// The rejected input.
		base: String,
		/// The underlying parse failure.
		source: url::ParseError,
	},

	/// The base URL cannot have relative references joined onto it.
	#[error("base URL {0:?} cannot be a base")]
	CannotBeABase(String),
}

/// Result type for link operations.
pub type Result<T> = std::result::Result<T, LinkError>;
