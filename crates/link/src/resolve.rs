use url::Url;

use crate::error::{LinkError, Result};

/// Resolves link destinations against an optional base URL.
///
/// Without a base, URLs pass through untouched. With one, relative
/// destinations are joined onto it; absolute URLs and fragment-only links
/// are never rewritten.
#[derive(Debug, Clone, Default)]
pub struct UrlResolver {
	base: Option<Url>,
}

impl UrlResolver {
	/// Creates a resolver with no base URL.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a resolver that joins relative URLs onto `base`.
	pub fn with_base(base: &str) -> Result<Self> {
		let parsed = Url::parse(base).map_err(|source| LinkError::InvalidBase {
			base: base.to_string(),
			source,
		})?;
		if parsed.cannot_be_a_base() {
			return Err(LinkError::CannotBeABase(base.to_string()));
		}
		Ok(Self { base: Some(parsed) })
	}

	/// Returns the configured base, if any.
	pub fn base(&self) -> Option<&Url> {
		self.base.as_ref()
	}

	/// Resolves `url` against the base.
	pub fn resolve(&self, url: &str) -> String {
		let Some(base) = &self.base else {
			return url.to_string();
		};
		if url.is_empty() || url.starts_with('#') || Url::parse(url).is_ok() {
			return url.to_string();
		}
		match base.join(url) {
			Ok(joined) => joined.into(),
			Err(error) => {
				tracing::debug!(url, %error, "link.resolve failed");
				url.to_string()
			}
		}
	}
}
