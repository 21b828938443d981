//! Fold options: which built-in folders run, plus custom folders.
//!
//! Options come in two shapes, mirroring how editors usually expose them:
//!
//! - a bare boolean, switching every built-in folder on or off and dropping
//!   custom folders;
//! - a table of per-folder booleans (`image`, `link`, `math`, `html`) with
//!   an ordered list of custom folders.
//!
//! The declarative part deserializes from JSON via [`FoldSettings`]:
//!
//! ```json
//! { "image": true, "link": true }
//! ```

use std::fmt;
use std::time::Duration;

use serde::Deserialize;

use crate::error::Result;
use crate::folders::Folder;
use crate::scheduler::FOLD_DEBOUNCE;

/// Per-folder switches and custom folders.
#[derive(Clone, Default)]
pub struct FoldOptions {
	/// Fold images.
	pub image: bool,
	/// Fold link destinations.
	pub link: bool,
	/// Fold TeX math, when a math folder is registered as a built-in.
	pub math: bool,
	/// Fold inline HTML, when an html folder is registered as a built-in.
	pub html: bool,
	/// Custom folders by type name, tried after built-ins in this order.
	pub custom_folders: Vec<(String, Folder)>,
}

impl fmt::Debug for FoldOptions {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FoldOptions")
			.field("image", &self.image)
			.field("link", &self.link)
			.field("math", &self.math)
			.field("html", &self.html)
			.field(
				"custom_folders",
				&self.custom_folders.iter().map(|(name, _)| name).collect::<Vec<_>>(),
			)
			.finish()
	}
}

impl FoldOptions {
	/// The configuration editors are expected to start from: images, links
	/// and math folded; html left alone.
	pub fn suggested() -> Self {
		Self {
			image: true,
			link: true,
			math: true,
			html: false,
			custom_folders: Vec::new(),
		}
	}

	/// Switch for the built-in folder `name`. Unknown names are off.
	pub fn is_enabled(&self, name: &str) -> bool {
		match name {
			"image" => self.image,
			"link" => self.link,
			"math" => self.math,
			"html" => self.html,
			_ => false,
		}
	}

	/// Appends a custom folder.
	pub fn with_custom(mut self, name: impl Into<String>, folder: Folder) -> Self {
		self.custom_folders.push((name.into(), folder));
		self
	}
}

/// Either a boolean shorthand or full options.
#[derive(Debug, Clone)]
pub enum FoldOption {
	/// Every built-in folder on or off; custom folders cleared.
	All(bool),
	/// Explicit options.
	Options(FoldOptions),
}

impl From<bool> for FoldOption {
	fn from(on: bool) -> Self {
		FoldOption::All(on)
	}
}

impl From<FoldOptions> for FoldOption {
	fn from(options: FoldOptions) -> Self {
		FoldOption::Options(options)
	}
}

impl FoldOption {
	/// Switch for the built-in folder `name`.
	pub fn is_enabled(&self, name: &str) -> bool {
		match self {
			FoldOption::All(on) => *on,
			FoldOption::Options(options) => options.is_enabled(name),
		}
	}

	/// Splits off the custom folders.
	pub(crate) fn take_custom(&mut self) -> Vec<(String, Folder)> {
		match self {
			FoldOption::All(_) => Vec::new(),
			FoldOption::Options(options) => std::mem::take(&mut options.custom_folders),
		}
	}
}

/// Per-folder booleans as written in configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FoldFlags {
	/// Fold images.
	pub image: bool,
	/// Fold link destinations.
	pub link: bool,
	/// Fold TeX math.
	pub math: bool,
	/// Fold inline HTML.
	pub html: bool,
}

/// The serializable part of [`FoldOption`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum FoldSettings {
	/// `true` / `false`.
	All(bool),
	/// `{ "image": true, ... }`.
	Flags(FoldFlags),
}

impl FoldSettings {
	/// Parses settings from JSON.
	pub fn from_json(input: &str) -> Result<Self> {
		Ok(serde_json::from_str(input)?)
	}
}

impl From<FoldSettings> for FoldOption {
	fn from(settings: FoldSettings) -> Self {
		match settings {
			FoldSettings::All(on) => FoldOption::All(on),
			FoldSettings::Flags(flags) => FoldOption::Options(FoldOptions {
				image: flags.image,
				link: flags.link,
				math: flags.math,
				html: flags.html,
				custom_folders: Vec::new(),
			}),
		}
	}
}

/// Engine tunables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoldConfig {
	/// Quiet window before a scheduled full fold runs.
	pub debounce: Duration,
}

impl Default for FoldConfig {
	fn default() -> Self {
		Self { debounce: FOLD_DEBOUNCE }
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::OptionsError;

	#[test]
	fn parses_boolean_shorthand() {
		assert_eq!(FoldSettings::from_json("true").unwrap(), FoldSettings::All(true));
		let option = FoldOption::from(FoldSettings::from_json("false").unwrap());
		assert!(!option.is_enabled("image"));
	}

	#[test]
	fn parses_flags_with_defaults() {
		let settings = FoldSettings::from_json(r#"{ "image": true }"#).unwrap();
		let option = FoldOption::from(settings);
		assert!(option.is_enabled("image"));
		assert!(!option.is_enabled("link"));
		assert!(!option.is_enabled("footnote"));
	}

	#[test]
	fn rejects_unknown_fields() {
		let err = FoldSettings::from_json(r#"{ "images": true }"#).unwrap_err();
		assert!(matches!(err, OptionsError::Json(_)));
	}

	#[test]
	fn bare_true_enables_any_builtin() {
		assert!(FoldOption::All(true).is_enabled("footnote"));
	}

	#[test]
	fn suggested_leaves_html_off() {
		let opts = FoldOptions::suggested();
		assert!(opts.image && opts.link && opts.math);
		assert!(!opts.html);
		assert!(format!("{opts:?}").contains("custom_folders: []"));
	}
}
