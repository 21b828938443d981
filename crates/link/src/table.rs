//! Reference-style link definitions collected from a document.
//!
//! A definition line looks like `[name]: url "title"` (up to three spaces of
//! indent). Names are matched case-insensitively with internal whitespace
//! collapsed, the way Markdown renderers match `[text][name]` references.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

static DEFINITION: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^ {0,3}\[([^\]]+)\]:\s*(.*?)\s*$").expect("static definition regex"));

/// One `[name]: content` definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
	/// Line the definition appears on.
	pub line: usize,
	/// Raw text after the colon, suitable for [`crate::split_link`].
	pub content: String,
}

/// Definitions indexed by normalized reference name.
#[derive(Debug, Clone, Default)]
pub struct LinkTable {
	defs: HashMap<String, Vec<Definition>>,
}

/// Normalizes a reference name for lookup.
pub fn normalize_name(name: &str) -> String {
	name.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
}

impl LinkTable {
	/// Creates an empty table.
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds a table by scanning every line of a document.
	pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
		let mut table = Self::new();
		for (line_no, text) in lines.into_iter().enumerate() {
			table.scan_line(line_no, text);
		}
		table
	}

	/// Records the definition on `line`, if it holds one.
	///
	/// Lines must be scanned in ascending order.
	pub fn scan_line(&mut self, line: usize, text: &str) {
		let Some(caps) = DEFINITION.captures(text) else {
			return;
		};
		let name = normalize_name(&caps[1]);
		if name.is_empty() {
			return;
		}
		tracing::trace!(line, name = %name, "link.define");
		self.defs.entry(name).or_default().push(Definition {
			line,
			content: caps[2].to_string(),
		});
	}

	/// Looks up a reference as seen from `line`.
	///
	/// Prefers the nearest definition at or above `line`; falls back to the
	/// first one below it.
	pub fn read(&self, name: &str, line: usize) -> Option<&Definition> {
		let defs = self.defs.get(&normalize_name(name))?;
		defs.iter().rev().find(|d| d.line <= line).or_else(|| defs.first())
	}

	/// Number of distinct reference names.
	pub fn len(&self) -> usize {
		self.defs.len()
	}

	/// Returns true if no definitions were found.
	pub fn is_empty(&self) -> bool {
		self.defs.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn collects_definitions() {
		let table = LinkTable::from_lines([
			"Some text ![logo][Logo]",
			"",
			"[logo]: ./img/logo.png \"The Logo\"",
			"   [Other  Ref]:   http://example.com   ",
			"    [indented]: not-a-definition",
		]);

		assert_eq!(table.len(), 2);
		let logo = table.read("LOGO", 0).expect("logo defined");
		assert_eq!(logo.line, 2);
		assert_eq!(logo.content, "./img/logo.png \"The Logo\"");
		assert_eq!(table.read("other ref", 9).map(|d| d.content.as_str()), Some("http://example.com"));
		assert!(table.read("indented", 4).is_none());
	}

	#[test]
	fn read_prefers_nearest_definition_above() {
		let table = LinkTable::from_lines(["[a]: first", "x", "[a]: second", "y"]);
		assert_eq!(table.read("a", 1).map(|d| d.line), Some(0));
		assert_eq!(table.read("a", 3).map(|d| d.line), Some(2));
	}

	#[test]
	fn normalize_collapses_whitespace() {
		assert_eq!(normalize_name("  Foo \t Bar "), "foo bar");
	}
}
