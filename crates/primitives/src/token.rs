use std::ops::Range;

use crate::position::ColIdx;

/// A lexical unit on one line, as produced by the host's tokenizer.
///
/// `kind` is a whitespace-separated list of style classes, e.g.
/// `"string url formatting formatting-link-string"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Token {
	/// First column of the token (inclusive).
	pub start: ColIdx,
	/// Last column of the token (exclusive).
	pub end: ColIdx,
	/// Space-separated style classes.
	pub kind: String,
	/// Source text covered by the token.
	pub text: String,
}

impl Token {
	/// Creates a new token.
	pub fn new(start: ColIdx, end: ColIdx, kind: impl Into<String>, text: impl Into<String>) -> Self {
		Self {
			start,
			end,
			kind: kind.into(),
			text: text.into(),
		}
	}

	/// Returns true if `class` appears as a whole word in the token's kind.
	pub fn has_class(&self, class: &str) -> bool {
		self.classes().any(|c| c == class)
	}

	/// Returns true if any class of the token starts with `prefix`.
	pub fn has_class_prefix(&self, prefix: &str) -> bool {
		self.classes().any(|c| c.starts_with(prefix))
	}

	/// Iterates the style classes of the token.
	pub fn classes(&self) -> impl Iterator<Item = &str> {
		self.kind.split_whitespace()
	}

	/// Column span of the token.
	#[inline]
	pub fn span(&self) -> Range<ColIdx> {
		self.start..self.end
	}

	/// Returns true for zero-width tokens.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.end <= self.start
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn has_class_matches_whole_words() {
		let tok = Token::new(4, 5, "string url formatting formatting-link-string", "(");
		assert!(tok.has_class("formatting-link-string"));
		assert!(tok.has_class("url"));
		assert!(!tok.has_class("formatting-link"));
		assert!(!tok.has_class("link"));
	}

	#[test]
	fn has_class_prefix_checks_each_class() {
		let tok = Token::new(0, 1, "link image-alt-text", "]");
		assert!(tok.has_class_prefix("image"));
		assert!(!tok.has_class_prefix("alt"));
	}

	#[test]
	fn empty_kind_has_no_classes() {
		let tok = Token::new(0, 3, "", "abc");
		assert_eq!(tok.classes().count(), 0);
		assert_eq!(tok.span(), 0..3);
		assert!(!tok.is_empty());
	}
}
