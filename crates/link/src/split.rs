use std::sync::LazyLock;

use regex::Regex;

/// A link destination split into URL and optional title.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Link {
	/// The destination, without surrounding whitespace.
	pub url: String,
	/// The title, unquoted. Empty when absent.
	pub title: String,
}

/// `url "quoted title"` or `url bare title`.
static URL_AND_TITLE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r#"^(\S+)\s+("(?:[^"\\]+|\\.)+"|[^"\s].*)"#).expect("static link regex")
});

/// Splits the inside of a link parenthetical (or a reference definition body)
/// into URL and title.
///
/// A double-quoted title is unquoted and `\"` escapes are resolved; any other
/// trailing text is taken as the title verbatim.
pub fn split_link(content: &str) -> Link {
	let content = content.trim();
	let Some(caps) = URL_AND_TITLE.captures(content) else {
		return Link {
			url: content.to_string(),
			title: String::new(),
		};
	};

	let url = caps[1].to_string();
	let raw_title = &caps[2];
	let title = match raw_title.strip_prefix('"').and_then(|t| t.strip_suffix('"')) {
		Some(inner) => inner.replace("\\\"", "\""),
		None => raw_title.to_string(),
	};

	Link { url, title }
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case("http://example.com", "http://example.com", "")]
	#[case("  http://example.com  ", "http://example.com", "")]
	#[case(r#"http://example.com "Example""#, "http://example.com", "Example")]
	#[case(r#"a.png "say \"hi\"""#, "a.png", r#"say "hi""#)]
	#[case("a.png bare words here", "a.png", "bare words here")]
	#[case("", "", "")]
	fn splits_url_and_title(#[case] input: &str, #[case] url: &str, #[case] title: &str) {
		let link = split_link(input);
		assert_eq!(link.url, url);
		assert_eq!(link.title, title);
	}
}
