use crate::resolve::UrlResolver;
use crate::split::{Link, split_link};
use crate::table::LinkTable;

/// Link lookups a fold host provides to folders.
pub trait LinkResolver {
	/// Returns the raw content of the reference definition `name` as seen
	/// from `line`, or `None` if it is undefined.
	fn read_link(&self, name: &str, line: usize) -> Option<String>;

	/// Resolves a link destination into the URL a widget should load.
	fn resolve_url(&self, url: &str) -> String;

	/// Splits raw link text into URL and title.
	fn split_link(&self, raw: &str) -> Link {
		split_link(raw)
	}
}

/// Link resolution backed by a document's definitions and a URL base.
#[derive(Debug, Clone, Default)]
pub struct DocumentLinks {
	/// Reference definitions found in the document.
	pub table: LinkTable,
	/// Base used for relative destinations.
	pub urls: UrlResolver,
}

impl DocumentLinks {
	/// Collects definitions from `lines` with no URL base.
	pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
		Self {
			table: LinkTable::from_lines(lines),
			urls: UrlResolver::new(),
		}
	}

	/// Replaces the URL resolver.
	pub fn with_urls(mut self, urls: UrlResolver) -> Self {
		self.urls = urls;
		self
	}
}

impl LinkResolver for DocumentLinks {
	fn read_link(&self, name: &str, line: usize) -> Option<String> {
		self.table.read(name, line).map(|def| def.content.clone())
	}

	fn resolve_url(&self, url: &str) -> String {
		self.urls.resolve(url)
	}
}

/// Resolver for hosts without link support: no references, URLs unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLinks;

impl LinkResolver for NoLinks {
	fn read_link(&self, _name: &str, _line: usize) -> Option<String> {
		None
	}

	fn resolve_url(&self, url: &str) -> String {
		url.to_string()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn document_links_read_and_resolve() {
		let links = DocumentLinks::from_lines(["[logo]: img/logo.png \"Logo\""])
			.with_urls(UrlResolver::with_base("https://example.com/a/").unwrap());

		let raw = links.read_link("Logo", 5).unwrap();
		let link = links.split_link(&raw);
		assert_eq!(link.title, "Logo");
		assert_eq!(links.resolve_url(&link.url), "https://example.com/a/img/logo.png");
	}

	#[test]
	fn no_links_is_inert() {
		assert_eq!(NoLinks.read_link("x", 0), None);
		assert_eq!(NoLinks.resolve_url("a b"), "a b");
	}
}
