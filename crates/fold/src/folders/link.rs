//! `[text](url "title")` to a link icon; the bracketed text stays editable.

use mdfold_primitives::{TextRange, Token};

use super::{FoldRequest, LINK_STRING_FORMATTING};
use crate::seeker::{SeekFrom, TokenCondition};
use crate::stream::FoldStream;
use crate::widget::{LinkIcon, Widget};

/// Fold type name.
pub const NAME: &str = "link";

fn is_url_close(token: &Token) -> bool {
	token.text == ")" && token.has_class(LINK_STRING_FORMATTING)
}

/// Folds a link destination `( ... )`.
///
/// Skips destinations that belong to an image (the token before `(` is
/// image-styled); the image folder owns those.
pub fn fold_link(stream: &mut FoldStream<'_>, token: &Token) -> Option<FoldRequest> {
	if token.text != "(" || !token.has_class(LINK_STRING_FORMATTING) {
		return None;
	}
	if stream.prev_token().is_some_and(|prev| prev.has_class_prefix("image")) {
		return None;
	}

	let line = stream.line_no();
	let url_end = stream.find_next(TokenCondition::Predicate(&is_url_close), SeekFrom::Next)?;
	let range = TextRange::on_line(line, token.start, url_end.token.end);
	let grant = match stream.request_range(range) {
		Ok(grant) => grant,
		Err(conflict) => {
			tracing::debug!(line, ?conflict, "fold.link range refused");
			return None;
		}
	};

	let host = stream.host();
	let text = host.text_range(range);
	let inner = text
		.strip_prefix('(')
		.and_then(|t| t.strip_suffix(')'))
		.unwrap_or(&text);
	let links = host.links();
	let link = links.split_link(inner);

	Some(FoldRequest::new(
		grant,
		Widget::LinkIcon(LinkIcon::new(links.resolve_url(&link.url), link.title)),
	))
}
