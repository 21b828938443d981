//! `![alt](url "title")` and `![alt][ref]` to an inline image.

use mdfold_primitives::{Position, TextRange, Token};

use super::{FoldRequest, IMAGE_MARKER, LINK_STRING_FORMATTING};
use crate::seeker::{SeekFrom, TokenCondition};
use crate::stream::FoldStream;
use crate::widget::{ImageWidget, Widget};

/// Fold type name.
pub const NAME: &str = "image";

/// Folds from the `!` through the closing `)` or `]` of the destination.
///
/// A `]` closer means the brackets hold a reference name, which is looked
/// up through the host's link resolver; undefined references stay unfolded.
pub fn fold_image(stream: &mut FoldStream<'_>, token: &Token) -> Option<FoldRequest> {
	if token.text != "!" || !token.has_class(IMAGE_MARKER) {
		return None;
	}

	let line = stream.line_no();
	let url_begin = stream.find_next(TokenCondition::Class(LINK_STRING_FORMATTING), SeekFrom::Next)?;
	let url_end = stream.find_next(
		TokenCondition::Class(LINK_STRING_FORMATTING),
		SeekFrom::Index(url_begin.i_token + 1),
	)?;

	let range = TextRange::on_line(line, token.start, url_end.token.end);
	let grant = match stream.request_range(range) {
		Ok(grant) => grant,
		Err(conflict) => {
			tracing::debug!(line, ?conflict, "fold.image range refused");
			return None;
		}
	};

	let host = stream.host();
	let links = host.links();
	let mut raw = host.text_range(TextRange::new(
		Position::new(line, url_begin.token.start + 1),
		Position::new(line, url_end.token.start),
	));
	if url_end.token.text == "]" {
		let Some(content) = links.read_link(&raw, line) else {
			tracing::debug!(line, reference = %raw, "fold.image undefined reference");
			return None;
		};
		raw = content;
	}
	let url = links.resolve_url(&links.split_link(&raw).url);

	let title = host.text_range(TextRange::new(
		Position::new(line, token.start + 2),
		Position::new(line, url_begin.token.start.saturating_sub(1)),
	));

	Some(FoldRequest::new(grant, Widget::Image(ImageWidget::new(url, title))))
}
