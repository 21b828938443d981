//! Folder strategies: recognizing foldable constructs in a token stream.
//!
//! A folder is called with the stream and the current token. It returns
//! `None` unless the token begins a construct it handles, it found the
//! construct's end, and [`FoldStream::request_range`] granted the range.
//!
//! Writing a folder:
//!
//! 1. Check whether `token` begins the construct (`"!"` for images).
//! 2. Locate the end with [`FoldStream::find_next`].
//! 3. Build the range; it starts at `(stream.line_no(), token.start)`.
//! 4. Return `None` unless [`FoldStream::request_range`] grants it.
//! 5. Return a [`FoldRequest`] built from the grant and a widget.

use std::sync::Arc;

use mdfold_primitives::{TextRange, Token};

use crate::arbiter::RangeGrant;
use crate::stream::FoldStream;
use crate::widget::Widget;

pub mod image;
pub mod link;

/// A folder strategy.
pub type Folder = Arc<dyn Fn(&mut FoldStream<'_>, &Token) -> Option<FoldRequest> + Send + Sync>;

/// Token class of the `!` that opens an image.
pub const IMAGE_MARKER: &str = "image-marker";
/// Token class of the delimiters around a link destination or reference.
pub const LINK_STRING_FORMATTING: &str = "formatting-link-string";

/// A granted range and the widget to collapse it into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldRequest {
	range: TextRange,
	widget: Widget,
}

impl FoldRequest {
	/// Pairs an approved range with its widget.
	pub fn new(grant: RangeGrant, widget: Widget) -> Self {
		Self {
			range: grant.range(),
			widget,
		}
	}

	/// Range to fold.
	pub fn range(&self) -> TextRange {
		self.range
	}

	/// Widget to show in place of the range.
	pub fn widget(&self) -> &Widget {
		&self.widget
	}

	pub(crate) fn into_parts(self) -> (TextRange, Widget) {
		(self.range, self.widget)
	}
}

/// Wraps a closure or function as a [`Folder`].
pub fn folder<F>(f: F) -> Folder
where
	F: Fn(&mut FoldStream<'_>, &Token) -> Option<FoldRequest> + Send + Sync + 'static,
{
	Arc::new(f)
}

/// The built-in folders, in priority order.
pub fn builtin_folders() -> Vec<(&'static str, Folder)> {
	vec![(image::NAME, folder(image::fold_image)), (link::NAME, folder(link::fold_link))]
}
