//! The editing surface the engine folds text in.

use mdfold_link::LinkResolver;
use mdfold_primitives::{LineIdx, MarkedSpan, MarkerId, Position, TextRange, Token};

use crate::widget::Widget;

/// Text-editing host consumed by the fold engine.
///
/// The host owns the document, its tokenizer, its markers and the cursor.
/// The engine reads tokens and markers, asks for new markers through
/// [`FoldHost::mark_text`], and removes them with [`FoldHost::clear_marker`].
///
/// When the host clears a fold marker on its own (the user edits the text
/// under it, say), it must report that through
/// [`crate::Fold::marker_cleared`].
pub trait FoldHost {
	/// First line of the document.
	fn first_line(&self) -> LineIdx;

	/// Last line of the document (inclusive).
	fn last_line(&self) -> LineIdx;

	/// Length of `line` in columns.
	fn line_len(&self, line: LineIdx) -> usize;

	/// Tokens of `line`, ordered by start column.
	fn line_tokens(&self, line: LineIdx) -> Vec<Token>;

	/// Portions of every marker (fold or foreign) that fall on `line`.
	fn marked_spans(&self, line: LineIdx) -> Vec<MarkedSpan>;

	/// Markers overlapping `range`.
	fn find_marks(&self, range: TextRange) -> Vec<MarkerId>;

	/// Collapses `range` into `widget`, returning the new marker.
	fn mark_text(&mut self, range: TextRange, widget: Widget) -> MarkerId;

	/// Current range of a live marker.
	fn marker_range(&self, marker: MarkerId) -> Option<TextRange>;

	/// Removes a marker, returning the range it covered. `None` if the
	/// marker was already gone.
	fn clear_marker(&mut self, marker: MarkerId) -> Option<TextRange>;

	/// Tells the host a marker's widget changed size and needs re-layout.
	fn marker_changed(&mut self, marker: MarkerId);

	/// Mutable access to a live marker's widget.
	fn widget_mut(&mut self, marker: MarkerId) -> Option<&mut Widget>;

	/// Current cursor position.
	fn cursor(&self) -> Position;

	/// Moves the cursor.
	fn set_cursor(&mut self, pos: Position);

	/// Gives the editing surface keyboard focus.
	fn focus(&mut self);

	/// Raw document text in `range`, lines joined with `\n`.
	fn text_range(&self, range: TextRange) -> String;

	/// Opens a batched-update scope; reflow waits until the matching
	/// [`FoldHost::end_operation`].
	fn begin_operation(&mut self) {}

	/// Closes the scope opened by [`FoldHost::begin_operation`].
	fn end_operation(&mut self) {}

	/// Link lookups for folders.
	fn links(&self) -> &dyn LinkResolver;
}
