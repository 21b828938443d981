use std::collections::BTreeMap;

use mdfold_link::{DocumentLinks, LinkResolver};
use mdfold_primitives::{LineIdx, MarkedSpan, MarkerId, Position, TextRange, Token};

use super::tokenize::tokenize_line;
use crate::host::FoldHost;
use crate::widget::Widget;

/// A marker held by [`MemoryEditor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryMarker {
	/// Covered range.
	pub range: TextRange,
	/// Replacement widget; `None` for foreign (non-fold) markers such as
	/// highlights.
	pub widget: Option<Widget>,
}

/// In-memory [`FoldHost`] for tests and demos.
///
/// Lines are plain strings tokenized by [`tokenize_line`]; columns are byte
/// offsets. Marker ids increase monotonically and are never reused.
#[derive(Debug)]
pub struct MemoryEditor {
	lines: Vec<String>,
	markers: BTreeMap<MarkerId, MemoryMarker>,
	next_marker: u64,
	cursor: Position,
	focused: bool,
	operation_depth: usize,
	operations: usize,
	changed: Vec<MarkerId>,
	links: DocumentLinks,
}

impl MemoryEditor {
	/// Creates an editor holding `text`, cursor at the document start.
	pub fn new(text: &str) -> Self {
		let lines: Vec<String> = text.split('\n').map(str::to_string).collect();
		let links = DocumentLinks::from_lines(lines.iter().map(String::as_str));
		Self {
			lines,
			markers: BTreeMap::new(),
			next_marker: 1,
			cursor: Position::default(),
			focused: false,
			operation_depth: 0,
			operations: 0,
			changed: Vec::new(),
			links,
		}
	}

	/// Builder-style cursor placement.
	pub fn with_cursor(mut self, pos: Position) -> Self {
		self.cursor = pos;
		self
	}

	/// Places the cursor at the end of the last line.
	pub fn with_cursor_at_end(mut self) -> Self {
		let line = self.lines.len() - 1;
		self.cursor = Position::new(line, self.lines[line].len());
		self
	}

	/// Replaces the link resolver.
	pub fn with_links(mut self, links: DocumentLinks) -> Self {
		self.links = links;
		self
	}

	/// Text of `line`.
	pub fn line(&self, line: LineIdx) -> &str {
		&self.lines[line]
	}

	/// Replaces the text of `line`, dropping every marker touching it.
	///
	/// Returns the dropped markers with their ranges so the caller can
	/// forward the removals to the engine.
	pub fn set_line(&mut self, line: LineIdx, text: &str) -> Vec<(MarkerId, TextRange)> {
		self.lines[line] = text.to_string();
		let dropped: Vec<_> = self
			.markers
			.iter()
			.filter(|(_, m)| m.range.lines().contains(&line))
			.map(|(&id, m)| (id, m.range))
			.collect();
		for (id, _) in &dropped {
			self.markers.remove(id);
		}
		self.links = DocumentLinks::from_lines(self.lines.iter().map(String::as_str)).with_urls(self.links.urls.clone());
		dropped
	}

	/// Adds a marker with no widget, standing in for highlights, bookmarks
	/// and other markers the engine does not own.
	pub fn add_foreign_marker(&mut self, range: TextRange) -> MarkerId {
		self.insert(range, None)
	}

	/// Every live marker.
	pub fn markers(&self) -> impl Iterator<Item = (MarkerId, &MemoryMarker)> {
		self.markers.iter().map(|(&id, m)| (id, m))
	}

	/// Live markers that carry a widget, ordered by range start.
	pub fn folds(&self) -> Vec<(TextRange, Widget)> {
		let mut folds: Vec<_> = self
			.markers
			.values()
			.filter_map(|m| m.widget.clone().map(|w| (m.range, w)))
			.collect();
		folds.sort_by_key(|(range, _)| (range.from, range.to));
		folds
	}

	/// The marker behind `id`, if still live.
	pub fn marker(&self, id: MarkerId) -> Option<&MemoryMarker> {
		self.markers.get(&id)
	}

	/// Whether [`FoldHost::focus`] was called.
	pub fn is_focused(&self) -> bool {
		self.focused
	}

	/// Number of completed top-level operations.
	pub fn operations(&self) -> usize {
		self.operations
	}

	/// Markers reported through [`FoldHost::marker_changed`], oldest first.
	pub fn changed_markers(&self) -> &[MarkerId] {
		&self.changed
	}

	fn insert(&mut self, range: TextRange, widget: Option<Widget>) -> MarkerId {
		let id = MarkerId(self.next_marker);
		self.next_marker += 1;
		self.markers.insert(id, MemoryMarker { range, widget });
		id
	}
}

impl FoldHost for MemoryEditor {
	fn first_line(&self) -> LineIdx {
		0
	}

	fn last_line(&self) -> LineIdx {
		self.lines.len() - 1
	}

	fn line_len(&self, line: LineIdx) -> usize {
		self.lines.get(line).map_or(0, String::len)
	}

	fn line_tokens(&self, line: LineIdx) -> Vec<Token> {
		self.lines.get(line).map(|l| tokenize_line(l)).unwrap_or_default()
	}

	fn marked_spans(&self, line: LineIdx) -> Vec<MarkedSpan> {
		self.markers
			.values()
			.filter(|m| m.range.lines().contains(&line))
			.map(|m| MarkedSpan {
				from: (m.range.from.line == line).then_some(m.range.from.ch),
				to: (m.range.to.line == line).then_some(m.range.to.ch),
			})
			.collect()
	}

	fn find_marks(&self, range: TextRange) -> Vec<MarkerId> {
		self.markers
			.iter()
			.filter(|(_, m)| m.range.overlaps(&range))
			.map(|(&id, _)| id)
			.collect()
	}

	fn mark_text(&mut self, range: TextRange, widget: Widget) -> MarkerId {
		self.insert(range, Some(widget))
	}

	fn marker_range(&self, marker: MarkerId) -> Option<TextRange> {
		self.markers.get(&marker).map(|m| m.range)
	}

	fn clear_marker(&mut self, marker: MarkerId) -> Option<TextRange> {
		self.markers.remove(&marker).map(|m| m.range)
	}

	fn marker_changed(&mut self, marker: MarkerId) {
		self.changed.push(marker);
	}

	fn widget_mut(&mut self, marker: MarkerId) -> Option<&mut Widget> {
		self.markers.get_mut(&marker)?.widget.as_mut()
	}

	fn cursor(&self) -> Position {
		self.cursor
	}

	fn set_cursor(&mut self, pos: Position) {
		self.cursor = pos;
	}

	fn focus(&mut self) {
		self.focused = true;
	}

	fn text_range(&self, range: TextRange) -> String {
		let mut out = String::new();
		for line in range.lines() {
			let Some(text) = self.lines.get(line) else {
				break;
			};
			let start = if line == range.from.line { range.from.ch.min(text.len()) } else { 0 };
			let end = if line == range.to.line { range.to.ch.min(text.len()) } else { text.len() };
			if line != range.from.line {
				out.push('\n');
			}
			out.push_str(text.get(start..end.max(start)).unwrap_or_default());
		}
		out
	}

	fn begin_operation(&mut self) {
		self.operation_depth += 1;
	}

	fn end_operation(&mut self) {
		self.operation_depth = self.operation_depth.saturating_sub(1);
		if self.operation_depth == 0 {
			self.operations += 1;
		}
	}

	fn links(&self) -> &dyn LinkResolver {
		&self.links
	}
}
