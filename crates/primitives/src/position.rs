/// Zero-based line index in the host document.
pub type LineIdx = usize;

/// Zero-based column within a line, in the host's column units.
///
/// The engine only compares and slices columns, so hosts are free to count
/// bytes, chars or UTF-16 units as long as tokens and positions agree.
pub type ColIdx = usize;

/// A location in the document as `(line, column)`.
///
/// Ordering is lexicographic: line first, then column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
	/// Zero-based line index.
	pub line: LineIdx,
	/// Zero-based column in the line.
	pub ch: ColIdx,
}

impl Position {
	/// Creates a new position.
	pub const fn new(line: LineIdx, ch: ColIdx) -> Self {
		Self { line, ch }
	}

	/// Returns the position `offset` columns further along the same line.
	pub const fn offset(self, offset: ColIdx) -> Self {
		Self {
			line: self.line,
			ch: self.ch + offset,
		}
	}
}

impl From<(LineIdx, ColIdx)> for Position {
	fn from((line, ch): (LineIdx, ColIdx)) -> Self {
		Self::new(line, ch)
	}
}
