use crate::position::{LineIdx, Position};

/// A document range `[from, to)` between two positions.
///
/// Unlike a selection there is no direction: `from` never follows `to`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TextRange {
	/// Start position (inclusive).
	pub from: Position,
	/// End position (exclusive).
	pub to: Position,
}

impl TextRange {
	/// Creates a range, swapping the ends if they are given out of order.
	pub fn new(from: impl Into<Position>, to: impl Into<Position>) -> Self {
		let (from, to) = (from.into(), to.into());
		if to < from {
			Self { from: to, to: from }
		} else {
			Self { from, to }
		}
	}

	/// Creates a range on a single line.
	pub fn on_line(line: LineIdx, from_ch: usize, to_ch: usize) -> Self {
		Self::new(Position::new(line, from_ch), Position::new(line, to_ch))
	}

	/// Returns true if both ends are the same position.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.from == self.to
	}

	/// Returns true if the range starts and ends on the same line.
	#[inline]
	pub fn is_single_line(&self) -> bool {
		self.from.line == self.to.line
	}

	/// Returns true if `pos` lies in `[from, to)`.
	pub fn contains(&self, pos: Position) -> bool {
		pos >= self.from && pos < self.to
	}

	/// Returns true if `pos` lies in `[from, to]`, both ends included.
	///
	/// A cursor sitting right after the last folded column still counts as
	/// inside, since folding would swallow it into the widget.
	pub fn contains_inclusive(&self, pos: Position) -> bool {
		pos >= self.from && pos <= self.to
	}

	/// Returns true if this range overlaps another.
	///
	/// Touching ranges do not overlap. Two empty ranges overlap only when they
	/// sit at the same position.
	pub fn overlaps(&self, other: &TextRange) -> bool {
		if self.from < other.to && other.from < self.to {
			return true;
		}

		self.is_empty() && other.is_empty() && self.from == other.from
	}

	/// Returns the inclusive line span covered by the range.
	pub fn lines(&self) -> std::ops::RangeInclusive<LineIdx> {
		self.from.line..=self.to.line
	}
}

#[cfg(test)]
mod tests;
