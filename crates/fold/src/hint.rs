use std::ops::RangeInclusive;

use mdfold_primitives::LineIdx;

/// Lines worth re-scanning on the next quick fold.
///
/// Filled by rejected range requests and marker removals. Duplicates are
/// kept; only the min/max matter when the set is drained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuickFoldHint {
	lines: Vec<LineIdx>,
}

impl QuickFoldHint {
	/// Records a line.
	pub fn push(&mut self, line: LineIdx) {
		self.lines.push(line);
	}

	/// Forgets every recorded line.
	pub fn clear(&mut self) {
		self.lines.clear();
	}

	/// Returns true if no line is recorded.
	pub fn is_empty(&self) -> bool {
		self.lines.is_empty()
	}

	/// Recorded lines in insertion order.
	pub fn lines(&self) -> &[LineIdx] {
		&self.lines
	}

	/// Returns true if `line` is recorded.
	pub fn contains(&self, line: LineIdx) -> bool {
		self.lines.contains(&line)
	}

	/// The inclusive range spanning every recorded line.
	pub fn span(&self) -> Option<RangeInclusive<LineIdx>> {
		let min = *self.lines.iter().min()?;
		let max = *self.lines.iter().max()?;
		Some(min..=max)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn span_covers_min_to_max() {
		let mut hint = QuickFoldHint::default();
		assert_eq!(hint.span(), None);
		hint.push(7);
		hint.push(3);
		hint.push(7);
		assert_eq!(hint.span(), Some(3..=7));
		assert_eq!(hint.lines(), &[7, 3, 7]);
	}
}
