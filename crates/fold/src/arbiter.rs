//! Range arbitration: deciding whether a proposed fold range is safe.

use mdfold_primitives::TextRange;

use crate::hint::QuickFoldHint;
use crate::host::FoldHost;

/// Why a fold range was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeConflict {
	/// The cursor is inside the range, ends included.
	CursorInside,
	/// Another marker already overlaps the range.
	HasMarkers,
}

/// Proof that a range passed arbitration.
///
/// Only [`request_range`] creates grants, and a [`crate::FoldRequest`] can
/// only be built from one, so no fold skips the checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeGrant {
	range: TextRange,
}

impl RangeGrant {
	/// The approved range.
	pub fn range(&self) -> TextRange {
		self.range
	}
}

/// Outcome of [`request_range`].
pub type RequestRangeResult = Result<RangeGrant, RangeConflict>;

/// Checks `range` against existing markers and the cursor.
///
/// Existing markers win over the cursor check. Any refusal records the
/// range's first line in `hints` so a later quick fold retries it.
pub fn request_range(host: &dyn FoldHost, range: TextRange, hints: &mut QuickFoldHint) -> RequestRangeResult {
	let verdict = if !host.find_marks(range).is_empty() {
		Err(RangeConflict::HasMarkers)
	} else if range.contains_inclusive(host.cursor()) {
		Err(RangeConflict::CursorInside)
	} else {
		Ok(RangeGrant { range })
	};

	if let Err(conflict) = verdict {
		tracing::trace!(?range, ?conflict, "fold.request_range rejected");
		hints.push(range.from.line);
	}
	verdict
}

#[cfg(test)]
mod tests {
	use mdfold_primitives::Position;

	use super::*;
	use crate::testing::MemoryEditor;

	#[test]
	fn grants_free_range() {
		let host = MemoryEditor::new("[a](b)\n").with_cursor(Position::new(1, 0));
		let mut hints = QuickFoldHint::default();
		let grant = request_range(&host, TextRange::on_line(0, 3, 6), &mut hints).unwrap();
		assert_eq!(grant.range(), TextRange::on_line(0, 3, 6));
		assert!(hints.is_empty());
	}

	#[test]
	fn cursor_at_either_end_is_inside() {
		let mut hints = QuickFoldHint::default();
		for ch in [3, 4, 6] {
			let host = MemoryEditor::new("[a](b)").with_cursor(Position::new(0, ch));
			let verdict = request_range(&host, TextRange::on_line(0, 3, 6), &mut hints);
			assert_eq!(verdict, Err(RangeConflict::CursorInside), "cursor at {ch}");
		}
		assert_eq!(hints.lines(), &[0, 0, 0]);
	}

	#[test]
	fn markers_take_priority_over_cursor() {
		let mut host = MemoryEditor::new("x\n[a](b)").with_cursor(Position::new(1, 4));
		host.add_foreign_marker(TextRange::on_line(1, 4, 5));
		let mut hints = QuickFoldHint::default();
		let verdict = request_range(&host, TextRange::on_line(1, 3, 6), &mut hints);
		assert_eq!(verdict, Err(RangeConflict::HasMarkers));
		assert_eq!(hints.lines(), &[1]);
	}
}
