use std::fmt;
use std::ops::Range;

use crate::position::ColIdx;

/// Opaque handle to a text marker owned by the host.
///
/// Hosts must not reuse an id after the marker is cleared; the engine relies
/// on that to make late removal notifications harmless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MarkerId(pub u64);

impl fmt::Display for MarkerId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "marker#{}", self.0)
	}
}

/// The part of one marker that falls on a given line.
///
/// `None` ends mean the marker continues past the line start or end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarkedSpan {
	/// First marked column, or `None` if the marker began on an earlier line.
	pub from: Option<ColIdx>,
	/// End column (exclusive), or `None` if the marker continues onto a later line.
	pub to: Option<ColIdx>,
}

impl MarkedSpan {
	/// Creates a span covering `[from, to)` on the line.
	pub const fn new(from: ColIdx, to: ColIdx) -> Self {
		Self {
			from: Some(from),
			to: Some(to),
		}
	}

	/// Resolves the open ends against the line length.
	pub fn columns(&self, line_len: ColIdx) -> Range<ColIdx> {
		let from = self.from.unwrap_or(0).min(line_len);
		let to = self.to.unwrap_or(line_len).min(line_len);
		from..to.max(from)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn open_ends_cover_line_edges() {
		let span = MarkedSpan { from: None, to: Some(4) };
		assert_eq!(span.columns(10), 0..4);
		let span = MarkedSpan { from: Some(6), to: None };
		assert_eq!(span.columns(10), 6..10);
	}

	#[test]
	fn columns_clamp_to_line() {
		assert_eq!(MarkedSpan::new(8, 20).columns(10), 8..10);
		assert_eq!(MarkedSpan::new(12, 20).columns(10), 10..10);
	}
}
