use indexmap::IndexMap;
use mdfold_primitives::MarkerId;

/// Live fold markers grouped by fold type, in creation order.
///
/// A marker is recorded under at most one type. Types keep their slot once
/// seen, so iteration order is the order types first appeared.
#[derive(Debug, Clone, Default)]
pub struct FoldedMarkers {
	by_type: IndexMap<String, Vec<MarkerId>>,
}

impl FoldedMarkers {
	/// Makes sure `kind` has an (possibly empty) entry.
	pub fn ensure_type(&mut self, kind: &str) {
		if !self.by_type.contains_key(kind) {
			self.by_type.insert(kind.to_string(), Vec::new());
		}
	}

	/// Records a new marker under `kind`.
	pub fn push(&mut self, kind: &str, marker: MarkerId) {
		debug_assert!(self.kind_of(marker).is_none(), "{marker} registered twice");
		self.ensure_type(kind);
		if let Some(markers) = self.by_type.get_mut(kind) {
			markers.push(marker);
		}
	}

	/// Removes and returns the most recent marker of `kind`.
	pub fn pop(&mut self, kind: &str) -> Option<MarkerId> {
		self.by_type.get_mut(kind)?.pop()
	}

	/// Forgets `marker`, returning the type it was under.
	///
	/// Unknown markers are ignored.
	pub fn remove(&mut self, marker: MarkerId) -> Option<&str> {
		for (kind, markers) in &mut self.by_type {
			if let Some(idx) = markers.iter().position(|&m| m == marker) {
				markers.remove(idx);
				return Some(kind.as_str());
			}
		}
		None
	}

	/// Type a marker is recorded under.
	pub fn kind_of(&self, marker: MarkerId) -> Option<&str> {
		self.by_type
			.iter()
			.find(|(_, markers)| markers.contains(&marker))
			.map(|(kind, _)| kind.as_str())
	}

	/// Markers of `kind`, oldest first.
	pub fn get(&self, kind: &str) -> &[MarkerId] {
		self.by_type.get(kind).map_or(&[], Vec::as_slice)
	}

	/// Known fold types.
	pub fn kinds(&self) -> impl Iterator<Item = &str> {
		self.by_type.keys().map(String::as_str)
	}

	/// Total number of live markers.
	pub fn len(&self) -> usize {
		self.by_type.values().map(Vec::len).sum()
	}

	/// Returns true if no marker is recorded.
	pub fn is_empty(&self) -> bool {
		self.by_type.values().all(Vec::is_empty)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn pop_is_last_in_first_out() {
		let mut reg = FoldedMarkers::default();
		reg.push("link", MarkerId(1));
		reg.push("link", MarkerId(2));
		reg.push("image", MarkerId(3));
		assert_eq!(reg.pop("link"), Some(MarkerId(2)));
		assert_eq!(reg.get("link"), &[MarkerId(1)]);
		assert_eq!(reg.len(), 2);
	}

	#[test]
	fn remove_is_idempotent() {
		let mut reg = FoldedMarkers::default();
		reg.push("image", MarkerId(4));
		assert_eq!(reg.remove(MarkerId(4)), Some("image"));
		assert_eq!(reg.remove(MarkerId(4)), None);
		assert!(reg.is_empty());
		assert_eq!(reg.kinds().collect::<Vec<_>>(), ["image"]);
	}
}
