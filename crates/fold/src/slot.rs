use crate::engine::Fold;
use crate::options::FoldConfig;

/// Lazily created fold engine owned by an editing surface.
///
/// Hosts keep one slot per surface; the first caller creates the engine and
/// later callers get the same instance.
#[derive(Debug, Default)]
pub struct FoldSlot {
	fold: Option<Fold>,
}

impl FoldSlot {
	/// Creates an empty slot.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the engine, creating it with `config` on first use.
	///
	/// `config` is ignored once the engine exists.
	pub fn get_or_init(&mut self, config: FoldConfig) -> &mut Fold {
		self.fold.get_or_insert_with(|| Fold::new(config))
	}

	/// The engine, if created.
	pub fn get(&self) -> Option<&Fold> {
		self.fold.as_ref()
	}

	/// Mutable access to the engine, if created.
	pub fn get_mut(&mut self) -> Option<&mut Fold> {
		self.fold.as_mut()
	}

	/// Removes the engine, e.g. when the surface is torn down.
	pub fn take(&mut self) -> Option<Fold> {
		self.fold.take()
	}
}

#[cfg(test)]
mod tests {
	use std::time::Duration;

	use super::*;

	#[test]
	fn first_config_wins() {
		let mut slot = FoldSlot::new();
		assert!(slot.get().is_none());

		slot.get_or_init(FoldConfig {
			debounce: Duration::from_millis(5),
		})
		.register_builtin("math", crate::folders::folder(|_, _| None));
		let fold = slot.get_or_init(FoldConfig::default());
		assert_eq!(fold.builtin_names().count(), 3);

		assert!(slot.take().is_some());
		assert!(slot.get_mut().is_none());
	}
}
