/// A state transition reported by [`FlipFlop::set`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
	/// Off to on.
	Rising,
	/// On to off.
	Falling,
}

/// A boolean that reports changes, not levels.
///
/// Starts off. Setting the current value again yields no edge, so callers
/// run their on/off actions only when the state actually flips.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlipFlop {
	on: bool,
}

impl FlipFlop {
	/// Sets the state, returning the edge if it changed.
	pub fn set(&mut self, on: bool) -> Option<Edge> {
		if self.on == on {
			return None;
		}
		self.on = on;
		Some(if on { Edge::Rising } else { Edge::Falling })
	}

	/// Current state.
	pub fn is_on(&self) -> bool {
		self.on
	}
}
