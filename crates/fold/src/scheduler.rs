//! Debounce for full re-folds.
//!
//! The engine owns no timers. The host feeds it the current time when events
//! arrive and polls [`Debounce::poll`] (through [`crate::Fold::tick`]) from its
//! event loop; a full fold runs once the quiet window has elapsed.

use std::time::{Duration, Instant};

/// Quiet window before a scheduled full fold runs.
pub const FOLD_DEBOUNCE: Duration = Duration::from_millis(100);

/// Trailing-edge debounce with an explicit clock.
#[derive(Debug, Clone)]
pub struct Debounce {
	delay: Duration,
	deadline: Option<Instant>,
}

impl Default for Debounce {
	fn default() -> Self {
		Self::new(FOLD_DEBOUNCE)
	}
}

impl Debounce {
	/// Creates an idle debounce with the given quiet window.
	pub fn new(delay: Duration) -> Self {
		Self { delay, deadline: None }
	}

	/// Quiet window length.
	pub fn delay(&self) -> Duration {
		self.delay
	}

	/// Arms (or re-arms) the debounce; a pending run is pushed back.
	pub fn schedule(&mut self, now: Instant) {
		self.deadline = Some(now + self.delay);
	}

	/// Cancels a pending run. Returns true if one was pending.
	pub fn stop(&mut self) -> bool {
		self.deadline.take().is_some()
	}

	/// Returns true if a run is pending.
	pub fn is_pending(&self) -> bool {
		self.deadline.is_some()
	}

	/// Returns true if a pending run is due at `now`.
	pub fn is_due(&self, now: Instant) -> bool {
		self.deadline.is_some_and(|t| now >= t)
	}

	/// Fires the pending run if due, disarming the debounce.
	pub fn poll(&mut self, now: Instant) -> bool {
		if self.is_due(now) {
			self.deadline = None;
			true
		} else {
			false
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn fires_after_quiet_window() {
		let t0 = Instant::now();
		let mut d = Debounce::default();
		d.schedule(t0);
		assert!(!d.poll(t0 + Duration::from_millis(99)));
		assert!(d.poll(t0 + FOLD_DEBOUNCE));
		assert!(!d.is_pending());
		assert!(!d.poll(t0 + Duration::from_secs(1)));
	}

	#[test]
	fn rescheduling_pushes_deadline_back() {
		let t0 = Instant::now();
		let mut d = Debounce::default();
		d.schedule(t0);
		d.schedule(t0 + Duration::from_millis(80));
		assert!(!d.poll(t0 + Duration::from_millis(150)));
		assert!(d.poll(t0 + Duration::from_millis(180)));
	}

	#[test]
	fn stop_cancels() {
		let t0 = Instant::now();
		let mut d = Debounce::default();
		d.schedule(t0);
		assert!(d.stop());
		assert!(!d.stop());
		assert!(!d.poll(t0 + Duration::from_secs(1)));
	}
}
