//! The fold engine: walks line tokens, runs folders, and tracks the markers
//! it creates.
//!
//! # Scans
//!
//! [`Fold::start_fold_immediately`] walks a line range token by token. For
//! each token not covered by an existing marker it offers the token to the
//! enabled built-in folders in registration order, then to custom folders in
//! registration order; the first folder returning a [`FoldRequest`] wins.
//! The engine asks the host to create the marker, records it under the
//! folder's type, and moves the seeker past the folded range.
//!
//! # Re-folding
//!
//! - Document changes arm a debounced full scan ([`Fold::on_changes`], fired
//!   by [`Fold::tick`]).
//! - Cursor movement runs a quick scan at once ([`Fold::on_cursor_activity`]),
//!   limited to the lines where a range was refused or a marker went away
//!   since the last scan.
//! - Quick scans and clears cancel a pending debounced scan so it cannot undo
//!   them.
//!
//! # Marker lifecycle
//!
//! Markers leave the registry through [`Fold::marker_cleared`], whether the
//! engine cleared them ([`Fold::clear`], [`Fold::break_marker`]) or the host
//! did. The notification is idempotent and always hints the vacated line.

use std::fmt;
use std::time::Instant;

use mdfold_primitives::{LineIdx, MarkerId, Position, TextRange, Token};

use crate::flip_flop::{Edge, FlipFlop};
use crate::folders::{FoldRequest, Folder, builtin_folders};
use crate::hint::QuickFoldHint;
use crate::host::FoldHost;
use crate::options::{FoldConfig, FoldOption};
use crate::registry::FoldedMarkers;
use crate::scheduler::Debounce;
use crate::seeker::TokenSeeker;
use crate::stream::FoldStream;
use crate::widget::{ImageEvent, Widget};


struct BuiltinFolder {
	name: String,
	folder: Folder,
	status: FlipFlop,
}

/// Folding state for one editing surface.
pub struct Fold {
	seeker: TokenSeeker,
	builtins: Vec<BuiltinFolder>,
	custom: Vec<(String, Folder)>,
	folded: FoldedMarkers,
	hints: QuickFoldHint,
	debounce: Debounce,
}

impl Default for Fold {
	fn default() -> Self {
		Self::new(FoldConfig::default())
	}
}

impl fmt::Debug for Fold {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Fold")
			.field("seeker", &self.seeker)
			.field(
				"builtins",
				&self
					.builtins
					.iter()
					.map(|b| (b.name.as_str(), b.status.is_on()))
					.collect::<Vec<_>>(),
			)
			.field("custom", &self.custom.iter().map(|(name, _)| name).collect::<Vec<_>>())
			.field("folded", &self.folded)
			.field("hints", &self.hints)
			.field("debounce", &self.debounce)
			.finish()
	}
}

impl Fold {
	/// Creates an engine with the `image` and `link` folders registered and
	/// every folder disabled.
	pub fn new(config: FoldConfig) -> Self {
		let builtins = builtin_folders()
			.into_iter()
			.map(|(name, folder)| BuiltinFolder {
				name: name.to_string(),
				folder,
				status: FlipFlop::default(),
			})
			.collect();

		Self {
			seeker: TokenSeeker::new(),
			builtins,
			custom: Vec::new(),
			folded: FoldedMarkers::default(),
			hints: QuickFoldHint::default(),
			debounce: Debounce::new(config.debounce),
		}
	}

	/// Adds a built-in folder after the existing ones, or replaces the
	/// folder of an existing built-in. New built-ins start disabled.
	pub fn register_builtin(&mut self, name: impl Into<String>, folder: Folder) {
		let name = name.into();
		if let Some(existing) = self.builtins.iter_mut().find(|b| b.name == name) {
			existing.folder = folder;
			return;
		}
		self.builtins.push(BuiltinFolder {
			name,
			folder,
			status: FlipFlop::default(),
		});
	}

	/// Enables or disables a built-in folder.
	///
	/// Only changes act: enabling schedules a full fold, disabling clears
	/// that type's markers right away. Unknown names are ignored.
	pub fn set_builtin_status(&mut self, host: &mut dyn FoldHost, kind: &str, enabled: bool, now: Instant) {
		let Some(builtin) = self.builtins.iter_mut().find(|b| b.name == kind) else {
			tracing::debug!(kind, "fold.builtin unknown type");
			return;
		};
		let edge = builtin.status.set(enabled);
		match edge {
			Some(Edge::Rising) => {
				tracing::debug!(kind, "fold.builtin enabled");
				self.start_fold(now);
			}
			Some(Edge::Falling) => {
				tracing::debug!(kind, "fold.builtin disabled");
				self.clear(host, kind);
			}
			None => {}
		}
	}

	/// Applies an option set: built-in switches, then custom folders, then
	/// schedules a full fold.
	///
	/// A boolean switches every built-in and drops custom folders. Markers of
	/// custom types that disappear are left in place.
	pub fn set_options(&mut self, host: &mut dyn FoldHost, option: impl Into<FoldOption>, now: Instant) {
		let mut option = option.into();
		let names: Vec<String> = self.builtins.iter().map(|b| b.name.clone()).collect();
		for name in &names {
			self.set_builtin_status(host, name, option.is_enabled(name), now);
		}

		let custom = option.take_custom();
		for (name, _) in &custom {
			self.folded.ensure_type(name);
		}
		self.custom = custom;
		tracing::debug!(
			custom = ?self.custom.iter().map(|(name, _)| name).collect::<Vec<_>>(),
			"fold.options"
		);

		self.start_fold(now);
	}

	/// Schedules a debounced full fold.
	pub fn start_fold(&mut self, now: Instant) {
		self.debounce.schedule(now);
		tracing::trace!(delay = ?self.debounce.delay(), "fold.debounce armed");
	}

	/// Cancels a pending debounced fold.
	pub fn cancel_pending_fold(&mut self) -> bool {
		self.debounce.stop()
	}

	/// Returns true while a debounced fold is pending.
	pub fn is_fold_pending(&self) -> bool {
		self.debounce.is_pending()
	}

	/// Runs the debounced fold if its quiet window has elapsed.
	///
	/// Returns true if a scan ran.
	pub fn tick(&mut self, host: &mut dyn FoldHost, now: Instant) -> bool {
		if !self.debounce.poll(now) {
			return false;
		}
		tracing::trace!("fold.debounce fired");
		self.start_fold_immediately(host, None, None);
		true
	}

	/// Document change hook: arms the debounced full fold.
	///
	/// `changes` are the changed ranges; their first line is logged, but the
	/// fold itself always covers the whole document.
	pub fn on_changes(
		&mut self,
		host: &dyn FoldHost,
		changes: impl IntoIterator<Item = TextRange>,
		now: Instant,
	) {
		let from_line = changes
			.into_iter()
			.map(|c| c.from.line)
			.fold(host.last_line(), LineIdx::min);
		tracing::trace!(from_line, "fold.changes");
		self.start_fold(now);
	}

	/// Cursor movement hook: runs a quick fold.
	pub fn on_cursor_activity(&mut self, host: &mut dyn FoldHost) {
		self.start_quick_fold(host);
	}

	/// Folds lines `from_line..=to_line` right away.
	///
	/// Defaults to the whole document; `to_line` is clamped to the last line.
	/// Resets the quick-fold hints before scanning.
	pub fn start_fold_immediately(&mut self, host: &mut dyn FoldHost, from_line: Option<LineIdx>, to_line: Option<LineIdx>) {
		let last_line = host.last_line();
		let first = from_line.unwrap_or_else(|| host.first_line());
		let last = to_line.map_or(last_line, |line| line.min(last_line));

		self.hints.clear();
		if first > last {
			return;
		}

		self.seeker.reset(host, first);
		host.begin_operation();
		let mut created = 0;
		for line_no in first..=last {
			if line_no < self.seeker.line_no() {
				continue;
			}
			if line_no > self.seeker.line_no() {
				self.seeker.reset(host, line_no);
			}
			created += self.fold_line(host, line_no);
		}
		host.end_operation();

		tracing::debug!(from = first, to = last, created, hints = self.hints.lines().len(), "fold.scan");
	}

	/// Folds from the seeker's position to the end of `line_no`.
	///
	/// Returns the number of markers created.
	fn fold_line(&mut self, host: &mut dyn FoldHost, line_no: LineIdx) -> usize {
		let covered = covered_columns(host, line_no);
		let mut created = 0;

		while let Some(token) = self.seeker.current().cloned() {
			if token.span().any(|col| covered.get(col).copied().unwrap_or(false)) {
				tracing::trace!(line = line_no, start = token.start, "fold.token covered");
				self.seeker.advance();
				continue;
			}

			let hit = {
				let mut stream = FoldStream::new(&*host, &self.seeker, &mut self.hints);
				first_fold(&self.builtins, &self.custom, &mut stream, &token)
			};
			let Some((kind, request)) = hit else {
				self.seeker.advance();
				continue;
			};

			let (requested, widget) = request.into_parts();
			let marker = host.mark_text(requested, widget);
			self.folded.push(&kind, marker);
			created += 1;

			let range = host.marker_range(marker).unwrap_or(requested);
			tracing::debug!(kind = %kind, %marker, ?range, "fold.marker");

			if range.to.line > line_no {
				self.seeker.set_pos(host, range.to.line, range.to.ch);
				break;
			}
			let before = self.seeker.i_token();
			self.seeker.set_ch(range.to.ch);
			if self.seeker.i_token() == before {
				self.seeker.advance();
			}
		}

		created
	}

	/// Re-scans the lines recorded in the quick-fold hints.
	///
	/// Does nothing when there are none; otherwise cancels a pending full
	/// fold and scans from the lowest to the highest hinted line.
	pub fn start_quick_fold(&mut self, host: &mut dyn FoldHost) {
		let Some(span) = self.hints.span() else {
			return;
		};
		self.debounce.stop();
		tracing::trace!(from = *span.start(), to = *span.end(), "fold.quick");
		self.start_fold_immediately(host, Some(*span.start()), Some(*span.end()));
	}

	/// Removes every marker of `kind`, newest first.
	///
	/// Cancels a pending debounced fold first.
	pub fn clear(&mut self, host: &mut dyn FoldHost, kind: &str) {
		self.debounce.stop();
		let mut cleared = 0;
		while let Some(marker) = self.folded.pop(kind) {
			if let Some(range) = host.clear_marker(marker) {
				self.marker_cleared(marker, range.from);
				cleared += 1;
			}
		}
		if cleared > 0 {
			tracing::debug!(kind, cleared, "fold.clear");
		}
	}

	/// Removes every marker of every type.
	pub fn clear_all(&mut self, host: &mut dyn FoldHost) {
		self.debounce.stop();
		let kinds: Vec<String> = self.folded.kinds().map(str::to_string).collect();
		for kind in kinds {
			self.clear(host, &kind);
		}
	}

	/// Removal notification for a marker that started at `from`.
	///
	/// Drops the marker from the registry if present and records `from.line`
	/// for the next quick fold.
	pub fn marker_cleared(&mut self, marker: MarkerId, from: Position) {
		if let Some(kind) = self.folded.remove(marker) {
			tracing::trace!(kind, %marker, "fold.marker cleared");
		}
		self.hints.push(from.line);
	}

	/// Breaks a fold back into editable text.
	///
	/// In one host operation: puts the cursor at the marker start plus
	/// `ch_offset`, focuses the host, and clears the marker. Returns false if
	/// the marker is already gone.
	pub fn break_marker(&mut self, host: &mut dyn FoldHost, marker: MarkerId, ch_offset: usize) -> bool {
		let Some(range) = host.marker_range(marker) else {
			return false;
		};

		host.begin_operation();
		host.set_cursor(range.from.offset(ch_offset));
		host.focus();
		if let Some(cleared) = host.clear_marker(marker) {
			self.marker_cleared(marker, cleared.from);
		}
		host.end_operation();
		true
	}

	/// Applies an image load outcome to a folded image and asks the host to
	/// re-layout it.
	pub fn image_event(&self, host: &mut dyn FoldHost, marker: MarkerId, event: ImageEvent) {
		let Some(Widget::Image(image)) = host.widget_mut(marker) else {
			return;
		};
		image.apply(event);
		host.marker_changed(marker);
	}

	/// Live markers of `kind`, oldest first.
	pub fn markers(&self, kind: &str) -> &[MarkerId] {
		self.folded.get(kind)
	}

	/// The marker registry.
	pub fn folded(&self) -> &FoldedMarkers {
		&self.folded
	}

	/// Pending quick-fold hints.
	pub fn hints(&self) -> &QuickFoldHint {
		&self.hints
	}

	/// The engine's token seeker.
	pub fn seeker(&self) -> &TokenSeeker {
		&self.seeker
	}

	/// Returns true if the built-in folder `kind` is enabled.
	pub fn is_builtin_enabled(&self, kind: &str) -> bool {
		self.builtins.iter().any(|b| b.name == kind && b.status.is_on())
	}

	/// Built-in folder names in priority order.
	pub fn builtin_names(&self) -> impl Iterator<Item = &str> {
		self.builtins.iter().map(|b| b.name.as_str())
	}

	/// Custom folder names in priority order.
	pub fn custom_names(&self) -> impl Iterator<Item = &str> {
		self.custom.iter().map(|(name, _)| name.as_str())
	}
}

/// Offers `token` to enabled built-ins, then custom folders.
fn first_fold(
	builtins: &[BuiltinFolder],
	custom: &[(String, Folder)],
	stream: &mut FoldStream<'_>,
	token: &Token,
) -> Option<(String, FoldRequest)> {
	builtins
		.iter()
		.filter(|b| b.status.is_on())
		.map(|b| (b.name.as_str(), &b.folder))
		.chain(custom.iter().map(|(name, folder)| (name.as_str(), folder)))
		.find_map(|(name, folder)| folder(&mut *stream, token).map(|request| (name.to_string(), request)))
}

/// Marks every column of `line` that some marker already covers.
fn covered_columns(host: &dyn FoldHost, line: LineIdx) -> Vec<bool> {
	let len = host.line_len(line);
	let mut covered = vec![false; len];
	for span in host.marked_spans(line) {
		covered[span.columns(len)].fill(true);
	}
	covered
}
