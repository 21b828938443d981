//! Replacement widgets a fold asks the host to render.
//!
//! The engine only describes what to show; building the actual view nodes,
//! styling them and wiring clicks back to [`crate::Fold::break_marker`] is the
//! host's job.

/// Load progress of an image widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImageState {
	/// The image source has been requested.
	#[default]
	Loading,
	/// The image loaded.
	Loaded,
	/// The image failed to load.
	Error,
}

/// Load outcome reported by the host for an image widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageEvent {
	/// The image finished loading.
	Load,
	/// The image could not be loaded.
	Error,
}

/// An inline image replacing `![alt](url)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageWidget {
	/// Resolved image URL.
	pub src: String,
	/// Alt text, shown as the tooltip.
	pub title: String,
	/// Current load state.
	pub state: ImageState,
}

impl ImageWidget {
	/// Creates a widget in the loading state.
	pub fn new(src: impl Into<String>, title: impl Into<String>) -> Self {
		Self {
			src: src.into(),
			title: title.into(),
			state: ImageState::Loading,
		}
	}

	/// Style classes for the current state.
	pub fn class_name(&self) -> &'static str {
		match self.state {
			ImageState::Loading => "fold-image fold-image-loading",
			ImageState::Loaded => "fold-image",
			ImageState::Error => "fold-image fold-image-error",
		}
	}

	/// Applies a load outcome.
	pub fn apply(&mut self, event: ImageEvent) {
		self.state = match event {
			ImageEvent::Load => ImageState::Loaded,
			ImageEvent::Error => ImageState::Error,
		};
	}
}

/// A small icon replacing the `(url "title")` part of a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkIcon {
	/// Resolved link destination.
	pub url: String,
	/// Link title, possibly empty.
	pub title: String,
}

impl LinkIcon {
	/// Style class of the icon.
	pub const CLASS: &'static str = "fold-link-icon";

	/// Creates a link icon.
	pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
		Self {
			url: url.into(),
			title: title.into(),
		}
	}

	/// Tooltip text: URL, newline, title.
	pub fn tooltip(&self) -> String {
		format!("{}\n{}", self.url, self.title)
	}
}

/// A widget described by a custom folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomWidget {
	/// Folder-defined widget kind, e.g. `"math"`.
	pub kind: String,
	/// Text the host may render in place of the range.
	pub label: String,
}

/// Everything a fold can be replaced with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Widget {
	/// Rendered image.
	Image(ImageWidget),
	/// Link icon.
	LinkIcon(LinkIcon),
	/// Widget from a custom folder.
	Custom(CustomWidget),
}

impl Widget {
	/// Returns the image widget, if this is one.
	pub fn as_image(&self) -> Option<&ImageWidget> {
		match self {
			Widget::Image(img) => Some(img),
			_ => None,
		}
	}

	/// Returns the link icon, if this is one.
	pub fn as_link_icon(&self) -> Option<&LinkIcon> {
		match self {
			Widget::LinkIcon(icon) => Some(icon),
			_ => None,
		}
	}
}
