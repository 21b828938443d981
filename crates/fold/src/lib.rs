//! Inline Markdown folding.
//!
//! Collapses Markdown constructs (images, link destinations, and anything a
//! custom folder recognizes) into widgets while the cursor is elsewhere, and
//! restores the source text when the user wants to edit it.
//!
//! The crate is host-agnostic. An editor implements [`FoldHost`] to expose its
//! tokens, markers and cursor; a [`Fold`] engine drives folding through it:
//!
//! - [`TokenSeeker`] walks per-line tokens and finds construct ends.
//! - [`request_range`] refuses ranges that overlap markers or hold the cursor.
//! - Folders ([`folders`]) turn a construct into a [`FoldRequest`].
//! - [`Fold`] runs folders, tracks markers per fold type, debounces full
//!   folds after edits, and quick-folds the lines where a fold was refused
//!   or removed.

mod arbiter;
mod engine;
mod error;
mod flip_flop;
pub mod folders;
mod hint;
mod host;
mod options;
mod registry;
mod scheduler;
mod seeker;
mod slot;
mod stream;
#[cfg(any(test, feature = "test-support"))]
pub mod testing;
mod widget;

pub use arbiter::{RangeConflict, RangeGrant, RequestRangeResult, request_range};
pub use engine::Fold;
pub use error::{OptionsError, Result};
pub use flip_flop::{Edge, FlipFlop};
pub use folders::{FoldRequest, Folder, builtin_folders, folder};
pub use hint::QuickFoldHint;
pub use host::FoldHost;
pub use mdfold_link as link;
pub use mdfold_primitives as primitives;
pub use options::{FoldConfig, FoldFlags, FoldOption, FoldOptions, FoldSettings};
pub use registry::FoldedMarkers;
pub use scheduler::{Debounce, FOLD_DEBOUNCE};
pub use seeker::{SeekFrom, TokenCondition, TokenMatch, TokenSeeker};
pub use slot::FoldSlot;
pub use stream::FoldStream;
pub use widget::{CustomWidget, ImageEvent, ImageState, ImageWidget, LinkIcon, Widget};
