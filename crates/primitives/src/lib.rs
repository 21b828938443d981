//! Core types shared by the fold engine and editing hosts: document
//! positions, line tokens, and marker handles.

/// Marker handles and per-line marked spans.
pub mod marker;
/// Line/column document positions.
pub mod position;
/// Directionless document ranges.
pub mod range;
/// Host-produced line tokens.
pub mod token;

pub use marker::{MarkedSpan, MarkerId};
pub use position::{ColIdx, LineIdx, Position};
pub use range::TextRange;
pub use token::Token;
