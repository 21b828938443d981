//! Test support: an in-memory host with a small Markdown tokenizer.

mod editor;
mod tokenize;

pub use editor::{MemoryEditor, MemoryMarker};
pub use tokenize::tokenize_line;
