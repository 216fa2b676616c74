//! The boundary between the comment engine and whatever editor hosts it.

pub mod buffer;

pub use buffer::TextBuffer;

use crate::error::Result;
use std::path::Path;

/// What the engine needs from a host editor.
pub trait Editor {
	/// Path of the active document, if there is one.
	fn document_path(&self) -> Option<&Path>;

	/// Currently selected text, or `None` when nothing is selected.
	fn selection(&self) -> Option<&str>;

	/// Replace the selection with `replacement` as a single edit.
	fn replace_selection(&mut self, replacement: &str) -> Result<()>;
}
