use crate::error::{CommentsError, Result};
use crate::host::Editor;
use crate::transform::line_spans;
use std::ops::Range;
use std::path::{Path, PathBuf};

/// An in-memory document with a selected byte range.
///
/// Lines are numbered from 1 and end at `\r\n`, `\n` or `\r`, the same
/// terminators the line transforms recognise.
#[derive(Debug, Clone)]
pub struct TextBuffer {
	path: Option<PathBuf>,
	text: String,
	selection: Range<usize>,
}

impl TextBuffer {
	/// Create a buffer with the whole text selected.
	pub fn new(path: Option<PathBuf>, text: impl Into<String>) -> Self {
		let text = text.into();
		let selection = 0..text.len();
		TextBuffer {
			path,
			text,
			selection,
		}
	}

	pub fn text(&self) -> &str {
		&self.text
	}

	pub fn into_text(self) -> String {
		self.text
	}

	pub fn selected_range(&self) -> Range<usize> {
		self.selection.clone()
	}

	pub fn select_all(&mut self) {
		self.selection = 0..self.text.len();
	}

	/// Select lines `first..=last`, including the terminator of `last`.
	pub fn select_lines(&mut self, first: usize, last: usize) -> Result<()> {
		let offsets = line_spans(&self.text);

		if first == 0 || first > last || last > offsets.len() {
			return Err(CommentsError::InvalidLineRange {
				first,
				last,
				total: offsets.len(),
			});
		}

		self.selection = offsets[first - 1].start..offsets[last - 1].end;
		Ok(())
	}
}

impl Editor for TextBuffer {
	fn document_path(&self) -> Option<&Path> {
		self.path.as_deref()
	}

	fn selection(&self) -> Option<&str> {
		if self.selection.is_empty() {
			None
		} else {
			Some(&self.text[self.selection.clone()])
		}
	}

	fn replace_selection(&mut self, replacement: &str) -> Result<()> {
		self.text.replace_range(self.selection.clone(), replacement);
		self.selection = self.selection.start..self.selection.start + replacement.len();
		Ok(())
	}
}
