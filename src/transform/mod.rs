//! Comment insertion and removal on a text selection.
//!
//! Every function here is pure: selection and markers in, replacement out.
//! `None` means the selection should be left as it is.

pub mod block;
pub mod line;

pub use block::{insert_block_comment, remove_block_comment};
pub use line::{insert_line_comment, line_spans, remove_line_comment};

use crate::config::types::{CommentRule, CommentStyle};
use crate::error::Result;
use std::fmt;

/// Which way a comment action goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
	Comment,
	Uncomment,
}

impl fmt::Display for Direction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Direction::Comment => write!(f, "comment"),
			Direction::Uncomment => write!(f, "uncomment"),
		}
	}
}

/// Comment or uncomment `selection` according to the rule's style.
pub fn apply(
	selection: &str,
	rule: &CommentRule,
	direction: Direction,
) -> Result<Option<String>> {
	match (rule.style(), direction) {
		(CommentStyle::Line { start }, _) if start.is_empty() => Ok(None),
		(CommentStyle::Line { start }, Direction::Comment) => {
			Ok(Some(insert_line_comment(selection, start)))
		}
		(CommentStyle::Line { start }, Direction::Uncomment) => {
			Ok(Some(remove_line_comment(selection, start)))
		}
		(CommentStyle::Block { start, end }, Direction::Comment) => {
			Ok(insert_block_comment(selection, start, end))
		}
		(CommentStyle::Block { start, end }, Direction::Uncomment) => {
			remove_block_comment(selection, start, end)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_apply_line_rule() {
		let rule = CommentRule::line("*.c,*.h", "//");

		let commented = apply("int x;\n", &rule, Direction::Comment).unwrap();
		assert_eq!(commented.as_deref(), Some("//int x;\n"));

		let uncommented = apply("//int x;\n", &rule, Direction::Uncomment).unwrap();
		assert_eq!(uncommented.as_deref(), Some("int x;\n"));
	}

	#[test]
	fn test_apply_block_rule() {
		let rule = CommentRule::block("*.html", "<!--", "-->");

		let commented = apply("<div/>", &rule, Direction::Comment).unwrap();
		assert_eq!(commented.as_deref(), Some("<!--<div/>-->\n"));

		let uncommented = apply("<!--<div/>-->\n", &rule, Direction::Uncomment).unwrap();
		assert_eq!(uncommented.as_deref(), Some("<div/>\n"));

		let mismatch = apply("<div/>\n", &rule, Direction::Uncomment).unwrap();
		assert_eq!(mismatch, None);
	}

	#[test]
	fn test_apply_empty_line_marker_is_noop() {
		let rule = CommentRule::line("*.txt", "");
		assert_eq!(apply("text\n", &rule, Direction::Comment).unwrap(), None);
		assert_eq!(apply("text\n", &rule, Direction::Uncomment).unwrap(), None);
	}

	#[test]
	fn test_direction_display() {
		assert_eq!(Direction::Comment.to_string(), "comment");
		assert_eq!(Direction::Uncomment.to_string(), "uncomment");
	}
}
