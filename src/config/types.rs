use crate::error::{CommentsError, Result};
use serde::{Deserialize, Serialize};

/// Top-level layout of a rules file: an ordered array of `[[comment]]` tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RulesFile {
	/// Comment rules in priority order. First matching rule wins.
	#[serde(default, rename = "comment")]
	pub rules: Vec<CommentRule>,
}

/// A file-type to comment-marker mapping.
///
/// A rule is a block rule when both `start` and `end` are non-empty;
/// otherwise `start` is used as a line prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CommentRule {
	/// Comma-delimited suffix patterns, e.g. `"*.c,*.h"`.
	#[serde(default)]
	pub file_types: String,

	/// Line marker, or block start marker when `end` is set.
	#[serde(default)]
	pub start: String,

	/// Block end marker. Empty for line rules.
	#[serde(default, skip_serializing_if = "String::is_empty")]
	pub end: String,
}

/// How a rule comments text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStyle<'a> {
	/// Prefix every line with `start`.
	Line { start: &'a str },

	/// Wrap the whole selection in `start` ... `end`.
	Block { start: &'a str, end: &'a str },
}

impl CommentRule {
	/// Create a line-comment rule.
	pub fn line(file_types: impl Into<String>, start: impl Into<String>) -> Self {
		CommentRule {
			file_types: file_types.into(),
			start: start.into(),
			end: String::new(),
		}
	}

	/// Create a block-comment rule.
	pub fn block(
		file_types: impl Into<String>,
		start: impl Into<String>,
		end: impl Into<String>,
	) -> Self {
		CommentRule {
			file_types: file_types.into(),
			start: start.into(),
			end: end.into(),
		}
	}

	/// Individual suffix patterns parsed from `file_types`.
	///
	/// Elements are trimmed, a leading `*` is dropped and empty elements are skipped.
	pub fn file_type_patterns(&self) -> impl Iterator<Item = &str> {
		self.file_types
			.split(',')
			.map(|p| p.trim().trim_start_matches('*'))
			.filter(|p| !p.is_empty())
	}

	pub fn is_block(&self) -> bool {
		!self.start.is_empty() && !self.end.is_empty()
	}

	pub fn style(&self) -> CommentStyle<'_> {
		if self.is_block() {
			CommentStyle::Block {
				start: &self.start,
				end: &self.end,
			}
		} else {
			CommentStyle::Line { start: &self.start }
		}
	}

	/// Line marker, empty for block rules.
	pub fn line_start(&self) -> &str {
		if self.is_block() { "" } else { self.start.as_str() }
	}

	/// Block start marker, empty for line rules.
	pub fn block_start(&self) -> &str {
		if self.is_block() { self.start.as_str() } else { "" }
	}

	/// Block end marker, empty for line rules.
	pub fn block_end(&self) -> &str {
		if self.is_block() { self.end.as_str() } else { "" }
	}

	/// Validate that the rule can match a file and has a marker to insert.
	pub fn validate(&self) -> Result<()> {
		if self.file_type_patterns().next().is_none() {
			return Err(self.invalid("no file type patterns"));
		}

		if self.start.is_empty() {
			return Err(self.invalid("start marker is empty"));
		}

		Ok(())
	}

	fn invalid(&self, reason: &str) -> CommentsError {
		CommentsError::InvalidRule {
			file_types: self.file_types.clone(),
			reason: reason.to_string(),
		}
	}
}

impl RulesFile {
	/// Validate all rules in this file.
	pub fn validate(&self) -> Result<()> {
		for rule in &self.rules {
			rule.validate()?;
		}
		Ok(())
	}
}
