use crate::error::{CommentsError, Result};
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Leading whitespace, then everything from the first visible character on.
static BLOCK_BODY: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"(?s)\A(\s*)(\S.*)\z").unwrap());

/// Wrap `selection` in `start` and `end`.
///
/// Trailing whitespace is trimmed, leading indentation stays outside the
/// markers and a single `\n` follows `end`. Returns `None` when the
/// selection has nothing but whitespace.
pub fn insert_block_comment(selection: &str, start: &str, end: &str) -> Option<String> {
	let caps = BLOCK_BODY.captures(selection.trim_end())?;
	Some(format!("{}{start}{}{end}\n", &caps[1], &caps[2]))
}

/// Unwrap a selection that is exactly `start` ... `end` after indentation.
///
/// Trailing whitespace is trimmed before matching. Returns `Ok(None)` when the
/// selection does not begin with `start` or does not end with `end`.
pub fn remove_block_comment(selection: &str, start: &str, end: &str) -> Result<Option<String>> {
	let pattern = format!(
		r"(?s)\A(\s*){}(.*){}\z",
		regex::escape(start),
		regex::escape(end)
	);
	let regex = Regex::new(&pattern)
		.map_err(|source| CommentsError::InvalidMarker { pattern, source })?;

	Ok(regex
		.captures(selection.trim_end())
		.map(|caps: Captures| format!("{}{}\n", &caps[1], &caps[2])))
}
