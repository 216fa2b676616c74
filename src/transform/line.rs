use regex::{Captures, Regex};
use std::ops::Range;
use std::sync::LazyLock;

/// One terminated line: content plus its `\r\n`, `\n` or `\r` terminator.
///
/// A trailing fragment without a terminator never matches, so the last
/// line of a selection that does not end in a newline is left alone.
static TERMINATED_LINE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"[^\r\n]*(?:\r\n|\r|\n)").unwrap());

/// Prefix every terminated line of `selection` with `start`.
pub fn insert_line_comment(selection: &str, start: &str) -> String {
	TERMINATED_LINE
		.replace_all(selection, |caps: &Captures| format!("{start}{}", &caps[0]))
		.into_owned()
}

/// Strip one leading `start` from every terminated line that begins with it.
///
/// `start` is compared literally.
pub fn remove_line_comment(selection: &str, start: &str) -> String {
	TERMINATED_LINE
		.replace_all(selection, |caps: &Captures| {
			let line = &caps[0];
			line.strip_prefix(start).unwrap_or(line).to_string()
		})
		.into_owned()
}

/// Byte ranges of the lines of `text`, terminators included.
///
/// Uses the same terminators as the transforms; a trailing fragment
/// without a terminator is its own line.
pub fn line_spans(text: &str) -> Vec<Range<usize>> {
	let mut spans: Vec<Range<usize>> = TERMINATED_LINE
		.find_iter(text)
		.map(|m| m.range())
		.collect();
	let end = spans.last().map_or(0, |span| span.end);
	if end < text.len() {
		spans.push(end..text.len());
	}
	spans
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_insert_single_line() {
		assert_eq!(insert_line_comment("int x;\n", "//"), "//int x;\n");
	}

	#[test]
	fn test_insert_multiple_lines_including_blank() {
		assert_eq!(
			insert_line_comment("a = 1\n\n    b = 2\n", "#"),
			"#a = 1\n#\n#    b = 2\n"
		);
	}

	#[test]
	fn test_insert_keeps_crlf_terminators() {
		assert_eq!(insert_line_comment("a;\r\nb;\r\n", "//"), "//a;\r\n//b;\r\n");
		assert_eq!(insert_line_comment("a;\rb;\r", "//"), "//a;\r//b;\r");
	}

	#[test]
	fn test_insert_skips_unterminated_last_line() {
		// Known boundary case: only lines with a terminator are prefixed.
		assert_eq!(insert_line_comment("a;\nb;", "//"), "//a;\nb;");
		assert_eq!(insert_line_comment("a;", "//"), "a;");
	}

	#[test]
	fn test_remove_single_line() {
		assert_eq!(remove_line_comment("//int x;\n", "//"), "int x;\n");
	}

	#[test]
	fn test_remove_only_lines_starting_with_marker() {
		assert_eq!(
			remove_line_comment("//a\n  //b\nc // d\n", "//"),
			"a\n  //b\nc // d\n"
		);
	}

	#[test]
	fn test_remove_strips_one_occurrence() {
		assert_eq!(remove_line_comment("////a\n", "//"), "//a\n");
	}

	#[test]
	fn test_remove_treats_marker_literally() {
		assert_eq!(remove_line_comment("x\n.*y\n", ".*"), "x\ny\n");
		assert_eq!(remove_line_comment("x\n", ".*"), "x\n");
	}

	#[test]
	fn test_remove_skips_unterminated_last_line() {
		assert_eq!(remove_line_comment("//a\n//b", "//"), "a\n//b");
	}

	#[test]
	fn test_round_trip() {
		let original = "fn main() {\n\tprintln!(\"hi\");\n}\n\n";
		for start in ["//", "#", "-- ", "REM "] {
			let commented = insert_line_comment(original, start);
			assert_ne!(commented, original);
			assert_eq!(remove_line_comment(&commented, start), original);
		}
	}

	#[test]
	fn test_line_spans_match_transform_terminators() {
		let text = "a\rb\r\nc\nd";
		let lines: Vec<&str> = line_spans(text).into_iter().map(|span| &text[span]).collect();
		assert_eq!(lines, vec!["a\r", "b\r\n", "c\n", "d"]);
		assert!(line_spans("").is_empty());
	}
}
