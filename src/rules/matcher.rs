use crate::config::types::CommentRule;
use std::path::Path;

impl CommentRule {
	/// Check if any of this rule's suffix patterns matches the path.
	///
	/// Matching is a plain string suffix test on the whole path, so a
	/// pattern like `Makefile` matches `src/Makefile`.
	pub fn matches_path(&self, file_path: &Path) -> bool {
		let path_str = file_path.to_string_lossy();
		self.file_type_patterns()
			.any(|pattern| path_str.ends_with(pattern))
	}
}

/// Find the first rule whose file types match the path.
pub fn find_rule_for_path<'a>(
	rules: &'a [CommentRule],
	file_path: &Path,
) -> Option<&'a CommentRule> {
	rules.iter().find(|rule| rule.matches_path(file_path))
}
