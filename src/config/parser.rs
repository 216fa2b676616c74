use crate::config::types::{CommentRule, RulesFile};
use crate::error::{CommentsError, Result};
use std::path::Path;

/// Parse a rules file from the given path.
pub fn parse_rules_file(path: &Path) -> Result<Vec<CommentRule>> {
	let content =
		std::fs::read_to_string(path).map_err(|source| CommentsError::ConfigReadError {
			path: path.to_path_buf(),
			source,
		})?;

	parse_rules_str(&content, path)
}

/// Parse rules from a string (useful for testing).
pub fn parse_rules_str(content: &str, path: &Path) -> Result<Vec<CommentRule>> {
	let file: RulesFile =
		toml::from_str(content).map_err(|source| CommentsError::ConfigParseError {
			path: path.to_path_buf(),
			source,
		})?;

	file.validate()?;

	Ok(file.rules)
}

/// Serialize rules into the on-disk TOML layout.
pub fn serialize_rules(rules: &[CommentRule]) -> Result<String> {
	let file = RulesFile {
		rules: rules.to_vec(),
	};
	toml::to_string_pretty(&file).map_err(|source| CommentsError::ConfigSerializeError { source })
}

/// Write rules to `path`, creating parent directories as needed.
pub fn save_rules_file(path: &Path, rules: &[CommentRule]) -> Result<()> {
	let content = serialize_rules(rules)?;

	let write_error = |source| CommentsError::ConfigWriteError {
		path: path.to_path_buf(),
		source,
	};

	if let Some(parent) = path.parent()
		&& !parent.as_os_str().is_empty()
	{
		std::fs::create_dir_all(parent).map_err(write_error)?;
	}

	std::fs::write(path, content).map_err(write_error)
}

/// Default rule set written by `comments config init`.
pub fn default_rules() -> Vec<CommentRule> {
	vec![
		CommentRule::line("*.c,*.h,*.cpp,*.hpp,*.rs,*.java,*.js,*.ts,*.go", "//"),
		CommentRule::line("*.py,*.sh,*.rb,*.toml,*.yml,*.yaml,Makefile", "#"),
		CommentRule::line("*.sql,*.lua,*.hs", "--"),
		CommentRule::block("*.html,*.xml,*.md", "<!--", "-->"),
		CommentRule::block("*.css", "/*", "*/"),
	]
}
