use crate::config::parser::{parse_rules_file, save_rules_file};
use crate::config::types::CommentRule;
use crate::error::{CommentsError, Result};
use crate::rules::find_rule_for_path;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Name of the rules file inside the configuration folder.
pub const RULES_FILE_NAME: &str = "comments.toml";

/// The active, ordered list of comment rules.
///
/// Rules are read-only during comment actions; edits go through
/// [`RuleStore::replace_all`], which supersedes the whole list at once.
#[derive(Debug, Clone, Default)]
pub struct RuleStore {
	rules: Vec<CommentRule>,
	path: Option<PathBuf>,
}

impl RuleStore {
	/// Create an in-memory store that is never persisted.
	pub fn new(rules: Vec<CommentRule>) -> Self {
		RuleStore { rules, path: None }
	}

	/// Load rules from `path`, remembering it as the save location.
	///
	/// A missing or malformed file yields an empty store rather than an error.
	pub fn load(path: &Path) -> Self {
		RuleStore {
			rules: load_rules(path),
			path: Some(path.to_path_buf()),
		}
	}

	/// Open the rules file at `path` for editing.
	///
	/// Unlike [`RuleStore::load`], a malformed file is an error so that
	/// saving edits never clobbers it. A missing file is an empty store.
	pub fn open(path: &Path) -> Result<Self> {
		let rules = if path.exists() {
			parse_rules_file(path)?
		} else {
			Vec::new()
		};
		Ok(RuleStore {
			rules,
			path: Some(path.to_path_buf()),
		})
	}

	pub fn rules(&self) -> &[CommentRule] {
		&self.rules
	}

	pub fn path(&self) -> Option<&Path> {
		self.path.as_deref()
	}

	/// First rule whose file type patterns match `file_path`.
	pub fn find_rule_for_path(&self, file_path: &Path) -> Option<&CommentRule> {
		find_rule_for_path(&self.rules, file_path)
	}

	/// Swap in a new rule list. The previous rules are dropped.
	pub fn replace_all(&mut self, new_rules: Vec<CommentRule>) {
		debug!(
			old = self.rules.len(),
			new = new_rules.len(),
			"Replacing comment rules"
		);
		self.rules = new_rules;
	}

	/// Write the active rules to the store path, if it has one.
	pub fn save(&self) -> Result<()> {
		match self.path {
			Some(ref path) => save_rules_file(path, &self.rules),
			None => Ok(()),
		}
	}
}

/// Load rules from `path`, degrading to an empty list on any failure.
pub fn load_rules(path: &Path) -> Vec<CommentRule> {
	if !path.exists() {
		debug!(path = %path.display(), "No rules file, starting with no rules");
		return Vec::new();
	}

	match parse_rules_file(path) {
		Ok(rules) => {
			debug!(path = %path.display(), count = rules.len(), "Loaded comment rules");
			rules
		}
		Err(e) => {
			warn!(path = %path.display(), error = %e, "Ignoring unreadable rules file");
			Vec::new()
		}
	}
}

/// Get the default path of the rules file.
pub fn default_rules_path() -> Result<PathBuf> {
	let config_dir = dirs::config_dir().ok_or(CommentsError::ConfigDirectoryNotFound)?;
	Ok(config_dir.join("comments").join(RULES_FILE_NAME))
}
