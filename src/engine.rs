//! The comment and uncomment actions, wired to a rule store and a host editor.

use crate::config::store::RuleStore;
use crate::error::Result;
use crate::host::Editor;
use crate::rules::RuleSession;
use crate::transform::{self, Direction};
use std::fmt;
use std::path::Path;
use tracing::{debug, info, warn};

/// Why an action left the selection alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoOpReason {
	/// The host has no active document path.
	NoDocument,
	/// Nothing is selected.
	NoSelection,
	/// The selection is empty or whitespace only.
	EmptySelection,
	/// No rule is configured for the document's file type.
	NoRule,
	/// The rule's markers did not apply to the selection.
	NoMatch,
}

impl fmt::Display for NoOpReason {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let reason = match self {
			NoOpReason::NoDocument => "no active document",
			NoOpReason::NoSelection => "no selection",
			NoOpReason::EmptySelection => "selection has no text",
			NoOpReason::NoRule => "no comment rule for this file type",
			NoOpReason::NoMatch => "comment markers do not match the selection",
		};
		f.write_str(reason)
	}
}

/// Result of a comment or uncomment action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
	Replaced,
	Unchanged(NoOpReason),
}

/// Owns the active rules and runs comment actions against an editor.
#[derive(Debug, Clone, Default)]
pub struct CommentsEngine {
	store: RuleStore,
}

impl CommentsEngine {
	pub fn new(store: RuleStore) -> Self {
		CommentsEngine { store }
	}

	/// Create an engine from the rules file at `path`.
	pub fn load(path: &Path) -> Self {
		CommentsEngine::new(RuleStore::load(path))
	}

	pub fn store(&self) -> &RuleStore {
		&self.store
	}

	/// Comment the editor's selection.
	pub fn comment(&self, editor: &mut dyn Editor) -> Result<Outcome> {
		self.run(editor, Direction::Comment)
	}

	/// Uncomment the editor's selection.
	pub fn uncomment(&self, editor: &mut dyn Editor) -> Result<Outcome> {
		self.run(editor, Direction::Uncomment)
	}

	/// Compute the replacement for `selection` without touching an editor.
	pub fn transform(
		&self,
		selection: &str,
		file_path: &Path,
		direction: Direction,
	) -> Option<String> {
		self.replacement_for(selection, file_path, direction).ok()
	}

	/// Start an editing session on a copy of the active rules.
	pub fn open_session(&self) -> RuleSession {
		RuleSession::new(self.store.rules().to_vec())
	}

	/// Make the session's rules the active list and persist them.
	pub fn commit(&mut self, session: RuleSession) -> Result<()> {
		self.store.replace_all(session.into_rules());
		self.store.save()?;
		info!(count = self.store.rules().len(), "Committed comment rules");
		Ok(())
	}

	/// Throw away an editing session. The active rules are untouched.
	pub fn discard(&self, session: RuleSession) {
		debug!(edited = session.len(), "Discarded rule editing session");
	}

	fn run(&self, editor: &mut dyn Editor, direction: Direction) -> Result<Outcome> {
		let replacement = {
			let Some(file_path) = editor.document_path() else {
				return Ok(self.skipped(direction, NoOpReason::NoDocument));
			};
			let Some(selection) = editor.selection() else {
				return Ok(self.skipped(direction, NoOpReason::NoSelection));
			};
			match self.replacement_for(selection, file_path, direction) {
				Ok(replacement) => replacement,
				Err(reason) => return Ok(self.skipped(direction, reason)),
			}
		};

		editor.replace_selection(&replacement)?;
		debug!(%direction, "Replaced selection");
		Ok(Outcome::Replaced)
	}

	fn replacement_for(
		&self,
		selection: &str,
		file_path: &Path,
		direction: Direction,
	) -> std::result::Result<String, NoOpReason> {
		if selection.trim().is_empty() {
			return Err(NoOpReason::EmptySelection);
		}

		let rule = self
			.store
			.find_rule_for_path(file_path)
			.ok_or(NoOpReason::NoRule)?;
		debug!(
			path = %file_path.display(),
			file_types = %rule.file_types,
			"Resolved comment rule"
		);

		match transform::apply(selection, rule, direction) {
			Ok(Some(replacement)) if replacement != selection => Ok(replacement),
			Ok(_) => Err(NoOpReason::NoMatch),
			Err(e) => {
				warn!(error = %e, "Comment markers could not be applied");
				Err(NoOpReason::NoMatch)
			}
		}
	}

	fn skipped(&self, direction: Direction, reason: NoOpReason) -> Outcome {
		debug!(%direction, %reason, "Selection left unchanged");
		Outcome::Unchanged(reason)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::types::CommentRule;
	use crate::host::TextBuffer;
	use std::path::PathBuf;

	fn engine() -> CommentsEngine {
		CommentsEngine::new(RuleStore::new(vec![
			CommentRule::line("*.c,*.h", "//"),
			CommentRule::block("*.html", "<!--", "-->"),
		]))
	}

	fn buffer(path: &str, text: &str) -> TextBuffer {
		TextBuffer::new(Some(PathBuf::from(path)), text)
	}

	#[test]
	fn test_comment_and_uncomment_line_rule() {
		let engine = engine();
		let mut buf = buffer("main.c", "int x;\n");

		assert_eq!(engine.comment(&mut buf).unwrap(), Outcome::Replaced);
		assert_eq!(buf.text(), "//int x;\n");

		assert_eq!(engine.uncomment(&mut buf).unwrap(), Outcome::Replaced);
		assert_eq!(buf.text(), "int x;\n");
	}

	#[test]
	fn test_comment_and_uncomment_block_rule() {
		let engine = engine();
		let mut buf = buffer("index.html", "<div/>");

		engine.comment(&mut buf).unwrap();
		assert_eq!(buf.text(), "<!--<div/>-->\n");

		engine.uncomment(&mut buf).unwrap();
		assert_eq!(buf.text(), "<div/>\n");
	}

	#[test]
	fn test_unmatched_path_leaves_selection() {
		let engine = engine();
		let mut buf = buffer("main.py", "x = 1\n");

		assert_eq!(
			engine.comment(&mut buf).unwrap(),
			Outcome::Unchanged(NoOpReason::NoRule)
		);
		assert_eq!(
			engine.uncomment(&mut buf).unwrap(),
			Outcome::Unchanged(NoOpReason::NoRule)
		);
		assert_eq!(buf.text(), "x = 1\n");
	}

	#[test]
	fn test_no_document_or_selection() {
		let engine = engine();

		let mut no_path = TextBuffer::new(None, "int x;\n");
		assert_eq!(
			engine.comment(&mut no_path).unwrap(),
			Outcome::Unchanged(NoOpReason::NoDocument)
		);

		let mut empty = buffer("main.c", "");
		assert_eq!(
			engine.comment(&mut empty).unwrap(),
			Outcome::Unchanged(NoOpReason::NoSelection)
		);

		let mut blank = buffer("main.c", "  \n\t\n");
		assert_eq!(
			engine.comment(&mut blank).unwrap(),
			Outcome::Unchanged(NoOpReason::EmptySelection)
		);
		assert_eq!(blank.text(), "  \n\t\n");
	}

	#[test]
	fn test_block_uncomment_mismatch_keeps_selection_untrimmed() {
		let engine = engine();
		let mut buf = buffer("index.html", "<div/>\n\n");

		assert_eq!(
			engine.uncomment(&mut buf).unwrap(),
			Outcome::Unchanged(NoOpReason::NoMatch)
		);
		assert_eq!(buf.text(), "<div/>\n\n");
	}

	#[test]
	fn test_uncomment_without_markers_is_noop() {
		let engine = engine();
		let mut buf = buffer("main.c", "int x;\n");

		assert_eq!(
			engine.uncomment(&mut buf).unwrap(),
			Outcome::Unchanged(NoOpReason::NoMatch)
		);
	}

	#[test]
	fn test_comment_selected_lines_only() {
		let engine = engine();
		let mut buf = buffer("main.c", "a;\nb;\nc;\n");
		buf.select_lines(2, 3).unwrap();

		engine.comment(&mut buf).unwrap();
		assert_eq!(buf.text(), "a;\n//b;\n//c;\n");
	}

	#[test]
	fn test_transform_without_editor() {
		let engine = engine();
		assert_eq!(
			engine.transform("int x;\n", Path::new("x.h"), Direction::Comment),
			Some("//int x;\n".to_string())
		);
		assert_eq!(
			engine.transform("int x;\n", Path::new("x.rs"), Direction::Comment),
			None
		);
	}

	#[test]
	fn test_commit_replaces_rules() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("comments.toml");
		let mut engine = CommentsEngine::load(&path);
		assert!(engine.store().rules().is_empty());

		let mut session = engine.open_session();
		session.add(CommentRule::line("*.py", "#")).unwrap();
		engine.commit(session).unwrap();

		assert_eq!(
			engine.transform("x = 1\n", Path::new("main.py"), Direction::Comment),
			Some("#x = 1\n".to_string())
		);
		assert_eq!(CommentsEngine::load(&path).store().rules(), engine.store().rules());
	}

	#[test]
	fn test_commit_drops_old_rules() {
		let mut engine = engine();
		let mut session = engine.open_session();
		session.remove(0).unwrap();
		engine.commit(session).unwrap();

		assert_eq!(
			engine.transform("int x;\n", Path::new("main.c"), Direction::Comment),
			None
		);
	}

	#[test]
	fn test_discard_leaves_rules_untouched() {
		let engine = engine();
		let mut session = engine.open_session();
		session.remove(0).unwrap();
		session.remove(0).unwrap();
		assert!(session.is_empty());
		engine.discard(session);

		assert_eq!(engine.store().rules().len(), 2);
		assert!(
			engine
				.transform("int x;\n", Path::new("main.c"), Direction::Comment)
				.is_some()
		);
	}
}
