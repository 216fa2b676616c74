use crate::config::types::CommentRule;
use crate::error::{CommentsError, Result};

/// A working copy of the rule list for an editing round trip.
///
/// Edits never touch the active rules. Hand the session back to
/// [`crate::CommentsEngine::commit`] to apply it, or drop it to discard.
#[derive(Debug, Clone, Default)]
pub struct RuleSession {
	rules: Vec<CommentRule>,
}

impl RuleSession {
	pub fn new(rules: Vec<CommentRule>) -> Self {
		RuleSession { rules }
	}

	pub fn rules(&self) -> &[CommentRule] {
		&self.rules
	}

	pub fn len(&self) -> usize {
		self.rules.len()
	}

	pub fn is_empty(&self) -> bool {
		self.rules.is_empty()
	}

	/// Append a rule at the lowest priority.
	pub fn add(&mut self, rule: CommentRule) -> Result<()> {
		rule.validate()?;
		self.rules.push(rule);
		Ok(())
	}

	/// Insert a rule at `index`, shifting later rules down in priority.
	pub fn insert(&mut self, index: usize, rule: CommentRule) -> Result<()> {
		if index > self.rules.len() {
			return Err(self.out_of_range(index));
		}
		rule.validate()?;
		self.rules.insert(index, rule);
		Ok(())
	}

	/// Replace the rule at `index`.
	pub fn update(&mut self, index: usize, rule: CommentRule) -> Result<()> {
		self.check_index(index)?;
		rule.validate()?;
		self.rules[index] = rule;
		Ok(())
	}

	/// Remove and return the rule at `index`.
	pub fn remove(&mut self, index: usize) -> Result<CommentRule> {
		self.check_index(index)?;
		Ok(self.rules.remove(index))
	}

	/// Move the rule at `from` so it ends up at position `to`.
	pub fn move_rule(&mut self, from: usize, to: usize) -> Result<()> {
		self.check_index(from)?;
		self.check_index(to)?;
		let rule = self.rules.remove(from);
		self.rules.insert(to, rule);
		Ok(())
	}

	pub fn into_rules(self) -> Vec<CommentRule> {
		self.rules
	}

	fn check_index(&self, index: usize) -> Result<()> {
		if index < self.rules.len() {
			Ok(())
		} else {
			Err(self.out_of_range(index))
		}
	}

	fn out_of_range(&self, index: usize) -> CommentsError {
		CommentsError::RuleIndexOutOfRange {
			index,
			len: self.rules.len(),
		}
	}
}
