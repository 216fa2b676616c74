//! Rule lookup and editing for comments.
//!
//! This module handles:
//! - Matching file paths against rule suffix patterns
//! - Working copies of the rule list for editing sessions

pub mod matcher;
pub mod session;

pub use matcher::find_rule_for_path;
pub use session::RuleSession;
