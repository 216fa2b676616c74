//! Comment rule configuration.
//!
//! This module handles:
//! - The `CommentRule` record and its TOML layout
//! - Parsing, validating and saving rules files
//! - The active `RuleStore`

pub mod parser;
pub mod store;
pub mod types;

pub use parser::{
	default_rules, parse_rules_file, parse_rules_str, save_rules_file, serialize_rules,
};
pub use store::{RULES_FILE_NAME, RuleStore, default_rules_path, load_rules};
pub use types::{CommentRule, CommentStyle, RulesFile};
