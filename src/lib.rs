//! Comments - toggle line and block comments on a text selection.
//!
//! This library provides the core functionality for comments, including:
//! - Comment rule configuration keyed by file type
//! - Rule lookup by file path suffix
//! - Pure comment/uncomment transforms for line and block styles
//! - An engine that applies them to a host editor's selection
//!
//! # Example
//!
//! ```
//! use comments_cli::config::{CommentRule, RuleStore};
//! use comments_cli::host::TextBuffer;
//! use comments_cli::{CommentsEngine, Outcome};
//! use std::path::PathBuf;
//!
//! let store = RuleStore::new(vec![CommentRule::line("*.c,*.h", "//")]);
//! let engine = CommentsEngine::new(store);
//!
//! let mut buffer = TextBuffer::new(Some(PathBuf::from("main.c")), "int x;\n");
//! assert_eq!(engine.comment(&mut buffer).unwrap(), Outcome::Replaced);
//! assert_eq!(buffer.text(), "//int x;\n");
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod host;
pub mod rules;
pub mod transform;

pub use engine::{CommentsEngine, NoOpReason, Outcome};
pub use error::{CommentsError, Result};
pub use transform::Direction;
