use std::path::PathBuf;

/// Library-level structured errors for comments.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum CommentsError {
	#[error("Failed to read config file: {path}")]
	ConfigReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse config file: {path}")]
	ConfigParseError {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Failed to serialize comment rules")]
	ConfigSerializeError {
		#[source]
		source: toml::ser::Error,
	},

	#[error("Failed to write config file: {path}")]
	ConfigWriteError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Invalid comment rule for file types '{file_types}': {reason}")]
	InvalidRule { file_types: String, reason: String },

	#[error("Rule index {index} out of range (have {len} rules)")]
	RuleIndexOutOfRange { index: usize, len: usize },

	#[error("Invalid comment marker pattern: {pattern}")]
	InvalidMarker {
		pattern: String,
		#[source]
		source: regex::Error,
	},

	#[error("Invalid line range {first}:{last} (document has {total} lines)")]
	InvalidLineRange {
		first: usize,
		last: usize,
		total: usize,
	},

	#[error("Failed to resolve the user configuration directory")]
	ConfigDirectoryNotFound,
}

/// Result type alias using CommentsError.
pub type Result<T> = std::result::Result<T, CommentsError>;
