use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use comments_cli::config::{
	CommentRule, RuleStore, default_rules, default_rules_path, parse_rules_file, save_rules_file,
};
use comments_cli::host::TextBuffer;
use comments_cli::rules::RuleSession;
use comments_cli::{CommentsEngine, CommentsError, Direction, Outcome};

#[derive(Parser)]
#[command(name = "comments")]
#[command(
	author,
	version,
	about = "Toggle line and block comments on a text selection"
)]
#[command(arg_required_else_help = true)]
struct Cli {
	/// Rules file to use instead of the default location
	#[arg(long, global = true, value_name = "FILE")]
	config: Option<PathBuf>,

	/// Increase log verbosity (-v, -vv, -vvv)
	#[arg(short, long, global = true, action = clap::ArgAction::Count)]
	verbose: u8,

	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Comment the selection (the original editor binding is Ctrl+/)
	Comment(ActionArgs),
	/// Uncomment the selection (the original editor binding is Ctrl+\)
	Uncomment(ActionArgs),
	/// Show which rule applies to a file path
	Which {
		/// File path to look up
		path: PathBuf,
	},
	/// Rules file management commands
	Config {
		#[command(subcommand)]
		action: ConfigAction,
	},
}

#[derive(Args)]
struct ActionArgs {
	/// Document path used to pick the comment rule
	#[arg(long)]
	path: PathBuf,

	/// Edit the file at --path instead of filtering stdin to stdout
	#[arg(long)]
	in_place: bool,

	/// Lines to select when editing in place, as FIRST:LAST (1-based, inclusive)
	#[arg(long, value_name = "FIRST:LAST", requires = "in_place", value_parser = parse_line_range)]
	lines: Option<LineRange>,
}

#[derive(Subcommand)]
enum ConfigAction {
	/// Display the active rules in priority order
	Show,
	/// Check the rules file for errors
	Validate,
	/// Write a default rules file
	Init {
		/// Overwrite an existing rules file
		#[arg(long)]
		force: bool,
	},
	/// Add a rule
	Add {
		/// Comma-separated suffix patterns, e.g. "*.c,*.h"
		#[arg(long)]
		file_types: String,
		/// Line marker, or block start marker when --end is given
		#[arg(long, allow_hyphen_values = true)]
		start: String,
		/// Block end marker
		#[arg(long, allow_hyphen_values = true)]
		end: Option<String>,
		/// Position to insert at (1 = highest priority); defaults to last
		#[arg(long, value_parser = position_parser())]
		at: Option<usize>,
	},
	/// Change fields of the rule at a position
	Edit {
		/// Rule position as shown by `config show`
		#[arg(value_parser = position_parser())]
		index: usize,
		/// New comma-separated suffix patterns
		#[arg(long)]
		file_types: Option<String>,
		/// New line marker, or block start marker
		#[arg(long, allow_hyphen_values = true)]
		start: Option<String>,
		/// New block end marker; pass "" to make it a line rule
		#[arg(long, allow_hyphen_values = true)]
		end: Option<String>,
	},
	/// Remove the rule at a position
	Remove {
		/// Rule position as shown by `config show`
		#[arg(value_parser = position_parser())]
		index: usize,
	},
	/// Move a rule to a new position
	Move {
		/// Current position
		#[arg(value_parser = position_parser())]
		from: usize,
		/// New position
		#[arg(value_parser = position_parser())]
		to: usize,
	},
	/// Print the rules file location
	Path,
}

/// Rule positions are 1-based on the command line.
fn position_parser() -> clap::builder::RangedU64ValueParser<usize> {
	clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
}

#[derive(Debug, Clone, Copy)]
struct LineRange {
	first: usize,
	last: usize,
}

fn parse_line_range(value: &str) -> std::result::Result<LineRange, String> {
	let (first, last) = value.split_once(':').unwrap_or((value, value));
	let parse = |s: &str| {
		s.trim()
			.parse::<usize>()
			.map_err(|e| format!("invalid line number '{s}': {e}"))
	};
	Ok(LineRange {
		first: parse(first)?,
		last: parse(last)?,
	})
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	let config_path = match cli.config {
		Some(path) => path,
		None => default_rules_path().context("Failed to locate the rules file")?,
	};

	match cli.command {
		Commands::Comment(args) => handle_action(&config_path, &args, Direction::Comment),
		Commands::Uncomment(args) => handle_action(&config_path, &args, Direction::Uncomment),
		Commands::Which { path } => handle_which(&config_path, &path),
		Commands::Config { action } => match action {
			ConfigAction::Show => handle_config_show(&config_path),
			ConfigAction::Validate => handle_config_validate(&config_path),
			ConfigAction::Init { force } => handle_config_init(&config_path, force),
			ConfigAction::Add {
				file_types,
				start,
				end,
				at,
			} => {
				let rule = CommentRule::block(file_types, start, end.unwrap_or_default());
				handle_config_edit(&config_path, |session| match at {
					Some(position) => {
						session.insert(position.saturating_sub(1), rule)?;
						Ok(format!("Added rule at position {position}"))
					}
					None => {
						session.add(rule)?;
						Ok(format!("Added rule at position {}", session.len()))
					}
				})
			}
			ConfigAction::Edit {
				index,
				file_types,
				start,
				end,
			} => handle_config_edit(&config_path, |session| {
				let offset = index - 1;
				let mut rule = session.rules().get(offset).cloned().unwrap_or_default();
				if let Some(file_types) = file_types {
					rule.file_types = file_types;
				}
				if let Some(start) = start {
					rule.start = start;
				}
				if let Some(end) = end {
					rule.end = end;
				}
				session.update(offset, rule)?;
				Ok(format!("Updated rule at position {index}"))
			}),
			ConfigAction::Remove { index } => handle_config_edit(&config_path, |session| {
				let removed = session.remove(index.saturating_sub(1))?;
				Ok(format!("Removed rule for {}", removed.file_types))
			}),
			ConfigAction::Move { from, to } => handle_config_edit(&config_path, |session| {
				session.move_rule(from.saturating_sub(1), to.saturating_sub(1))?;
				Ok(format!("Moved rule {from} to position {to}"))
			}),
			ConfigAction::Path => {
				println!("{}", config_path.display());
				Ok(ExitCode::SUCCESS)
			}
		},
	}
}

/// Logs go to stderr so that filter mode keeps stdout clean.
fn init_tracing(verbose: u8) {
	let filter = match verbose {
		0 => "warn",
		1 => "info",
		2 => "debug",
		_ => "trace",
	};

	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
		)
		.with_writer(std::io::stderr)
		.init();
}

fn handle_action(
	config_path: &Path,
	args: &ActionArgs,
	direction: Direction,
) -> Result<ExitCode> {
	let engine = CommentsEngine::load(config_path);

	let text = if args.in_place {
		std::fs::read_to_string(&args.path)
			.with_context(|| format!("Failed to read {}", args.path.display()))?
	} else {
		let mut input = String::new();
		std::io::stdin()
			.read_to_string(&mut input)
			.context("Failed to read selection from stdin")?;
		input
	};

	let mut buffer = TextBuffer::new(Some(args.path.clone()), text);
	match args.lines {
		Some(range) => buffer.select_lines(range.first, range.last)?,
		None => buffer.select_all(),
	}
	debug!(selection = ?buffer.selected_range(), "Selected text");

	let outcome = match direction {
		Direction::Comment => engine.comment(&mut buffer)?,
		Direction::Uncomment => engine.uncomment(&mut buffer)?,
	};

	if let Outcome::Unchanged(reason) = outcome {
		info!(path = %args.path.display(), %reason, "Nothing to {direction}");
	}

	let text = buffer.into_text();
	if args.in_place {
		if outcome == Outcome::Replaced {
			std::fs::write(&args.path, text)
				.with_context(|| format!("Failed to write {}", args.path.display()))?;
		}
	} else {
		let mut stdout = std::io::stdout().lock();
		stdout
			.write_all(text.as_bytes())
			.and_then(|()| stdout.flush())
			.context("Failed to write result to stdout")?;
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_which(config_path: &Path, path: &Path) -> Result<ExitCode> {
	let store = RuleStore::load(config_path);

	match store.find_rule_for_path(path) {
		Some(rule) => {
			println!("{}", describe_rule(rule));
			Ok(ExitCode::SUCCESS)
		}
		None => {
			println!("No comment rule matches {}", path.display());
			Ok(ExitCode::FAILURE)
		}
	}
}

fn handle_config_show(config_path: &Path) -> Result<ExitCode> {
	if !config_path.exists() {
		println!("No rules file found at {}", config_path.display());
		return Ok(ExitCode::SUCCESS);
	}

	let rules = parse_rules_file(config_path)
		.with_context(|| format!("Failed to load {}", config_path.display()))?;
	println!("# Source: {}", config_path.display());
	println!("# rules: {}", rules.len());
	println!();

	for (i, rule) in rules.iter().enumerate() {
		println!("  Rule {}:", i + 1);
		for line in describe_rule(rule).lines() {
			println!("    {}", line);
		}
		println!();
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_config_validate(config_path: &Path) -> Result<ExitCode> {
	if !config_path.exists() {
		println!("No rules file found at {}", config_path.display());
		return Ok(ExitCode::SUCCESS);
	}

	match parse_rules_file(config_path) {
		Ok(rules) => {
			println!(
				"Rules file is valid: {} ({} rules)",
				config_path.display(),
				rules.len()
			);
			Ok(ExitCode::SUCCESS)
		}
		Err(e) => {
			eprintln!("Configuration error: {}", e);
			Ok(ExitCode::FAILURE)
		}
	}
}

fn handle_config_init(config_path: &Path, force: bool) -> Result<ExitCode> {
	if config_path.exists() && !force {
		anyhow::bail!(
			"{} already exists. Use --force to overwrite.",
			config_path.display()
		);
	}

	save_rules_file(config_path, &default_rules())
		.with_context(|| format!("Failed to write {}", config_path.display()))?;

	println!("Created {}", config_path.display());
	Ok(ExitCode::SUCCESS)
}

/// Run one edit against a working copy of the rules; commit on success.
fn handle_config_edit<F>(config_path: &Path, edit: F) -> Result<ExitCode>
where
	F: FnOnce(&mut RuleSession) -> comments_cli::Result<String>,
{
	let store = RuleStore::open(config_path)
		.with_context(|| format!("Failed to open {}", config_path.display()))?;
	let mut engine = CommentsEngine::new(store);
	let mut session = engine.open_session();

	match edit(&mut session) {
		Ok(message) => {
			engine
				.commit(session)
				.with_context(|| format!("Failed to save {}", config_path.display()))?;
			println!("{}", message);
			Ok(ExitCode::SUCCESS)
		}
		Err(e) => {
			engine.discard(session);
			Err(to_position_error(e)).context("Rule edit rejected")
		}
	}
}

/// Session indices are 0-based; report the 1-based position the user typed.
fn to_position_error(e: CommentsError) -> CommentsError {
	match e {
		CommentsError::RuleIndexOutOfRange { index, len } => CommentsError::RuleIndexOutOfRange {
			index: index + 1,
			len,
		},
		other => other,
	}
}

fn describe_rule(rule: &CommentRule) -> String {
	if rule.is_block() {
		format!(
			"file_types: {}\nstyle: block\nstart: {}\nend: {}",
			rule.file_types,
			rule.block_start(),
			rule.block_end()
		)
	} else {
		format!(
			"file_types: {}\nstyle: line\nstart: {}",
			rule.file_types,
			rule.line_start()
		)
	}
}
