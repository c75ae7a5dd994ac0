use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Turn interlinear USFM books into structured JSON.",
	long_about = "ugnt parses interlinear Greek USFM files (\\h, \\c, \\v and \\w word tags \
	              carrying lemma, Strong's number and morphology) into a Book, Chapter, Verse, \
	              Word tree and writes one JSON file per book.\n\nQuick start:\n  ugnt init     \
	              Create a ugnt.toml\n  ugnt check    Parse every book and report problems\n  \
	              ugnt parse    Write one JSON file per book\n  ugnt lexicon  Extract word \
	              senses from Strong's markdown"
)]
pub struct UgntCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Path to the project root directory.
	#[arg(long, short, global = true)]
	pub path: Option<PathBuf>,

	/// Enable verbose output. `RUST_LOG` takes precedence when set.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Create a sample `ugnt.toml` in the project root.
	///
	/// If a config file already exists, this command is a no-op and exits
	/// successfully.
	Init,
	/// Parse every source book and write one JSON file per book.
	///
	/// Source files are read from `[source] dir` (default `ugnt/`), filtered
	/// by `[source] pattern` (default `*.usfm`) and given book ids in file
	/// name order. Output files are named `{id}_{title}.json`, or `{id}.json`
	/// for books without a `\h` title.
	Parse {
		/// Directory holding the USFM files. Overrides `[source] dir`.
		#[arg(long)]
		source: Option<PathBuf>,

		/// Directory receiving the JSON files. Overrides `[output] dir`.
		#[arg(long)]
		output: Option<PathBuf>,

		/// Parse and report which files would be written without writing
		/// them.
		#[arg(long, default_value_t = false)]
		dry_run: bool,
	},
	/// Parse every source book and report its contents and any skipped
	/// content.
	///
	/// Structural errors (a verse before any chapter, a non-numeric chapter
	/// or verse number) fail the check. Malformed word tags are reported as
	/// warnings.
	Check {
		/// Directory holding the USFM files. Overrides `[source] dir`.
		#[arg(long)]
		source: Option<PathBuf>,

		/// Output format for check results.
		#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
		format: OutputFormat,

		/// Exit with a non-zero status when any warning is reported.
		#[arg(long, default_value_t = false)]
		strict: bool,
	},
	/// Extract word senses from a tree of Strong's lexicon markdown files.
	///
	/// Every `*.md` file below `[lexicon] dir` (default `strong/`) becomes one
	/// entry in a single JSON array.
	Lexicon {
		/// Root of the lexicon markdown tree. Overrides `[lexicon] dir`.
		#[arg(long)]
		source: Option<PathBuf>,

		/// Output JSON file. Overrides `[output] dir` joined with
		/// `[lexicon] output`.
		#[arg(long)]
		output: Option<PathBuf>,
	},
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
	/// Human-readable text output with colors and formatting.
	Text,
	/// JSON output for programmatic consumption.
	Json,
}
