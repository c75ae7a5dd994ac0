use std::path::Path;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;
use ugnt_cli::Commands;
use ugnt_cli::OutputFormat;
use ugnt_cli::UgntCli;
use ugnt_core::Book;
use ugnt_core::ParseDiagnostic;
use ugnt_core::UgntConfig;
use ugnt_core::config::CONFIG_FILE_CANDIDATES;
use ugnt_core::corpus::SourceDiagnostic;
use ugnt_core::corpus::SourceOptions;
use ugnt_core::corpus::parse_corpus;
use ugnt_core::corpus::parse_corpus_with_diagnostics;
use ugnt_core::export::book_file_name;
use ugnt_core::export::write_books;
use ugnt_core::lexicon::extract_lexicon;
use ugnt_core::lexicon::write_lexicon;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,green) => {
		if color_enabled() {
			format!("{}", $text.green())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,bold) => {
		if color_enabled() {
			format!("{}", $text.bold())
		} else {
			format!("{}", $text)
		}
	};
}

const SAMPLE_CONFIG: &str = "# ugnt configuration\n# Every key is optional; the values below are \
                             the defaults.\n\n[source]\n# Directory holding the USFM books, \
                             relative to this file.\ndir = \"ugnt\"\n# Glob matched against each \
                             file name.\npattern = \"*.usfm\"\n\n[output]\ndir = \
                             \"output\"\n# Indent JSON with two spaces.\npretty = \
                             true\n\n[lexicon]\n# Root of the Strong's lexicon markdown \
                             tree.\ndir = \"strong\"\n# Written inside the output \
                             directory.\noutput = \"strong_output.json\"\n";

fn main() {
	let args = UgntCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	init_tracing(args.verbose, use_color);

	let result = match &args.command {
		Some(Commands::Init) => run_init(&args),
		Some(Commands::Parse {
			source,
			output,
			dry_run,
		}) => run_parse(&args, source.as_deref(), output.as_deref(), *dry_run),
		Some(Commands::Check {
			source,
			format,
			strict,
		}) => run_check(&args, source.as_deref(), *format, *strict),
		Some(Commands::Lexicon { source, output }) => {
			run_lexicon(&args, source.as_deref(), output.as_deref())
		}
		None => {
			eprintln!("No subcommand specified. Run `ugnt --help` for usage.");
			process::exit(1);
		}
	};

	if let Err(e) = result {
		// Try to render through miette for rich diagnostics with help text
		// and error codes.
		match e.downcast::<ugnt_core::UgntError>() {
			Ok(ugnt_err) => {
				let report: miette::Report = (*ugnt_err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(2);
	}
}

/// Log to stderr. `RUST_LOG` wins; otherwise `--verbose` selects `debug` and
/// the default is `warn`.
fn init_tracing(verbose: bool, use_color: bool) {
	let fallback = if verbose { "debug" } else { "warn" };
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_ansi(use_color)
		.with_target(false)
		.init();
}

fn resolve_root(args: &UgntCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// A command-line override is taken relative to the project root. Absolute
/// paths are kept as given.
fn override_or(root: &Path, value: Option<&Path>, fallback: PathBuf) -> PathBuf {
	value.map_or(fallback, |path| root.join(path))
}

fn make_relative(path: &Path, root: &Path) -> String {
	path.strip_prefix(root)
		.unwrap_or(path)
		.display()
		.to_string()
}

fn run_init(args: &UgntCli) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);

	if let Some(existing) = UgntConfig::resolve_path(&root) {
		println!("Config file already exists: {}", existing.display());
		return Ok(());
	}

	let config_path = root.join(CONFIG_FILE_CANDIDATES[0]);
	std::fs::write(&config_path, SAMPLE_CONFIG)?;
	println!("Created {}", CONFIG_FILE_CANDIDATES[0]);

	println!();
	println!("Next steps:");
	println!("  1. Put your USFM books in {}", root.join("ugnt").display());
	println!("  2. Run `ugnt check` to validate them");
	println!("  3. Run `ugnt parse` to write one JSON file per book");

	Ok(())
}

fn run_parse(
	args: &UgntCli,
	source: Option<&Path>,
	output: Option<&Path>,
	dry_run: bool,
) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let config = UgntConfig::load_or_default(&root)?;
	let source_dir = override_or(&root, source, config.source_dir(&root));
	let output_dir = override_or(&root, output, config.output_dir(&root));

	let corpus = parse_corpus(&source_dir, &SourceOptions::from_config(&config))?;

	if corpus.is_empty() {
		println!("No source files found in {}", source_dir.display());
		return Ok(());
	}

	if dry_run {
		println!("Dry run: would write {} file(s):", corpus.len());
		for book in corpus.iter() {
			let path = output_dir.join(book_file_name(book));
			println!("  {}", make_relative(&path, &root));
		}
		return Ok(());
	}

	let written = write_books(corpus.iter(), &output_dir, config.output.pretty)?;

	if args.verbose {
		for path in &written {
			println!("  {}", make_relative(path, &root));
		}
	}

	println!(
		"{} Wrote {} book(s) to {}",
		colored!("✓", green),
		written.len(),
		make_relative(&output_dir, &root)
	);

	Ok(())
}

fn run_check(
	args: &UgntCli,
	source: Option<&Path>,
	format: OutputFormat,
	strict: bool,
) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let config = UgntConfig::load_or_default(&root)?;
	let source_dir = override_or(&root, source, config.source_dir(&root));

	let (corpus, diagnostics) =
		parse_corpus_with_diagnostics(&source_dir, &SourceOptions::from_config(&config))?;

	match format {
		OutputFormat::Json => {
			let books: Vec<serde_json::Value> = corpus.iter().map(book_summary).collect();
			let output = serde_json::json!({
				"ok": diagnostics.is_empty(),
				"books": books,
				"diagnostics": diagnostics,
			});
			println!("{output}");
		}
		OutputFormat::Text => {
			for diagnostic in &diagnostics {
				eprintln!("{:?}", diagnostic_to_report(diagnostic));
			}

			println!("{}", colored!("Books", bold));
			for book in corpus.iter() {
				println!(
					"  {:>3}  {:<24} {} chapter(s), {} verse(s), {} word(s)",
					book.id,
					display_title(book),
					book.chapters.len(),
					book.verse_count(),
					book.word_count()
				);
			}

			println!();
			if diagnostics.is_empty() {
				println!(
					"{} Check passed: {} book(s) parsed without warnings.",
					colored!("✓", green),
					corpus.len()
				);
			} else {
				println!(
					"Check finished: {} book(s) parsed, {} warning(s).",
					corpus.len(),
					diagnostics.len()
				);
			}
		}
	}

	if strict && !diagnostics.is_empty() {
		process::exit(1);
	}

	Ok(())
}

fn run_lexicon(
	args: &UgntCli,
	source: Option<&Path>,
	output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let config = UgntConfig::load_or_default(&root)?;
	let lexicon_dir = override_or(&root, source, config.lexicon_dir(&root));
	let output_path = override_or(&root, output, config.lexicon_output(&root));

	let entries = extract_lexicon(&lexicon_dir)?;
	write_lexicon(&entries, &output_path, config.output.pretty)?;

	println!(
		"{} Wrote {} lexicon entr{} to {}",
		colored!("✓", green),
		entries.len(),
		if entries.len() == 1 { "y" } else { "ies" },
		make_relative(&output_path, &root)
	);

	Ok(())
}

fn display_title(book: &Book) -> &str {
	if book.title.is_empty() {
		"(untitled)"
	} else {
		&book.title
	}
}

fn book_summary(book: &Book) -> serde_json::Value {
	serde_json::json!({
		"id": book.id,
		"title": book.title,
		"file": book_file_name(book),
		"chapters": book.chapters.len(),
		"verses": book.verse_count(),
		"words": book.word_count(),
	})
}

/// Convert a `SourceDiagnostic` into a warning `miette::Report` for terminal
/// display.
fn diagnostic_to_report(source: &SourceDiagnostic) -> miette::Report {
	let diagnostic = &source.diagnostic;
	let message = format!(
		"[{}:{}] {}",
		source.file,
		diagnostic.line(),
		diagnostic.message()
	);

	let (code, help) = match diagnostic {
		ParseDiagnostic::MissingSeparator { .. } => {
			(
				"ugnt::missing_separator",
				"separate the word from its attributes with `|`: `\\w word|lemma=\"...\"\\w*`",
			)
		}
		ParseDiagnostic::MissingClosingMarker { .. } => {
			(
				"ugnt::missing_closing_marker",
				"close the word tag with `\\w*` on the same line",
			)
		}
		ParseDiagnostic::OrphanWords { .. } => {
			(
				"ugnt::orphan_words",
				"add a `\\v` marker before the first word of the chapter",
			)
		}
		_ => ("ugnt::diagnostic", "the offending content was skipped"),
	};

	let report = miette::MietteDiagnostic::new(message)
		.with_code(code)
		.with_help(help)
		.with_severity(miette::Severity::Warning);
	miette::Report::new(report)
}
