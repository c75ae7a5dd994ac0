use derive_more::Deref;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum UgntError {
	#[error(transparent)]
	#[diagnostic(code(ugnt::io_error))]
	Io(#[from] std::io::Error),

	#[error("line {line}: invalid chapter number: `{token}`")]
	#[diagnostic(
		code(ugnt::invalid_chapter_number),
		help("chapter markers take a plain integer, e.g. `\\c 3`")
	)]
	InvalidChapterNumber { line: usize, token: String },

	#[error("line {line}: invalid verse number: `{token}`")]
	#[diagnostic(
		code(ugnt::invalid_verse_number),
		help("verse markers take a plain integer, e.g. `\\v 16 ...`")
	)]
	InvalidVerseNumber { line: usize, token: String },

	#[error("line {line}: verse found before chapter")]
	#[diagnostic(
		code(ugnt::verse_before_chapter),
		help("add a `\\c <number>` line before the first verse")
	)]
	VerseBeforeChapter { line: usize },

	#[error("line {line}: word found before chapter")]
	#[diagnostic(
		code(ugnt::word_before_chapter),
		help("word tags must follow a `\\c` and a `\\v` marker")
	)]
	WordBeforeChapter { line: usize },

	#[error("line {line}: malformed verse line")]
	#[diagnostic(code(ugnt::malformed_verse), help("expected `\\v <number> [words]`"))]
	MalformedVerse { line: usize },

	#[error("error parsing file `{file}`")]
	#[diagnostic(code(ugnt::in_file))]
	InFile {
		file: String,
		#[source]
		#[diagnostic_source]
		error: FileCause,
	},

	#[error("failed to read source directory `{path}`: {reason}")]
	#[diagnostic(
		code(ugnt::source_directory),
		help("set `[source] dir` in ugnt.toml or pass `--source`")
	)]
	SourceDirectory { path: String, reason: String },

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(ugnt::config_parse),
		help("check that ugnt.toml is valid TOML with [source], [output] and/or [lexicon] sections")
	)]
	ConfigParse(String),

	#[error("invalid source file pattern `{pattern}`: {reason}")]
	#[diagnostic(code(ugnt::invalid_pattern))]
	InvalidPattern { pattern: String, reason: String },

	#[error("failed to serialize `{name}` to JSON: {reason}")]
	#[diagnostic(code(ugnt::serialize))]
	Serialize { name: String, reason: String },

	#[error("failed to write `{path}`: {reason}")]
	#[diagnostic(code(ugnt::write_output))]
	WriteOutput { path: String, reason: String },
}

impl UgntError {
	/// The 1-based source line of a structural parse error, looking through
	/// any file wrapper.
	pub fn line(&self) -> Option<usize> {
		match self {
			Self::InvalidChapterNumber { line, .. }
			| Self::InvalidVerseNumber { line, .. }
			| Self::VerseBeforeChapter { line }
			| Self::WordBeforeChapter { line }
			| Self::MalformedVerse { line } => Some(*line),
			Self::InFile { error, .. } => error.line(),
			_ => None,
		}
	}

	pub(crate) fn in_file(file: impl Into<String>, error: UgntError) -> Self {
		Self::InFile {
			file: file.into(),
			error: FileCause(Box::new(error)),
		}
	}
}

/// The error wrapped by [`UgntError::InFile`]. Dereferences to the inner
/// [`UgntError`] and forwards its code and help.
#[derive(Debug, Deref, Diagnostic, Error)]
#[error(transparent)]
#[diagnostic(transparent)]
pub struct FileCause(#[deref(forward)] Box<UgntError>);

pub type UgntResult<T> = Result<T, UgntError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
