//! Turning a directory of USFM files into an ordered collection of books.
//!
//! Files are parsed one at a time, in file-name order, and book identifiers
//! are handed out as 1, 2, 3, … in that order. The first fatal error stops
//! the whole run and carries the offending file name.

use std::borrow::Cow;
use std::path::Path;
use std::path::PathBuf;

use derive_more::Deref;
use derive_more::DerefMut;
use globset::Glob;
use globset::GlobMatcher;
use serde::Deserialize;
use serde::Serialize;

use crate::Book;
use crate::ParseDiagnostic;
use crate::UgntConfig;
use crate::UgntError;
use crate::UgntResult;
use crate::config::DEFAULT_SOURCE_PATTERN;
use crate::parse_book_with_diagnostics;

/// Options controlling which files in the source directory are parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceOptions {
	/// Glob matched against each file name.
	pub pattern: String,
}

impl Default for SourceOptions {
	fn default() -> Self {
		Self {
			pattern: DEFAULT_SOURCE_PATTERN.to_string(),
		}
	}
}

impl SourceOptions {
	/// Construct [`SourceOptions`] from the `[source]` section of a config.
	pub fn from_config(config: &UgntConfig) -> Self {
		Self {
			pattern: config.source.pattern.clone(),
		}
	}

	fn matcher(&self) -> UgntResult<GlobMatcher> {
		let glob = Glob::new(&self.pattern).map_err(|e| UgntError::InvalidPattern {
			pattern: self.pattern.clone(),
			reason: e.to_string(),
		})?;

		Ok(glob.compile_matcher())
	}
}

/// The ordered books of a corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref, DerefMut, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Corpus(
	#[deref]
	#[deref_mut]
	Vec<Book>,
);

impl Corpus {
	pub fn into_books(self) -> Vec<Book> {
		self.0
	}

	/// Identifier the next parsed book receives.
	fn next_book_id(&self) -> u32 {
		self.0.len() as u32 + 1
	}

	fn push_source(
		&mut self,
		file: &str,
		content: &str,
		diagnostics: &mut Vec<SourceDiagnostic>,
	) -> UgntResult<()> {
		let book_id = self.next_book_id();
		let (book, found) = parse_book_with_diagnostics(content, book_id)
			.map_err(|error| UgntError::in_file(file, error))?;

		tracing::debug!(file, book = book_id, title = %book.title, "parsed source file");
		diagnostics.extend(found.into_iter().map(|diagnostic| SourceDiagnostic {
			file: file.to_string(),
			diagnostic,
		}));
		self.0.push(book);

		Ok(())
	}
}

impl IntoIterator for Corpus {
	type IntoIter = std::vec::IntoIter<Book>;
	type Item = Book;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

/// A [`ParseDiagnostic`] together with the file it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDiagnostic {
	pub file: String,
	#[serde(flatten)]
	pub diagnostic: ParseDiagnostic,
}

/// List the files in `dir` whose names match the configured pattern, sorted
/// by name. Sub-directories are not descended into.
pub fn collect_source_files(dir: &Path, options: &SourceOptions) -> UgntResult<Vec<PathBuf>> {
	let matcher = options.matcher()?;
	let entries = std::fs::read_dir(dir).map_err(|e| UgntError::SourceDirectory {
		path: dir.display().to_string(),
		reason: e.to_string(),
	})?;

	let mut files = Vec::new();
	for entry in entries {
		let path = entry?.path();
		if !path.is_file() {
			continue;
		}

		if path
			.file_name()
			.is_some_and(|name| matcher.is_match(Path::new(name)))
		{
			files.push(path);
		}
	}

	// Sort for deterministic book identifiers.
	files.sort();
	Ok(files)
}

/// Parse every source file in `dir` into a [`Corpus`].
pub fn parse_corpus(dir: &Path, options: &SourceOptions) -> UgntResult<Corpus> {
	parse_corpus_with_diagnostics(dir, options).map(|(corpus, _)| corpus)
}

/// Like [`parse_corpus`], but also returns the non-fatal diagnostics of every
/// file.
pub fn parse_corpus_with_diagnostics(
	dir: &Path,
	options: &SourceOptions,
) -> UgntResult<(Corpus, Vec<SourceDiagnostic>)> {
	let files = collect_source_files(dir, options)?;
	let mut corpus = Corpus::default();
	let mut diagnostics = Vec::new();

	for path in &files {
		let file = display_name(path);
		let bytes = std::fs::read(path).map_err(|error| UgntError::in_file(&file, error.into()))?;
		let content = String::from_utf8_lossy(&bytes);
		if matches!(content, Cow::Owned(_)) {
			tracing::warn!(file = %file, "replaced bytes that are not valid UTF-8");
		}
		corpus.push_source(&file, &content, &mut diagnostics)?;
	}

	tracing::info!(
		dir = %dir.display(),
		books = corpus.len(),
		diagnostics = diagnostics.len(),
		"parsed corpus"
	);

	Ok((corpus, diagnostics))
}

/// Parse already-read sources, given as `(file name, content)` pairs, in
/// order.
pub fn parse_sources<I, N, C>(sources: I) -> UgntResult<Corpus>
where
	I: IntoIterator<Item = (N, C)>,
	N: AsRef<str>,
	C: AsRef<str>,
{
	parse_sources_with_diagnostics(sources).map(|(corpus, _)| corpus)
}

/// Like [`parse_sources`], but also returns the non-fatal diagnostics.
pub fn parse_sources_with_diagnostics<I, N, C>(
	sources: I,
) -> UgntResult<(Corpus, Vec<SourceDiagnostic>)>
where
	I: IntoIterator<Item = (N, C)>,
	N: AsRef<str>,
	C: AsRef<str>,
{
	let mut corpus = Corpus::default();
	let mut diagnostics = Vec::new();

	for (file, content) in sources {
		corpus.push_source(file.as_ref(), content.as_ref(), &mut diagnostics)?;
	}

	Ok((corpus, diagnostics))
}

fn display_name(path: &Path) -> String {
	path.file_name()
		.map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned())
}
