use serde::Deserialize;
use serde::Serialize;

use super::UgntError;
use super::UgntResult;
use crate::Book;
use crate::Chapter;
use crate::Verse;
use crate::markers::LineKind;
use crate::markers::WORD_OPEN;
use crate::markers::classify_line;
use crate::words::scan_words_with_diagnostics;

/// A diagnostic produced during parsing. These are issues that don't prevent
/// parsing from completing: the offending content is skipped and the rest of
/// the file is still parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
#[non_exhaustive]
pub enum ParseDiagnostic {
	/// A word tag had no `|` between its text and its attributes.
	MissingSeparator { line: usize, fragment: String },
	/// A word tag was never closed with `\w*` on the same line.
	MissingClosingMarker { line: usize, fragment: String },
	/// Word tags appeared after a chapter marker but before its first verse.
	OrphanWords { line: usize },
}

impl ParseDiagnostic {
	/// The 1-based line number the diagnostic refers to.
	pub fn line(&self) -> usize {
		match self {
			Self::MissingSeparator { line, .. }
			| Self::MissingClosingMarker { line, .. }
			| Self::OrphanWords { line } => *line,
		}
	}

	/// Human-readable message.
	pub fn message(&self) -> String {
		match self {
			Self::MissingSeparator { fragment, .. } => {
				format!("word tag without `|` separator skipped: `{}`", fragment.trim())
			}
			Self::MissingClosingMarker { fragment, .. } => {
				format!("word tag without closing `\\w*` skipped: `{}`", fragment.trim())
			}
			Self::OrphanWords { .. } => "word tags before the first verse of a chapter skipped".into(),
		}
	}
}

/// Parse the content of one source file into a [`Book`] with the given
/// identifier.
///
/// Structural problems (a non-numeric or missing chapter or verse number, a
/// verse or word before any chapter) abort the whole file. Malformed word tags are skipped.
pub fn parse_book(content: impl AsRef<str>, book_id: u32) -> UgntResult<Book> {
	parse_book_with_diagnostics(content, book_id).map(|(book, _)| book)
}

/// Parse one source file and return the book together with diagnostics for
/// everything that was skipped. Unlike [`parse_book`], callers can use the
/// diagnostics to apply stricter validation; the tree itself is identical.
pub fn parse_book_with_diagnostics(
	content: impl AsRef<str>,
	book_id: u32,
) -> UgntResult<(Book, Vec<ParseDiagnostic>)> {
	let content = content.as_ref();
	let content = content.strip_prefix('\u{feff}').unwrap_or(content);
	let mut state = ParserState::new(book_id);

	for (index, line) in content.lines().enumerate() {
		state.feed(index + 1, line)?;
	}

	Ok(state.finish())
}

/// Everything the line state machine needs between two lines.
///
/// The current chapter and verse are tracked as indices into the book's
/// vectors. Chapter and word identifiers only ever grow; the verse
/// identifier restarts at 1 with every chapter.
struct ParserState {
	book: Book,
	chapter: Option<usize>,
	verse: Option<usize>,
	next_chapter_id: u32,
	next_verse_id: u32,
	next_word_id: u32,
	diagnostics: Vec<ParseDiagnostic>,
}

impl ParserState {
	fn new(book_id: u32) -> Self {
		Self {
			book: Book::new(book_id),
			chapter: None,
			verse: None,
			next_chapter_id: 1,
			next_verse_id: 1,
			next_word_id: 1,
			diagnostics: Vec::new(),
		}
	}

	fn feed(&mut self, line_number: usize, line: &str) -> UgntResult<()> {
		match classify_line(line) {
			LineKind::Title(title) => {
				title.trim().clone_into(&mut self.book.title);
			}
			LineKind::Chapter(rest) => self.open_chapter(line_number, rest)?,
			LineKind::Verse(line) => self.open_verse(line_number, line)?,
			LineKind::Words(line) => self.attach_words(line_number, line)?,
			LineKind::Other => {}
		}

		Ok(())
	}

	fn open_chapter(&mut self, line_number: usize, rest: &str) -> UgntResult<()> {
		let token = rest.trim();
		let number = parse_number(token).ok_or_else(|| UgntError::InvalidChapterNumber {
			line: line_number,
			token: token.to_string(),
		})?;

		self.book.chapters.push(Chapter {
			id: self.next_chapter_id,
			book_id: self.book.id,
			number,
			verses: Vec::new(),
		});
		self.chapter = Some(self.book.chapters.len() - 1);
		self.verse = None;
		self.next_chapter_id += 1;
		self.next_verse_id = 1;

		Ok(())
	}

	fn open_verse(&mut self, line_number: usize, line: &str) -> UgntResult<()> {
		let Some(chapter_index) = self.chapter else {
			return Err(UgntError::VerseBeforeChapter { line: line_number });
		};

		let mut parts = line.splitn(3, ' ');
		let _marker = parts.next();
		let Some(token) = parts.next() else {
			return Err(UgntError::MalformedVerse { line: line_number });
		};
		let number = parse_number(token).ok_or_else(|| UgntError::InvalidVerseNumber {
			line: line_number,
			token: token.to_string(),
		})?;
		let rest = parts.next();

		let chapter = &mut self.book.chapters[chapter_index];
		let verse_id = self.next_verse_id;
		chapter.verses.push(Verse {
			id: verse_id,
			chapter_id: chapter.id,
			number,
			words: Vec::new(),
		});
		let verse_index = chapter.verses.len() - 1;
		self.verse = Some(verse_index);
		self.next_verse_id += 1;

		if let Some(rest) = rest.filter(|rest| rest.contains(WORD_OPEN)) {
			let words = scan_words_with_diagnostics(
				rest,
				verse_id,
				&mut self.next_word_id,
				line_number,
				&mut self.diagnostics,
			);
			chapter.verses[verse_index].words.extend(words);
		}

		Ok(())
	}

	fn attach_words(&mut self, line_number: usize, line: &str) -> UgntResult<()> {
		let Some(chapter_index) = self.chapter else {
			return Err(UgntError::WordBeforeChapter { line: line_number });
		};

		let Some(verse_index) = self.verse else {
			tracing::warn!(
				line = line_number,
				"skipping word tags before the first verse of the chapter"
			);
			self.diagnostics
				.push(ParseDiagnostic::OrphanWords { line: line_number });
			return Ok(());
		};

		let verse = &mut self.book.chapters[chapter_index].verses[verse_index];
		let words = scan_words_with_diagnostics(
			line,
			verse.id,
			&mut self.next_word_id,
			line_number,
			&mut self.diagnostics,
		);
		verse.words.extend(words);

		Ok(())
	}

	fn finish(self) -> (Book, Vec<ParseDiagnostic>) {
		tracing::debug!(
			book = self.book.id,
			title = %self.book.title,
			chapters = self.book.chapters.len(),
			words = self.next_word_id - 1,
			diagnostics = self.diagnostics.len(),
			"parsed book"
		);

		(self.book, self.diagnostics)
	}
}

/// Parse a declared chapter or verse number.
fn parse_number(token: &str) -> Option<u32> {
	token.parse().ok()
}
