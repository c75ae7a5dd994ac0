/// `\h `: running header, used as the book title.
pub const TITLE_MARKER: &str = "\\h ";
/// `\c `: chapter.
pub const CHAPTER_MARKER: &str = "\\c ";
/// `\v `: verse.
pub const VERSE_MARKER: &str = "\\v ";
/// `\w `: opens an inline word tag.
pub const WORD_OPEN: &str = "\\w ";
/// `\w*`: closes an inline word tag.
pub const WORD_CLOSE: &str = "\\w*";
/// Separates the surface text of a word tag from its attributes.
pub const ATTRIBUTE_SEPARATOR: char = '|';

/// The role of a single source line, decided by its leading marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LineKind<'a> {
	/// `\h <text>`, carrying everything after the marker.
	Title(&'a str),
	/// `\c <n>`, carrying everything after the marker.
	Chapter(&'a str),
	/// `\v <n> [rest]`, carrying the whole line.
	Verse(&'a str),
	/// Any other line containing at least one word tag.
	Words(&'a str),
	/// Blank lines, unsupported markers and plain text.
	Other,
}

/// Classify a line. Markers are only recognised at the very start of the line
/// and the first match wins.
pub(crate) fn classify_line(line: &str) -> LineKind<'_> {
	if let Some(rest) = line.strip_prefix(TITLE_MARKER) {
		return LineKind::Title(rest);
	}

	if let Some(rest) = line.strip_prefix(CHAPTER_MARKER) {
		return LineKind::Chapter(rest);
	}

	if line.starts_with(VERSE_MARKER) {
		return LineKind::Verse(line);
	}

	if line.contains(WORD_OPEN) {
		return LineKind::Words(line);
	}

	LineKind::Other
}
