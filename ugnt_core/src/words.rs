use crate::Word;
use crate::attributes::WordAttributes;
use crate::markers::ATTRIBUTE_SEPARATOR;
use crate::markers::WORD_CLOSE;
use crate::markers::WORD_OPEN;
use crate::parser::ParseDiagnostic;

/// Scan `text` for `\w text|attributes\w*` tags and return the words in
/// left-to-right order.
///
/// Each emitted word takes the current value of `next_word_id`, which is then
/// advanced by one. Malformed tags (no `|` separator, no closing `\w*`) are
/// skipped without consuming an identifier. Text before the first tag is
/// ignored.
pub fn scan_words(text: &str, verse_id: u32, next_word_id: &mut u32) -> Vec<Word> {
	let mut ignored = Vec::new();
	scan_words_with_diagnostics(text, verse_id, next_word_id, 0, &mut ignored)
}

/// Like [`scan_words`], but records every skipped tag as a
/// [`ParseDiagnostic`] tagged with `line`.
pub fn scan_words_with_diagnostics(
	text: &str,
	verse_id: u32,
	next_word_id: &mut u32,
	line: usize,
	diagnostics: &mut Vec<ParseDiagnostic>,
) -> Vec<Word> {
	let mut words = Vec::new();

	for fragment in text.split(WORD_OPEN).skip(1) {
		if fragment.is_empty() {
			continue;
		}

		let Some((surface, attributes)) = fragment.split_once(ATTRIBUTE_SEPARATOR) else {
			tracing::debug!(line, fragment, "skipping word tag without `|` separator");
			diagnostics.push(ParseDiagnostic::MissingSeparator {
				line,
				fragment: fragment.to_string(),
			});
			continue;
		};

		let Some(end) = attributes.find(WORD_CLOSE) else {
			tracing::debug!(line, fragment, "skipping word tag without closing `\\w*`");
			diagnostics.push(ParseDiagnostic::MissingClosingMarker {
				line,
				fragment: fragment.to_string(),
			});
			continue;
		};

		let WordAttributes {
			lemma,
			strong,
			morph,
		} = WordAttributes::parse(&attributes[..end]);

		words.push(Word {
			id: *next_word_id,
			verse_id,
			text: surface.to_string(),
			lemma: lemma.to_string(),
			strong: strong.to_string(),
			morph: morph.to_string(),
		});
		*next_word_id += 1;
	}

	words
}
