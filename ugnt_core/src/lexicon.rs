//! Best-effort extraction of word senses from Strong's lexicon markdown.
//!
//! Each lexicon article is a markdown file containing a `Strongs: G0740`
//! line and one or more `Definition:` / `Glosses:` entries. The extractor is a
//! plain text splitter: it never fails, and anything it cannot find is left
//! empty.

use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

use crate::UgntResult;
use crate::export::create_dir;
use crate::export::render_json;
use crate::export::write_file;

const STRONGS_LABEL: &str = "trongs: ";
const DEFINITION_LABEL: &str = "Definition:";
const GLOSSES_LABEL: &str = "Glosses:";

/// The senses recorded for one Strong's number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
	pub strong: String,
	pub senses: Vec<Sense>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sense {
	/// Sense number. The markdown carries none, so this is always empty.
	pub number: String,
	pub definition: String,
}

/// Extract a [`WordEntry`] from one lexicon article.
///
/// Every `Definition:` produces a sense. A definition that is empty is
/// replaced by the `Glosses:` entry at the same position, when there is one.
pub fn parse_word_entry(markdown: &str) -> WordEntry {
	let mut definitions: Vec<String> = find_all(markdown, DEFINITION_LABEL)
		.map(|index| entry_text(&markdown[index + DEFINITION_LABEL.len()..]).to_string())
		.collect();

	for (position, index) in find_all(markdown, GLOSSES_LABEL).enumerate() {
		let Some(definition) = definitions.get_mut(position) else {
			continue;
		};
		if !definition.is_empty() {
			continue;
		}

		let gloss = entry_text(&markdown[index + GLOSSES_LABEL.len()..]);
		if !gloss.is_empty() {
			gloss.clone_into(definition);
		}
	}

	WordEntry {
		strong: find_strong_number(markdown).unwrap_or_default().to_string(),
		senses: definitions
			.into_iter()
			.map(|definition| {
				Sense {
					number: String::new(),
					definition,
				}
			})
			.collect(),
	}
}

/// The first `[A-Z0-9]+` code following a `Strongs: ` label. The label must
/// be attached to a preceding non-whitespace character.
fn find_strong_number(markdown: &str) -> Option<&str> {
	markdown.match_indices(STRONGS_LABEL).find_map(|(index, _)| {
		let attached = markdown[..index]
			.chars()
			.next_back()
			.is_some_and(|ch| !ch.is_whitespace());
		if !attached {
			return None;
		}

		let rest = &markdown[index + STRONGS_LABEL.len()..];
		let end = rest
			.find(|ch: char| !(ch.is_ascii_uppercase() || ch.is_ascii_digit()))
			.unwrap_or(rest.len());

		(end > 0).then(|| &rest[..end])
	})
}

/// Text following a label, up to the next heading (`#`), else the next list
/// item (`-`), else the end of the article.
fn entry_text(rest: &str) -> &str {
	let end = rest
		.find('#')
		.or_else(|| rest.find('-'))
		.unwrap_or(rest.len());

	rest[..end].trim()
}

/// Byte offsets of every non-overlapping occurrence of `needle`.
fn find_all<'a>(haystack: &'a str, needle: &'a str) -> impl Iterator<Item = usize> + 'a {
	haystack.match_indices(needle).map(|(index, _)| index)
}

/// Recursively collect every `.md` file below `dir`, in lexical order with
/// each directory's entries visited depth-first.
pub fn collect_markdown_files(dir: &Path) -> UgntResult<Vec<PathBuf>> {
	let mut files = Vec::new();
	walk_dir(dir, &mut files)?;
	Ok(files)
}

fn walk_dir(dir: &Path, files: &mut Vec<PathBuf>) -> UgntResult<()> {
	let mut entries = std::fs::read_dir(dir)?
		.map(|entry| entry.map(|entry| entry.path()))
		.collect::<Result<Vec<_>, _>>()?;
	entries.sort();

	for path in entries {
		if path.is_dir() {
			walk_dir(&path, files)?;
		} else if path.extension().is_some_and(|ext| ext == "md") {
			files.push(path);
		}
	}

	Ok(())
}

/// Parse every lexicon article below `dir`.
pub fn extract_lexicon(dir: &Path) -> UgntResult<Vec<WordEntry>> {
	let files = collect_markdown_files(dir)?;
	let mut entries = Vec::with_capacity(files.len());

	for path in &files {
		let markdown = std::fs::read_to_string(path)?;
		let entry = parse_word_entry(&markdown);
		if entry.strong.is_empty() {
			tracing::debug!(path = %path.display(), "no Strong's number found");
		}
		entries.push(entry);
	}

	tracing::info!(dir = %dir.display(), entries = entries.len(), "extracted lexicon");
	Ok(entries)
}

/// Write lexicon entries to `path` as a single JSON array, creating the
/// parent directory when needed.
pub fn write_lexicon(entries: &[WordEntry], path: &Path, pretty: bool) -> UgntResult<()> {
	if let Some(parent) = path.parent() {
		create_dir(parent)?;
	}

	let json = render_json(&path.display().to_string(), entries, pretty)?;
	write_file(path, &json)
}
