use std::path::Path;
use std::path::PathBuf;

use serde::Serialize;

use crate::Book;
use crate::UgntError;
use crate::UgntResult;

/// Characters replaced with `_` when a title becomes part of a file name.
const UNSAFE_FILE_NAME_CHARS: [char; 9] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// The output file name for a book: `{id}_{title}.json`, or `{id}.json` when
/// the book has no title.
pub fn book_file_name(book: &Book) -> String {
	let title = book.title.trim();
	if title.is_empty() {
		return format!("{}.json", book.id);
	}

	let title: String = title
		.chars()
		.map(|ch| {
			if ch.is_control() || UNSAFE_FILE_NAME_CHARS.contains(&ch) {
				'_'
			} else {
				ch
			}
		})
		.collect();

	format!("{}_{title}.json", book.id)
}

/// Serialize a book to JSON, indented by two spaces when `pretty`.
pub fn render_book(book: &Book, pretty: bool) -> UgntResult<String> {
	render_json(&book_file_name(book), book, pretty)
}

/// Write every book to its own JSON file inside `dir`, creating the directory
/// when needed. Returns the written paths in book order.
pub fn write_books<'a>(
	books: impl IntoIterator<Item = &'a Book>,
	dir: &Path,
	pretty: bool,
) -> UgntResult<Vec<PathBuf>> {
	create_dir(dir)?;

	let mut written = Vec::new();
	for book in books {
		let path = dir.join(book_file_name(book));
		let json = render_book(book, pretty)?;
		write_file(&path, &json)?;
		tracing::debug!(path = %path.display(), book = book.id, "wrote book");
		written.push(path);
	}

	tracing::info!(dir = %dir.display(), files = written.len(), "exported books");
	Ok(written)
}

pub(crate) fn render_json<T: Serialize + ?Sized>(
	name: &str,
	value: &T,
	pretty: bool,
) -> UgntResult<String> {
	let result = if pretty {
		serde_json::to_string_pretty(value)
	} else {
		serde_json::to_string(value)
	};

	result.map_err(|e| UgntError::Serialize {
		name: name.to_string(),
		reason: e.to_string(),
	})
}

pub(crate) fn create_dir(dir: &Path) -> UgntResult<()> {
	std::fs::create_dir_all(dir).map_err(|e| UgntError::WriteOutput {
		path: dir.display().to_string(),
		reason: e.to_string(),
	})
}

pub(crate) fn write_file(path: &Path, content: &str) -> UgntResult<()> {
	std::fs::write(path, content).map_err(|e| UgntError::WriteOutput {
		path: path.display().to_string(),
		reason: e.to_string(),
	})
}
