use serde::Deserialize;
use serde::Serialize;

/// A single book of the corpus, built from one source file.
///
/// Books own their chapters, chapters own their verses and verses own their
/// words. The `*_id` fields on children are plain back-references to the
/// owning parent's identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
	/// Sequential identifier assigned in discovery order, starting at 1.
	pub id: u32,
	/// Title taken from the `\h` marker. Empty when the file has none.
	pub title: String,
	pub chapters: Vec<Chapter>,
}

impl Book {
	pub fn new(id: u32) -> Self {
		Self {
			id,
			title: String::new(),
			chapters: Vec::new(),
		}
	}

	/// Iterate every verse of the book in document order.
	pub fn verses(&self) -> impl Iterator<Item = &Verse> {
		self.chapters.iter().flat_map(|chapter| chapter.verses.iter())
	}

	/// Iterate every word of the book in document order.
	pub fn words(&self) -> impl Iterator<Item = &Word> {
		self.verses().flat_map(|verse| verse.words.iter())
	}

	pub fn verse_count(&self) -> usize {
		self.verses().count()
	}

	pub fn word_count(&self) -> usize {
		self.words().count()
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
	/// Sequential identifier, unique within the book. Never reset.
	pub id: u32,
	pub book_id: u32,
	/// The number declared by the `\c` marker.
	pub number: u32,
	pub verses: Vec<Verse>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verse {
	/// Sequential identifier, restarting at 1 in every chapter.
	pub id: u32,
	pub chapter_id: u32,
	/// The number declared by the `\v` marker.
	pub number: u32,
	pub words: Vec<Word>,
}

/// One interlinear word occurrence.
///
/// Attributes missing from the source tag are empty strings, never absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
	/// Sequential identifier, unique across the whole file.
	pub id: u32,
	pub verse_id: u32,
	/// Surface text as it appears before the `|` separator.
	pub text: String,
	/// Citation form.
	pub lemma: String,
	/// Strong's number, e.g. `G3056`.
	pub strong: String,
	/// Morphology code, e.g. `Gr,N,,,,,NMS,`.
	pub morph: String,
}
