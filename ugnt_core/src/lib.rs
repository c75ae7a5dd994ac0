//! `ugnt_core` turns interlinear USFM books into a strict
//! Book → Chapter → Verse → Word tree and writes that tree out as JSON.
//!
//! ## Input
//!
//! Only the markers used by interlinear Greek texts are understood:
//!
//! ```text
//! \h Ἰωάννην
//! \c 1
//! \v 1 \w Ἐν|lemma="ἐν" strong="G17220" x-morph="Gr,P,,,,,D,,,"\w*
//! \w ἀρχῇ|lemma="ἀρχή" strong="G07460" x-morph="Gr,N,,,,,DFS,"\w*
//! ```
//!
//! Every other line is ignored. Malformed word tags are skipped; structural
//! errors (a verse before any chapter, a non-numeric chapter or verse number)
//! abort the file with the offending line number.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Source directory
//!   → Corpus driver (lists `*.usfm` files, assigns book ids in name order)
//!   → Parser (line state machine building chapters and verses)
//!   → Word scanner (splits `\w ...\w*` tags, assigns word ids)
//!   → Attribute extractor (lemma, strong, x-morph)
//!   → Exporter (one JSON file per book)
//! ```
//!
//! ## Modules
//!
//! - [`config`]: Configuration loading from `ugnt.toml`.
//! - [`corpus`]: Source file discovery and whole-corpus parsing.
//! - [`export`]: JSON output, one file per book.
//! - [`lexicon`]: Word-sense extraction from Strong's lexicon markdown.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use ugnt_core::UgntConfig;
//! use ugnt_core::corpus::SourceOptions;
//! use ugnt_core::corpus::parse_corpus;
//! use ugnt_core::export::write_books;
//!
//! let root = Path::new(".");
//! let config = UgntConfig::load_or_default(root).unwrap();
//! let corpus = parse_corpus(&config.source_dir(root), &SourceOptions::from_config(&config)).unwrap();
//! write_books(corpus.iter(), &config.output_dir(root), config.output.pretty).unwrap();
//! ```

pub use attributes::*;
pub use book::*;
pub use config::UgntConfig;
pub use error::*;
pub use parser::*;
pub use words::*;

mod attributes;
mod book;
pub mod config;
pub mod corpus;
#[allow(unused_assignments)]
mod error;
pub mod export;
pub mod lexicon;
pub(crate) mod markers;
mod parser;
mod words;

#[cfg(test)]
mod __fixtures;
