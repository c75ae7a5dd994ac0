use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::UgntError;
use crate::UgntResult;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] = ["ugnt.toml", ".ugnt.toml", ".config/ugnt.toml"];

/// Directory holding the USFM sources, relative to the project root.
pub const DEFAULT_SOURCE_DIR: &str = "ugnt";
/// File name glob selecting USFM sources.
pub const DEFAULT_SOURCE_PATTERN: &str = "*.usfm";
/// Directory receiving one JSON file per book.
pub const DEFAULT_OUTPUT_DIR: &str = "output";
/// Directory tree holding the Strong's lexicon markdown files.
pub const DEFAULT_LEXICON_DIR: &str = "strong";
/// Lexicon JSON file name, relative to the output directory.
pub const DEFAULT_LEXICON_OUTPUT: &str = "strong_output.json";

/// Configuration loaded from a `ugnt.toml` file.
///
/// Every section and key is optional:
///
/// ```toml
/// [source]
/// dir = "ugnt"
/// pattern = "*.usfm"
///
/// [output]
/// dir = "output"
/// pretty = true
///
/// [lexicon]
/// dir = "strong"
/// output = "strong_output.json"
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct UgntConfig {
	#[serde(default)]
	pub source: SourceConfig,
	#[serde(default)]
	pub output: OutputConfig,
	#[serde(default)]
	pub lexicon: LexiconConfig,
}

/// Where the USFM books live and which files count as books.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SourceConfig {
	/// Source directory, relative to the project root. Only its direct
	/// children are considered.
	pub dir: PathBuf,
	/// Glob matched against each file name, e.g. `*.usfm` or `4?-*.usfm`.
	pub pattern: String,
}

impl Default for SourceConfig {
	fn default() -> Self {
		Self {
			dir: PathBuf::from(DEFAULT_SOURCE_DIR),
			pattern: DEFAULT_SOURCE_PATTERN.to_string(),
		}
	}
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
	/// Output directory, relative to the project root.
	pub dir: PathBuf,
	/// Indent JSON with two spaces. Compact output when `false`.
	pub pretty: bool,
}

impl Default for OutputConfig {
	fn default() -> Self {
		Self {
			dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
			pretty: true,
		}
	}
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LexiconConfig {
	/// Root of the lexicon markdown tree, relative to the project root.
	pub dir: PathBuf,
	/// Output file, relative to the output directory.
	pub output: PathBuf,
}

impl Default for LexiconConfig {
	fn default() -> Self {
		Self {
			dir: PathBuf::from(DEFAULT_LEXICON_DIR),
			output: PathBuf::from(DEFAULT_LEXICON_OUTPUT),
		}
	}
}

impl UgntConfig {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file at `root`.
	/// Returns `None` if no config file exists.
	pub fn load(root: &Path) -> UgntResult<Option<UgntConfig>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		let content = std::fs::read_to_string(&config_path)?;
		let config: UgntConfig =
			toml::from_str(&content).map_err(|e| UgntError::ConfigParse(e.to_string()))?;
		tracing::debug!(path = %config_path.display(), "loaded config");

		Ok(Some(config))
	}

	/// Load the config at `root`, falling back to defaults when there is none.
	pub fn load_or_default(root: &Path) -> UgntResult<UgntConfig> {
		Ok(Self::load(root)?.unwrap_or_default())
	}

	/// Absolute source directory for a project rooted at `root`.
	pub fn source_dir(&self, root: &Path) -> PathBuf {
		root.join(&self.source.dir)
	}

	/// Absolute output directory for a project rooted at `root`.
	pub fn output_dir(&self, root: &Path) -> PathBuf {
		root.join(&self.output.dir)
	}

	/// Absolute lexicon source directory for a project rooted at `root`.
	pub fn lexicon_dir(&self, root: &Path) -> PathBuf {
		root.join(&self.lexicon.dir)
	}

	/// Absolute lexicon output file for a project rooted at `root`.
	pub fn lexicon_output(&self, root: &Path) -> PathBuf {
		self.output_dir(root).join(&self.lexicon.output)
	}
}
