//! Attribute lookup inside the pipe-delimited region of a word tag.

/// Attribute key for the citation form.
pub const LEMMA_KEY: &str = "lemma=";
/// Attribute key for the Strong's number.
pub const STRONG_KEY: &str = "strong=";
/// Attribute key for the morphology code.
pub const MORPH_KEY: &str = "x-morph=";

/// Return the value of `key` within `attributes`, or an empty string.
///
/// `key` includes the trailing `=`, e.g. `lemma=`. Only the first occurrence
/// is considered. A quoted value runs to the next `"` and may contain spaces;
/// an unquoted value runs to the next space or the end of the input. There is
/// no escaping. A missing key, an empty value and an unterminated quote all
/// resolve to `""`.
///
/// ```
/// use ugnt_core::extract_attribute;
///
/// let attributes = r#"lemma="foo bar" strong=G123"#;
/// assert_eq!(extract_attribute(attributes, "lemma="), "foo bar");
/// assert_eq!(extract_attribute(attributes, "strong="), "G123");
/// assert_eq!(extract_attribute(attributes, "x-morph="), "");
/// ```
pub fn extract_attribute<'a>(attributes: &'a str, key: &str) -> &'a str {
	let Some(start) = attributes.find(key) else {
		return "";
	};
	let rest = &attributes[start + key.len()..];

	if let Some(quoted) = rest.strip_prefix('"') {
		return match quoted.find('"') {
			Some(end) => &quoted[..end],
			None => "",
		};
	}

	match rest.find(' ') {
		Some(end) => &rest[..end],
		None => rest,
	}
}

/// The three linguistic attributes carried by a word tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordAttributes<'a> {
	pub lemma: &'a str,
	pub strong: &'a str,
	pub morph: &'a str,
}

impl<'a> WordAttributes<'a> {
	pub fn parse(attributes: &'a str) -> Self {
		Self {
			lemma: extract_attribute(attributes, LEMMA_KEY),
			strong: extract_attribute(attributes, STRONG_KEY),
			morph: extract_attribute(attributes, MORPH_KEY),
		}
	}
}
