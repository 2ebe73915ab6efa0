use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::engine::NameEngine;
use crate::error::NameGenError;
use crate::filter::FilterKind;
use crate::generator::Generator;
use crate::letters::LetterOptions;

/// Generation parameters as entered by a user (flags, form fields or a JSON file).
///
/// Every field is optional in JSON:
///
/// ```json
/// { "consonants": "bdkl", "include_y": true, "filter": "repeat_vowels", "suffix": "io" }
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct NameConfig {
	#[serde(flatten)]
	pub letters: LetterOptions,
	/// Pinned first letter; blank means no pin.
	pub first: Option<String>,
	pub filter: FilterKind,
	/// Appended to every accepted name.
	pub suffix: String,
}

impl NameConfig {
	/// Loads a configuration from a JSON file.
	///
	/// # Errors
	/// - `Filesystem` if the file cannot be read
	/// - `ConfigFile` if it is not a valid configuration
	pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, NameGenError> {
		let path = path.as_ref();
		let text = fs::read_to_string(path).map_err(|e| NameGenError::filesystem(path, e))?;
		serde_json::from_str(&text).map_err(|source| NameGenError::ConfigFile {
			path: path.to_path_buf(),
			source,
		})
	}

	/// Parses the pinned first letter.
	///
	/// - Blank → `None`
	/// - One character → that character, lowercased
	///
	/// # Errors
	/// `InvalidConfiguration` for anything longer than one character.
	pub fn first_letter(&self) -> Result<Option<char>, NameGenError> {
		let Some(raw) = self.first.as_deref().map(str::trim).filter(|s| !s.is_empty()) else {
			return Ok(None);
		};
		let mut chars = raw.chars();
		match (chars.next(), chars.next()) {
			(Some(letter), None) => Ok(Some(letter.to_ascii_lowercase())),
			_ => Err(NameGenError::InvalidConfiguration(format!(
				"first letter must be a single character, got '{raw}'"
			))),
		}
	}

	/// Resolves letter sets and builds the engine.
	///
	/// Membership of the pinned letter is not checked here; `run`,
	/// `export_grouped` and `validate` do that.
	pub fn build_engine(&self) -> Result<NameEngine, NameGenError> {
		let generator = Generator::from_options(&self.letters, self.first_letter()?);
		Ok(NameEngine::new(generator, self.filter, self.suffix.as_str()))
	}

	/// Letters whose files survive a clear.
	///
	/// - Pinned letter or explicit consonants → `Some(engine.allowed_letters())`
	/// - Otherwise → `None`, every single-letter file is stale
	pub fn restricted_letters(&self, engine: &NameEngine) -> Option<BTreeSet<char>> {
		if engine.generator().first().is_some() || self.letters.has_explicit_consonants() {
			Some(engine.allowed_letters())
		} else {
			None
		}
	}
}
