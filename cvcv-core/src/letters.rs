use std::fmt;

use serde::{Deserialize, Serialize};

/// Vowels used when no explicit vowel set is given.
pub const DEFAULT_VOWELS: &str = "aeiou";

/// Letter appended to the default vowels when `include_y` is set.
pub const OPTIONAL_VOWEL: char = 'y';

/// An ordered, duplicate-free set of lowercase ASCII letters.
///
/// ## Invariants
/// - Every letter is ASCII alphabetic and lowercase
/// - Letters are sorted and appear once
///
/// Sorting only exists to make enumeration order (and therefore output files)
/// reproducible for a given input.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct LetterSet {
	letters: Vec<char>,
}

impl LetterSet {
	/// Builds a set from raw user input.
	///
	/// - Lowercases every character
	/// - Drops anything that is not an ASCII letter (logged at `warn`)
	/// - Sorts and removes duplicates
	pub fn normalize(raw: &str) -> Self {
		let mut letters = Vec::with_capacity(raw.len());
		for c in raw.chars() {
			if c.is_ascii_alphabetic() {
				letters.push(c.to_ascii_lowercase());
			} else if !c.is_whitespace() {
				log::warn!("Ignoring non-letter character {c:?} in letter set {raw:?}");
			}
		}
		letters.sort_unstable();
		letters.dedup();
		Self { letters }
	}

	/// Returns the letters in enumeration order.
	pub fn as_slice(&self) -> &[char] {
		&self.letters
	}

	pub fn contains(&self, letter: char) -> bool {
		self.letters.binary_search(&letter).is_ok()
	}

	pub fn len(&self) -> usize {
		self.letters.len()
	}

	pub fn is_empty(&self) -> bool {
		self.letters.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
		self.letters.iter().copied()
	}
}

impl fmt::Display for LetterSet {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for c in &self.letters {
			write!(f, "{c}")?;
		}
		Ok(())
	}
}

/// User-facing inputs for the vowel and consonant sets.
///
/// Empty or whitespace-only strings count as "not provided", so a blank form
/// field and a missing flag behave the same way.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct LetterOptions {
	/// Replaces the default vowels when set.
	pub vowels: Option<String>,
	/// Replaces the derived consonants when set.
	pub consonants: Option<String>,
	/// Appended to the vowel base.
	pub add_vowels: Option<String>,
	/// Appended to the consonant base.
	pub add_consonants: Option<String>,
	/// Adds `y` to the default vowels (ignored when `vowels` is set).
	pub include_y: bool,
}

impl LetterOptions {
	/// Resolves the vowel and consonant sets.
	///
	/// # Behavior
	/// - Vowel base: explicit vowels, else `aeiou` (+ `y` with `include_y`)
	/// - Additional vowels are appended to the base
	/// - Consonant base: explicit consonants, else every ASCII lowercase letter
	///   missing from the resolved vowel set
	/// - Additional consonants are appended to the base
	///
	/// # Notes
	/// The two sets are not required to be disjoint; a letter added to both
	/// simply appears in both.
	pub fn build(&self) -> (LetterSet, LetterSet) {
		let mut vowel_base = match provided(&self.vowels) {
			Some(v) => v.to_owned(),
			None => {
				let mut base = DEFAULT_VOWELS.to_owned();
				if self.include_y {
					base.push(OPTIONAL_VOWEL);
				}
				base
			}
		};
		if let Some(extra) = provided(&self.add_vowels) {
			vowel_base.push_str(extra);
		}
		let vowels = LetterSet::normalize(&vowel_base);

		let mut consonant_base = match provided(&self.consonants) {
			Some(c) => c.to_owned(),
			None => ('a'..='z').filter(|c| !vowels.contains(*c)).collect(),
		};
		if let Some(extra) = provided(&self.add_consonants) {
			consonant_base.push_str(extra);
		}
		let consonants = LetterSet::normalize(&consonant_base);

		log::debug!("Resolved vowels '{vowels}' and consonants '{consonants}'");
		(vowels, consonants)
	}

	/// Whether the user restricted the consonants explicitly.
	pub fn has_explicit_consonants(&self) -> bool {
		provided(&self.consonants).is_some()
	}
}

/// Treats blank input as absent.
fn provided(value: &Option<String>) -> Option<&str> {
	value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
