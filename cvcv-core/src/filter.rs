use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NameGenError;

/// Repetition policy applied to the four-letter CVCV core.
///
/// Positions 0 and 2 are the consonant slots, 1 and 3 the vowel slots.
/// Filters must see the core before any suffix is appended, otherwise the
/// fixed positions would no longer line up.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FilterKind {
	/// Accept everything.
	#[default]
	None,
	/// Both vowel slots hold the same letter (`baba`, `bobo`).
	RepeatVowels,
	/// Both consonant slots hold the same letter (`babe`, `koki`).
	RepeatConsonants,
	/// Both of the above (`baba`, `dede`).
	RepeatBoth,
}

impl FilterKind {
	pub const ALL: [FilterKind; 4] = [
		FilterKind::None,
		FilterKind::RepeatVowels,
		FilterKind::RepeatConsonants,
		FilterKind::RepeatBoth,
	];

	/// Machine name, as accepted by `FromStr` and used in config files.
	pub fn as_str(self) -> &'static str {
		match self {
			FilterKind::None => "none",
			FilterKind::RepeatVowels => "repeat_vowels",
			FilterKind::RepeatConsonants => "repeat_consonants",
			FilterKind::RepeatBoth => "repeat_both",
		}
	}

	/// Human readable name for selectors.
	pub fn label(self) -> &'static str {
		match self {
			FilterKind::None => "None",
			FilterKind::RepeatVowels => "Repeating Vowels",
			FilterKind::RepeatConsonants => "Repeating Consonants",
			FilterKind::RepeatBoth => "Repeating Both",
		}
	}

	/// Returns `true` if `core` passes the filter.
	///
	/// `core` is the unsuffixed name. A core shorter than four bytes only
	/// passes `None`.
	pub fn accepts(self, core: &str) -> bool {
		let bytes = core.as_bytes();
		match self {
			FilterKind::None => true,
			FilterKind::RepeatVowels => same(bytes, 1, 3),
			FilterKind::RepeatConsonants => same(bytes, 0, 2),
			FilterKind::RepeatBoth => same(bytes, 0, 2) && same(bytes, 1, 3),
		}
	}
}

fn same(bytes: &[u8], a: usize, b: usize) -> bool {
	matches!((bytes.get(a), bytes.get(b)), (Some(x), Some(y)) if x == y)
}

impl fmt::Display for FilterKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for FilterKind {
	type Err = NameGenError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
		FilterKind::ALL
			.into_iter()
			.find(|kind| kind.as_str() == wanted)
			.ok_or_else(|| {
				NameGenError::InvalidConfiguration(format!(
					"unknown filter '{s}', expected one of: none, repeat_vowels, repeat_consonants, repeat_both"
				))
			})
	}
}
