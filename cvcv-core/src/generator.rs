use std::iter::FusedIterator;
use std::slice;

use crate::error::NameGenError;
use crate::letters::{LetterOptions, LetterSet};

/// Enumerates every consonant-vowel-consonant-vowel string over two letter sets.
///
/// # Responsibilities
/// - Hold the resolved vowel and consonant sets
/// - Validate the optional pinned first letter
/// - Hand out fresh, lazy iterators (one per call to `generate`)
///
/// The generator keeps no iteration state, so calling `generate` twice yields
/// the same sequence twice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generator {
	vowels: LetterSet,
	consonants: LetterSet,
	first: Option<char>,
}

impl Generator {
	/// Creates a generator over already resolved letter sets.
	///
	/// The pinned letter is lowercased here but only checked against the
	/// consonant set when generation starts.
	pub fn new(vowels: LetterSet, consonants: LetterSet, first: Option<char>) -> Self {
		Self {
			vowels,
			consonants,
			first: first.map(|c| c.to_ascii_lowercase()),
		}
	}

	/// Resolves the letter sets from user options and builds the generator.
	pub fn from_options(options: &LetterOptions, first: Option<char>) -> Self {
		let (vowels, consonants) = options.build();
		Self::new(vowels, consonants, first)
	}

	pub fn vowels(&self) -> &LetterSet {
		&self.vowels
	}

	pub fn consonants(&self) -> &LetterSet {
		&self.consonants
	}

	/// Returns the pinned first letter, if any.
	pub fn first(&self) -> Option<char> {
		self.first
	}

	/// Returns the alphabet used for position 0.
	///
	/// # Errors
	/// `InvalidConfiguration` if the pinned letter is not a consonant.
	pub fn first_alphabet(&self) -> Result<&[char], NameGenError> {
		match &self.first {
			Some(letter) if !self.consonants.contains(*letter) => {
				Err(NameGenError::InvalidConfiguration(format!(
					"first letter '{letter}' not in consonant set '{}'",
					self.consonants
				)))
			}
			Some(letter) => Ok(slice::from_ref(letter)),
			None => Ok(self.consonants.as_slice()),
		}
	}

	/// Checks the configuration without producing anything.
	pub fn validate(&self) -> Result<(), NameGenError> {
		self.first_alphabet().map(|_| ())
	}

	/// Number of names `generate` will yield.
	///
	/// `|first| * |vowels| * |consonants| * |vowels|`
	pub fn total(&self) -> Result<usize, NameGenError> {
		let first = self.first_alphabet()?.len();
		let v = self.vowels.len();
		Ok(first * v * self.consonants.len() * v)
	}

	/// Starts a new enumeration.
	///
	/// # Behavior
	/// Cartesian product of (first alphabet, vowels, consonants, vowels), the
	/// last axis varying fastest. Position 2 always uses the full consonant
	/// set, pinning only affects position 0.
	///
	/// # Errors
	/// `InvalidConfiguration` before any name is produced if the pinned letter
	/// is not a consonant.
	pub fn generate(&self) -> Result<CvcvIter<'_>, NameGenError> {
		let first = self.first_alphabet()?;
		Ok(CvcvIter::new([
			first,
			self.vowels.as_slice(),
			self.consonants.as_slice(),
			self.vowels.as_slice(),
		]))
	}
}

/// Lazy odometer over four alphabets.
///
/// Yields owned four-letter strings. Once exhausted it stays exhausted.
#[derive(Clone, Debug)]
pub struct CvcvIter<'a> {
	axes: [&'a [char]; 4],
	indices: [usize; 4],
	remaining: usize,
}

impl<'a> CvcvIter<'a> {
	fn new(axes: [&'a [char]; 4]) -> Self {
		let remaining = axes.iter().map(|axis| axis.len()).product();
		Self { axes, indices: [0; 4], remaining }
	}

	/// Moves the odometer one step, rightmost axis first.
	fn advance(&mut self) {
		for position in (0..4).rev() {
			self.indices[position] += 1;
			if self.indices[position] < self.axes[position].len() {
				return;
			}
			self.indices[position] = 0;
		}
	}
}

impl Iterator for CvcvIter<'_> {
	type Item = String;

	fn next(&mut self) -> Option<Self::Item> {
		if self.remaining == 0 {
			return None;
		}
		let name: String = self
			.indices
			.iter()
			.zip(self.axes.iter())
			.map(|(&index, axis)| axis[index])
			.collect();
		self.remaining -= 1;
		self.advance();
		Some(name)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		(self.remaining, Some(self.remaining))
	}
}

impl ExactSizeIterator for CvcvIter<'_> {}

impl FusedIterator for CvcvIter<'_> {}
