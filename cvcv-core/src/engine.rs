use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::NameGenError;
use crate::filter::FilterKind;
use crate::generator::Generator;
use crate::io::{clear_letter_files, letter_file_name, write_lines};

/// Outcome of a grouped export.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExportSummary {
	/// One path per allowed letter, in letter order.
	pub written: Vec<PathBuf>,
	/// Stale single-letter files removed before writing.
	pub deleted: Vec<PathBuf>,
	/// Number of names across all written files.
	pub total: usize,
}

/// Composes a `Generator`, a `FilterKind` and a suffix into the final name stream.
///
/// # Responsibilities
/// - Run the filter on the unsuffixed core, then append the suffix
/// - Group the output by first letter and write one file per allowed letter
/// - Decide which letters are allowed (pinned letter or full consonant set)
#[derive(Clone, Debug)]
pub struct NameEngine {
	generator: Generator,
	filter: FilterKind,
	suffix: String,
}

impl NameEngine {
	pub fn new<S: Into<String>>(generator: Generator, filter: FilterKind, suffix: S) -> Self {
		Self { generator, filter, suffix: suffix.into() }
	}

	pub fn generator(&self) -> &Generator {
		&self.generator
	}

	pub fn filter(&self) -> FilterKind {
		self.filter
	}

	pub fn suffix(&self) -> &str {
		&self.suffix
	}

	/// Checks the configuration without generating.
	pub fn validate(&self) -> Result<(), NameGenError> {
		self.generator.validate()
	}

	/// Returns the lazy stream of final names.
	///
	/// Generator order is preserved; only names whose core passes the filter
	/// are kept, and the suffix is appended after the check.
	///
	/// # Errors
	/// `InvalidConfiguration` if the pinned first letter is not a consonant.
	pub fn run(&self) -> Result<impl Iterator<Item = String> + '_, NameGenError> {
		let filter = self.filter;
		let suffix = self.suffix.as_str();
		Ok(self
			.generator
			.generate()?
			.filter(move |core| filter.accepts(core))
			.map(move |mut core| {
				core.push_str(suffix);
				core
			}))
	}

	/// Letters that get an output file: the pinned letter, or every consonant.
	///
	/// Shared by export and by the command-line clear step, so both agree on
	/// which files are current.
	pub fn allowed_letters(&self) -> BTreeSet<char> {
		match self.generator.first() {
			Some(letter) => BTreeSet::from([letter]),
			None => self.generator.consonants().iter().collect(),
		}
	}

	/// Materializes `run` and groups names by their first character.
	///
	/// Order within a group follows generator order.
	pub fn grouped(&self) -> Result<BTreeMap<char, Vec<String>>, NameGenError> {
		let mut groups: BTreeMap<char, Vec<String>> = BTreeMap::new();
		for name in self.run()? {
			if let Some(first) = name.chars().next() {
				groups.entry(first).or_default().push(name);
			}
		}
		Ok(groups)
	}

	/// Writes one `<letter>.txt` per allowed letter into `folder`.
	///
	/// # Behavior
	/// - Validates and generates everything before touching the filesystem
	/// - Creates `folder` if needed
	/// - Deletes single-letter `.txt` files for letters that are not allowed
	/// - Overwrites each allowed letter's file; letters without matches get an empty file
	///
	/// # Errors
	/// - `InvalidConfiguration` with no side effects
	/// - `Filesystem` on the first failing path; files already written stay written
	pub fn export_grouped<P: AsRef<Path>>(&self, folder: P) -> Result<ExportSummary, NameGenError> {
		let folder = folder.as_ref();
		let mut groups = self.grouped()?;
		let allowed = self.allowed_letters();

		fs::create_dir_all(folder).map_err(|e| NameGenError::filesystem(folder, e))?;
		let deleted = clear_letter_files(folder, Some(&allowed))?;

		let mut summary = ExportSummary { deleted, ..Default::default() };
		for letter in allowed {
			let path = folder.join(letter_file_name(letter));
			let names = groups.remove(&letter).unwrap_or_default();
			write_lines(&path, &names)?;
			log::info!("Wrote {} ({} names)", path.display(), names.len());
			summary.total += names.len();
			summary.written.push(path);
		}

		log::info!(
			"Export complete: {} names in {} file(s) -> {}",
			summary.total,
			summary.written.len(),
			folder.display()
		);
		Ok(summary)
	}
}
