use std::collections::BTreeSet;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::NameGenError;

/// Extension of every per-letter output file.
pub const OUTPUT_EXTENSION: &str = "txt";

/// Line terminator used when writing name lists.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Output file name for a starting letter.
///
/// Example: `'b'` → `b.txt`
pub fn letter_file_name(letter: char) -> String {
	format!("{letter}.{OUTPUT_EXTENSION}")
}

/// Returns the letter of a single-letter output file name.
///
/// Examples:
/// - `"b.txt"` → `Some('b')`
/// - `"bb.txt"`, `"b.csv"` → `None`
pub(crate) fn letter_of_file<P: AsRef<Path>>(path: P) -> Option<char> {
	let path = path.as_ref();
	if path.extension() != Some(std::ffi::OsStr::new(OUTPUT_EXTENSION)) {
		return None;
	}
	let stem = path.file_stem()?.to_str()?;
	let mut chars = stem.chars();
	match (chars.next(), chars.next()) {
		(Some(letter), None) => Some(letter),
		_ => None,
	}
}

/// Lists all files with a given extension in a directory.
///
/// Returns full paths, sorted. Subdirectories are ignored.
pub(crate) fn list_files<P: AsRef<Path>>(dir: P, extension: &str) -> io::Result<Vec<PathBuf>> {
	let mut files = Vec::new();

	for entry in fs::read_dir(dir)? {
		let path = entry?.path();
		if path.is_file() && path.extension() == Some(std::ffi::OsStr::new(extension)) {
			files.push(path);
		}
	}

	files.sort();
	Ok(files)
}

/// Writes names joined by `LINE_ENDING`, without a trailing terminator.
///
/// An empty slice produces an empty file. Existing files are overwritten.
pub fn write_lines<P: AsRef<Path>, S: AsRef<str>>(path: P, lines: &[S]) -> Result<(), NameGenError> {
	let path = path.as_ref();
	let write = || -> io::Result<()> {
		let mut out = io::BufWriter::new(fs::File::create(path)?);
		for (i, line) in lines.iter().enumerate() {
			if i > 0 {
				out.write_all(LINE_ENDING.as_bytes())?;
			}
			out.write_all(line.as_ref().as_bytes())?;
		}
		out.flush()
	};
	write().map_err(|e| NameGenError::filesystem(path, e))
}

/// Deletes single-letter `.txt` files from `folder`.
///
/// # Parameters
/// - `keep`: letters whose files survive. `None` deletes every single-letter file.
///
/// # Behavior
/// - A missing folder is not an error, nothing is deleted
/// - Files whose stem is longer than one character are never touched
///
/// # Returns
/// The deleted paths, in sorted order.
pub fn clear_letter_files<P: AsRef<Path>>(
	folder: P,
	keep: Option<&BTreeSet<char>>,
) -> Result<Vec<PathBuf>, NameGenError> {
	let folder = folder.as_ref();
	if !folder.is_dir() {
		log::info!("No output folder at {}", folder.display());
		return Ok(Vec::new());
	}

	let files = list_files(folder, OUTPUT_EXTENSION).map_err(|e| NameGenError::filesystem(folder, e))?;

	let mut deleted = Vec::new();
	for path in files {
		let Some(letter) = letter_of_file(&path) else {
			continue;
		};
		if keep.is_some_and(|letters| letters.contains(&letter)) {
			continue;
		}
		fs::remove_file(&path).map_err(|e| NameGenError::filesystem(&path, e))?;
		log::info!("Deleted {}", path.display());
		deleted.push(path);
	}

	Ok(deleted)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn single_letter_files_are_recognised() {
		assert_eq!(letter_of_file("out/b.txt"), Some('b'));
		assert_eq!(letter_of_file("bb.txt"), None);
		assert_eq!(letter_of_file("b.csv"), None);
		assert_eq!(letter_of_file("b"), None);
	}

	#[test]
	fn write_lines_joins_without_trailing_terminator() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("b.txt");
		write_lines(&path, &["baba", "babe"]).unwrap();
		let text = fs::read_to_string(&path).unwrap();
		assert_eq!(text, format!("baba{LINE_ENDING}babe"));

		write_lines::<_, &str>(&path, &[]).unwrap();
		assert_eq!(fs::read_to_string(&path).unwrap(), "");
	}

	#[test]
	fn write_lines_reports_the_failing_path() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("missing").join("b.txt");
		let err = write_lines(&path, &["baba"]).unwrap_err();
		assert!(matches!(&err, NameGenError::Filesystem { path: p, .. } if *p == path));
	}

	#[test]
	fn clear_keeps_allowed_and_multi_letter_files() {
		let dir = tempfile::tempdir().unwrap();
		for name in ["b.txt", "x.txt", "notes.txt", "y.csv"] {
			fs::write(dir.path().join(name), "").unwrap();
		}
		let keep: BTreeSet<char> = ['b'].into_iter().collect();
		let deleted = clear_letter_files(dir.path(), Some(&keep)).unwrap();
		assert_eq!(deleted, vec![dir.path().join("x.txt")]);
		assert!(dir.path().join("b.txt").exists());
		assert!(dir.path().join("notes.txt").exists());
		assert!(dir.path().join("y.csv").exists());
	}

	#[test]
	fn clear_without_restriction_removes_every_letter_file() {
		let dir = tempfile::tempdir().unwrap();
		for name in ["b.txt", "c.txt", "notes.txt"] {
			fs::write(dir.path().join(name), "").unwrap();
		}
		let deleted = clear_letter_files(dir.path(), None).unwrap();
		assert_eq!(deleted.len(), 2);
		assert!(dir.path().join("notes.txt").exists());
	}

	#[test]
	fn clear_on_missing_folder_is_a_no_op() {
		let dir = tempfile::tempdir().unwrap();
		let deleted = clear_letter_files(dir.path().join("nope"), None).unwrap();
		assert!(deleted.is_empty());
	}
}
