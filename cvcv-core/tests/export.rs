use std::collections::HashSet;
use std::fs;

use cvcv_core::io::LINE_ENDING;
use cvcv_core::{FilterKind, Generator, LetterOptions, LetterSet, NameConfig, NameEngine};

fn config(consonants: &str, vowels: &str, filter: FilterKind, suffix: &str) -> NameConfig {
	NameConfig {
		letters: LetterOptions {
			vowels: Some(vowels.into()),
			consonants: Some(consonants.into()),
			..Default::default()
		},
		filter,
		suffix: suffix.into(),
		..Default::default()
	}
}

fn read_names(path: &std::path::Path) -> Vec<String> {
	let text = fs::read_to_string(path).unwrap();
	if text.is_empty() {
		return Vec::new();
	}
	text.split(LINE_ENDING).map(String::from).collect()
}

#[test]
fn export_removes_stale_letters_and_rewrites_current_ones() {
	let dir = tempfile::tempdir().unwrap();
	for name in ["b.txt", "c.txt", "x.txt"] {
		fs::write(dir.path().join(name), "old").unwrap();
	}

	let engine = config("bc", "a", FilterKind::None, "").build_engine().unwrap();
	let summary = engine.export_grouped(dir.path()).unwrap();

	assert!(!dir.path().join("x.txt").exists());
	assert_eq!(summary.deleted, vec![dir.path().join("x.txt")]);
	assert_eq!(summary.written, vec![dir.path().join("b.txt"), dir.path().join("c.txt")]);
	assert_eq!(read_names(&dir.path().join("b.txt")), ["baba", "baca"]);
	assert_eq!(read_names(&dir.path().join("c.txt")), ["caba", "caca"]);
	assert_eq!(summary.total, 4);
}

#[test]
fn export_round_trips_the_name_set() {
	let dir = tempfile::tempdir().unwrap();
	let engine = config("bdkl", "aeo", FilterKind::RepeatVowels, "ly").build_engine().unwrap();
	let summary = engine.export_grouped(dir.path()).unwrap();

	let mut exported = HashSet::new();
	for path in &summary.written {
		let names = read_names(path);
		let letter = path.file_stem().unwrap().to_str().unwrap();
		assert!(names.iter().all(|n| n.starts_with(letter)));
		exported.extend(names);
	}

	let expected: HashSet<String> = engine.run().unwrap().collect();
	assert_eq!(exported, expected);
	assert_eq!(summary.total, expected.len());
}

#[test]
fn export_keeps_generation_order_within_a_letter() {
	let dir = tempfile::tempdir().unwrap();
	let engine = config("bc", "ae", FilterKind::None, "").build_engine().unwrap();
	engine.export_grouped(dir.path()).unwrap();

	let expected: Vec<String> = engine.run().unwrap().filter(|n| n.starts_with('c')).collect();
	assert_eq!(read_names(&dir.path().join("c.txt")), expected);
}

#[test]
fn letters_without_matches_get_empty_files() {
	let dir = tempfile::tempdir().unwrap();
	let mut cfg = config("bc", "a", FilterKind::None, "");
	cfg.first = Some("c".into());
	let summary = cfg.build_engine().unwrap().export_grouped(dir.path()).unwrap();
	assert_eq!(summary.written, vec![dir.path().join("c.txt")]);
	assert!(!dir.path().join("b.txt").exists());

	let no_vowels = NameEngine::new(
		Generator::new(LetterSet::default(), LetterSet::normalize("b"), None),
		FilterKind::None,
		"",
	);
	let summary = no_vowels.export_grouped(dir.path()).unwrap();
	assert_eq!(summary.total, 0);
	assert_eq!(fs::read_to_string(dir.path().join("b.txt")).unwrap(), "");
	assert!(!dir.path().join("c.txt").exists());
}

#[test]
fn invalid_pin_has_no_side_effects() {
	let dir = tempfile::tempdir().unwrap();
	let out = dir.path().join("output");
	let mut cfg = config("bcd", "ae", FilterKind::None, "");
	cfg.first = Some("x".into());

	let err = cfg.build_engine().unwrap().export_grouped(&out).unwrap_err();
	assert!(err.is_invalid_configuration());
	assert!(!out.exists());
}

#[test]
fn export_creates_nested_folders() {
	let dir = tempfile::tempdir().unwrap();
	let out = dir.path().join("a").join("b");
	let engine = config("b", "a", FilterKind::None, "").build_engine().unwrap();
	engine.export_grouped(&out).unwrap();
	assert_eq!(read_names(&out.join("b.txt")), ["baba"]);
}

#[test]
fn export_leaves_non_letter_files_alone() {
	let dir = tempfile::tempdir().unwrap();
	fs::write(dir.path().join("notes.txt"), "keep me").unwrap();
	let engine = config("b", "a", FilterKind::None, "").build_engine().unwrap();
	engine.export_grouped(dir.path()).unwrap();
	assert_eq!(fs::read_to_string(dir.path().join("notes.txt")).unwrap(), "keep me");
}
