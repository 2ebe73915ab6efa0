use std::collections::HashSet;

use cvcv_core::{FilterKind, Generator, LetterOptions, LetterSet, NameConfig, NameEngine};
use proptest::prelude::*;

fn engine(vowels: &str, consonants: &str, filter: FilterKind, suffix: &str, first: Option<char>) -> NameEngine {
	let generator = Generator::new(LetterSet::normalize(vowels), LetterSet::normalize(consonants), first);
	NameEngine::new(generator, filter, suffix)
}

#[test]
fn default_config_pinned_to_b() {
	let config = NameConfig { first: Some("b".into()), ..Default::default() };
	let engine = config.build_engine().unwrap();
	let names: Vec<String> = engine.run().unwrap().collect();
	assert_eq!(names.len(), 1 * 5 * 21 * 5);
	assert!(names.iter().all(|n| n.starts_with('b')));
	assert_eq!(names[..3], ["baba", "babe", "babi"]);
}

#[test]
fn repeat_both_over_small_sets() {
	let names: HashSet<String> = engine("ae", "bcd", FilterKind::RepeatBoth, "", None).run().unwrap().collect();
	let expected: HashSet<String> = ["baba", "bebe", "caca", "cece", "dada", "dede"]
		.into_iter()
		.map(String::from)
		.collect();
	assert_eq!(names, expected);
}

#[test]
fn suffix_does_not_shift_filter_positions() {
	let names: Vec<String> = engine("a", "b", FilterKind::RepeatBoth, "io", None).run().unwrap().collect();
	assert_eq!(names, ["babaio"]);
}

#[test]
fn pinned_letter_outside_consonants_fails() {
	let config = NameConfig {
		letters: LetterOptions { consonants: Some("bcd".into()), ..Default::default() },
		first: Some("x".into()),
		..Default::default()
	};
	let engine = config.build_engine().unwrap();
	assert!(engine.run().err().unwrap().is_invalid_configuration());
	assert!(engine.generator().total().is_err());
}

#[test]
fn pin_only_restricts_the_first_position() {
	let names: Vec<String> = engine("a", "bc", FilterKind::None, "", Some('c')).run().unwrap().collect();
	assert_eq!(names, ["caba", "caca"]);
}

#[test]
fn include_y_flag_reaches_the_generator() {
	let config = NameConfig {
		letters: LetterOptions { include_y: true, ..Default::default() },
		first: Some("b".into()),
		..Default::default()
	};
	let engine = config.build_engine().unwrap();
	assert_eq!(engine.run().unwrap().count(), 6 * 20 * 6);
}

fn letters() -> impl Strategy<Value = String> {
	"[a-z]{0,6}"
}

proptest! {
	#[test]
	fn count_matches_product_of_alphabets(vowels in letters(), consonants in letters()) {
		let e = engine(&vowels, &consonants, FilterKind::None, "", None);
		let v = e.generator().vowels().len();
		let c = e.generator().consonants().len();
		prop_assert_eq!(e.run().unwrap().count(), c * v * c * v);
		prop_assert_eq!(e.generator().total().unwrap(), c * v * c * v);
	}

	#[test]
	fn runs_are_restartable(vowels in letters(), consonants in letters(), suffix in "[a-z]{0,3}") {
		let e = engine(&vowels, &consonants, FilterKind::RepeatVowels, &suffix, None);
		let first: Vec<String> = e.run().unwrap().collect();
		let second: Vec<String> = e.run().unwrap().collect();
		prop_assert_eq!(first, second);
	}

	#[test]
	fn repeat_vowels_matches_slots_one_and_three(vowels in letters(), consonants in letters()) {
		let e = engine(&vowels, &consonants, FilterKind::RepeatVowels, "xyz", None);
		for name in e.run().unwrap() {
			let b = name.as_bytes();
			prop_assert_eq!(b[1], b[3]);
		}
	}

	#[test]
	fn repeat_consonants_matches_slots_zero_and_two(vowels in letters(), consonants in letters()) {
		let e = engine(&vowels, &consonants, FilterKind::RepeatConsonants, "", None);
		for name in e.run().unwrap() {
			let b = name.as_bytes();
			prop_assert_eq!(b[0], b[2]);
		}
	}

	#[test]
	fn generated_names_have_cvcv_shape(vowels in letters(), consonants in letters()) {
		let e = engine(&vowels, &consonants, FilterKind::None, "", None);
		let (v, c) = (e.generator().vowels(), e.generator().consonants());
		for name in e.run().unwrap() {
			let chars: Vec<char> = name.chars().collect();
			prop_assert_eq!(chars.len(), 4);
			prop_assert!(c.contains(chars[0]) && c.contains(chars[2]));
			prop_assert!(v.contains(chars[1]) && v.contains(chars[3]));
		}
	}
}
