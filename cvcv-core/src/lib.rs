//! Consonant-vowel-consonant-vowel name generation library.
//!
//! This crate provides the generation pipeline shared by the command-line
//! tool and the desktop interface:
//! - Letter set normalization (defaults, overrides, additions)
//! - Lazy CVCV enumeration over the letter sets
//! - Repetition filters over the four-letter core
//! - Suffixing and grouped export to one file per starting letter
//!
//! Presentation concerns (argument parsing, widgets) live in the front-end
//! crates and build on `NameConfig` and `NameEngine`.

/// Vowel and consonant set construction.
pub mod letters;

/// Lazy CVCV enumeration.
///
/// Exposes the `Generator` and its restartable iterator.
pub mod generator;

/// Repetition filters over the unsuffixed CVCV core.
pub mod filter;

/// Generator + filter + suffix composition and grouped export.
pub mod engine;

/// Resolved generation parameters, loadable from JSON.
pub mod config;

/// Error taxonomy shared by every fallible operation.
pub mod error;

/// Output folder helpers (letter files, stale file cleanup, line writing).
pub mod io;

pub use config::NameConfig;
pub use engine::{ExportSummary, NameEngine};
pub use error::NameGenError;
pub use filter::FilterKind;
pub use generator::Generator;
pub use letters::{LetterOptions, LetterSet};
