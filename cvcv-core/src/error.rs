use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while resolving a configuration or touching the output folder.
#[derive(Error, Debug)]
pub enum NameGenError {
	/// The configuration cannot produce names (bad pin, unknown filter).
	///
	/// Raised before any output is produced.
	#[error("invalid configuration: {0}")]
	InvalidConfiguration(String),

	/// Directory creation or file read/write/delete failure.
	#[error("filesystem error at {}: {source}", path.display())]
	Filesystem {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// A configuration file that is not valid JSON for `NameConfig`.
	#[error("config file error at {}: {source}", path.display())]
	ConfigFile {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},
}

impl NameGenError {
	/// Wraps an I/O error with the path it happened on.
	pub fn filesystem<P: AsRef<Path>>(path: P, source: io::Error) -> Self {
		Self::Filesystem { path: path.as_ref().to_path_buf(), source }
	}

	/// Returns `true` for `InvalidConfiguration`.
	pub fn is_invalid_configuration(&self) -> bool {
		matches!(self, Self::InvalidConfiguration(_))
	}
}
