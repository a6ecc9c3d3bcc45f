use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::Result;
use crate::io;

/// Source of candidate words for memorable passwords.
///
/// Any static list, dictionary file or external corpus can act as a word
/// list. It is consulted once, when a generator is built.
pub trait WordList {
	/// Returns the words in order.
	fn words(&self) -> Result<Vec<String>>;
}

impl WordList for [String] {
	fn words(&self) -> Result<Vec<String>> {
		Ok(self.to_vec())
	}
}

impl WordList for Vec<String> {
	fn words(&self) -> Result<Vec<String>> {
		self.as_slice().words()
	}
}

impl WordList for [&str] {
	fn words(&self) -> Result<Vec<String>> {
		Ok(self.iter().map(|w| (*w).to_owned()).collect())
	}
}

impl<const N: usize> WordList for [&str; N] {
	fn words(&self) -> Result<Vec<String>> {
		self.as_slice().words()
	}
}

/// Dictionary file with one word per line.
///
/// Blank lines and lines starting with `#` are skipped; words are trimmed
/// and lower-cased.
#[derive(Debug, Clone)]
pub struct WordFile {
	path: PathBuf,
}

impl WordFile {
	pub fn new<P: AsRef<Path>>(path: P) -> Self {
		Self { path: path.as_ref().to_path_buf() }
	}

	pub fn path(&self) -> &Path {
		&self.path
	}
}

impl WordList for WordFile {
	/// # Errors
	/// Returns `GeneratorError::Io` if the file cannot be read.
	fn words(&self) -> Result<Vec<String>> {
		let words = io::read_words(&self.path)?;
		if words.is_empty() {
			warn!("Word file {} contains no words", self.path.display());
		} else {
			debug!("Loaded {} words from {}", words.len(), self.path.display());
		}
		Ok(words)
	}
}
