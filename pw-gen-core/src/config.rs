use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{GeneratorError, Result};
use crate::generator::PasswordGenerator;
use crate::generator::memorable::MemorablePasswordGenerator;
use crate::generator::pin::PinGenerator;
use crate::generator::random_password::RandomPasswordGenerator;
use crate::random::RandomSource;
use crate::wordlist::{WordFile, WordList};

/// Settings of a `PinGenerator`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct PinConfig {
	/// Number of digits.
	pub length: usize,
}

impl Default for PinConfig {
	fn default() -> Self {
		Self { length: 4 }
	}
}

/// Settings of a `RandomPasswordGenerator`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct RandomPasswordConfig {
	/// Number of characters.
	pub length: usize,
	/// Append the ten digits to the alphabet.
	pub include_numbers: bool,
	/// Append the 32 ASCII punctuation symbols to the alphabet.
	pub include_symbols: bool,
}

impl Default for RandomPasswordConfig {
	fn default() -> Self {
		Self { length: 8, include_numbers: false, include_symbols: false }
	}
}

/// Settings of a `MemorablePasswordGenerator`.
///
/// `vocabulary` is optional: when `None`, a word list has to be supplied
/// at construction time (see `MemorablePasswordGenerator::with_word_list`).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct MemorableConfig {
	pub word_count: usize,
	pub separator: String,
	pub capitalize: bool,
	pub vocabulary: Option<Vec<String>>,
}

impl Default for MemorableConfig {
	fn default() -> Self {
		Self { word_count: 4, separator: "_".to_owned(), capitalize: false, vocabulary: None }
	}
}

/// Generator description as read from an outside document.
///
/// Counts are signed so that a negative value can be reported as
/// `InvalidConfiguration` instead of a parse error.
///
/// # Example
/// ```json
/// { "kind": "memorable", "word_count": 5, "separator": "-", "word_file": "words.txt" }
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum GeneratorConfig {
	Pin {
		length: i64,
	},
	Random {
		#[serde(default = "default_random_length")]
		length: i64,
		#[serde(default)]
		include_numbers: bool,
		#[serde(default)]
		include_symbols: bool,
	},
	Memorable {
		#[serde(default = "default_word_count")]
		word_count: i64,
		#[serde(default = "default_separator")]
		separator: String,
		#[serde(default)]
		capitalize: bool,
		#[serde(default)]
		vocabulary: Option<Vec<String>>,
		/// Dictionary used when `vocabulary` is absent.
		#[serde(default)]
		word_file: Option<PathBuf>,
	},
}

fn default_random_length() -> i64 {
	8
}

fn default_word_count() -> i64 {
	4
}

fn default_separator() -> String {
	"_".to_owned()
}

/// A `GeneratorConfig` whose counts are checked and whose vocabulary,
/// if any, has been loaded.
///
/// Cheap to clone and free of I/O, so it can be handed to worker threads
/// that each build their own generator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolvedConfig {
	Pin(PinConfig),
	Random(RandomPasswordConfig),
	Memorable(MemorableConfig),
}

impl GeneratorConfig {
	/// Parses a JSON document.
	pub fn from_json(json: &str) -> Result<Self> {
		Ok(serde_json::from_str(json)?)
	}

	/// Checks counts and loads the word file when needed.
	///
	/// # Errors
	/// - `InvalidConfiguration` for a negative length or word count
	/// - `EmptyVocabulary` for a memorable config with neither a vocabulary
	///   nor a word file, or whose resolved vocabulary is empty
	/// - `Io` if the word file cannot be read
	pub fn resolve(&self) -> Result<ResolvedConfig> {
		let resolved = match self {
			GeneratorConfig::Pin { length } => ResolvedConfig::Pin(PinConfig { length: count("length", *length)? }),
			GeneratorConfig::Random { length, include_numbers, include_symbols } => {
				ResolvedConfig::Random(RandomPasswordConfig {
					length: count("length", *length)?,
					include_numbers: *include_numbers,
					include_symbols: *include_symbols,
				})
			}
			GeneratorConfig::Memorable { word_count, separator, capitalize, vocabulary, word_file } => {
				let word_count = count("word_count", *word_count)?;
				let vocabulary = match (vocabulary, word_file) {
					(Some(vocabulary), _) => vocabulary.clone(),
					(None, Some(path)) => WordFile::new(path).words()?,
					(None, None) => return Err(GeneratorError::EmptyVocabulary),
				};
				if vocabulary.is_empty() {
					return Err(GeneratorError::EmptyVocabulary);
				}
				ResolvedConfig::Memorable(MemorableConfig {
					word_count,
					separator: separator.clone(),
					capitalize: *capitalize,
					vocabulary: Some(vocabulary),
				})
			}
		};
		Ok(resolved)
	}

	/// Resolves the config and builds the matching generator.
	pub fn build<S>(&self, source: S) -> Result<Box<dyn PasswordGenerator + Send>>
	where
		S: RandomSource + Send + 'static,
	{
		self.resolve()?.build(source)
	}
}

impl ResolvedConfig {
	/// Builds the generator described by this config around `source`.
	///
	/// # Errors
	/// `InvalidConfiguration` if a memorable separator or word contains a line break.
	pub fn build<S>(&self, source: S) -> Result<Box<dyn PasswordGenerator + Send>>
	where
		S: RandomSource + Send + 'static,
	{
		let generator: Box<dyn PasswordGenerator + Send> = match self {
			ResolvedConfig::Pin(config) => Box::new(PinGenerator::from_config(config, source)),
			ResolvedConfig::Random(config) => Box::new(RandomPasswordGenerator::new(config.clone(), source)),
			ResolvedConfig::Memorable(config) => Box::new(MemorablePasswordGenerator::new(config.clone(), source)?),
		};
		Ok(generator)
	}
}

/// Converts a signed count, rejecting negative values.
fn count(field: &str, value: i64) -> Result<usize> {
	usize::try_from(value).map_err(|_| {
		GeneratorError::InvalidConfiguration(format!("{} must be between 0 and {}, got {}", field, usize::MAX, value))
	})
}
