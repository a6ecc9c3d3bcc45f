use log::debug;

use super::PasswordGenerator;
use crate::config::MemorableConfig;
use crate::error::{GeneratorError, Result};
use crate::random::{RandomSource, RngSource};
use crate::wordlist::WordList;

/// Generates passwords made of whole words joined by a separator.
///
/// # Behavior
/// - Draws `word_count` words uniformly, with replacement, from the vocabulary.
/// - With `capitalize`, flips a fair coin per word: the word is rendered
///   fully upper-case or fully lower-case, never mixed.
/// - Without `capitalize`, words are used exactly as they appear in the vocabulary.
/// - Joins the words with the separator verbatim.
///
/// # Invariants
/// - The vocabulary is never empty
/// - Neither the separator nor any word contains a line break
#[derive(Debug)]
pub struct MemorablePasswordGenerator<S = RngSource> {
	word_count: usize,
	separator: String,
	capitalize: bool,
	vocabulary: Vec<String>,
	source: S,
}

impl<S: RandomSource> MemorablePasswordGenerator<S> {
	/// Creates a generator from a config carrying its own vocabulary.
	///
	/// # Errors
	/// - `EmptyVocabulary` if `config.vocabulary` is missing or empty. Use
	///   `with_word_list` to fall back on an external word list.
	/// - `InvalidConfiguration` if the separator or a word contains a line break.
	pub fn new(config: MemorableConfig, source: S) -> Result<Self> {
		let vocabulary = match config.vocabulary {
			Some(vocabulary) if !vocabulary.is_empty() => vocabulary,
			_ => return Err(GeneratorError::EmptyVocabulary),
		};

		if has_line_break(&config.separator) {
			return Err(GeneratorError::InvalidConfiguration(
				"separator must not contain a line break".to_owned(),
			));
		}
		if let Some(word) = vocabulary.iter().find(|w| has_line_break(w)) {
			return Err(GeneratorError::InvalidConfiguration(format!(
				"vocabulary word {:?} contains a line break",
				word
			)));
		}

		debug!(
			"Memorable password generator ready: {} words from a vocabulary of {}",
			config.word_count,
			vocabulary.len()
		);

		Ok(Self {
			word_count: config.word_count,
			separator: config.separator,
			capitalize: config.capitalize,
			vocabulary,
			source,
		})
	}

	/// Creates a generator, resolving the vocabulary once.
	///
	/// The config's own vocabulary wins when present; otherwise `word_list`
	/// supplies it. The word list is not consulted again afterwards.
	///
	/// # Errors
	/// Same as `new`, plus any error raised by the word list.
	pub fn with_word_list<W: WordList + ?Sized>(
		mut config: MemorableConfig,
		word_list: &W,
		source: S,
	) -> Result<Self> {
		if config.vocabulary.is_none() {
			config.vocabulary = Some(word_list.words()?);
		}
		Self::new(config, source)
	}

	pub fn word_count(&self) -> usize {
		self.word_count
	}

	pub fn separator(&self) -> &str {
		&self.separator
	}

	pub fn capitalize(&self) -> bool {
		self.capitalize
	}

	pub fn vocabulary(&self) -> &[String] {
		&self.vocabulary
	}
}

impl<S: RandomSource> PasswordGenerator for MemorablePasswordGenerator<S> {
	fn generate(&mut self) -> String {
		let mut words: Vec<String> = (0..self.word_count)
			.map(|_| self.vocabulary[self.source.index(self.vocabulary.len())].clone())
			.collect();

		if self.capitalize {
			for word in words.iter_mut() {
				*word = if self.source.coin() {
					word.to_uppercase()
				} else {
					word.to_lowercase()
				};
			}
		}

		words.join(&self.separator)
	}
}

fn has_line_break(s: &str) -> bool {
	s.contains(['\n', '\r'])
}
