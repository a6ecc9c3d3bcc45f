use thiserror::Error;

/// Errors reported while building a generator or resolving its inputs.
///
/// Generation itself never fails: every check happens at construction time,
/// so a generator that exists can always produce a password.
#[derive(Debug, Error)]
pub enum GeneratorError {
	/// A length, word count or separator cannot be used.
	#[error("Invalid configuration: {0}")]
	InvalidConfiguration(String),

	/// The resolved vocabulary has no words to draw from.
	#[error("Vocabulary is empty")]
	EmptyVocabulary,

	/// A word list file could not be read.
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	/// A configuration document could not be parsed.
	#[error("Config error: {0}")]
	Config(#[from] serde_json::Error),

	/// A batch worker thread stopped before delivering its passwords.
	#[error("Worker error: {0}")]
	Worker(String),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
