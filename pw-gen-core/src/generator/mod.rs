//! Password generators.
//!
//! Three independent variants share the `PasswordGenerator` trait:
//! - `PinGenerator`: fixed-length numeric PINs
//! - `RandomPasswordGenerator`: letters plus optional digits and symbols
//! - `MemorablePasswordGenerator`: words drawn from a vocabulary
//!
//! None of them carries state between calls apart from the randomness
//! consumed from its own `RandomSource`.

/// Word-based memorable passwords.
pub mod memorable;

/// Numeric PINs.
pub mod pin;

/// Character-set based random passwords.
pub mod random_password;

/// Common interface of every password generator.
///
/// Each call produces a new, independently random password. The returned
/// string never contains a newline. Generation cannot fail: invalid
/// settings are rejected when the generator is built.
pub trait PasswordGenerator {
	fn generate(&mut self) -> String;
}

impl<G: PasswordGenerator + ?Sized> PasswordGenerator for Box<G> {
	fn generate(&mut self) -> String {
		(**self).generate()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::{MemorableConfig, RandomPasswordConfig};
	use crate::random::RngSource;

	#[test]
	fn variants_share_one_interface() {
		let mut generators: Vec<Box<dyn PasswordGenerator>> = vec![
			Box::new(pin::PinGenerator::new(6, RngSource::seeded(1))),
			Box::new(random_password::RandomPasswordGenerator::new(
				RandomPasswordConfig::default(),
				RngSource::seeded(2),
			)),
			Box::new(
				memorable::MemorablePasswordGenerator::new(
					MemorableConfig {
						vocabulary: Some(vec!["word".to_owned()]),
						..MemorableConfig::default()
					},
					RngSource::seeded(3),
				)
				.unwrap(),
			),
		];

		let passwords: Vec<String> = generators.iter_mut().map(|g| g.generate()).collect();
		assert_eq!(passwords[0].len(), 6);
		assert_eq!(passwords[1].len(), 8);
		assert_eq!(passwords[2], "word_word_word_word");
	}
}
