use log::debug;

use super::PasswordGenerator;
use crate::alphabet::Alphabet;
use crate::config::PinConfig;
use crate::random::{RandomSource, RngSource};

/// Generates numeric PINs of a fixed length.
///
/// Each position is drawn independently and uniformly from `0-9`, so
/// repeated digits are allowed. A length of zero yields the empty string.
#[derive(Debug)]
pub struct PinGenerator<S = RngSource> {
	length: usize,
	digits: Alphabet,
	source: S,
}

impl<S: RandomSource> PinGenerator<S> {
	pub fn new(length: usize, source: S) -> Self {
		debug!("PIN generator ready: {} digits", length);
		Self { length, digits: Alphabet::digits(), source }
	}

	pub fn from_config(config: &PinConfig, source: S) -> Self {
		Self::new(config.length, source)
	}

	pub fn length(&self) -> usize {
		self.length
	}
}

impl<S: RandomSource> PasswordGenerator for PinGenerator<S> {
	fn generate(&mut self) -> String {
		self.digits.draw(&mut self.source, self.length)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::random::tests::ScriptedSource;

	#[test]
	fn pin_has_requested_length_and_only_digits() {
		let mut generator = PinGenerator::new(12, RngSource::seeded(42));
		for _ in 0..100 {
			let pin = generator.generate();
			assert_eq!(pin.len(), 12);
			assert!(pin.chars().all(|c| c.is_ascii_digit()));
		}
	}

	#[test]
	fn zero_length_yields_empty_pin() {
		let mut generator = PinGenerator::new(0, RngSource::seeded(42));
		assert_eq!(generator.generate(), "");
	}

	#[test]
	fn repeated_digits_are_allowed() {
		let mut generator = PinGenerator::new(4, ScriptedSource::new(&[7]));
		assert_eq!(generator.generate(), "7777");
	}

	#[test]
	fn calls_are_independent() {
		let mut generator = PinGenerator::new(4, ScriptedSource::new(&[1, 2, 3, 4, 5, 6, 7, 8]));
		assert_eq!(generator.generate(), "1234");
		assert_eq!(generator.generate(), "5678");
	}

	#[test]
	fn config_sets_length() {
		let generator = PinGenerator::from_config(&PinConfig { length: 9 }, RngSource::seeded(0));
		assert_eq!(generator.length(), 9);
	}
}
