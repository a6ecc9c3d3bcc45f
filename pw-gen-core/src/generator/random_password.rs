use log::debug;

use super::PasswordGenerator;
use crate::alphabet::Alphabet;
use crate::config::RandomPasswordConfig;
use crate::random::{RandomSource, RngSource};

/// Generates passwords from letters plus optional digits and symbols.
///
/// Characters are drawn independently and uniformly over the assembled
/// alphabet, not over categories: with digits enabled a character is a
/// digit with probability 10/62. Nothing forces a digit or a symbol to
/// appear even when requested.
#[derive(Debug)]
pub struct RandomPasswordGenerator<S = RngSource> {
	length: usize,
	alphabet: Alphabet,
	source: S,
}

impl<S: RandomSource> RandomPasswordGenerator<S> {
	/// Creates a generator and assembles its alphabet once.
	pub fn new(config: RandomPasswordConfig, source: S) -> Self {
		let alphabet = Alphabet::assemble(config.include_numbers, config.include_symbols);
		debug!(
			"Random password generator ready: length {}, alphabet of {} characters",
			config.length,
			alphabet.len()
		);
		Self { length: config.length, alphabet, source }
	}

	pub fn length(&self) -> usize {
		self.length
	}

	pub fn alphabet(&self) -> &Alphabet {
		&self.alphabet
	}
}

impl<S: RandomSource> PasswordGenerator for RandomPasswordGenerator<S> {
	fn generate(&mut self) -> String {
		self.alphabet.draw(&mut self.source, self.length)
	}
}
