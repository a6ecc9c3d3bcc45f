use crate::random::RandomSource;

/// ASCII letters, lower-case first then upper-case.
pub const LETTERS: &[u8; 52] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Decimal digits.
pub const DIGITS: &[u8; 10] = b"0123456789";

/// ASCII punctuation, in code point order.
///
/// Spelled out literally so the set is identical on every target.
pub const SYMBOLS: &[u8; 32] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Ordered set of candidate characters a generator draws from.
///
/// # Invariants
/// - Never empty: every constructor starts from a non-empty set
/// - Only ASCII bytes, so each byte is exactly one character
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet(Vec<u8>);

impl Alphabet {
	/// Builds the alphabet of the random password generator.
	///
	/// Letters are always present. Digits are appended when `include_numbers`
	/// is set, then symbols when `include_symbols` is set. No deduplication
	/// is needed since the three sets are disjoint.
	pub fn assemble(include_numbers: bool, include_symbols: bool) -> Self {
		let mut chars = Vec::with_capacity(LETTERS.len() + DIGITS.len() + SYMBOLS.len());
		chars.extend_from_slice(LETTERS);
		if include_numbers {
			chars.extend_from_slice(DIGITS);
		}
		if include_symbols {
			chars.extend_from_slice(SYMBOLS);
		}
		Self(chars)
	}

	/// The ten decimal digits, used for PINs.
	pub fn digits() -> Self {
		Self(DIGITS.to_vec())
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn as_bytes(&self) -> &[u8] {
		&self.0
	}

	/// Returns `true` if `c` can appear in a password drawn from this alphabet.
	pub fn contains(&self, c: char) -> bool {
		c.is_ascii() && self.0.contains(&(c as u8))
	}

	/// Draws `length` characters independently and uniformly.
	pub(crate) fn draw<S: RandomSource + ?Sized>(&self, source: &mut S, length: usize) -> String {
		(0..length)
			.map(|_| self.0[source.index(self.0.len())] as char)
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::random::tests::ScriptedSource;

	#[test]
	fn symbol_set_is_ascii_punctuation() {
		let expected: Vec<u8> = (0u8..=127).filter(|b| b.is_ascii_punctuation()).collect();
		assert_eq!(SYMBOLS.to_vec(), expected);
	}

	#[test]
	fn letters_only_by_default() {
		let alphabet = Alphabet::assemble(false, false);
		assert_eq!(alphabet.len(), 52);
		assert!(alphabet.as_bytes().iter().all(u8::is_ascii_alphabetic));
	}

	#[test]
	fn assembly_order_is_letters_digits_symbols() {
		let alphabet = Alphabet::assemble(true, true);
		assert_eq!(alphabet.len(), 94);
		assert_eq!(&alphabet.as_bytes()[..52], LETTERS);
		assert_eq!(&alphabet.as_bytes()[52..62], DIGITS);
		assert_eq!(&alphabet.as_bytes()[62..], SYMBOLS);
	}

	#[test]
	fn numbers_grow_alphabet_by_ten_digits() {
		let without = Alphabet::assemble(false, true);
		let with = Alphabet::assemble(true, true);
		assert_eq!(with.len(), without.len() + 10);
		for digit in '0'..='9' {
			assert!(!without.contains(digit));
			assert!(with.contains(digit));
		}
	}

	#[test]
	fn contains_rejects_non_ascii() {
		let alphabet = Alphabet::assemble(true, true);
		assert!(!alphabet.contains('é'));
		assert!(!alphabet.contains(' '));
	}

	#[test]
	fn draw_maps_indices_to_characters() {
		let mut source = ScriptedSource::new(&[0, 9, 5]);
		assert_eq!(Alphabet::digits().draw(&mut source, 4), "0950");
	}
}
