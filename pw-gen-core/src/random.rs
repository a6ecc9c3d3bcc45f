use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform random selection over a finite sequence.
///
/// Generators never touch a global RNG: each one owns a `RandomSource`,
/// which keeps generation reproducible in tests (seeded or scripted sources)
/// and lets parallel callers give every thread a private source.
///
/// # Contract
/// - `index(len)` returns a value uniformly distributed in `0..len`.
/// - `len` is always strictly positive; generators guarantee it.
pub trait RandomSource {
	/// Returns a uniformly distributed index in `0..len`.
	fn index(&mut self, len: usize) -> usize;

	/// Flips a fair coin.
	fn coin(&mut self) -> bool {
		self.index(2) == 1
	}
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
	fn index(&mut self, len: usize) -> usize {
		(**self).index(len)
	}

	fn coin(&mut self) -> bool {
		(**self).coin()
	}
}

impl<S: RandomSource + ?Sized> RandomSource for Box<S> {
	fn index(&mut self, len: usize) -> usize {
		(**self).index(len)
	}

	fn coin(&mut self) -> bool {
		(**self).coin()
	}
}

/// Adapter exposing any `rand::Rng` as a `RandomSource`.
///
/// The default parameter is `StdRng`, which is `Send` and can be seeded,
/// so a generator holding it can be moved to a worker thread.
#[derive(Debug, Clone)]
pub struct RngSource<R = StdRng> {
	rng: R,
}

impl RngSource<StdRng> {
	/// Creates a source backed by a `StdRng` seeded from the operating system.
	pub fn from_os_rng() -> Self {
		Self { rng: StdRng::from_os_rng() }
	}

	/// Creates a reproducible source: the same seed always yields the same draws.
	pub fn seeded(seed: u64) -> Self {
		Self { rng: StdRng::seed_from_u64(seed) }
	}
}

impl Default for RngSource<StdRng> {
	fn default() -> Self {
		Self::from_os_rng()
	}
}

impl<R: Rng> RngSource<R> {
	/// Wraps a caller-supplied RNG.
	pub fn new(rng: R) -> Self {
		Self { rng }
	}

	/// Returns the wrapped RNG.
	pub fn into_inner(self) -> R {
		self.rng
	}
}

impl<R: Rng> RandomSource for RngSource<R> {
	fn index(&mut self, len: usize) -> usize {
		self.rng.random_range(0..len)
	}

	fn coin(&mut self) -> bool {
		self.rng.random_bool(0.5)
	}
}

#[cfg(test)]
pub(crate) mod tests {
	use super::*;

	/// Replays a fixed script of indices, wrapping around at the end.
	///
	/// Each scripted value is reduced modulo the requested length so the
	/// script stays valid whatever the alphabet or vocabulary size.
	pub(crate) struct ScriptedSource {
		script: Vec<usize>,
		position: usize,
	}

	impl ScriptedSource {
		pub(crate) fn new(script: &[usize]) -> Self {
			Self { script: script.to_vec(), position: 0 }
		}
	}

	impl RandomSource for ScriptedSource {
		fn index(&mut self, len: usize) -> usize {
			let value = self.script[self.position % self.script.len()];
			self.position += 1;
			value % len
		}
	}

	#[test]
	fn seeded_sources_are_reproducible() {
		let mut a = RngSource::seeded(7);
		let mut b = RngSource::seeded(7);
		let first: Vec<usize> = (0..64).map(|_| a.index(1000)).collect();
		let second: Vec<usize> = (0..64).map(|_| b.index(1000)).collect();
		assert_eq!(first, second);
	}

	#[test]
	fn index_stays_in_range() {
		let mut source = RngSource::seeded(1);
		for len in 1..50 {
			for _ in 0..20 {
				assert!(source.index(len) < len);
			}
		}
	}

	#[test]
	fn coin_lands_on_both_sides() {
		let mut source = RngSource::seeded(3);
		let heads = (0..1000).filter(|_| source.coin()).count();
		assert!(heads > 0 && heads < 1000);
	}

	#[test]
	fn borrowed_source_advances_the_owner() {
		fn draw<S: RandomSource>(mut source: S) -> usize {
			source.index(10)
		}

		let mut owner = ScriptedSource::new(&[1, 2, 3]);
		assert_eq!(draw(&mut owner), 1);
		assert_eq!(owner.index(10), 2);
	}

	#[test]
	fn default_coin_uses_index() {
		let mut source = ScriptedSource::new(&[0, 1]);
		assert!(!source.coin());
		assert!(source.coin());
	}
}
