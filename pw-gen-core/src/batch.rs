use std::sync::mpsc;
use std::thread;

use log::{debug, trace};

use crate::config::GeneratorConfig;
use crate::error::{GeneratorError, Result};
use crate::random::RngSource;

/// Generates `count` passwords in parallel, one worker per CPU.
///
/// See `generate_batch_with_workers`. With a seed, the result is
/// reproducible on a given machine; pass an explicit worker count to make
/// it reproducible everywhere.
pub fn generate_batch(config: &GeneratorConfig, count: usize, seed: Option<u64>) -> Result<Vec<String>> {
	generate_batch_with_workers(config, count, num_cpus::get(), seed)
}

/// Generates `count` passwords split over `workers` threads.
///
/// # Behavior
/// - Resolves the config once (word file loaded a single time).
/// - Splits `count` into at most `workers` chunks of equal size.
/// - Each thread builds its own generator around a private `RngSource`:
///   seeded with `seed + chunk_index` when a seed is given, from the OS otherwise.
/// - Results are collected over an MPSC channel and reassembled in chunk order.
///
/// # Errors
/// - Any error raised while resolving or building the generator
/// - `Worker` if a thread stops without sending its passwords
pub fn generate_batch_with_workers(
	config: &GeneratorConfig,
	count: usize,
	workers: usize,
	seed: Option<u64>,
) -> Result<Vec<String>> {
	let resolved = config.resolve()?;
	if count == 0 {
		return Ok(Vec::new());
	}

	let workers = workers.clamp(1, count);
	let chunk_size = count.div_ceil(workers);
	let chunks = count.div_ceil(chunk_size);
	debug!("Generating {} passwords over {} workers", count, chunks);

	let (tx, rx) = mpsc::channel();
	for chunk_index in 0..chunks {
		let size = chunk_size.min(count - chunk_index * chunk_size);
		let tx = tx.clone();
		let resolved = resolved.clone();
		let source = match seed {
			Some(seed) => RngSource::seeded(seed.wrapping_add(chunk_index as u64)),
			None => RngSource::from_os_rng(),
		};

		thread::spawn(move || {
			trace!("Batch chunk {}: {} passwords", chunk_index, size);
			let result = resolved
				.build(source)
				.map(|mut generator| (0..size).map(|_| generator.generate()).collect::<Vec<_>>());
			// The receiver is gone only if another chunk already failed
			let _ = tx.send((chunk_index, result));
		});
	}
	drop(tx);

	let mut parts: Vec<Option<Vec<String>>> = vec![None; chunks];
	for (chunk_index, result) in rx.iter() {
		parts[chunk_index] = Some(result?);
	}

	let mut passwords = Vec::with_capacity(count);
	for (chunk_index, part) in parts.into_iter().enumerate() {
		let part = part.ok_or_else(|| {
			GeneratorError::Worker(format!("chunk {} stopped before sending its passwords", chunk_index))
		})?;
		passwords.extend(part);
	}

	Ok(passwords)
}
